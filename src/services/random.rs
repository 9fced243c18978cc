use rand::Rng;

/// Uniform draw in `[0, 1)`. The roster container takes this as an injected
/// collaborator so tests can script the otherwise non-reproducible seeding.
pub trait RandomSource: Send + Sync {
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling once exhausted. Values must
/// lie in `[0, 1)`; an empty sequence always yields 0.0.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
