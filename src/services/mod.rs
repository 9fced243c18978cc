pub mod calendar;
pub mod demo;
pub mod random;
pub mod roster;

pub use random::{RandomSource, SequenceSource, ThreadRngSource};
pub use roster::{PersonalShift, PersonalStats, RosterState, recompute_schedule};
