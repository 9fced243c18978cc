use tracing::info;

use crate::services::RosterState;

/// Demo roster: nine employees and four senior/junior pairs, applied
/// through the ordinary container operations. Colors come from the random
/// palette draw like any other employee, and the final rebuild reseeds the
/// month. Opt-in via `ROSTER_DEMO`.
pub fn seed(state: &mut RosterState) {
    let employees = [
        "Friesen", "Kuznetsov", "Arama", "Vagabov", "Kovaleva", "Zelenko", "Dyukov", "Safiullin",
        "Orlov",
    ];
    for name in employees {
        let _ = state.add_employee(name);
    }
    for (senior, junior) in [
        ("Friesen", "Kuznetsov"),
        ("Arama", "Vagabov"),
        ("Kovaleva", "Zelenko"),
        ("Dyukov", "Safiullin"),
    ] {
        let _ = state.add_pair(senior, junior);
    }
    info!(
        "seeded demo roster: {} employees, {} pairs",
        state.employees().len(),
        state.pairs().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearMonth;
    use crate::services::random::SequenceSource;

    #[test]
    fn demo_roster_has_nine_employees_and_four_pairs() {
        let month = YearMonth::new(2025, 0).expect("in range");
        let mut state = RosterState::new(month, Box::new(SequenceSource::new(vec![0.5])));
        seed(&mut state);

        assert_eq!(state.employees().len(), 9);
        assert_eq!(state.pairs().len(), 4);
        assert_eq!(state.pairs()[0].senior, "Friesen");
        assert_eq!(state.pairs()[0].junior, "Kuznetsov");
        // Pair color inherited from the senior's record.
        assert_eq!(state.pairs()[0].color, state.employees()[0].color);
    }
}
