use roster_backend::models::{Pair, Role, Shift, YearMonth};
use roster_backend::services::{RosterState, SequenceSource, recompute_schedule};

fn ym(year: i64, month: i64) -> YearMonth {
    YearMonth::new(year, month).expect("test month in range")
}

/// June 2025: starts on a Sunday, 30 days.
fn june() -> YearMonth {
    ym(2025, 5)
}

fn scripted(values: Vec<f64>) -> RosterState {
    RosterState::new(june(), Box::new(SequenceSource::new(values)))
}

fn pair(id: &str, senior: &str, junior: &str) -> Pair {
    Pair {
        id: id.to_string(),
        senior: senior.to_string(),
        junior: junior.to_string(),
        color: "#ef4444".to_string(),
    }
}

#[test]
fn day_sequence_covers_the_whole_month() {
    let mut state = scripted(vec![0.5]);
    for (year, month, expected_days) in [
        (2025, 0, 31),
        (2025, 3, 30),
        (2025, 1, 28),
        (2024, 1, 29),
    ] {
        state.set_month(ym(year, month));
        let schedule = state.schedule();
        assert_eq!(schedule.len(), expected_days);
        for (index, entry) in schedule.iter().enumerate() {
            assert_eq!(entry.day, index as u32 + 1);
        }
    }
}

#[test]
fn weekend_flags_follow_the_calendar() {
    let state = scripted(vec![0.5]);
    let weekends = [1, 7, 8, 14, 15, 21, 22, 28, 29];
    for entry in state.schedule() {
        assert_eq!(
            entry.is_weekend,
            weekends.contains(&entry.day),
            "day {} of June 2025",
            entry.day
        );
        assert_eq!(
            entry.is_weekend,
            entry.weekday == "Saturday" || entry.weekday == "Sunday"
        );
    }
    assert_eq!(state.schedule()[0].weekday, "Sunday");
    assert_eq!(state.schedule()[1].weekday, "Monday");
}

#[test]
fn empty_pair_list_leaves_every_slot_blank() {
    let state = scripted(vec![0.99]);
    for entry in state.schedule() {
        for shift in [Shift::Day, Shift::Night] {
            for role in [Role::Senior, Role::Junior] {
                assert_eq!(entry.shifts.shift(shift).role(role), "");
            }
        }
    }
}

#[test]
fn seeding_fills_both_shifts_from_independent_draws() {
    let pairs = [pair("1", "A", "B"), pair("2", "C", "D")];
    // Per day: fill-decision 0.5, Day pair index 0.0 -> first pair,
    // Night pair index 0.99 -> second pair.
    let mut random = SequenceSource::new(vec![0.5, 0.0, 0.99]);
    let schedule = recompute_schedule(june(), &pairs, &mut random);

    assert_eq!(schedule.len(), 30);
    for entry in &schedule {
        assert_eq!(entry.shifts.day.senior, "A");
        assert_eq!(entry.shifts.day.junior, "B");
        assert_eq!(entry.shifts.night.senior, "C");
        assert_eq!(entry.shifts.night.junior, "D");
    }
}

#[test]
fn seeding_leaves_a_day_unfilled_on_a_low_draw() {
    let pairs = [pair("1", "A", "B")];
    // 0.1 is not greater than the unfilled threshold, so no day fills and
    // no index draws are consumed.
    let mut random = SequenceSource::new(vec![0.1]);
    let schedule = recompute_schedule(june(), &pairs, &mut random);

    for entry in &schedule {
        assert_eq!(entry.shifts.day.senior, "");
        assert_eq!(entry.shifts.night.junior, "");
    }
}

#[test]
fn assign_employee_touches_only_the_requested_slot() {
    let mut state = scripted(vec![0.5]);
    state.assign_employee(&[5, 10], Shift::Night, Role::Senior, "X");

    for entry in state.schedule() {
        if entry.day == 5 || entry.day == 10 {
            assert_eq!(entry.shifts.night.senior, "X");
        } else {
            assert_eq!(entry.shifts.night.senior, "");
        }
        // The sibling role and the other shift stay untouched.
        assert_eq!(entry.shifts.night.junior, "");
        assert_eq!(entry.shifts.day.senior, "");
        assert_eq!(entry.shifts.day.junior, "");
    }
}

#[test]
fn assign_employee_skips_days_outside_the_month() {
    let mut state = scripted(vec![0.5]);
    let before = state.schedule().to_vec();
    state.assign_employee(&[30, 31, 99], Shift::Day, Role::Junior, "X");

    let schedule = state.schedule();
    assert_eq!(schedule[29].shifts.day.junior, "X");
    // Only day 30 exists; the rest of the call is a no-op.
    for (entry, old) in schedule.iter().zip(&before) {
        if entry.day != 30 {
            assert_eq!(entry, old);
        }
    }
}

#[test]
fn assign_pair_sets_both_roles_atomically() {
    // 0.05 keeps every reseed unfilled, so the board starts blank.
    let mut state = scripted(vec![0.05]);
    state.add_pair("A", "B").expect("pair created");

    let applied = state.assign_pair(&[3], Shift::Day, "1");
    assert!(applied);

    for entry in state.schedule() {
        if entry.day == 3 {
            assert_eq!(entry.shifts.day.senior, "A");
            assert_eq!(entry.shifts.day.junior, "B");
        } else {
            assert_eq!(entry.shifts.day.senior, "");
            assert_eq!(entry.shifts.day.junior, "");
        }
        assert_eq!(entry.shifts.night.senior, "");
    }
}

#[test]
fn assign_pair_with_unknown_id_changes_nothing() {
    let mut state = scripted(vec![0.5]);
    state.add_pair("A", "B").expect("pair created");
    let before = state.schedule().to_vec();

    let applied = state.assign_pair(&[1, 2, 3], Shift::Day, "42");
    assert!(!applied);
    assert_eq!(state.schedule(), before.as_slice());
}

#[test]
fn add_pair_rejects_blank_or_identical_names() {
    let mut state = scripted(vec![0.5]);
    assert!(state.add_pair("A", "A").is_none());
    assert!(state.add_pair("", "B").is_none());
    assert!(state.add_pair("A", "").is_none());
    assert!(state.pairs().is_empty());
}

#[test]
fn add_pair_inherits_the_seniors_color() {
    let mut state = scripted(vec![0.05]);
    let employee = state.add_employee("A").expect("employee created");
    assert_eq!(employee.color, "#3b82f6");

    let inherited = state.add_pair("A", "B").expect("pair created");
    assert_eq!(inherited.color, "#3b82f6");

    // Senior name with no employee record falls back to neutral gray.
    let fallback = state.add_pair("Z", "W").expect("pair created");
    assert_eq!(fallback.color, "#6b7280");
}

#[test]
fn add_employee_assigns_sequential_ids_and_palette_colors() {
    let mut state = scripted(vec![0.0, 0.9]);
    let first = state.add_employee("A").expect("employee created");
    let second = state.add_employee("A").expect("duplicate names are allowed");

    assert_eq!(first.id, "1");
    assert_eq!(second.id, "2");
    assert_eq!(first.color, "#3b82f6");
    assert_eq!(second.color, "#06b6d4");
    assert_eq!(state.employees().len(), 2);

    assert!(state.add_employee("   ").is_none());
    assert_eq!(state.employees().len(), 2);
}

#[test]
fn adding_an_employee_reseeds_the_schedule() {
    let mut state = scripted(vec![0.05]);
    state.add_pair("A", "B").expect("pair created");
    state.assign_employee(&[1], Shift::Day, Role::Senior, "X");
    assert_eq!(state.schedule()[0].shifts.day.senior, "X");

    // The day sequence depends on the employee set too, so the manual edit
    // is gone after the reseed.
    state.add_employee("C").expect("employee created");
    assert_eq!(state.schedule()[0].shifts.day.senior, "");
}

#[test]
fn changing_the_month_discards_manual_edits() {
    // A single pair and a constant 0.5 draw fill every day with A/B.
    let mut state = scripted(vec![0.5]);
    state.add_pair("A", "B").expect("pair created");
    assert_eq!(state.schedule()[4].shifts.day.senior, "A");

    state.assign_employee(&[5], Shift::Day, Role::Senior, "Z");
    assert_eq!(state.schedule()[4].shifts.day.senior, "Z");

    state.set_month(ym(2025, 6));
    assert_eq!(state.schedule().len(), 31);
    assert_eq!(state.schedule()[4].shifts.day.senior, "A");
}

#[test]
fn step_month_navigates_across_year_boundaries() {
    let mut state = scripted(vec![0.5]);
    state.set_month(ym(2025, 11));

    let next = state.step_month(1).expect("in range");
    assert_eq!((next.year(), next.month()), (2026, 0));
    assert_eq!(state.schedule().len(), 31);

    let back = state.step_month(-13).expect("in range");
    assert_eq!((back.year(), back.month()), (2024, 11));

    // Out-of-range steps change nothing.
    assert!(state.step_month(i64::MAX).is_none());
    assert_eq!((state.month().year(), state.month().month()), (2024, 11));
}

#[test]
fn personal_schedule_collects_duties_in_day_order() {
    let mut state = scripted(vec![0.05]);
    state.add_employee("Orlov").expect("employee created");
    state.assign_employee(&[7, 1], Shift::Day, Role::Senior, "Orlov");
    state.assign_employee(&[2], Shift::Night, Role::Junior, "Orlov");

    let shifts = state.personal_schedule("Orlov");
    let summary: Vec<(u32, Shift, Role)> = shifts.iter().map(|s| (s.day, s.shift, s.role)).collect();
    assert_eq!(
        summary,
        vec![
            (1, Shift::Day, Role::Senior),
            (2, Shift::Night, Role::Junior),
            (7, Shift::Day, Role::Senior),
        ]
    );
    // June 1st and 7th 2025 fall on a weekend, June 2nd does not.
    assert!(shifts[0].is_weekend);
    assert!(!shifts[1].is_weekend);
    assert!(shifts[2].is_weekend);

    assert!(state.personal_schedule("Nobody").is_empty());
}
