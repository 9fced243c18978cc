use chrono::Datelike;
use serde::Serialize;
use tracing::debug;

use crate::models::{DaySchedule, Employee, Pair, Role, Shift, ShiftAssignments, YearMonth};
use crate::services::calendar;
use crate::services::random::{RandomSource, ThreadRngSource};

/// Colors handed out to new employees.
const EMPLOYEE_PALETTE: [&str; 6] = [
    "#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#ef4444", "#06b6d4",
];

/// Pair color when the senior name matches no employee record.
const NEUTRAL_COLOR: &str = "#6b7280";

/// Chance that a seeded day is left with both shifts unassigned.
const UNFILLED_CHANCE: f64 = 0.1;

/// The schedule state container. Owns the roster of employees and pairs,
/// the active month, and the month's day sequence.
///
/// The day sequence is rebuilt from scratch (and randomly reseeded)
/// whenever the month, the employee set, or the pair set changes; any
/// assignments made through [`assign_employee`](Self::assign_employee) or
/// [`assign_pair`](Self::assign_pair) are discarded by such a rebuild.
pub struct RosterState {
    month: YearMonth,
    employees: Vec<Employee>,
    pairs: Vec<Pair>,
    schedule: Vec<DaySchedule>,
    random: Box<dyn RandomSource>,
}

impl RosterState {
    pub fn new(month: YearMonth, random: Box<dyn RandomSource>) -> Self {
        let mut state = Self {
            month,
            employees: Vec::new(),
            pairs: Vec::new(),
            schedule: Vec::new(),
            random,
        };
        state.rebuild();
        state
    }

    pub fn with_thread_rng(month: YearMonth) -> Self {
        Self::new(month, Box::new(ThreadRngSource))
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// The day sequence of the active month, ordered by day number.
    pub fn schedule(&self) -> &[DaySchedule] {
        &self.schedule
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Switch the active month and rebuild the day sequence.
    pub fn set_month(&mut self, month: YearMonth) {
        self.month = month;
        self.rebuild();
    }

    /// Move the active month by `delta` months (negative steps back).
    /// `None` when the result falls outside the supported calendar range,
    /// in which case nothing changes.
    pub fn step_month(&mut self, delta: i64) -> Option<YearMonth> {
        let next = self.month.plus_months(delta)?;
        self.set_month(next);
        Some(next)
    }

    /// Append an employee under the next sequential id, with a color drawn
    /// uniformly from the palette. Blank names are a no-op. Names are not
    /// deduplicated; lookups elsewhere resolve to the first match.
    ///
    /// The day sequence reseeds afterwards: it is recomputed on any change
    /// to the employee set, not just to the pairs.
    pub fn add_employee(&mut self, name: &str) -> Option<Employee> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let color = EMPLOYEE_PALETTE[pick_index(EMPLOYEE_PALETTE.len(), &mut *self.random)];
        let employee = Employee {
            id: (self.employees.len() + 1).to_string(),
            name: name.to_string(),
            color: color.to_string(),
        };
        self.employees.push(employee.clone());
        self.rebuild();
        Some(employee)
    }

    /// Register a senior/junior pair. Missing or identical names are
    /// silently ignored. The names are not checked against the employee
    /// list; the color is inherited from the senior's record when one
    /// matches, else a neutral gray.
    pub fn add_pair(&mut self, senior: &str, junior: &str) -> Option<Pair> {
        if senior.is_empty() || junior.is_empty() || senior == junior {
            debug!("add_pair ignored: senior={:?} junior={:?}", senior, junior);
            return None;
        }
        let color = self
            .employees
            .iter()
            .find(|e| e.name == senior)
            .map(|e| e.color.clone())
            .unwrap_or_else(|| NEUTRAL_COLOR.to_string());
        let pair = Pair {
            id: (self.pairs.len() + 1).to_string(),
            senior: senior.to_string(),
            junior: junior.to_string(),
            color,
        };
        self.pairs.push(pair.clone());
        self.rebuild();
        Some(pair)
    }

    /// Write one role slot on every listed day that exists in the current
    /// sequence. Day numbers outside the month are skipped; the remaining
    /// days still apply. The sibling role is untouched. No rebuild.
    pub fn assign_employee(&mut self, days: &[u32], shift: Shift, role: Role, name: &str) {
        for entry in self.schedule.iter_mut() {
            if days.contains(&entry.day) {
                *entry.shifts.shift_mut(shift).role_mut(role) = name.to_string();
            }
        }
    }

    /// Fill both roles of `shift` with the pair's senior and junior on every
    /// listed day. An unknown pair id makes the whole call a no-op, with no
    /// partial effect. Returns whether the pair was found.
    pub fn assign_pair(&mut self, days: &[u32], shift: Shift, pair_id: &str) -> bool {
        let Some(pair) = self.pairs.iter().find(|p| p.id == pair_id).cloned() else {
            debug!("assign_pair ignored: unknown pair id {}", pair_id);
            return false;
        };
        for entry in self.schedule.iter_mut() {
            if days.contains(&entry.day) {
                let slots = entry.shifts.shift_mut(shift);
                slots.senior = pair.senior.clone();
                slots.junior = pair.junior.clone();
            }
        }
        true
    }

    /// Every (day, shift, role) slot currently held by `name`, in day order
    /// with Day before Night and Senior before Junior within a day.
    pub fn personal_schedule(&self, name: &str) -> Vec<PersonalShift> {
        let mut shifts = Vec::new();
        for entry in &self.schedule {
            for shift in [Shift::Day, Shift::Night] {
                for role in [Role::Senior, Role::Junior] {
                    if entry.shifts.shift(shift).role(role) == name {
                        shifts.push(PersonalShift {
                            day: entry.day,
                            weekday: entry.weekday.clone(),
                            is_weekend: entry.is_weekend,
                            shift,
                            role,
                        });
                    }
                }
            }
        }
        shifts
    }

    fn rebuild(&mut self) {
        self.schedule = recompute_schedule(self.month, &self.pairs, &mut *self.random);
        debug!(
            "rebuilt day sequence: {} days, {} pairs",
            self.schedule.len(),
            self.pairs.len()
        );
    }
}

/// A single duty held by one employee, as shown on the personal schedule.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalShift {
    pub day: u32,
    pub weekday: String,
    pub is_weekend: bool,
    pub shift: Shift,
    pub role: Role,
}

/// Totals over a personal schedule.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalStats {
    pub total: usize,
    pub day_shifts: usize,
    pub night_shifts: usize,
    pub weekend_shifts: usize,
}

impl PersonalStats {
    pub fn summarize(shifts: &[PersonalShift]) -> Self {
        Self {
            total: shifts.len(),
            day_shifts: shifts.iter().filter(|s| s.shift == Shift::Day).count(),
            night_shifts: shifts.iter().filter(|s| s.shift == Shift::Night).count(),
            weekend_shifts: shifts.iter().filter(|s| s.is_weekend).count(),
        }
    }
}

/// Rebuild the day sequence for `month`, randomly seeding shifts from
/// `pairs`.
///
/// For each day: when the pair list is non-empty, one draw decides whether
/// the day is filled at all (it stays empty with probability 0.1); a filled
/// day then takes one uniformly drawn pair for the Day shift and an
/// independently drawn pair for the Night shift. An empty pair list
/// consumes no draws and leaves every slot empty.
pub fn recompute_schedule(
    month: YearMonth,
    pairs: &[Pair],
    random: &mut dyn RandomSource,
) -> Vec<DaySchedule> {
    let day_count = calendar::days_in_month(month);
    let mut schedule = Vec::with_capacity(day_count as usize);
    let mut weekday = month.first_day().weekday();
    for day in 1..=day_count {
        let mut shifts = ShiftAssignments::default();

        if !pairs.is_empty() && random.next_f64() > UNFILLED_CHANCE {
            let day_pair = &pairs[pick_index(pairs.len(), random)];
            shifts.day.senior = day_pair.senior.clone();
            shifts.day.junior = day_pair.junior.clone();

            let night_pair = &pairs[pick_index(pairs.len(), random)];
            shifts.night.senior = night_pair.senior.clone();
            shifts.night.junior = night_pair.junior.clone();
        }

        schedule.push(DaySchedule {
            day,
            weekday: calendar::weekday_name(weekday).to_string(),
            is_weekend: calendar::is_weekend(weekday),
            shifts,
        });
        weekday = weekday.succ();
    }
    schedule
}

fn pick_index(len: usize, random: &mut dyn RandomSource) -> usize {
    ((random.next_f64() * len as f64) as usize).min(len - 1)
}
