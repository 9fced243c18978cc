use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One of the two labels partitioning a 24-hour day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Day,
    Night,
}

/// One of the two duty roles within a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Senior,
    Junior,
}

/// Assignments for a single shift. Slots hold employee names, `""` when
/// unassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSlots {
    #[serde(rename = "Senior")]
    pub senior: String,
    #[serde(rename = "Junior")]
    pub junior: String,
}

impl ShiftSlots {
    pub fn role(&self, role: Role) -> &str {
        match role {
            Role::Senior => &self.senior,
            Role::Junior => &self.junior,
        }
    }

    pub fn role_mut(&mut self, role: Role) -> &mut String {
        match role {
            Role::Senior => &mut self.senior,
            Role::Junior => &mut self.junior,
        }
    }
}

/// The fixed shift x role key space of one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignments {
    #[serde(rename = "Day")]
    pub day: ShiftSlots,
    #[serde(rename = "Night")]
    pub night: ShiftSlots,
}

impl ShiftAssignments {
    pub fn shift(&self, shift: Shift) -> &ShiftSlots {
        match shift {
            Shift::Day => &self.day,
            Shift::Night => &self.night,
        }
    }

    pub fn shift_mut(&mut self, shift: Shift) -> &mut ShiftSlots {
        match shift {
            Shift::Day => &mut self.day,
            Shift::Night => &mut self.night,
        }
    }
}

/// One calendar day of the active month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: u32,
    pub weekday: String,
    pub is_weekend: bool,
    pub shifts: ShiftAssignments,
}

/// Validated month selector: a year plus a zero-based month index.
/// Construction normalizes arbitrary indices the way the consumer contract
/// expects (month 12 of 2025 is January 2026, month -1 is December 2024)
/// and fails only outside chrono's representable range. Internally pinned
/// to the first day of the month so later calendar math cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "YearMonthRepr", into = "YearMonthRepr")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i64, month: i64) -> Option<Self> {
        let year = i32::try_from(year.checked_add(month.div_euclid(12))?).ok()?;
        let month0 = month.rem_euclid(12) as u32;
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).map(Self)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month index, 0..12.
    pub fn month(self) -> u32 {
        self.0.month0()
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn plus_months(self, delta: i64) -> Option<Self> {
        let months = i64::from(self.month()).checked_add(delta)?;
        Self::new(i64::from(self.year()), months)
    }
}

/// Wire form of [`YearMonth`]: `{"year": 2025, "month": 0}` is January 2025.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearMonthRepr {
    pub year: i64,
    pub month: i64,
}

impl From<YearMonth> for YearMonthRepr {
    fn from(ym: YearMonth) -> Self {
        Self {
            year: i64::from(ym.year()),
            month: i64::from(ym.month()),
        }
    }
}

impl TryFrom<YearMonthRepr> for YearMonth {
    type Error = String;

    fn try_from(repr: YearMonthRepr) -> Result<Self, Self::Error> {
        YearMonth::new(repr.year, repr.month).ok_or_else(|| {
            format!(
                "month ({}, {}) is outside the supported calendar range",
                repr.year, repr.month
            )
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepMonthRequest {
    pub delta: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignEmployeeRequest {
    pub days: Vec<u32>,
    pub shift: Shift,
    pub role: Role,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignPairRequest {
    pub days: Vec<u32>,
    pub shift: Shift,
    pub pair_id: String,
}
