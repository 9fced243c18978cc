use chrono::{NaiveDate, Weekday};

use crate::models::YearMonth;

/// Number of days in the month, 28..=31.
pub fn days_in_month(ym: YearMonth) -> u32 {
    match ym.month() + 1 {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        // February; chrono owns the leap rule.
        _ => {
            if NaiveDate::from_ymd_opt(ym.year(), 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
