// Date utility functions
// Shared calendar arithmetic for the recurrence engine and its dependents

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Add a number of calendar months, anchored to `anchor`'s day-of-month.
///
/// When the target month is shorter than the anchor day, the result clamps to
/// the target month's last day (Jan 31 + 1 month = Feb 29 in a leap year).
/// Negative offsets are allowed.
pub fn add_months_clamped(anchor: NaiveDate, months: i64) -> NaiveDate {
    let total = anchor.year() as i64 * 12 + anchor.month0() as i64 + months;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;
    let day = anchor.day().min(days_in_month(year, month));

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(anchor)
}

/// December 31 of the given date's year.
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// First day of the given date's month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
