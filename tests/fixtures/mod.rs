// Test fixtures - reusable test data
// Provides consistent household schedules across test files

use chrono::NaiveDate;
use homekeeper_recurrence::models::source::RecurrenceSource;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2024 (leap year start)
    pub fn jan_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Returns Jun 1, 2024 (mid-year reference "now")
    pub fn jun_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Returns Dec 31, 2024 (year boundary)
    pub fn dec_31_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}

/// Sample sources modeling a household maintenance schedule
pub mod sources {
    use super::*;

    /// HVAC filter change, quarterly from mid-January
    pub fn hvac_filter() -> RecurrenceSource {
        RecurrenceSource::builder()
            .identity("task-hvac-filter")
            .start_date(dates::ymd(2024, 1, 15))
            .pattern("quarterly")
            .build()
            .unwrap()
    }

    /// Gutter cleaning, twice a year from April
    pub fn gutter_cleaning() -> RecurrenceSource {
        RecurrenceSource::builder()
            .identity("task-gutters")
            .start_date(dates::ymd(2024, 4, 10))
            .pattern("semi-annually")
            .build()
            .unwrap()
    }

    /// Mortgage payment, monthly on the 1st
    pub fn mortgage() -> RecurrenceSource {
        RecurrenceSource::builder()
            .identity("event-mortgage")
            .start_date(dates::ymd(2024, 1, 1))
            .pattern("monthly")
            .build()
            .unwrap()
    }

    /// Smoke detector test, annually
    pub fn smoke_detector() -> RecurrenceSource {
        RecurrenceSource::builder()
            .identity("task-smoke-detector")
            .start_date(dates::ymd(2024, 6, 5))
            .pattern("annually")
            .build()
            .unwrap()
    }

    /// One-off roof inspection
    pub fn roof_inspection() -> RecurrenceSource {
        RecurrenceSource::new("task-roof-inspection", dates::ymd(2024, 6, 15)).unwrap()
    }

    /// Row with a typo'd pattern, exercising the daily fallback
    pub fn typoed_pattern() -> RecurrenceSource {
        RecurrenceSource::builder()
            .identity("task-typo")
            .start_date(dates::ymd(2024, 6, 1))
            .end_date(dates::ymd(2024, 6, 4))
            .pattern("fortnightly")
            .build()
            .unwrap()
    }
}
