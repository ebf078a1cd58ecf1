//! Due-date bucketing for the dashboard's "due soon" groupings.
//!
//! `now` is always an explicit parameter; nothing here reads a clock, so the
//! same occurrence set buckets identically in tests and at render time.

use chrono::{Duration, NaiveDate};

use crate::models::occurrence::Occurrence;
use crate::models::source::RecurrenceSource;
use crate::services::recurrence::{expand_all, DEFAULT_HORIZON_DAYS};
use crate::utils::date::end_of_year;

/// Upper bound of the "this week" bucket, in days from `now`.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Upper bound of the "this month" bucket, in days from `now`.
pub const MONTH_WINDOW_DAYS: i64 = 30;

/// Occurrences partitioned by proximity to a reference date.
///
/// Past-due occurrences get their own bucket rather than leaking into
/// "this week" or "later"; the buckets are disjoint and first-match-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DueBuckets {
    pub overdue: Vec<Occurrence>,
    pub this_week: Vec<Occurrence>,
    pub this_month: Vec<Occurrence>,
    pub this_year: Vec<Occurrence>,
    pub later: Vec<Occurrence>,
}

impl DueBuckets {
    /// Total occurrences across all buckets.
    pub fn total(&self) -> usize {
        self.overdue.len()
            + self.this_week.len()
            + self.this_month.len()
            + self.this_year.len()
            + self.later.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition occurrences into proximity buckets relative to `now`.
///
/// Boundaries: `now + 7d` (week), `now + 30d` (month), December 31 of
/// `now`'s year. Late in December the month boundary can pass the year
/// boundary; first-match-wins keeps early-January dates in "this month".
pub fn bucket(occurrences: impl IntoIterator<Item = Occurrence>, now: NaiveDate) -> DueBuckets {
    let week_end = now + Duration::days(WEEK_WINDOW_DAYS);
    let month_end = now + Duration::days(MONTH_WINDOW_DAYS);
    let year_end = end_of_year(now);

    let mut buckets = DueBuckets::default();
    for occurrence in occurrences {
        if occurrence.date < now {
            buckets.overdue.push(occurrence);
        } else if occurrence.date <= week_end {
            buckets.this_week.push(occurrence);
        } else if occurrence.date <= month_end {
            buckets.this_month.push(occurrence);
        } else if occurrence.date <= year_end {
            buckets.this_year.push(occurrence);
        } else {
            buckets.later.push(occurrence);
        }
    }
    buckets
}

/// Dashboard composition: expand every source over the year ahead of `now`
/// and bucket the merged result.
pub fn due_soon(sources: &[RecurrenceSource], now: NaiveDate) -> DueBuckets {
    let horizon = now + Duration::days(DEFAULT_HORIZON_DAYS);
    bucket(expand_all(sources, now, horizon), now)
}
