//! Recurrence expansion engine.
//!
//! A pure function from (source, query window) to an ordered sequence of
//! occurrences. Holds no state between calls; safe to invoke repeatedly
//! during re-render cycles and from multiple threads.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::models::occurrence::Occurrence;
use crate::models::pattern::{PatternStep, RecurrencePattern};
use crate::models::source::RecurrenceSource;
use crate::utils::date::add_months_clamped;

/// Hard cap on loop iterations per expansion call. Guarantees termination
/// even for a daily pattern with no end date.
pub const MAX_EXPANSION_STEPS: usize = 100;

/// Horizon applied when a source has no explicit end date, in days.
pub const DEFAULT_HORIZON_DAYS: i64 = 365;

/// Expand one source into its occurrences within `[window_start, window_end]`.
///
/// Occurrences come back in ascending date order. An inverted window yields
/// an empty sequence, not an error. The caller is responsible for having
/// validated the source (see [`RecurrenceSource::validate`]).
pub fn expand(
    source: &RecurrenceSource,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<Occurrence> {
    if !source.is_recurring {
        if window_start <= source.start_date && source.start_date <= window_end {
            return vec![Occurrence::new(0, source.start_date, &source.identity)];
        }
        return Vec::new();
    }

    let effective_end = source
        .end_date
        .unwrap_or(source.start_date + Duration::days(DEFAULT_HORIZON_DAYS));
    let step = resolve_pattern(source).step();

    let mut occurrences = Vec::new();
    // One retained occurrence per (identity, date); identity is fixed within
    // a single call, so the date alone keys the guard.
    let mut seen_dates: HashSet<NaiveDate> = HashSet::new();

    for count in 0..MAX_EXPANSION_STEPS {
        let cursor = occurrence_date(source.start_date, step, count as i64);
        if cursor > effective_end {
            break;
        }

        if cursor >= window_start && cursor <= window_end && seen_dates.insert(cursor) {
            occurrences.push(Occurrence::new(count, cursor, &source.identity));
        }
    }

    occurrences
}

/// Expand many sources over one window into a single date-sorted sequence.
///
/// Duplicate occurrences — same `(source_identity, date)` — are suppressed
/// across the merged result, so feeding the same source twice is harmless.
pub fn expand_all<'a, I>(
    sources: I,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<Occurrence>
where
    I: IntoIterator<Item = &'a RecurrenceSource>,
{
    let mut merged = Vec::new();
    let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();

    for source in sources {
        for occurrence in expand(source, window_start, window_end) {
            if seen.insert((occurrence.source_identity.clone(), occurrence.date)) {
                merged.push(occurrence);
            }
        }
    }

    merged.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.source_identity.cmp(&b.source_identity))
    });
    merged
}

/// The date of step `n`, anchored to the source's start date.
///
/// Month-counted steps are computed from the anchor rather than the previous
/// cursor so that a clamp (Jan 31 -> Feb 29) does not shift every later
/// occurrence off the anchor day (Mar 31, not Mar 29).
fn occurrence_date(start: NaiveDate, step: PatternStep, n: i64) -> NaiveDate {
    match step {
        PatternStep::Days(days) => start + Duration::days(days * n),
        PatternStep::Months(months) => add_months_clamped(start, months * n),
    }
}

fn resolve_pattern(source: &RecurrenceSource) -> RecurrencePattern {
    match RecurrencePattern::parse(&source.pattern) {
        Some(pattern) => pattern,
        None => {
            log::warn!(
                "unrecognized recurrence pattern {:?} on source {}; stepping daily",
                source.pattern,
                source.identity
            );
            RecurrencePattern::Daily
        }
    }
}
