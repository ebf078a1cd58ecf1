//! Calendar marker building.
//!
//! Folds expanded occurrences into per-date dot metadata for the month
//! widget. Colors live on the task/event row, not on occurrences, so the
//! calling view supplies an identity-to-color map.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::occurrence::Occurrence;
use crate::models::source::RecurrenceSource;
use crate::services::recurrence::expand_all;
use crate::utils::date::add_months_clamped;

/// Dot color for sources with no entry in the color map.
pub const DEFAULT_DOT_COLOR: &str = "#8E8E93";

/// Per-date marker metadata for the calendar widget.
///
/// `primary_color` is the color of the first occurrence recorded for the
/// date — insertion order, not priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMarker {
    pub dot_colors: Vec<String>,
    pub primary_color: String,
}

/// Fold occurrences into a sparse per-date map, preserving input order
/// within each date.
pub fn group_by_date(
    occurrences: impl IntoIterator<Item = Occurrence>,
) -> BTreeMap<NaiveDate, Vec<Occurrence>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Occurrence>> = BTreeMap::new();
    for occurrence in occurrences {
        by_date.entry(occurrence.date).or_default().push(occurrence);
    }
    by_date
}

/// Build one marker per date carrying at least one occurrence.
///
/// `colors` maps `source_identity` to a hex color; unmapped identities get
/// [`DEFAULT_DOT_COLOR`].
pub fn build_markers(
    by_date: &BTreeMap<NaiveDate, Vec<Occurrence>>,
    colors: &HashMap<String, String>,
) -> BTreeMap<NaiveDate, DayMarker> {
    by_date
        .iter()
        .filter(|(_, occurrences)| !occurrences.is_empty())
        .map(|(date, occurrences)| {
            let dot_colors: Vec<String> = occurrences
                .iter()
                .map(|occurrence| {
                    colors
                        .get(&occurrence.source_identity)
                        .cloned()
                        .unwrap_or_else(|| DEFAULT_DOT_COLOR.to_string())
                })
                .collect();
            let primary_color = dot_colors
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_DOT_COLOR.to_string());

            (*date, DayMarker { dot_colors, primary_color })
        })
        .collect()
}

/// Calendar-view composition: markers for a visible month, expanded with one
/// month of buffer on each side so swipes to adjacent months render warm.
pub fn month_markers(
    sources: &[RecurrenceSource],
    colors: &HashMap<String, String>,
    year: i32,
    month: u32,
) -> BTreeMap<NaiveDate, DayMarker> {
    let Some(first_of_visible) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return BTreeMap::new();
    };

    let window_start = add_months_clamped(first_of_visible, -1);
    let window_end = add_months_clamped(first_of_visible, 2)
        .pred_opt()
        .unwrap_or(first_of_visible);

    let occurrences = expand_all(sources, window_start, window_end);
    build_markers(&group_by_date(occurrences), colors)
}
