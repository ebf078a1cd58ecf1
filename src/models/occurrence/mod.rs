// Occurrence model
// Ephemeral engine output; never persisted

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One concrete calendar-date instance generated from a recurring source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// 0-based step number since the source's start date.
    pub occurrence_index: usize,
    /// Calendar date of this occurrence.
    pub date: NaiveDate,
    /// Back-reference to the originating source.
    pub source_identity: String,
    /// True for the occurrence landing on the start date itself.
    pub is_first: bool,
}

impl Occurrence {
    pub fn new(occurrence_index: usize, date: NaiveDate, source_identity: impl Into<String>) -> Self {
        Self {
            occurrence_index,
            date,
            source_identity: source_identity.into(),
            is_first: occurrence_index == 0,
        }
    }
}
