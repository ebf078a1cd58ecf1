// Recurrence pattern vocabulary
// Fixed word list as stored on task/event rows

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named step rule governing how the next occurrence date is computed.
///
/// The stored form on task/event rows is a free-text column; parsing is
/// case-insensitive and accepts the spelling variants that appear in real
/// rows (`bi-weekly`/`biweekly`, `annually`/`yearly`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    SemiAnnually,
    Annually,
}

/// Date increment implied by a pattern.
///
/// Day-counted steps advance by a fixed number of days. Month-counted steps
/// keep the start date's day-of-month and clamp to the last day of shorter
/// target months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternStep {
    Days(i64),
    Months(i64),
}

/// Error for strict parsing via `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized recurrence pattern: {0:?}")]
pub struct UnknownPattern(pub String);

impl RecurrencePattern {
    /// Parse a stored pattern string, returning `None` when unrecognized.
    ///
    /// The expansion engine applies its own daily-step fallback for unknown
    /// strings; this parser stays strict so callers that want to reject bad
    /// rows can.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "bi-weekly" | "biweekly" => Some(Self::BiWeekly),
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "semi-annually" | "semiannually" => Some(Self::SemiAnnually),
            "annually" | "yearly" => Some(Self::Annually),
            _ => None,
        }
    }

    /// The date increment for one step of this pattern.
    pub fn step(self) -> PatternStep {
        match self {
            Self::Daily => PatternStep::Days(1),
            Self::Weekly => PatternStep::Days(7),
            Self::BiWeekly => PatternStep::Days(14),
            Self::Monthly => PatternStep::Months(1),
            Self::Quarterly => PatternStep::Months(3),
            Self::SemiAnnually => PatternStep::Months(6),
            Self::Annually => PatternStep::Months(12),
        }
    }

    /// Canonical stored spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::SemiAnnually => "semi-annually",
            Self::Annually => "annually",
        }
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrencePattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownPattern(s.to_string()))
    }
}
