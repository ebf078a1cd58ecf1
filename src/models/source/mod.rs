// Recurrence source model
// Input record for the expansion engine, reconstructed from a task/event row

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error for a [`RecurrenceSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("source identity cannot be empty")]
    EmptyIdentity,
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// The engine's input: a task or calendar-event row reduced to its schedule.
///
/// A fresh value is built from the underlying row on every expansion call;
/// the engine holds no state of its own. `pattern` keeps the raw stored
/// string — normalization happens at expansion time so a typo'd row still
/// degrades gracefully instead of failing to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceSource {
    /// Stable key (task id / event id) used for duplicate suppression.
    pub identity: String,
    /// Anchor date for the first occurrence.
    pub start_date: NaiveDate,
    /// Explicit cutoff; when absent the engine uses a 365-day horizon.
    pub end_date: Option<NaiveDate>,
    /// Raw recurrence pattern string as stored on the row.
    pub pattern: String,
    /// A non-recurring source produces at most its start date.
    pub is_recurring: bool,
}

impl RecurrenceSource {
    /// Create a non-recurring source with the required fields.
    pub fn new(identity: impl Into<String>, start_date: NaiveDate) -> Result<Self, SourceError> {
        let source = Self {
            identity: identity.into(),
            start_date,
            end_date: None,
            pattern: String::new(),
            is_recurring: false,
        };
        source.validate()?;
        Ok(source)
    }

    /// Create a builder for constructing sources with optional fields.
    pub fn builder() -> SourceBuilder {
        SourceBuilder::new()
    }

    /// Validate the source.
    ///
    /// The engine assumes valid inputs; the calling layer runs this before
    /// handing rows over.
    pub fn validate(&self) -> Result<(), SourceError> {
        if self.identity.trim().is_empty() {
            return Err(SourceError::EmptyIdentity);
        }

        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(SourceError::EndBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }

        Ok(())
    }
}

/// Builder for creating sources with optional fields
pub struct SourceBuilder {
    identity: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    pattern: Option<String>,
    is_recurring: bool,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self {
            identity: None,
            start_date: None,
            end_date: None,
            pattern: None,
            is_recurring: false,
        }
    }

    /// Set the stable key (task id / event id)
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Set the anchor date
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Set the explicit cutoff date
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the recurrence pattern and mark the source recurring
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self.is_recurring = true;
        self
    }

    /// Override the recurring flag
    pub fn recurring(mut self, is_recurring: bool) -> Self {
        self.is_recurring = is_recurring;
        self
    }

    /// Build the source, validating required fields
    pub fn build(self) -> Result<RecurrenceSource, SourceError> {
        let identity = self.identity.ok_or(SourceError::MissingField("identity"))?;
        let start_date = self
            .start_date
            .ok_or(SourceError::MissingField("start_date"))?;

        let source = RecurrenceSource {
            identity,
            start_date,
            end_date: self.end_date,
            pattern: self.pattern.unwrap_or_default(),
            is_recurring: self.is_recurring,
        };
        source.validate()?;
        Ok(source)
    }
}

impl Default for SourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_creates_non_recurring_source() {
        let source = RecurrenceSource::new("task-1", date(2024, 6, 15)).unwrap();
        assert_eq!(source.identity, "task-1");
        assert!(!source.is_recurring);
        assert!(source.end_date.is_none());
    }

    #[test]
    fn test_new_rejects_empty_identity() {
        let result = RecurrenceSource::new("   ", date(2024, 6, 15));
        assert_eq!(result.unwrap_err(), SourceError::EmptyIdentity);
    }

    #[test]
    fn test_builder_with_all_fields() {
        let source = RecurrenceSource::builder()
            .identity("task-7")
            .start_date(date(2024, 1, 1))
            .end_date(date(2024, 12, 31))
            .pattern("Quarterly")
            .build()
            .unwrap();

        assert_eq!(source.identity, "task-7");
        assert_eq!(source.pattern, "Quarterly");
        assert!(source.is_recurring);
        assert_eq!(source.end_date, Some(date(2024, 12, 31)));
    }

    #[test]
    fn test_builder_pattern_implies_recurring() {
        let source = RecurrenceSource::builder()
            .identity("task-2")
            .start_date(date(2024, 3, 1))
            .pattern("weekly")
            .build()
            .unwrap();
        assert!(source.is_recurring);
    }

    #[test]
    fn test_builder_requires_identity_and_start_date() {
        let missing_identity = RecurrenceSource::builder()
            .start_date(date(2024, 1, 1))
            .build();
        assert_eq!(
            missing_identity.unwrap_err(),
            SourceError::MissingField("identity")
        );

        let missing_start = RecurrenceSource::builder().identity("task-3").build();
        assert_eq!(
            missing_start.unwrap_err(),
            SourceError::MissingField("start_date")
        );
    }

    #[test]
    fn test_validate_rejects_end_before_start() {
        let result = RecurrenceSource::builder()
            .identity("task-4")
            .start_date(date(2024, 6, 1))
            .end_date(date(2024, 5, 1))
            .pattern("daily")
            .build();

        assert_eq!(
            result.unwrap_err(),
            SourceError::EndBeforeStart {
                start: date(2024, 6, 1),
                end: date(2024, 5, 1),
            }
        );
    }

    #[test]
    fn test_deserializes_from_row_shaped_json() {
        let source: RecurrenceSource = serde_json::from_str(
            r#"{
                "identity": "home_task-42",
                "start_date": "2024-04-01",
                "end_date": null,
                "pattern": "monthly",
                "is_recurring": true
            }"#,
        )
        .unwrap();

        assert_eq!(source.identity, "home_task-42");
        assert_eq!(source.start_date, date(2024, 4, 1));
        assert!(source.validate().is_ok());
    }
}
