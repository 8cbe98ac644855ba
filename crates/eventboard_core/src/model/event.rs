//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical event record served by listings, detail views and
//!   search.
//! - Own write-path field validation with collected per-field errors.
//!
//! # Invariants
//! - `id` is the string form of a positive integer and never changes once
//!   assigned by the store.
//! - `year` contains ASCII digits only after a validated write.
//! - `summary` holds at least [`SUMMARY_MIN_WORDS`] whitespace-separated
//!   words after a validated write.
//! - `popular_activities` is non-empty after a validated write and keeps its
//!   submitted order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key for event records.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EventId = String;

/// Minimum whitespace-separated word count for an event summary.
pub const SUMMARY_MIN_WORDS: usize = 20;

/// Canonical event record as stored and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Store key; string form of a positive integer.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Image URI or path used by listing and detail views.
    pub image: String,
    /// Four-digit year kept as text; matched as a string, never numerically.
    pub year: String,
    /// Venue or room label.
    pub location: String,
    /// Free-text description.
    pub summary: String,
    /// Ordered activity tags shown on the detail view.
    pub popular_activities: Vec<String>,
}

/// Mutable event fields submitted through the write path.
///
/// Carries everything except `id`, which the store assigns on create and
/// never rewrites on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub image: String,
    pub year: String,
    pub location: String,
    pub summary: String,
    /// Activity tags in display order.
    pub activities: Vec<String>,
}

impl EventDraft {
    /// Checks every write-path rule and collects all violations.
    ///
    /// # Errors
    /// - Returns the full set of per-field messages; validation never stops
    ///   at the first failing field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title cannot be empty".to_string());
        }
        if self.image.trim().is_empty() {
            errors.image = Some("Image URL cannot be empty".to_string());
        }

        let year = self.year.trim();
        if year.is_empty() {
            errors.year = Some("Year cannot be empty".to_string());
        } else if !year.chars().all(|ch| ch.is_ascii_digit()) {
            errors.year = Some("Year must be a number".to_string());
        }

        if self.location.trim().is_empty() {
            errors.location = Some("Location cannot be empty".to_string());
        }

        let summary = self.summary.trim();
        if summary.is_empty() {
            errors.summary = Some("Summary cannot be empty".to_string());
        } else if summary.split_whitespace().count() < SUMMARY_MIN_WORDS {
            errors.summary = Some("Summary must be at least 20 words".to_string());
        }

        if self.activities.is_empty() {
            errors.activities = Some("Activities cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Materializes a record from this draft under the given id.
    ///
    /// Scalar fields are stored trimmed; the activity list keeps its order.
    pub fn to_event(&self, id: impl Into<EventId>) -> Event {
        Event {
            id: id.into(),
            title: self.title.trim().to_string(),
            image: self.image.trim().to_string(),
            year: self.year.trim().to_string(),
            location: self.location.trim().to_string(),
            summary: self.summary.trim().to_string(),
            popular_activities: self.activities.clone(),
        }
    }
}

/// Collected write-path validation failures keyed by submitted field.
///
/// Only failed fields carry a message; serialization omits the rest, matching
/// the error body the add/edit endpoints return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
}

impl ValidationErrors {
    /// Returns whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Returns `(field, message)` pairs for failed fields in stable order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let fields = [
            ("title", &self.title),
            ("image", &self.image),
            ("year", &self.year),
            ("location", &self.location),
            ("summary", &self.summary),
            ("activities", &self.activities),
        ];
        fields
            .into_iter()
            .filter_map(|(name, message)| message.as_deref().map(|text| (name, text)))
            .collect()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries();
        if entries.is_empty() {
            return write!(f, "no validation errors");
        }
        for (index, (field, message)) in entries.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}
