//! Event use-case service.
//!
//! # Responsibility
//! - Shape raw form-field submissions into validated drafts.
//! - Provide stable CRUD and related-events entry points for core callers.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The service does not check authorization; the handler layer must pass
//!   its capability check before invoking the write entry points.

use crate::model::event::{Event, EventDraft, EventId, ValidationErrors};
use crate::repo::event_repo::{EventRepository, RepoError};
use crate::search::related::find_related;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw form fields as the add/edit endpoints receive them.
///
/// `activities` is the comma-separated text input; [`split_activities`]
/// turns it into the ordered tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSubmission {
    pub title: String,
    pub image: String,
    pub year: String,
    pub location: String,
    pub summary: String,
    pub activities: String,
}

/// Service error for event use-cases.
#[derive(Debug)]
pub enum EventServiceError {
    /// Submission failed field validation; all messages collected.
    Validation(ValidationErrors),
    /// Target event does not exist.
    EventNotFound(EventId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for EventServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{errors}"),
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EventServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::EventNotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for EventServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::EventNotFound(id),
            RepoError::Validation(errors) => Self::Validation(errors),
            other => Self::Repo(other),
        }
    }
}

/// Use-case facade over an event repository implementation.
pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Gets one event by id; a miss is `Ok(None)`.
    pub fn event(&self, id: &str) -> Result<Option<Event>, EventServiceError> {
        Ok(self.repo.get_event(id)?)
    }

    /// Lists all events in insertion order.
    pub fn events(&self) -> Result<Vec<Event>, EventServiceError> {
        Ok(self.repo.list_events()?)
    }

    /// Creates an event from raw form fields.
    ///
    /// # Contract
    /// - Scalar fields are trimmed; the activities text is comma-split.
    /// - Returns the stored record with its assigned id.
    pub fn add_event(&mut self, submission: &EventSubmission) -> Result<Event, EventServiceError> {
        let draft = draft_from_submission(submission);
        Ok(self.repo.create_event(&draft)?)
    }

    /// Replaces all mutable fields of an existing event from raw form fields.
    pub fn edit_event(
        &mut self,
        id: &str,
        submission: &EventSubmission,
    ) -> Result<Event, EventServiceError> {
        let draft = draft_from_submission(submission);
        Ok(self.repo.update_event(id, &draft)?)
    }

    /// Finds up to three events related to `id` for the detail view.
    pub fn related_events(&self, id: &str) -> Result<Vec<Event>, EventServiceError> {
        Ok(find_related(&self.repo, id)?)
    }
}

/// Splits comma-separated activity text into trimmed, non-empty entries.
pub fn split_activities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn draft_from_submission(submission: &EventSubmission) -> EventDraft {
    EventDraft {
        title: submission.title.trim().to_string(),
        image: submission.image.trim().to_string(),
        year: submission.year.trim().to_string(),
        location: submission.location.trim().to_string(),
        summary: submission.summary.trim().to_string(),
        activities: split_activities(&submission.activities),
    }
}
