//! Related-events lookup for the detail view.
//!
//! # Responsibility
//! - Find up to three events tied to a target by year or shared activity.
//!
//! # Invariants
//! - The target itself is never part of its own related set.
//! - The cap keeps the first matches in store order; there is no scoring.
//! - Activity overlap compares exact strings, case-sensitively.

use crate::model::event::Event;
use crate::repo::event_repo::{EventRepository, RepoError, RepoResult};

/// Maximum related events returned for one detail view.
pub const RELATED_EVENTS_CAP: usize = 3;

/// Finds up to [`RELATED_EVENTS_CAP`] events related to `event_id`.
///
/// A candidate is related when its year equals the target's year, or, only
/// when the year differs, when it shares at least one exact activity string
/// with the target.
///
/// # Errors
/// - Returns [`RepoError::NotFound`] when the target id is absent, so the
///   handler layer can redirect rather than render an empty detail view.
pub fn find_related<R: EventRepository>(repo: &R, event_id: &str) -> RepoResult<Vec<Event>> {
    let Some(target) = repo.get_event(event_id)? else {
        return Err(RepoError::NotFound(event_id.to_string()));
    };

    let mut related = Vec::new();
    for candidate in repo.list_events()? {
        if related.len() == RELATED_EVENTS_CAP {
            break;
        }
        if candidate.id == target.id {
            continue;
        }

        if candidate.year == target.year {
            related.push(candidate);
            continue;
        }

        let shares_activity = candidate
            .popular_activities
            .iter()
            .any(|activity| target.popular_activities.contains(activity));
        if shares_activity {
            related.push(candidate);
        }
    }

    Ok(related)
}
