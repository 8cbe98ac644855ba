//! Core domain logic for the EventBoard listing site.
//! This crate is the single source of truth for event data invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, RegisterRequest, Session};
pub use model::event::{Event, EventDraft, EventId, ValidationErrors, SUMMARY_MIN_WORDS};
pub use repo::account_repo::{AccountRepository, SqliteAccountRepository};
pub use repo::event_repo::{EventRepository, RepoError, RepoResult, SqliteEventRepository};
pub use search::engine::{
    search_by_activity, search_by_text, search_by_year, ActivityHighlight, AnnotatedEvent,
    SearchResponse, SearchResults,
};
pub use search::highlight::{contains_ci, highlight, strip_marks, wrap_whole, MARK_CLOSE, MARK_OPEN};
pub use search::related::{find_related, RELATED_EVENTS_CAP};
pub use seed::{install_seed, open_seeded_in_memory, seed_events, SEED_ADMIN_USERNAME};
pub use service::account_service::{
    password_digest, AccountService, AccountServiceError, RegisterErrors,
};
pub use service::event_service::{
    split_activities, EventService, EventServiceError, EventSubmission,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
