//! Search entry points over the event store.
//!
//! # Responsibility
//! - Provide the three query modes the listing site offers: free text,
//!   exact year, activity substring.
//! - Shape annotated result sets the template layer can render directly.
//!
//! # Invariants
//! - Result order is store iteration order (insertion order), never
//!   relevance-ranked.
//! - A blank free-text query is reported as [`SearchResults::NoQuery`],
//!   distinct from a query that matched nothing.
//! - Annotations always preserve the stored field values; highlighting only
//!   ever adds markers around them.

use crate::model::event::Event;
use crate::repo::event_repo::{EventRepository, RepoResult};
use crate::search::highlight::{contains_ci, highlight, wrap_whole};

/// One activity entry paired with its rendered form.
///
/// `rendered` equals `original` unless the query matched this entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityHighlight {
    pub original: String,
    pub rendered: String,
}

/// Event copy annotated for search result rendering.
///
/// Highlight fields are populated per query mode; `None` means the mode does
/// not annotate that field at all, while `Some` with an unmarked value means
/// the field simply did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedEvent {
    /// Full copy of the stored record.
    pub event: Event,
    pub highlighted_title: Option<String>,
    pub highlighted_year: Option<String>,
    pub highlighted_activities: Option<Vec<ActivityHighlight>>,
}

impl AnnotatedEvent {
    /// Store key of the underlying event.
    pub fn id(&self) -> &str {
        &self.event.id
    }
}

/// Result set state for one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    /// The caller submitted a blank query; nothing was searched.
    NoQuery,
    /// The search ran; the list may be empty.
    Found(Vec<AnnotatedEvent>),
}

/// Envelope returned by every search entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub results: SearchResults,
    /// Label the result view shows for this query.
    pub query_label: String,
    /// Number of annotated events; zero for [`SearchResults::NoQuery`].
    pub count: usize,
}

impl SearchResponse {
    fn no_query() -> Self {
        Self {
            results: SearchResults::NoQuery,
            query_label: String::new(),
            count: 0,
        }
    }

    fn found(events: Vec<AnnotatedEvent>, query_label: String) -> Self {
        let count = events.len();
        Self {
            results: SearchResults::Found(events),
            query_label,
            count,
        }
    }

    /// Annotated events in store order; empty for a blank query.
    pub fn events(&self) -> &[AnnotatedEvent] {
        match &self.results {
            SearchResults::NoQuery => &[],
            SearchResults::Found(events) => events,
        }
    }

    /// Looks up one annotated event by store key.
    pub fn get(&self, id: &str) -> Option<&AnnotatedEvent> {
        self.events().iter().find(|annotated| annotated.id() == id)
    }
}

/// Free-text search across title, summary, location, year and activities.
///
/// The query is trimmed and lowercased first; a blank query yields the
/// explicit no-query state. An event is included when any field contains the
/// query case-insensitively. The year is tested as a substring of its digit
/// string, so "202" matches year "2024".
pub fn search_by_text<R: EventRepository>(repo: &R, query: &str) -> RepoResult<SearchResponse> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return Ok(SearchResponse::no_query());
    }

    let mut found = Vec::new();
    for event in repo.list_events()? {
        let title_match = contains_ci(&event.title, &normalized);
        let summary_match = contains_ci(&event.summary, &normalized);
        let location_match = contains_ci(&event.location, &normalized);
        let year_match = contains_ci(&event.year, &normalized);

        let mut activity_match = false;
        let activities = annotate_activities(&event.popular_activities, &normalized, &mut activity_match);

        if !(title_match || summary_match || activity_match || location_match || year_match) {
            continue;
        }

        let highlighted_title = Some(if title_match {
            highlight(&event.title, &normalized)
        } else {
            event.title.clone()
        });
        let highlighted_year = Some(if year_match {
            wrap_whole(&event.year)
        } else {
            event.year.clone()
        });

        found.push(AnnotatedEvent {
            highlighted_title,
            highlighted_year,
            highlighted_activities: Some(activities),
            event,
        });
    }

    Ok(SearchResponse::found(found, normalized))
}

/// Exact-year search.
///
/// Matches by string equality (both sides are digit strings). Included
/// events carry a plain title copy and a wholesale-wrapped year; activities
/// are not annotated in this mode.
pub fn search_by_year<R: EventRepository>(repo: &R, year: &str) -> RepoResult<SearchResponse> {
    let mut found = Vec::new();
    for event in repo.list_events()? {
        if event.year != year {
            continue;
        }
        found.push(AnnotatedEvent {
            highlighted_title: Some(event.title.clone()),
            highlighted_year: Some(wrap_whole(&event.year)),
            highlighted_activities: None,
            event,
        });
    }

    Ok(SearchResponse::found(found, format!("Year: {year}")))
}

/// Activity search: case-insensitive substring against each activity entry.
///
/// Included events carry a plain title copy and the per-activity pair list;
/// the year is not annotated in this mode. An empty activity argument
/// matches nothing, consistent with the highlighter's empty-needle rule.
pub fn search_by_activity<R: EventRepository>(
    repo: &R,
    activity: &str,
) -> RepoResult<SearchResponse> {
    let mut found = Vec::new();
    for event in repo.list_events()? {
        let mut matched = false;
        let pairs = annotate_activities(&event.popular_activities, activity, &mut matched);
        if !matched {
            continue;
        }
        found.push(AnnotatedEvent {
            highlighted_title: Some(event.title.clone()),
            highlighted_year: None,
            highlighted_activities: Some(pairs),
            event,
        });
    }

    Ok(SearchResponse::found(found, format!("Activity: {activity}")))
}

/// Builds the (original, rendered) pair list for every activity entry.
///
/// Every entry appears in the output regardless of whether it matched;
/// `matched` is raised when at least one did.
fn annotate_activities(
    activities: &[String],
    query: &str,
    matched: &mut bool,
) -> Vec<ActivityHighlight> {
    activities
        .iter()
        .map(|activity| {
            if contains_ci(activity, query) {
                *matched = true;
                ActivityHighlight {
                    original: activity.clone(),
                    rendered: highlight(activity, query),
                }
            } else {
                ActivityHighlight {
                    original: activity.clone(),
                    rendered: activity.clone(),
                }
            }
        })
        .collect()
}
