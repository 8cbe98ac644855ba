//! Event repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the store's four operations: get, list, create, update.
//! - Own id assignment for created events.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate the full draft before any SQL mutation; there are
//!   no partial writes.
//! - `update_event` checks existence before validation, so an unknown id
//!   reports `NotFound` even when the draft is also invalid.
//! - Listing order is insertion order (`rowid`).
//! - No operation deletes an event; ids are never reused.

use crate::model::event::{Event, EventDraft, EventId, ValidationErrors};
use crate::repo::{ensure_schema_version, ensure_table};
use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for event and account persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Draft failed write-path validation; all field messages collected.
    Validation(ValidationErrors),
    /// Storage transport failure.
    Db(crate::db::DbError),
    /// Operation referenced an id the store does not hold.
    NotFound(EventId),
    /// Id assignment found an existing id that is not a clean integer.
    ///
    /// Propagated, not recovered; callers surface a generic failure with
    /// this cause attached.
    IdGeneration { offending_id: String },
    /// Persisted state failed to decode into a domain record.
    InvalidData(String),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "{errors}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "event not found: {id}"),
            Self::IdGeneration { offending_id } => write!(
                f,
                "cannot assign a new event id: existing id `{offending_id}` is not numeric"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted event data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version is {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table: {table}"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column: {table}.{column}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for RepoError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<crate::db::DbError> for RepoError {
    fn from(value: crate::db::DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(crate::db::DbError::Sqlite(value))
    }
}

/// Repository interface for event store operations.
///
/// The two write entry points are the only mutation paths the application
/// exposes; the handler layer must pass its capability check before calling
/// either one.
pub trait EventRepository {
    /// Gets one event by id. A miss is `Ok(None)`, not an error.
    fn get_event(&self, id: &str) -> RepoResult<Option<Event>>;
    /// Lists every event in insertion order.
    fn list_events(&self) -> RepoResult<Vec<Event>>;
    /// Validates the draft, assigns the next id and inserts the record.
    fn create_event(&mut self, draft: &EventDraft) -> RepoResult<Event>;
    /// Validates the draft and replaces all fields of an existing record.
    fn update_event(&mut self, id: &str, draft: &EventDraft) -> RepoResult<Event>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - Rejects connections whose schema version or tables do not match
    ///   what this binary was built against.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_schema_version(conn)?;
        ensure_table(
            conn,
            "events",
            &["id", "title", "image", "year", "location", "summary"],
        )?;
        ensure_table(conn, "event_activities", &["event_id", "position", "activity"])?;
        Ok(Self { conn })
    }

    /// Inserts a fully-formed record under its own id.
    ///
    /// Bootstrap/import path used for seed installation; it bypasses draft
    /// validation and id assignment, so the caller owns every record
    /// invariant. Not part of [`EventRepository`].
    pub fn import_event(&mut self, event: &Event) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        insert_event_rows(&tx, event)?;
        tx.commit()?;
        Ok(())
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn get_event(&self, id: &str) -> RepoResult<Option<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, image, year, location, summary
             FROM events
             WHERE id = ?1;",
        )?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            let id: String = row.get("id")?;
            let popular_activities = load_activities(self.conn, &id)?;
            return Ok(Some(Event {
                id,
                title: row.get("title")?,
                image: row.get("image")?,
                year: row.get("year")?,
                location: row.get("location")?,
                summary: row.get("summary")?,
                popular_activities,
            }));
        }

        Ok(None)
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, image, year, location, summary
             FROM events
             ORDER BY rowid ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            let id: String = row.get("id")?;
            let popular_activities = load_activities(self.conn, &id)?;
            events.push(Event {
                id,
                title: row.get("title")?,
                image: row.get("image")?,
                year: row.get("year")?,
                location: row.get("location")?,
                summary: row.get("summary")?,
                popular_activities,
            });
        }

        Ok(events)
    }

    fn create_event(&mut self, draft: &EventDraft) -> RepoResult<Event> {
        draft.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = next_event_id(&tx)?;
        let event = draft.to_event(id);
        insert_event_rows(&tx, &event)?;
        tx.commit()?;

        Ok(event)
    }

    fn update_event(&mut self, id: &str, draft: &EventDraft) -> RepoResult<Event> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !event_exists(&tx, id)? {
            return Err(RepoError::NotFound(id.to_string()));
        }

        draft.validate()?;
        let event = draft.to_event(id);

        tx.execute(
            "UPDATE events
             SET title = ?2, image = ?3, year = ?4, location = ?5, summary = ?6
             WHERE id = ?1;",
            params![
                event.id.as_str(),
                event.title.as_str(),
                event.image.as_str(),
                event.year.as_str(),
                event.location.as_str(),
                event.summary.as_str(),
            ],
        )?;
        tx.execute(
            "DELETE FROM event_activities WHERE event_id = ?1;",
            [event.id.as_str()],
        )?;
        insert_activity_rows(&tx, &event)?;
        tx.commit()?;

        Ok(event)
    }
}

/// Assigns the next id as `max(numeric ids) + 1`, or "1" for an empty store.
fn next_event_id(tx: &Transaction<'_>) -> RepoResult<EventId> {
    let mut stmt = tx.prepare("SELECT id FROM events;")?;
    let mut rows = stmt.query([])?;

    let mut highest: i64 = 0;
    while let Some(row) = rows.next()? {
        let id: String = row.get(0)?;
        let numeric: i64 = id.parse().map_err(|_| RepoError::IdGeneration {
            offending_id: id.clone(),
        })?;
        highest = highest.max(numeric);
    }

    Ok((highest + 1).to_string())
}

fn insert_event_rows(tx: &Transaction<'_>, event: &Event) -> RepoResult<()> {
    tx.execute(
        "INSERT INTO events (id, title, image, year, location, summary)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        params![
            event.id.as_str(),
            event.title.as_str(),
            event.image.as_str(),
            event.year.as_str(),
            event.location.as_str(),
            event.summary.as_str(),
        ],
    )?;
    insert_activity_rows(tx, event)
}

fn insert_activity_rows(tx: &Transaction<'_>, event: &Event) -> RepoResult<()> {
    for (position, activity) in event.popular_activities.iter().enumerate() {
        tx.execute(
            "INSERT INTO event_activities (event_id, position, activity)
             VALUES (?1, ?2, ?3);",
            params![event.id.as_str(), position as i64, activity.as_str()],
        )?;
    }
    Ok(())
}

fn load_activities(conn: &Connection, event_id: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT activity
         FROM event_activities
         WHERE event_id = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([event_id])?;
    let mut activities = Vec::new();
    while let Some(row) = rows.next()? {
        activities.push(row.get(0)?);
    }
    Ok(activities)
}

fn event_exists(tx: &Transaction<'_>, id: &str) -> RepoResult<bool> {
    let exists: i64 = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM events WHERE id = ?1);",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
