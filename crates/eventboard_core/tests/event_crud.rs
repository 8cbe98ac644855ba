use eventboard_core::db::open_db_in_memory;
use eventboard_core::{
    open_seeded_in_memory, EventDraft, EventRepository, EventService, EventSubmission, RepoError,
    SqliteEventRepository,
};
use rusqlite::Connection;

fn draft(title: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        image: "/static/images/new.png".to_string(),
        year: "2026".to_string(),
        location: "Lerner 555".to_string(),
        summary: long_summary(),
        activities: vec!["Games".to_string(), "Tasting".to_string()],
    }
}

fn long_summary() -> String {
    (0..24)
        .map(|index| format!("word{index}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn create_on_empty_store_starts_at_id_one() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    let created = repo.create_event(&draft("First")).unwrap();
    assert_eq!(created.id, "1");

    let loaded = repo.get_event("1").unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.popular_activities, vec!["Games", "Tasting"]);
}

#[test]
fn create_assigns_strictly_increasing_numeric_ids() {
    let mut conn = open_seeded_in_memory().unwrap();
    let mut repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    let first = repo.create_event(&draft("After seed A")).unwrap();
    let second = repo.create_event(&draft("After seed B")).unwrap();

    assert_eq!(first.id, "14");
    assert_eq!(second.id, "15");
}

#[test]
fn get_miss_is_none_not_an_error() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    assert!(repo.get_event("999").unwrap().is_none());
}

#[test]
fn list_returns_seed_in_insertion_order() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    let events = repo.list_events().unwrap();
    assert_eq!(events.len(), 13);
    let ids: Vec<&str> = events.iter().map(|event| event.id.as_str()).collect();
    let expected: Vec<String> = (1..=13).map(|n| n.to_string()).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn update_replaces_all_fields_and_activities() {
    let mut conn = open_seeded_in_memory().unwrap();
    let mut repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    let mut changed = draft("Paint and Sip II");
    changed.activities = vec!["Guided painting".to_string()];
    let updated = repo.update_event("1", &changed).unwrap();

    assert_eq!(updated.id, "1");
    assert_eq!(updated.title, "Paint and Sip II");
    assert_eq!(updated.year, "2026");
    assert_eq!(updated.popular_activities, vec!["Guided painting"]);

    let loaded = repo.get_event("1").unwrap().unwrap();
    assert_eq!(loaded, updated);
}

#[test]
fn update_unknown_id_returns_not_found_and_leaves_store_unchanged() {
    let mut conn = open_seeded_in_memory().unwrap();
    let mut repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    let before = repo.list_events().unwrap();
    let err = repo.update_event("999", &draft("Ghost")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "999"));

    let after = repo.list_events().unwrap();
    assert_eq!(before, after);
}

#[test]
fn update_unknown_id_wins_over_invalid_draft() {
    let mut conn = open_seeded_in_memory().unwrap();
    let mut repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    let err = repo
        .update_event("999", &EventDraft::default())
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let mut conn = open_seeded_in_memory().unwrap();
    let mut repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    let mut invalid = draft("Short summary");
    invalid.summary = "too short".to_string();

    let create_err = repo.create_event(&invalid).unwrap_err();
    let RepoError::Validation(errors) = create_err else {
        panic!("expected validation error");
    };
    assert_eq!(
        errors.summary.as_deref(),
        Some("Summary must be at least 20 words")
    );

    let update_err = repo.update_event("1", &invalid).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));
    let unchanged = repo.get_event("1").unwrap().unwrap();
    assert_eq!(unchanged.title, "Paint and Sip");
}

#[test]
fn create_fails_when_an_existing_id_is_not_numeric() {
    let mut conn = open_seeded_in_memory().unwrap();
    let mut repo = SqliteEventRepository::try_new(&mut conn).unwrap();

    let legacy = draft("Legacy import").to_event("legacy-9");
    repo.import_event(&legacy).unwrap();

    let err = repo.create_event(&draft("Next")).unwrap_err();
    assert!(
        matches!(err, RepoError::IdGeneration { ref offending_id } if offending_id == "legacy-9"),
        "unexpected error: {err}"
    );
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let mut conn = Connection::open_in_memory().unwrap();

    let result = SqliteEventRepository::try_new(&mut conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_missing_required_table() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        eventboard_core::db::migrations::latest_version()
    ))
    .unwrap();

    let result = SqliteEventRepository::try_new(&mut conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("events"))
    ));
}

#[test]
fn service_shapes_raw_submissions_into_stored_records() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&mut conn).unwrap();
    let mut service = EventService::new(repo);

    let submission = EventSubmission {
        title: "  Lunar Market  ".to_string(),
        image: "/static/images/lunar.png".to_string(),
        year: "2026".to_string(),
        location: "Low Plaza".to_string(),
        summary: long_summary(),
        activities: "Lantern making, Tasting ,, Street food sampling".to_string(),
    };

    let created = service.add_event(&submission).unwrap();
    assert_eq!(created.id, "14");
    assert_eq!(created.title, "Lunar Market");
    assert_eq!(
        created.popular_activities,
        vec!["Lantern making", "Tasting", "Street food sampling"]
    );

    let fetched = service.event("14").unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn service_reports_blank_activities_as_validation_error() {
    let mut conn = open_seeded_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&mut conn).unwrap();
    let mut service = EventService::new(repo);

    let submission = EventSubmission {
        title: "No tags".to_string(),
        image: "/static/images/none.png".to_string(),
        year: "2026".to_string(),
        location: "Somewhere".to_string(),
        summary: long_summary(),
        activities: " , ,".to_string(),
    };

    let err = service.add_event(&submission).unwrap_err();
    let eventboard_core::EventServiceError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(
        errors.activities.as_deref(),
        Some("Activities cannot be empty")
    );
}
