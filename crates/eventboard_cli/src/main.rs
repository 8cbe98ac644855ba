//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `eventboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use eventboard_core::{
    open_seeded_in_memory, search_by_year, EventRepository, SqliteEventRepository,
};

fn main() {
    println!("eventboard_core version={}", eventboard_core::core_version());
    if let Err(err) = smoke_check() {
        eprintln!("eventboard smoke check failed: {err}");
        std::process::exit(1);
    }
}

fn smoke_check() -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_seeded_in_memory()?;
    let repo = SqliteEventRepository::try_new(&mut conn)?;

    let events = repo.list_events()?;
    println!("seeded events={}", events.len());

    let response = search_by_year(&repo, "2025")?;
    println!("{} matches={}", response.query_label, response.count);

    Ok(())
}
