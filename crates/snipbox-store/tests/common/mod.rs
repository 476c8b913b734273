use rusqlite::Connection;

/// In-memory database with the schema applied
#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    snipbox_store::migrations::apply_migrations(&mut conn).expect("migrations should apply");
    conn
}

/// Insert a row whose timestamps are offset (in days) from the store's now
///
/// Bypasses the repository so tests can create rows that are already expired
/// or were created in the past.
#[allow(dead_code)]
pub fn insert_raw(
    conn: &Connection,
    title: &str,
    content: &str,
    created_offset_days: i64,
    expires_offset_days: i64,
) -> i64 {
    conn.execute(
        "INSERT INTO snippets (title, content, created_at, expires_at)
         SELECT ?1, ?2, clock.ts + ?3 * 86400, clock.ts + ?4 * 86400
         FROM (SELECT CAST(strftime('%s', 'now') AS INTEGER) AS ts) AS clock",
        rusqlite::params![title, content, created_offset_days, expires_offset_days],
    )
    .expect("raw insert should succeed");
    conn.last_insert_rowid()
}
