//! Database migration runner.
//!
//! Migrations are executed in order on every [`Database::new`] /
//! [`Database::open_at`] call.  Each migration is guarded by a
//! `user_version` pragma so it runs exactly once.
//!
//! [`Database::new`]: crate::Database::new
//! [`Database::open_at`]: crate::Database::open_at

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Current schema version.  Bump this and add a new guarded block whenever
/// the schema changes.
const CURRENT_VERSION: u32 = 1;

/// SQL executed when upgrading from version 0 to version 1.
const V001_UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Session
-- ----------------------------------------------------------------
-- A single row: the bearer token and the serialized current-user
-- record of the signed-in account.  Absent row = signed out.
CREATE TABLE IF NOT EXISTS session (
    id        INTEGER PRIMARY KEY CHECK (id = 1),
    token     TEXT NOT NULL,
    user_json TEXT NOT NULL
);
"#;

/// Run all pending migrations against the open connection.
///
/// The function reads `PRAGMA user_version` to determine which migrations
/// have already been applied, then executes any outstanding ones in order.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::debug!(
        current_version = current,
        target_version = CURRENT_VERSION,
        "checking database migrations"
    );

    if current < 1 {
        tracing::info!("applying migration v001_initial");
        conn.execute_batch(V001_UP_SQL)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        conn.pragma_update(None, "user_version", 1)?;
    }

    Ok(())
}
