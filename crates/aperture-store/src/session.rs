//! Typed helpers for the persisted session record.
//!
//! The session is what the client needs across restarts: the bearer token
//! and a snapshot of the signed-in user (so pages can attribute optimistic
//! updates before any network round trip).  The user snapshot is stored as
//! JSON, matching the wire shape.

use rusqlite::{params, OptionalExtension};

use aperture_shared::User;

use crate::database::Database;
use crate::error::Result;

/// The persisted session: token plus current-user snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub user: User,
}

impl Database {
    /// Persist the session, replacing any previous one.
    pub fn save_session(&self, record: &SessionRecord) -> Result<()> {
        let user_json = serde_json::to_string(&record.user)?;
        self.conn().execute(
            "INSERT OR REPLACE INTO session (id, token, user_json) VALUES (1, ?1, ?2)",
            params![record.token, user_json],
        )?;
        Ok(())
    }

    /// Load the persisted session, if any.
    pub fn load_session(&self) -> Result<Option<SessionRecord>> {
        let row: Option<(String, String)> = self
            .conn()
            .query_row(
                "SELECT token, user_json FROM session WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((token, user_json)) => {
                let user: User = serde_json::from_str(&user_json)?;
                Ok(Some(SessionRecord { token, user }))
            }
            None => Ok(None),
        }
    }

    /// Remove the persisted session (logout).
    pub fn clear_session(&self) -> Result<()> {
        self.conn().execute("DELETE FROM session WHERE id = 1", [])?;
        Ok(())
    }
}
