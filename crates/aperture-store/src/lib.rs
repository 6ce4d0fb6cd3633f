//! # aperture-store
//!
//! Local persistence for the Aperture client: the session token and the
//! serialized current-user record, kept in a small SQLite database so they
//! survive restarts and are cleared on logout.
//!
//! The crate exposes a synchronous [`Database`] handle wrapping a
//! `rusqlite::Connection`, with typed helpers for the session record.

pub mod database;
pub mod migrations;
pub mod session;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use session::SessionRecord;
