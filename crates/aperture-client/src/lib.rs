//! # aperture-client
//!
//! The client-side core of the Aperture photo-sharing service: an explicit
//! [`Session`] context, one view-model aggregator per page (feed, photo
//! detail, profile, library, upload), and optimistic mutations that roll
//! back on confirmed failure.
//!
//! The crate is UI-agnostic.  A rendering shell constructs a [`Session`],
//! builds page view-models through their `load`/`open` constructors, and
//! calls the page methods in response to user actions.  Network calls go
//! through `aperture-api`; the session survives restarts via
//! `aperture-store`.

pub mod config;
pub mod pages;
pub mod session;
pub mod stats;

mod error;
mod mutations;

#[cfg(test)]
mod testutil;

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use aperture_api::ApiClient;
use aperture_store::Database;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use session::Session;

/// Wire up a client from configuration: API handle, local store, and the
/// restored session, ready to hand to page constructors.
pub fn bootstrap(config: &ClientConfig) -> Result<Session> {
    let api = Arc::new(ApiClient::new(&config.api_base_url));
    let db = Database::new()?;
    Session::init(api, db)
}

/// Initialise logging for an embedding shell.
///
/// Honours `RUST_LOG`; defaults to debug for the client crates and warn for
/// everything else.  Call once at startup.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("aperture_client=debug,aperture_api=debug,aperture_store=info,warn")
    });

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
