//! # aperture-api
//!
//! Typed wrappers over the remote photo-sharing REST API.
//!
//! The crate exposes a single [`ApiClient`] handle; each resource family
//! (auth, users, photos, comments) contributes its operations in its own
//! module as an `impl ApiClient` block.  Every call accepts and returns the
//! plain data records from `aperture-shared`; there is no caching, retry,
//! or timeout policy here.
//!
//! When a session token has been installed with [`ApiClient::set_bearer`],
//! it is attached to every request as a bearer `Authorization` header.

pub mod auth;
pub mod client;
pub mod comments;
pub mod photos;
pub mod users;

mod error;

pub use client::ApiClient;
pub use error::{ApiError, Result};
