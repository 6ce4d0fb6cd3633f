//! # aperture-shared
//!
//! Wire-format data records for the Aperture photo-sharing client.
//!
//! Every struct here mirrors a payload of the remote REST API and derives
//! `Serialize`/`Deserialize` with camelCase field names, so the same records
//! can be handed directly to a rendering layer over IPC.  The client only
//! ever holds transient copies; the server is the source of truth.

pub mod types;

pub use types::*;
