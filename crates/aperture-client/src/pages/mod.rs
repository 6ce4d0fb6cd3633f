//! Page view-models.
//!
//! One module per page.  Each view-model is built by a `load`/`open`
//! constructor that issues its independent fetches concurrently and its
//! dependent fetches in sequence, then holds display-ready state.  User
//! actions go through methods that delegate to the optimistic mutation
//! layer and keep the page's collections consistent.
//!
//! Any failing call collapses the whole load into a single
//! [`ClientError::PageLoad`](crate::ClientError::PageLoad); retry is
//! reconstructing the page.

pub mod feed;
pub mod library;
pub mod photo;
pub mod profile;
pub mod upload;

pub use feed::FeedPage;
pub use library::{LibraryPage, LibraryStats};
pub use photo::PhotoPage;
pub use profile::ProfilePage;
pub use upload::UploadPage;
