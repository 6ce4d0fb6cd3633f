use aperture_api::ApiError;
use aperture_store::StoreError;
use thiserror::Error;

/// Errors surfaced to the rendering shell.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The action needs a signed-in user.  The shell should route to its
    /// login entry point; no request has been issued.
    #[error("Sign in required")]
    AuthRequired,

    /// One of the calls behind a page load failed; the whole page is
    /// considered unloaded and can be retried by reconstructing it.
    #[error("Failed to load {page}")]
    PageLoad {
        page: &'static str,
        #[source]
        source: ApiError,
    },

    /// A mutation's confirming request failed.  The optimistic local change
    /// has already been rolled back.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ClientError {
    /// Collapse any API failure into the single per-page load error.
    pub(crate) fn load(page: &'static str) -> impl FnOnce(ApiError) -> Self {
        move |source| Self::PageLoad { page, source }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
