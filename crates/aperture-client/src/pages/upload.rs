//! The upload page: tag suggestions and photo submission.

use aperture_shared::Photo;

use aperture_api::photos::PhotoUpload;

use tracing::info;

use crate::error::{ClientError, Result};
use crate::session::Session;

/// State backing the upload form.
pub struct UploadPage {
    tags: Vec<String>,
}

impl UploadPage {
    /// Load tag suggestions.  Requires a session; anonymous visitors are
    /// routed to login before they ever see the form.
    pub async fn open(session: &Session) -> Result<Self> {
        session.require_user()?;

        let tags = session
            .api()
            .all_tags()
            .await
            .map_err(ClientError::load("upload"))?;

        Ok(Self { tags })
    }

    pub fn tag_suggestions(&self) -> &[String] {
        &self.tags
    }

    /// Upload the image with its metadata, returning the created photo.
    pub async fn submit(&self, session: &Session, upload: PhotoUpload) -> Result<Photo> {
        session.require_user()?;

        let photo = session.api().upload_photo(upload).await?;

        info!(photo = %photo.id, "photo uploaded");

        Ok(photo)
    }
}
