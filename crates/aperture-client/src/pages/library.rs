//! The signed-in user's library: their photos, management actions, and
//! account statistics.

use aperture_shared::{Photo, User};

use aperture_api::photos::PhotoPatch;

use crate::error::{ClientError, Result};
use crate::mutations;
use crate::session::Session;
use crate::stats;

/// Everything the library page renders.
pub struct LibraryPage {
    user: User,
    photos: Vec<Photo>,
    total_comments: u64,
}

/// Statistics derived client-side from the library collection.
#[derive(Debug, Clone, Copy)]
pub struct LibraryStats<'a> {
    pub total_photos: usize,
    pub total_likes: u64,
    /// Total comments received across all photos (server-counted).
    pub total_comments: u64,
    /// The photo with the maximum like count; ties resolve to the first
    /// in original order.
    pub most_liked: Option<&'a Photo>,
}

impl LibraryPage {
    /// Aggregate the signed-in user's library.
    ///
    /// Requires a session; the fresh user record, the photo collection, and
    /// the received-comment count are independent and fetched together.
    pub async fn open(session: &Session) -> Result<Self> {
        let me = session.require_user()?.clone();
        let api = session.api();

        let (user, photos, total_comments) = futures::try_join!(
            api.user(&me.id),
            api.user_photos(&me.nickname),
            api.my_comment_count(),
        )
        .map_err(ClientError::load("library"))?;

        Ok(Self {
            user,
            photos: photos.content,
            total_comments,
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Derived statistics over the current collection.
    pub fn stats(&self) -> LibraryStats<'_> {
        LibraryStats {
            total_photos: self.photos.len(),
            total_likes: stats::total_likes(&self.photos),
            total_comments: self.total_comments,
            most_liked: stats::most_liked(&self.photos),
        }
    }

    /// The most recent photos for the overview grid.
    pub fn recent_photos(&self, count: usize) -> &[Photo] {
        &self.photos[..count.min(self.photos.len())]
    }

    /// Edit a photo's title / description / tags.
    pub async fn edit_photo(
        &mut self,
        session: &Session,
        photo_id: &str,
        patch: &PhotoPatch,
    ) -> Result<()> {
        mutations::edit_photo(session, &mut self.photos, photo_id, patch).await
    }

    /// Delete a photo from the library.
    pub async fn delete_photo(&mut self, session: &Session, photo_id: &str) -> Result<()> {
        mutations::delete_photo(session, &mut self.photos, photo_id).await
    }
}
