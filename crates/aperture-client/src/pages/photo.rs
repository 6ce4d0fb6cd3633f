//! Single-photo display: the photo, its comments, similar photos, and the
//! owner's donation links.

use aperture_shared::{Comment, Page, Photo, UserDonation};

use crate::error::{ClientError, Result};
use crate::mutations;
use crate::session::Session;

const SIMILAR_PAGE_SIZE: u32 = 6;

/// Everything the single-photo page renders.
#[derive(Debug)]
pub struct PhotoPage {
    photo: Photo,
    comments: Vec<Comment>,
    similar: Vec<Photo>,
    donations: Vec<UserDonation>,
}

impl PhotoPage {
    /// Aggregate the page state for one photo.
    ///
    /// The photo and its comments are independent and fetched together.
    /// Similar photos (by the photo's first tag) and the owner's donation
    /// links both depend on the photo record, so they form a second stage.
    pub async fn load(session: &Session, photo_id: &str) -> Result<Self> {
        let api = session.api();

        let (photo, comments) = futures::try_join!(api.photo(photo_id), api.comments(photo_id))
            .map_err(ClientError::load("photo"))?;

        let similar_by_tag = async {
            match photo.tags.first() {
                Some(tag) => {
                    api.photos_by_tag(std::slice::from_ref(tag), 0, SIMILAR_PAGE_SIZE)
                        .await
                }
                None => Ok(Page::empty()),
            }
        };

        let (similar, donations) =
            futures::try_join!(similar_by_tag, api.user_donations(&photo.user_id))
                .map_err(ClientError::load("photo"))?;

        // The photo itself comes back from the tag search; drop it.
        let similar = similar
            .content
            .into_iter()
            .filter(|p| p.id != photo.id)
            .collect();

        Ok(Self {
            photo,
            comments: comments.content,
            similar,
            donations,
        })
    }

    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn similar(&self) -> &[Photo] {
        &self.similar
    }

    pub fn donations(&self) -> &[UserDonation] {
        &self.donations
    }

    /// Toggle the viewer's like on the displayed photo.
    pub async fn toggle_like(&mut self, session: &Session) -> Result<()> {
        mutations::toggle_like(session, &mut self.photo).await
    }

    /// Post a comment, optimistically prepended with the viewer's identity.
    pub async fn post_comment(&mut self, session: &Session, content: &str) -> Result<()> {
        mutations::post_comment(session, &self.photo.id, content, &mut self.comments).await
    }

    /// Delete one of the displayed comments.
    pub async fn delete_comment(&mut self, session: &Session, comment_id: &str) -> Result<()> {
        mutations::delete_comment(session, &mut self.comments, comment_id).await
    }
}
