//! The discovery feed: trending photos with infinite scroll.

use aperture_shared::Photo;

use crate::error::{ClientError, Result};
use crate::mutations;
use crate::session::Session;

const PAGE_SIZE: u32 = 12;

/// Accumulated trending feed state.
pub struct FeedPage {
    photos: Vec<Photo>,
    next_page: u32,
    total_elements: u64,
}

impl FeedPage {
    /// Load the first page of trending photos.
    pub async fn open(session: &Session) -> Result<Self> {
        let page = session
            .api()
            .trending(0, PAGE_SIZE)
            .await
            .map_err(ClientError::load("feed"))?;

        Ok(Self {
            photos: page.content,
            next_page: 1,
            total_elements: page.total_elements,
        })
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Whether the server holds photos beyond what has been accumulated.
    pub fn has_more(&self) -> bool {
        (self.photos.len() as u64) < self.total_elements
    }

    /// Fetch the next page and append it, skipping photos already shown
    /// (the trending ranking can shift between requests).
    pub async fn load_more(&mut self, session: &Session) -> Result<()> {
        if !self.has_more() {
            return Ok(());
        }

        let page = session
            .api()
            .trending(self.next_page, PAGE_SIZE)
            .await
            .map_err(ClientError::load("feed"))?;

        self.total_elements = page.total_elements;
        for photo in page.content {
            if !self.photos.iter().any(|p| p.id == photo.id) {
                self.photos.push(photo);
            }
        }
        self.next_page += 1;

        Ok(())
    }

    /// Toggle the viewer's like on a photo in the feed.
    pub async fn toggle_like(&mut self, session: &Session, photo_id: &str) -> Result<()> {
        mutations::toggle_like_in(session, &mut self.photos, photo_id).await
    }
}
