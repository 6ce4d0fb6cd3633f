//! Comment operations.

use serde::{Deserialize, Serialize};

use aperture_shared::{Comment, Page};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentCount {
    total_comments_count: u64,
}

impl ApiClient {
    /// `GET /comments/{photoId}`: comments on a photo, newest first.
    pub async fn comments(&self, photo_id: &str) -> Result<Page<Comment>> {
        self.send(self.get(&format!("/comments/{photo_id}"))).await
    }

    /// `POST /comments/{photoId}`: create a comment, returning the stored
    /// record (id and timestamp are server-assigned).
    pub async fn create_comment(&self, photo_id: &str, content: &str) -> Result<Comment> {
        let body = CommentRequest { content };
        self.send(self.post(&format!("/comments/{photo_id}")).json(&body))
            .await
    }

    /// `DELETE /comments/{id}`
    pub async fn delete_comment(&self, id: &str) -> Result<()> {
        self.send_unit(self.delete(&format!("/comments/{id}"))).await
    }

    /// `GET /photos/comments/count/user`: total comments received across
    /// the signed-in user's photos.
    pub async fn my_comment_count(&self) -> Result<u64> {
        let count: CommentCount = self.send(self.get("/photos/comments/count/user")).await?;
        Ok(count.total_comments_count)
    }
}
