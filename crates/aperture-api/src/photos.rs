//! Photo operations: lists, single fetch, upload, metadata, likes.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use aperture_shared::{Page, Photo};

use crate::client::ApiClient;
use crate::error::Result;

/// Filter for the generic photo listing endpoint.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Partial update of a photo's metadata; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhotoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A new photo to upload.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub image: Vec<u8>,
    pub file_name: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Server receipt for a like / unlike.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeReceipt {
    pub likes: u64,
    pub is_liked: bool,
}

impl ApiClient {
    /// `POST /photos/list`: filtered, paginated photo listing.
    pub async fn photos(&self, query: &PhotoQuery) -> Result<Page<Photo>> {
        self.send(self.post("/photos/list").json(query)).await
    }

    /// `GET /photos/trending?page&size`
    pub async fn trending(&self, page: u32, size: u32) -> Result<Page<Photo>> {
        self.send(
            self.get("/photos/trending")
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// `GET /photos/tags?tags&page&size`: photos carrying any of `tags`.
    pub async fn photos_by_tag(&self, tags: &[String], page: u32, size: u32) -> Result<Page<Photo>> {
        self.send(
            self.get("/photos/tags")
                .query(&[("tags", tags.join(","))])
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// `GET /photos/{id}`
    pub async fn photo(&self, id: &str) -> Result<Photo> {
        self.send(self.get(&format!("/photos/{id}"))).await
    }

    /// `POST /photos/upload`: multipart upload; tags travel as a JSON array
    /// in a text field.
    pub async fn upload_photo(&self, upload: PhotoUpload) -> Result<Photo> {
        let tags_json = serde_json::to_string(&upload.tags)?;
        let form = Form::new()
            .part(
                "image",
                Part::bytes(upload.image).file_name(upload.file_name),
            )
            .text("title", upload.title)
            .text("description", upload.description)
            .text("tags", tags_json);

        self.send(self.post("/photos/upload").multipart(form)).await
    }

    /// `PUT /photos/{id}`: update title / description / tags.
    pub async fn update_photo(&self, id: &str, patch: &PhotoPatch) -> Result<Photo> {
        self.send(self.put(&format!("/photos/{id}")).json(patch))
            .await
    }

    /// `DELETE /photos/{id}`
    pub async fn delete_photo(&self, id: &str) -> Result<()> {
        self.send_unit(self.delete(&format!("/photos/{id}"))).await
    }

    /// `POST /photos/{id}/like`
    pub async fn like_photo(&self, id: &str) -> Result<LikeReceipt> {
        self.send(self.post(&format!("/photos/{id}/like"))).await
    }

    /// `DELETE /photos/{id}/like`
    pub async fn unlike_photo(&self, id: &str) -> Result<LikeReceipt> {
        self.send(self.delete(&format!("/photos/{id}/like"))).await
    }

    /// `GET /tags`: every tag known to the service.
    pub async fn all_tags(&self) -> Result<Vec<String>> {
        self.send(self.get("/tags")).await
    }
}
