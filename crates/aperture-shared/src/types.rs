//! Data records exchanged with the remote API.
//!
//! All identifiers are opaque strings assigned by the server (donation
//! records use integer ids).  Timestamps travel as RFC 3339 strings and are
//! mapped to [`chrono::DateTime<Utc>`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A user account as the API reports it to the current viewer.
///
/// `followed_by_current_user` is computed server-side from the bearer token
/// attached to the request; for anonymous requests it is always `false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: String,
    /// Unique display nickname.
    pub nickname: String,
    pub email: String,
    /// Optional biography text ("about").
    pub about: Option<String>,
    /// Path of the profile image, relative to the image CDN base.
    pub profile_image: Option<String>,
    pub followers_count: u64,
    pub following_count: u64,
    /// Whether the signed-in viewer follows this user.
    pub followed_by_current_user: bool,
}

// ---------------------------------------------------------------------------
// Photo
// ---------------------------------------------------------------------------

/// A photo, as returned both in lists and singly.
///
/// The owning user is denormalised into the record (`user_id`, `nickname`,
/// `user_profile_image`) so list views never need a second fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Server-assigned identifier.
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Path of the image, relative to the image CDN base.
    pub url: String,
    /// Ordered tag list; may be empty.
    pub tags: Vec<String>,
    /// Id of the owning user.
    pub user_id: String,
    /// Nickname of the owning user.
    pub nickname: String,
    /// Avatar path of the owning user.
    pub user_profile_image: Option<String>,
    pub likes_count: u64,
    pub comments_count: u64,
    /// Whether the signed-in viewer has liked this photo.
    pub liked_by_current_user: bool,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A comment on a photo.  Comments are created and deleted, never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    /// Id of the authoring user.
    pub user_id: String,
    /// Id of the photo the comment targets.
    pub photo_id: String,
    /// Nickname of the authoring user.
    pub nickname: String,
    /// Avatar path of the authoring user.
    pub user_profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Donations
// ---------------------------------------------------------------------------

/// A donation platform known to the service (name, icon, base URL).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DonationPlatform {
    pub id: i64,
    pub name: String,
    /// Icon path, relative to the image CDN base.
    pub icon: String,
    pub base_url: String,
}

/// A user's donation link on one platform, with the platform denormalised in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDonation {
    pub id: i64,
    pub platform_id: i64,
    pub platform_name: String,
    /// Platform icon path, relative to the image CDN base.
    pub platform_icon: String,
    /// Destination URL of the donation profile.
    pub donation_link: String,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Token pair returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    pub expires_in: u64,
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Envelope of every paginated response: one page of records plus the total
/// number of records across all pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// An empty page (zero records in total).
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
        }
    }
}
