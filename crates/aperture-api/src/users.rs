//! User, follow and donation operations.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use aperture_shared::{DonationPlatform, Page, Photo, User, UserDonation};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct AboutRequest<'a> {
    about: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DonationRequest<'a> {
    platform_id: i64,
    donation_link: &'a str,
}

/// Response of a profile-image upload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImage {
    /// New image path, relative to the image CDN base.
    pub profile_image: String,
}

impl ApiClient {
    /// `GET /iam/user/{id}`
    pub async fn user(&self, id: &str) -> Result<User> {
        self.send(self.get(&format!("/iam/user/{id}"))).await
    }

    /// `GET /photos/user/{nickname}`: all photos owned by a user.
    pub async fn user_photos(&self, nickname: &str) -> Result<Page<Photo>> {
        self.send(self.get(&format!("/photos/user/{nickname}")))
            .await
    }

    /// `PUT /iam/user/me/about`: update the signed-in user's biography.
    pub async fn update_about(&self, about: &str) -> Result<User> {
        let body = AboutRequest { about };
        self.send(self.put("/iam/user/me/about").json(&body)).await
    }

    /// `POST /photos/user/profile-image`: multipart upload of a new avatar.
    pub async fn update_profile_image(
        &self,
        image: Vec<u8>,
        file_name: &str,
    ) -> Result<ProfileImage> {
        let form = Form::new().part("image", Part::bytes(image).file_name(file_name.to_string()));
        self.send(self.post("/photos/user/profile-image").multipart(form))
            .await
    }

    /// `POST /iam/user/{nickname}/follow`: returns the updated target user.
    pub async fn follow(&self, nickname: &str) -> Result<User> {
        self.send(self.post(&format!("/iam/user/{nickname}/follow")))
            .await
    }

    /// `DELETE /iam/user/{nickname}/follow`: returns the updated target user.
    pub async fn unfollow(&self, nickname: &str) -> Result<User> {
        self.send(self.delete(&format!("/iam/user/{nickname}/follow")))
            .await
    }

    /// `GET /iam/user/{nickname}/followers?page&size`
    pub async fn followers(&self, nickname: &str, page: u32, size: u32) -> Result<Page<User>> {
        self.send(
            self.get(&format!("/iam/user/{nickname}/followers"))
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// `GET /iam/user/{nickname}/following?page&size`
    pub async fn following(&self, nickname: &str, page: u32, size: u32) -> Result<Page<User>> {
        self.send(
            self.get(&format!("/iam/user/{nickname}/following"))
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// `GET /iam/platforms`: the donation platform catalogue.
    pub async fn donation_platforms(&self) -> Result<Vec<DonationPlatform>> {
        self.send(self.get("/iam/platforms")).await
    }

    /// `GET /iam/user/me/donations`: the signed-in user's donation links.
    pub async fn my_donations(&self) -> Result<Vec<UserDonation>> {
        self.send(self.get("/iam/user/me/donations")).await
    }

    /// `POST /iam/user/me/donations`: add a link; returns the full list.
    pub async fn add_donation(
        &self,
        platform_id: i64,
        donation_link: &str,
    ) -> Result<Vec<UserDonation>> {
        let body = DonationRequest {
            platform_id,
            donation_link,
        };
        self.send(self.post("/iam/user/me/donations").json(&body))
            .await
    }

    /// `DELETE /iam/user/me/donations/{id}`
    pub async fn delete_donation(&self, donation_id: i64) -> Result<()> {
        self.send_unit(self.delete(&format!("/iam/user/me/donations/{donation_id}")))
            .await
    }

    /// `GET /iam/user/{userId}/donations-by-id`: any user's donation links.
    pub async fn user_donations(&self, user_id: &str) -> Result<Vec<UserDonation>> {
        self.send(self.get(&format!("/iam/user/{user_id}/donations-by-id")))
            .await
    }
}
