//! A user's profile: identity, photo grid, follower/following lists, and
//! donation links.

use aperture_shared::{DonationPlatform, Page, Photo, User, UserDonation};

use crate::error::{ClientError, Result};
use crate::mutations;
use crate::session::Session;

const PEOPLE_PAGE_SIZE: u32 = 5;

/// Everything the profile page renders.
pub struct ProfilePage {
    user: User,
    photos: Vec<Photo>,
    followers: Vec<User>,
    followers_page: u32,
    following: Vec<User>,
    following_page: u32,
    donations: Vec<UserDonation>,
    platforms: Vec<DonationPlatform>,
    is_own: bool,
}

impl ProfilePage {
    /// Aggregate the page state for one user.
    ///
    /// The subject user parameterises everything else, so it is fetched
    /// first; the photo grid, first follower page, donation links, and the
    /// platform catalogue then load concurrently.  The following list is
    /// only fetched when the profile belongs to the signed-in viewer (the
    /// only place it is rendered).
    pub async fn load(session: &Session, user_id: &str) -> Result<Self> {
        let api = session.api();

        let user = api.user(user_id).await.map_err(ClientError::load("profile"))?;
        let is_own = session
            .current_user()
            .map(|viewer| viewer.id == user.id)
            .unwrap_or(false);

        let following_if_own = async {
            if is_own {
                api.following(&user.nickname, 0, PEOPLE_PAGE_SIZE).await
            } else {
                Ok(Page::empty())
            }
        };

        let (photos, followers, following, donations, platforms) = futures::try_join!(
            api.user_photos(&user.nickname),
            api.followers(&user.nickname, 0, PEOPLE_PAGE_SIZE),
            following_if_own,
            api.user_donations(&user.id),
            api.donation_platforms(),
        )
        .map_err(ClientError::load("profile"))?;

        Ok(Self {
            user,
            photos: photos.content,
            followers: followers.content,
            followers_page: 0,
            following: following.content,
            following_page: 0,
            donations,
            platforms,
            is_own,
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Whether this is the signed-in viewer's own profile.
    pub fn is_own(&self) -> bool {
        self.is_own
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    pub fn followers(&self) -> &[User] {
        &self.followers
    }

    pub fn following(&self) -> &[User] {
        &self.following
    }

    pub fn donations(&self) -> &[UserDonation] {
        &self.donations
    }

    pub fn platforms(&self) -> &[DonationPlatform] {
        &self.platforms
    }

    /// Append the next follower page.
    pub async fn more_followers(&mut self, session: &Session) -> Result<()> {
        let page = session
            .api()
            .followers(&self.user.nickname, self.followers_page + 1, PEOPLE_PAGE_SIZE)
            .await
            .map_err(ClientError::load("profile"))?;

        self.followers.extend(page.content);
        self.followers_page += 1;
        Ok(())
    }

    /// Append the next following page.
    pub async fn more_following(&mut self, session: &Session) -> Result<()> {
        let page = session
            .api()
            .following(&self.user.nickname, self.following_page + 1, PEOPLE_PAGE_SIZE)
            .await
            .map_err(ClientError::load("profile"))?;

        self.following.extend(page.content);
        self.following_page += 1;
        Ok(())
    }

    /// Toggle whether the viewer follows this profile.
    pub async fn toggle_follow(&mut self, session: &Session) -> Result<()> {
        mutations::toggle_follow(session, &mut self.user).await
    }

    /// Toggle the viewer's like on a photo in the grid.
    pub async fn toggle_like(&mut self, session: &Session, photo_id: &str) -> Result<()> {
        mutations::toggle_like_in(session, &mut self.photos, photo_id).await
    }

    /// Save an edited biography (own profile).
    pub async fn save_about(&mut self, session: &Session, about: &str) -> Result<()> {
        mutations::update_about(session, &mut self.user, about).await
    }

    /// Upload a new avatar (own profile).
    pub async fn update_profile_image(
        &mut self,
        session: &Session,
        image: Vec<u8>,
        file_name: &str,
    ) -> Result<()> {
        mutations::update_profile_image(session, &mut self.user, image, file_name).await
    }

    /// Add a donation link on one of the catalogued platforms (own
    /// profile).  An unknown platform id is a no-op, mirroring the form
    /// guard.
    pub async fn add_donation(
        &mut self,
        session: &Session,
        platform_id: i64,
        link: &str,
    ) -> Result<()> {
        let Some(platform) = self.platforms.iter().find(|p| p.id == platform_id).cloned() else {
            return Ok(());
        };
        mutations::add_donation(session, &mut self.donations, &platform, link).await
    }

    /// Remove one of the displayed donation links (own profile).
    pub async fn remove_donation(&mut self, session: &Session, donation_id: i64) -> Result<()> {
        mutations::remove_donation(session, &mut self.donations, donation_id).await
    }
}
