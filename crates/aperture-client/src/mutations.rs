//! Optimistic mutations.
//!
//! Every operation follows the same contract: check the authentication
//! gate, apply the new local state synchronously, then issue the confirming
//! network call.  On confirmed failure the compensating inverse transition
//! is applied before the error is surfaced, so local state never drifts
//! from what the user last saw acknowledged.
//!
//! Like counts and their `liked_by_current_user` flag always move together:
//! the count changes by exactly one, in the direction of the flip, in both
//! the tentative and the compensating transition.

use tracing::{debug, info, warn};
use uuid::Uuid;

use aperture_api::photos::PhotoPatch;
use aperture_shared::{Comment, DonationPlatform, Photo, User, UserDonation};

use crate::error::Result;
use crate::session::Session;

/// Flip the like flag and move the count with it.  Involutive.
fn flip_like(photo: &mut Photo) {
    if photo.liked_by_current_user {
        photo.liked_by_current_user = false;
        photo.likes_count = photo.likes_count.saturating_sub(1);
    } else {
        photo.liked_by_current_user = true;
        photo.likes_count += 1;
    }
}

/// Flip the follow flag and move the follower count with it.  Involutive.
fn flip_follow(user: &mut User) {
    if user.followed_by_current_user {
        user.followed_by_current_user = false;
        user.followers_count = user.followers_count.saturating_sub(1);
    } else {
        user.followed_by_current_user = true;
        user.followers_count += 1;
    }
}

/// Toggle the viewer's like on a photo.
///
/// The server's returned count is logged but not adopted, so toggling twice
/// restores the exact local values.
pub(crate) async fn toggle_like(session: &Session, photo: &mut Photo) -> Result<()> {
    session.require_user()?;

    flip_like(photo);

    let result = if photo.liked_by_current_user {
        session.api().like_photo(&photo.id).await
    } else {
        session.api().unlike_photo(&photo.id).await
    };

    match result {
        Ok(receipt) => {
            debug!(photo = %photo.id, likes = receipt.likes, liked = receipt.is_liked, "like confirmed");
            Ok(())
        }
        Err(e) => {
            flip_like(photo);
            warn!(photo = %photo.id, error = %e, "like failed, rolled back");
            Err(e.into())
        }
    }
}

/// [`toggle_like`] for a photo inside a collection (feed / grid views).
/// A missing id is a no-op.
pub(crate) async fn toggle_like_in(
    session: &Session,
    photos: &mut [Photo],
    photo_id: &str,
) -> Result<()> {
    match photos.iter_mut().find(|p| p.id == photo_id) {
        Some(photo) => toggle_like(session, photo).await,
        None => Ok(()),
    }
}

/// Toggle whether the viewer follows `user`.
///
/// On success the server's updated user record replaces the local one.
pub(crate) async fn toggle_follow(session: &Session, user: &mut User) -> Result<()> {
    session.require_user()?;

    let was_following = user.followed_by_current_user;
    flip_follow(user);

    let result = if was_following {
        session.api().unfollow(&user.nickname).await
    } else {
        session.api().follow(&user.nickname).await
    };

    match result {
        Ok(updated) => {
            info!(user = %updated.nickname, following = updated.followed_by_current_user, "follow confirmed");
            *user = updated;
            Ok(())
        }
        Err(e) => {
            flip_follow(user);
            warn!(user = %user.nickname, error = %e, "follow failed, rolled back");
            Err(e.into())
        }
    }
}

/// Prepend a provisional comment attributed to the signed-in author.
///
/// Runs synchronously, before any network round trip; returns the
/// provisional id used to find the entry again on confirmation.
fn prepend_provisional(
    comments: &mut Vec<Comment>,
    author: &User,
    photo_id: &str,
    content: &str,
) -> String {
    let provisional_id = format!("local-{}", Uuid::new_v4());
    comments.insert(
        0,
        Comment {
            id: provisional_id.clone(),
            content: content.to_string(),
            user_id: author.id.clone(),
            photo_id: photo_id.to_string(),
            nickname: author.nickname.clone(),
            user_profile_image: author.profile_image.clone(),
            created_at: chrono::Utc::now(),
        },
    );
    provisional_id
}

/// Post a comment, optimistically prepending it with the locally known
/// author identity; the server-assigned id and timestamp are merged in on
/// confirmation, avoiding a refetch of the comment list.
pub(crate) async fn post_comment(
    session: &Session,
    photo_id: &str,
    content: &str,
    comments: &mut Vec<Comment>,
) -> Result<()> {
    let author = session.require_user()?.clone();

    let provisional_id = prepend_provisional(comments, &author, photo_id, content);

    match session.api().create_comment(photo_id, content).await {
        Ok(stored) => {
            if let Some(entry) = comments.iter_mut().find(|c| c.id == provisional_id) {
                entry.id = stored.id;
                entry.created_at = stored.created_at;
            }
            info!(photo = %photo_id, "comment posted");
            Ok(())
        }
        Err(e) => {
            comments.retain(|c| c.id != provisional_id);
            warn!(photo = %photo_id, error = %e, "comment failed, removed");
            Err(e.into())
        }
    }
}

/// Delete a comment; reinserted at its original index if the server says no.
pub(crate) async fn delete_comment(
    session: &Session,
    comments: &mut Vec<Comment>,
    comment_id: &str,
) -> Result<()> {
    session.require_user()?;

    let Some(index) = comments.iter().position(|c| c.id == comment_id) else {
        return Ok(());
    };
    let removed = comments.remove(index);

    match session.api().delete_comment(comment_id).await {
        Ok(()) => {
            info!(comment = %comment_id, "comment deleted");
            Ok(())
        }
        Err(e) => {
            comments.insert(index, removed);
            warn!(comment = %comment_id, error = %e, "comment delete failed, restored");
            Err(e.into())
        }
    }
}

fn apply_patch(photo: &mut Photo, patch: &PhotoPatch) {
    if let Some(ref title) = patch.title {
        photo.title = Some(title.clone());
    }
    if let Some(ref description) = patch.description {
        photo.description = Some(description.clone());
    }
    if let Some(ref tags) = patch.tags {
        photo.tags = tags.clone();
    }
}

/// Edit a photo's metadata in place; the server-returned record replaces the
/// local one on success, the saved copy is restored on failure.
pub(crate) async fn edit_photo(
    session: &Session,
    photos: &mut [Photo],
    photo_id: &str,
    patch: &PhotoPatch,
) -> Result<()> {
    session.require_user()?;

    let Some(photo) = photos.iter_mut().find(|p| p.id == photo_id) else {
        return Ok(());
    };
    let saved = photo.clone();
    apply_patch(photo, patch);

    match session.api().update_photo(photo_id, patch).await {
        Ok(updated) => {
            *photo = updated;
            info!(photo = %photo_id, "photo metadata updated");
            Ok(())
        }
        Err(e) => {
            *photo = saved;
            warn!(photo = %photo_id, error = %e, "photo update failed, restored");
            Err(e.into())
        }
    }
}

/// Delete a photo from a collection; exactly the matching entry is removed,
/// and reinserted at its original index if the server says no.
pub(crate) async fn delete_photo(
    session: &Session,
    photos: &mut Vec<Photo>,
    photo_id: &str,
) -> Result<()> {
    session.require_user()?;

    let Some(index) = photos.iter().position(|p| p.id == photo_id) else {
        return Ok(());
    };
    let removed = photos.remove(index);

    match session.api().delete_photo(photo_id).await {
        Ok(()) => {
            info!(photo = %photo_id, "photo deleted");
            Ok(())
        }
        Err(e) => {
            photos.insert(index, removed);
            warn!(photo = %photo_id, error = %e, "photo delete failed, restored");
            Err(e.into())
        }
    }
}

/// Add a donation link, showing a provisional entry (platform details joined
/// from the local catalogue) until the server returns the stored list.
pub(crate) async fn add_donation(
    session: &Session,
    donations: &mut Vec<UserDonation>,
    platform: &DonationPlatform,
    link: &str,
) -> Result<()> {
    session.require_user()?;

    let index = donations.len();
    donations.push(UserDonation {
        // Server id unknown until confirmation.
        id: 0,
        platform_id: platform.id,
        platform_name: platform.name.clone(),
        platform_icon: platform.icon.clone(),
        donation_link: link.to_string(),
    });

    match session.api().add_donation(platform.id, link).await {
        Ok(stored) => {
            *donations = stored;
            info!(platform = %platform.name, "donation link added");
            Ok(())
        }
        Err(e) => {
            donations.remove(index);
            warn!(platform = %platform.name, error = %e, "donation add failed, removed");
            Err(e.into())
        }
    }
}

/// Remove a donation link; reinserted at its original index on failure.
pub(crate) async fn remove_donation(
    session: &Session,
    donations: &mut Vec<UserDonation>,
    donation_id: i64,
) -> Result<()> {
    session.require_user()?;

    let Some(index) = donations.iter().position(|d| d.id == donation_id) else {
        return Ok(());
    };
    let removed = donations.remove(index);

    match session.api().delete_donation(donation_id).await {
        Ok(()) => {
            info!(donation = donation_id, "donation link removed");
            Ok(())
        }
        Err(e) => {
            donations.insert(index, removed);
            warn!(donation = donation_id, error = %e, "donation remove failed, restored");
            Err(e.into())
        }
    }
}

/// Save the edited biography; the server's user record replaces the local
/// one on success.
pub(crate) async fn update_about(session: &Session, user: &mut User, about: &str) -> Result<()> {
    session.require_user()?;

    let saved = user.about.clone();
    user.about = Some(about.to_string());

    match session.api().update_about(about).await {
        Ok(updated) => {
            *user = updated;
            info!("about text updated");
            Ok(())
        }
        Err(e) => {
            user.about = saved;
            warn!(error = %e, "about update failed, restored");
            Err(e.into())
        }
    }
}

/// Upload a new avatar and set the returned reference on the local user.
/// Not optimistic: the image path is unknowable before the server answers.
pub(crate) async fn update_profile_image(
    session: &Session,
    user: &mut User,
    image: Vec<u8>,
    file_name: &str,
) -> Result<()> {
    session.require_user()?;

    let uploaded = session.api().update_profile_image(image, file_name).await?;
    user.profile_image = Some(uploaded.profile_image);

    info!("profile image updated");

    Ok(())
}
