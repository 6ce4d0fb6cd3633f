//! Client-side derived statistics over photo collections.

use aperture_shared::Photo;

/// Sum of the like counts across a collection.
pub fn total_likes(photos: &[Photo]) -> u64 {
    photos.iter().map(|p| p.likes_count).sum()
}

/// The photo with the maximum like count.
///
/// Ties resolve to the first such photo in original order; `None` for an
/// empty collection.
pub fn most_liked(photos: &[Photo]) -> Option<&Photo> {
    photos
        .iter()
        .reduce(|best, photo| if photo.likes_count > best.likes_count { photo } else { best })
}
