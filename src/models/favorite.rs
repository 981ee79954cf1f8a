use unsplash_api::Photo;

/// A favorited photo snapshot owned by one local user.
///
/// The snapshot is the full photo as it was fetched, so the favorites feed
/// renders without talking to the upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i64,
    pub photo_id: String,
    pub user_uid: String,
    pub photo: Photo,
    pub created_at: String,
}
