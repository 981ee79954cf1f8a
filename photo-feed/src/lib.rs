//! # Photo Feed
//!
//! A reusable library for accumulating paginated photo feeds.
//!
//! This crate provides the state handling shared by every feed screen:
//! - Sequential page fetching with integer cursors starting at 1
//! - De-duplication of photo ids across accumulated pages
//! - Discarding of late responses that belong to a superseded query
//! - The detail overlay state machine (placeholder paint, richer fetch,
//!   positional prev/next navigation)
//!
//! ## Separation of Concerns
//!
//! This crate holds state and decides what may be fetched next. It does
//! **not** perform network or database I/O (the application dispatches the
//! actual page loads) and it does not render anything.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use photo_feed::{FeedKey, FeedSession};
//!
//! let mut feed = FeedSession::new(FeedKey::Latest);
//! if let Some(ticket) = feed.begin_fetch() {
//!     let page = load_page(feed.key(), ticket.page).await?;
//!     feed.complete_fetch(ticket, page);
//! }
//! ```

pub mod feed;
pub mod overlay;

pub use feed::{FeedKey, FeedSession, FeedStatus, FetchTicket};
pub use overlay::DetailOverlay;

#[cfg(test)]
pub(crate) mod testutil {
    use unsplash_api::models::*;

    /// A minimal but fully populated photo for state tests
    pub fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            created_at: "2023-04-12T08:30:00Z".parse().unwrap(),
            width: 4000,
            height: 3000,
            color: Some("#262626".to_string()),
            blur_hash: Some("LFC$yHwc8^$yIAS$%M%00KxukYIp".to_string()),
            description: None,
            alt_description: Some(format!("photo {}", id)),
            urls: PhotoUrls {
                raw: format!("https://images.example.com/{}?raw", id),
                full: format!("https://images.example.com/{}?full", id),
                regular: format!("https://images.example.com/{}?regular", id),
                small: format!("https://images.example.com/{}?small", id),
                thumb: format!("https://images.example.com/{}?thumb", id),
            },
            links: PhotoLinks {
                self_url: format!("https://api.example.com/photos/{}", id),
                html: format!("https://example.com/photos/{}", id),
                download: format!("https://example.com/photos/{}/download", id),
                download_location: None,
            },
            likes: 0,
            liked_by_user: false,
            premium: false,
            user: PublicUser {
                id: "u-1".to_string(),
                username: "tester".to_string(),
                name: "Test User".to_string(),
                first_name: None,
                last_name: None,
                bio: None,
                location: None,
                portfolio_url: None,
                instagram_username: None,
                twitter_username: None,
                profile_image: ProfileImage {
                    small: "https://images.example.com/u-1?s".to_string(),
                    medium: "https://images.example.com/u-1?m".to_string(),
                    large: "https://images.example.com/u-1?l".to_string(),
                },
                total_photos: 1,
                total_likes: 0,
                total_collections: 0,
                for_hire: false,
            },
        }
    }

    /// Build a page out of ids, with an optional next cursor
    pub fn page(ids: &[&str], next_id: Option<u32>) -> PhotoPage {
        PhotoPage {
            photos: ids.iter().map(|id| photo(id)).collect(),
            next_id,
            prev_id: None,
        }
    }
}
