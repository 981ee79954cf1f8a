use photo_feed::FeedKey;
use unsplash_api::{ApiClient, PhotoPage};

use crate::config::AppConfig;
use crate::database;
use crate::error::AppError;
use crate::services::favorites_service;

/// One loaded feed page plus metadata only some feeds carry
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub page: PhotoPage,
    /// Total hit count, present for search feeds
    pub total: Option<u64>,
}

impl LoadedPage {
    fn plain(page: PhotoPage) -> Self {
        Self { page, total: None }
    }
}

/// Build an API client from the app config.
///
/// Like the database handle, a client is built per fetch rather than held
/// in app state.
pub fn api(config: &AppConfig) -> Result<ApiClient, AppError> {
    Ok(ApiClient::new(config.api.clone())?)
}

/// Fetch one page for a feed identity.
///
/// This is the single suspension point behind every feed screen: upstream
/// feeds go through the API client, the favorites feed reads the local
/// store, and both come back in the same page envelope.
pub async fn load_page(
    config: &AppConfig,
    key: &FeedKey,
    page_number: u32,
) -> Result<LoadedPage, AppError> {
    match key {
        FeedKey::Latest => Ok(LoadedPage::plain(
            api(config)?.list_photos(page_number).await?,
        )),
        FeedKey::Search(query) => {
            let results = api(config)?.search_photos(query, page_number).await?;
            Ok(LoadedPage {
                page: results.page,
                total: Some(results.total),
            })
        }
        FeedKey::Topic(slug) => Ok(LoadedPage::plain(
            api(config)?.topic_photos(slug, page_number).await?,
        )),
        FeedKey::UserPhotos(username) => Ok(LoadedPage::plain(
            api(config)?.user_photos(username, page_number).await?,
        )),
        FeedKey::Favorites(user_uid) => {
            let conn = database::init_database()?;
            let page = favorites_service::page_for_user(
                &conn,
                user_uid,
                page_number,
                config.favorites_per_page,
            )?;
            Ok(LoadedPage::plain(page))
        }
    }
}
