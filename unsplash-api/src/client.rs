use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{
    Photo, PhotoDetail, PhotoPage, RelatedPhotos, SearchPage, Topic, TopicRef, UserProfile,
};

/// Error type for upstream API operations
#[derive(Debug)]
pub enum ApiError {
    /// Request never produced a response (DNS, TLS, timeout, ...)
    Network(String),
    /// The upstream answered with a non-success status
    Server { status: u16 },
    /// The response body did not match the expected shape
    Json(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status } => write!(f, "Server returned status: {}", status),
            ApiError::Json(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the photo API, without a trailing slash
    pub base_url: String,
    /// Page size requested from every feed endpoint
    pub per_page: u32,
    /// Overall request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://unsplash.com/napi".to_string(),
            per_page: 12,
            timeout_secs: 30,
        }
    }
}

/// Decides whether another page exists after `page`.
///
/// The upstream signals pagination through a `Link` response header; a
/// `rel="next"` entry means the next integer cursor is valid.
fn next_page_id(link_header: Option<&str>, page: u32) -> Option<u32> {
    match link_header {
        Some(value) if value.contains("rel=\"next\"") => Some(page + 1),
        _ => None,
    }
}

fn prev_page_id(page: u32) -> Option<u32> {
    if page > 1 {
        Some(page - 1)
    } else {
        None
    }
}

// Search responses nest the photo list one level deeper than the feeds.
#[derive(Deserialize)]
struct SearchResponse {
    photos: SearchSection,
}

#[derive(Deserialize)]
struct SearchSection {
    results: Vec<Photo>,
    #[serde(default)]
    total: u64,
}

/// Typed client for the photo API.
///
/// Every feed endpoint translates the upstream `Link` pagination header into
/// the `{photos, next_id, prev_id}` envelope consumed by the feed session.
pub struct ApiClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ApiClient {
    /// Build a client with explicit timeouts and user agent
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("Desplash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Client build failed: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn per_page(&self) -> u32 {
        self.config.per_page
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_checked(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, ApiError> {
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// Fetch one page of a feed endpoint and translate its pagination header
    async fn get_photo_page(
        &self,
        url: &str,
        page: u32,
        extra_query: &[(&str, String)],
    ) -> Result<PhotoPage, ApiError> {
        let mut query = vec![
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ];
        query.extend_from_slice(extra_query);

        let response = self.get_checked(url, &query).await?;
        let link = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let photos: Vec<Photo> = response
            .json()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse page: {}", e)))?;

        Ok(PhotoPage {
            photos,
            next_id: next_page_id(link.as_deref(), page),
            prev_id: prev_page_id(page),
        })
    }

    /// Latest photos, the home feed
    pub async fn list_photos(&self, page: u32) -> Result<PhotoPage, ApiError> {
        self.get_photo_page(&self.url("/photos"), page, &[]).await
    }

    /// Full-text photo search
    pub async fn search_photos(&self, query: &str, page: u32) -> Result<SearchPage, ApiError> {
        let url = self.url("/search");
        let params = vec![
            ("query", query.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ];

        let response = self.get_checked(&url, &params).await?;
        let link = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse search response: {}", e)))?;

        Ok(SearchPage {
            page: PhotoPage {
                photos: body.photos.results,
                next_id: next_page_id(link.as_deref(), page),
                prev_id: prev_page_id(page),
            },
            total: body.photos.total,
        })
    }

    /// Photos in a curated topic
    pub async fn topic_photos(&self, slug: &str, page: u32) -> Result<PhotoPage, ApiError> {
        self.get_photo_page(&self.url(&format!("/topics/{}/photos", slug)), page, &[])
            .await
    }

    /// Photos published by one user
    pub async fn user_photos(&self, username: &str, page: u32) -> Result<PhotoPage, ApiError> {
        self.get_photo_page(&self.url(&format!("/users/{}/photos", username)), page, &[])
            .await
    }

    /// The topic strip shown in the navbar
    pub async fn list_topics(&self) -> Result<Vec<TopicRef>, ApiError> {
        let response = self.get_checked(&self.url("/topics"), &[]).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse topics: {}", e)))
    }

    /// One topic with its hero data
    pub async fn get_topic(&self, slug: &str) -> Result<Topic, ApiError> {
        let response = self
            .get_checked(&self.url(&format!("/topics/{}", slug)), &[])
            .await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse topic: {}", e)))
    }

    /// One user's profile page data
    pub async fn get_user(&self, username: &str) -> Result<UserProfile, ApiError> {
        let response = self
            .get_checked(&self.url(&format!("/users/{}", username)), &[])
            .await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse user: {}", e)))
    }

    /// The rich detail view of one photo
    pub async fn get_photo(&self, id: &str) -> Result<PhotoDetail, ApiError> {
        let response = self
            .get_checked(&self.url(&format!("/photos/{}", id)), &[])
            .await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse photo detail: {}", e)))
    }

    /// Photos related to one photo, shown below the detail view
    pub async fn related_photos(&self, id: &str) -> Result<RelatedPhotos, ApiError> {
        let response = self
            .get_checked(&self.url(&format!("/photos/{}/related", id)), &[])
            .await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse related photos: {}", e)))
    }

    /// A random photo for the home hero
    pub async fn random_photo(&self) -> Result<Photo, ApiError> {
        let response = self.get_checked(&self.url("/photos/random"), &[]).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Json(format!("Failed to parse random photo: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK_WITH_NEXT: &str = "<https://api.example.com/photos?page=3>; rel=\"next\", \
         <https://api.example.com/photos?page=1>; rel=\"prev\"";
    const LINK_LAST_PAGE: &str = "<https://api.example.com/photos?page=41>; rel=\"prev\"";

    #[test]
    fn next_id_advances_while_next_link_present() {
        assert_eq!(next_page_id(Some(LINK_WITH_NEXT), 2), Some(3));
        assert_eq!(next_page_id(Some(LINK_WITH_NEXT), 1), Some(2));
    }

    #[test]
    fn next_id_is_none_without_next_link() {
        assert_eq!(next_page_id(Some(LINK_LAST_PAGE), 42), None);
        assert_eq!(next_page_id(None, 1), None);
    }

    #[test]
    fn prev_id_only_exists_after_page_one() {
        assert_eq!(prev_page_id(1), None);
        assert_eq!(prev_page_id(2), Some(1));
        assert_eq!(prev_page_id(7), Some(6));
    }

    #[test]
    fn search_response_unnests_results() {
        let json = r#"{
            "photos": { "results": [], "total": 1234 },
            "meta": { "keyword": "lake", "index": true }
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.photos.total, 1234);
        assert!(parsed.photos.results.is_empty());
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let client = ApiClient::new(ApiConfig {
            base_url: "https://api.example.com/".to_string(),
            ..ApiConfig::default()
        })
        .unwrap();
        assert_eq!(client.url("/photos"), "https://api.example.com/photos");
    }
}
