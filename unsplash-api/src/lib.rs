//! # Unsplash API
//!
//! A typed client for an Unsplash-style photo API.
//!
//! This crate provides:
//! - Serde models for photos, photo details, users, and topics
//! - Feed endpoints (latest, search, topic, per-user) returning a uniform
//!   `{photos, next_id, prev_id}` page envelope
//! - Translation of the upstream `Link` pagination header into integer
//!   page cursors
//!
//! ## Separation of Concerns
//!
//! This crate only talks to the upstream API. It does **not**:
//! - Accumulate or de-duplicate pages (handled by `photo-feed`)
//! - Store favorites or users (handled by the application)
//! - Render anything
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use unsplash_api::{ApiClient, ApiConfig};
//!
//! let client = ApiClient::new(ApiConfig::default())?;
//! let page = client.list_photos(1).await?;
//! assert!(page.next_id.is_none() || page.next_id == Some(2));
//! ```

pub mod client;
pub mod models;

pub use client::{ApiClient, ApiConfig, ApiError};
pub use models::{
    Photo, PhotoDetail, PhotoExif, PhotoLinks, PhotoLocation, PhotoPage, PhotoTag, PhotoUrls,
    ProfileImage, PublicUser, RelatedPhotos, SearchPage, Topic, TopicRef, UserPhotoPreview,
    UserProfile,
};
