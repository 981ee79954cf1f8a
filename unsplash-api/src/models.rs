use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named URL variants for one photo, from original size down to thumbnail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

/// Upstream links attached to a photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoLinks {
    #[serde(rename = "self")]
    pub self_url: String,
    pub html: String,
    pub download: String,
    #[serde(default)]
    pub download_location: Option<String>,
}

/// Avatar variants of a photo author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// The public profile of a photo author, as embedded in feed responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    pub profile_image: ProfileImage,
    #[serde(default)]
    pub total_photos: u64,
    #[serde(default)]
    pub total_likes: u64,
    #[serde(default)]
    pub total_collections: u64,
    #[serde(default)]
    pub for_hire: bool,
}

/// One photo as returned by every feed endpoint.
///
/// Immutable once fetched; the id is the upstream's stable identifier and
/// the only thing feed de-duplication looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub blur_hash: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    pub links: PhotoLinks,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub liked_by_user: bool,
    // Absent for free photos, so default instead of Option
    #[serde(default)]
    pub premium: bool,
    pub user: PublicUser,
}

impl Photo {
    /// Alt text fallback chain used everywhere a photo is rendered
    pub fn display_alt(&self) -> &str {
        self.alt_description
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or(self.user.name.as_str())
    }
}

/// Camera metadata on a photo detail response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoExif {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exposure_time: Option<String>,
    #[serde(default)]
    pub aperture: Option<String>,
    #[serde(default)]
    pub focal_length: Option<String>,
    #[serde(default)]
    pub iso: Option<u32>,
}

/// Shooting location on a photo detail response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl PhotoLocation {
    /// "name" if set, otherwise "city, country"; None when nothing is known
    pub fn display(&self) -> Option<String> {
        if let Some(name) = &self.name {
            return Some(name.clone());
        }
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => Some(format!("{}, {}", city, country)),
            (Some(city), None) => Some(city.clone()),
            (None, Some(country)) => Some(country.clone()),
            (None, None) => None,
        }
    }
}

/// Lightweight topic reference (navbar strip, "featured in" row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRef {
    pub id: String,
    pub slug: String,
    pub title: String,
}

/// A keyword tag on a photo detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoTag {
    pub title: String,
}

/// Full detail view of a photo.
///
/// A compatible superset of [`Photo`]: every summary field deserializes into
/// the flattened `photo`, and the extra fields all default, so a summary can
/// stand in as placeholder data until the richer fetch resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoDetail {
    #[serde(flatten)]
    pub photo: Photo,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub topics: Vec<TopicRef>,
    #[serde(default)]
    pub location: PhotoLocation,
    #[serde(default)]
    pub exif: PhotoExif,
    #[serde(default)]
    pub tags: Vec<PhotoTag>,
}

impl PhotoDetail {
    /// Wrap an already-fetched summary photo for immediate paint
    pub fn from_placeholder(photo: Photo) -> Self {
        Self {
            photo,
            views: None,
            downloads: None,
            topics: Vec::new(),
            location: PhotoLocation::default(),
            exif: PhotoExif::default(),
            tags: Vec::new(),
        }
    }
}

/// A curated topic with its hero data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_photos: u64,
    pub cover_photo: Photo,
}

/// Shrunken photo objects embedded in a user profile response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPhotoPreview {
    pub id: String,
    #[serde(default)]
    pub blur_hash: Option<String>,
    pub urls: PhotoUrls,
}

/// A user profile page response: the public profile plus preview photos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: PublicUser,
    #[serde(default)]
    pub photos: Vec<UserPhotoPreview>,
    #[serde(default)]
    pub downloads: u64,
}

/// Photos related to a single photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedPhotos {
    #[serde(default)]
    pub total: u64,
    #[serde(alias = "results")]
    pub photos: Vec<Photo>,
}

/// One fetched feed page plus its pagination cursors.
///
/// `next_id` is `Some` exactly when the upstream indicated another page via
/// a `rel="next"` link; pages are requested with integer cursors starting
/// at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoPage {
    pub photos: Vec<Photo>,
    pub next_id: Option<u32>,
    pub prev_id: Option<u32>,
}

/// A search result page: a [`PhotoPage`] plus the total hit count
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub page: PhotoPage,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTO_JSON: &str = r##"{
        "id": "ab12Cd34",
        "created_at": "2023-04-12T08:30:00Z",
        "updated_at": "2023-04-13T00:00:00Z",
        "width": 4000,
        "height": 6000,
        "color": "#d9d3c0",
        "blur_hash": "LFC$yHwc8^$yIAS$%M%00KxukYIp",
        "description": null,
        "alt_description": "brown wooden dock on lake",
        "urls": {
            "raw": "https://images.example.com/photo-1?raw",
            "full": "https://images.example.com/photo-1?full",
            "regular": "https://images.example.com/photo-1?regular",
            "small": "https://images.example.com/photo-1?small",
            "thumb": "https://images.example.com/photo-1?thumb",
            "small_s3": "https://s3.example.com/photo-1"
        },
        "links": {
            "self": "https://api.example.com/photos/ab12Cd34",
            "html": "https://example.com/photos/ab12Cd34",
            "download": "https://example.com/photos/ab12Cd34/download",
            "download_location": "https://api.example.com/photos/ab12Cd34/download"
        },
        "likes": 231,
        "liked_by_user": false,
        "sponsorship": null,
        "user": {
            "id": "u-99",
            "updated_at": "2023-04-01T00:00:00Z",
            "username": "jdoe",
            "name": "Jane Doe",
            "first_name": "Jane",
            "last_name": "Doe",
            "portfolio_url": null,
            "bio": "landscapes mostly",
            "location": "Oslo",
            "profile_image": {
                "small": "https://images.example.com/u-99?s",
                "medium": "https://images.example.com/u-99?m",
                "large": "https://images.example.com/u-99?l"
            },
            "instagram_username": "jdoe.photo",
            "total_collections": 3,
            "total_likes": 120,
            "total_photos": 87,
            "accepted_tos": true,
            "for_hire": false
        }
    }"##;

    #[test]
    fn photo_deserializes_with_unknown_and_missing_fields() {
        let photo: Photo = serde_json::from_str(PHOTO_JSON).unwrap();
        assert_eq!(photo.id, "ab12Cd34");
        assert_eq!(photo.width, 4000);
        assert_eq!(photo.user.username, "jdoe");
        // premium is absent upstream for free photos
        assert!(!photo.premium);
        assert_eq!(photo.display_alt(), "brown wooden dock on lake");
    }

    #[test]
    fn summary_json_deserializes_as_detail() {
        // Detail is a compatible superset: the same summary payload must
        // parse with every extra field at its default.
        let detail: PhotoDetail = serde_json::from_str(PHOTO_JSON).unwrap();
        assert_eq!(detail.photo.id, "ab12Cd34");
        assert_eq!(detail.views, None);
        assert!(detail.topics.is_empty());
        assert_eq!(detail.exif, PhotoExif::default());
    }

    #[test]
    fn placeholder_detail_keeps_the_feed_copy_intact() {
        let photo: Photo = serde_json::from_str(PHOTO_JSON).unwrap();
        let detail = PhotoDetail::from_placeholder(photo.clone());
        assert_eq!(detail.photo, photo);
        assert_eq!(detail.downloads, None);
        assert!(detail.tags.is_empty());
    }

    #[test]
    fn related_photos_accepts_results_alias() {
        let json = format!(r#"{{ "total": 1, "results": [{}] }}"#, PHOTO_JSON);
        let related: RelatedPhotos = serde_json::from_str(&json).unwrap();
        assert_eq!(related.total, 1);
        assert_eq!(related.photos.len(), 1);
    }

    #[test]
    fn location_display_prefers_name() {
        let loc = PhotoLocation {
            name: Some("Lofoten".to_string()),
            city: Some("Reine".to_string()),
            country: Some("Norway".to_string()),
        };
        assert_eq!(loc.display().unwrap(), "Lofoten");

        let loc = PhotoLocation {
            name: None,
            city: Some("Reine".to_string()),
            country: Some("Norway".to_string()),
        };
        assert_eq!(loc.display().unwrap(), "Reine, Norway");

        assert_eq!(PhotoLocation::default().display(), None);
    }
}
