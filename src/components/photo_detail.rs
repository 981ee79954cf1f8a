use dioxus::prelude::*;
use masonry_grid::{GridConfig, GridPhoto, MasonryGrid};
use unsplash_api::{Photo, PhotoDetail};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::feed_loader;

/// The photo detail modal body.
///
/// Renders from placeholder data the instant it opens; `resolved` flips
/// once the richer fetch has landed and fills in views/downloads/exif.
#[component]
pub fn PhotoDetailView(
    detail: PhotoDetail,
    resolved: bool,
    liked: bool,
    can_prev: bool,
    can_next: bool,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_like: EventHandler<Photo>,
    on_download: EventHandler<String>,
    on_related_click: EventHandler<Photo>,
    on_author_click: EventHandler<String>,
) -> Element {
    let mut zoomed = use_signal(|| false);

    let photo = detail.photo.clone();
    let alt = photo.display_alt().to_string();
    let publish_date = photo.created_at.format("%B %e, %Y").to_string();
    let heart_color = if liked { "#e25555" } else { "#767676" };
    let backdrop = photo.color.clone().unwrap_or_else(|| "#262626".to_string());

    let camera = detail.exif.name.clone().or_else(|| {
        match (&detail.exif.make, &detail.exif.model) {
            (Some(make), Some(model)) => Some(format!("{} {}", make, model)),
            _ => None,
        }
    });
    let featured_in = if detail.topics.is_empty() {
        "--".to_string()
    } else {
        detail
            .topics
            .iter()
            .map(|t| t.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    rsx! {
        div { style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.6); z-index: 1000; overflow-y: auto; padding: 24px 0;",

            // Clicking the dimmed backdrop closes, like the close button
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;",
                onclick: move |_| on_close.call(()),
            }

            div { style: "position: relative; margin: 0 auto; max-width: 1100px; background: white; border-radius: 6px; overflow: hidden;",

                // Header: author row + actions
                div { style: "position: sticky; top: 0; z-index: 10; display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: white;",
                    div {
                        style: "display: flex; gap: 10px; align-items: center; cursor: pointer;",
                        onclick: {
                            let username = photo.user.username.clone();
                            move |_| on_author_click.call(username.clone())
                        },
                        img {
                            src: "{photo.user.profile_image.medium}",
                            alt: "{photo.user.name}",
                            style: "width: 33px; height: 33px; border-radius: 50%;",
                        }
                        div {
                            p { style: "margin: 0; font-size: 14px; font-weight: 500;",
                                "{photo.user.name}"
                            }
                            p { style: "margin: 0; font-size: 13px; color: #767676;",
                                "@{photo.user.username}"
                            }
                        }
                    }
                    div { style: "display: flex; gap: 8px; align-items: center;",
                        button {
                            style: format!(
                                "padding: 8px 10px; background: white; border: 1px solid #ddd; border-radius: 6px; font-size: 16px; cursor: pointer; color: {};",
                                heart_color,
                            ),
                            title: "Add to favorites",
                            onclick: {
                                let photo = photo.clone();
                                move |_| on_like.call(photo.clone())
                            },
                            "♥"
                        }
                        if !photo.premium {
                            button {
                                class: "btn-primary",
                                style: "padding: 8px 14px; font-size: 14px;",
                                onclick: {
                                    let url = photo.urls.raw.clone();
                                    move |_| on_download.call(url.clone())
                                },
                                "Download"
                            }
                        }
                        button {
                            style: "width: 32px; height: 32px; background: white; border: none; font-size: 20px; color: #767676; cursor: pointer;",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }

                // Main image, painted over the dominant color immediately
                div { style: format!("position: relative; text-align: center; background: {};", backdrop),
                    if can_prev {
                        button {
                            style: "position: absolute; left: 12px; top: 50%; width: 44px; height: 44px; background: rgba(255, 255, 255, 0.85); border: none; border-radius: 50%; font-size: 20px; cursor: pointer;",
                            onclick: move |_| on_prev.call(()),
                            "‹"
                        }
                    }
                    img {
                        src: "{photo.urls.regular}",
                        alt: "{alt}",
                        style: if zoomed() {
                            "width: 100%; height: auto; cursor: zoom-out;"
                        } else {
                            "max-width: 100%; max-height: 80vh; cursor: zoom-in;"
                        },
                        onclick: move |_| zoomed.set(!zoomed()),
                    }
                    if can_next {
                        button {
                            style: "position: absolute; right: 12px; top: 50%; width: 44px; height: 44px; background: rgba(255, 255, 255, 0.85); border: none; border-radius: 50%; font-size: 20px; cursor: pointer;",
                            onclick: move |_| on_next.call(()),
                            "›"
                        }
                    }
                }

                // Stats and metadata
                div { style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 16px; padding: 20px 16px;",
                    div { style: "display: flex; gap: 32px;",
                        div {
                            p { style: "margin: 0; font-size: 13px; color: #767676;", "Views" }
                            p { style: "margin: 0; font-size: 15px; font-weight: 500;",
                                {detail.views.map(|v| v.to_string()).unwrap_or_else(|| "--".to_string())}
                            }
                        }
                        div {
                            p { style: "margin: 0; font-size: 13px; color: #767676;", "Downloads" }
                            p { style: "margin: 0; font-size: 15px; font-weight: 500;",
                                {detail.downloads.map(|d| d.to_string()).unwrap_or_else(|| "--".to_string())}
                            }
                        }
                        div {
                            p { style: "margin: 0; font-size: 13px; color: #767676;", "Likes" }
                            p { style: "margin: 0; font-size: 15px; font-weight: 500;", "{photo.likes}" }
                        }
                    }
                    div {
                        p { style: "margin: 0; font-size: 13px; color: #767676;", "Featured in" }
                        p { style: "margin: 0; font-size: 15px; font-weight: 500;", "{featured_in}" }
                    }
                    div { style: "font-size: 13px; color: #767676;",
                        if let Some(location) = detail.location.display() {
                            p { style: "margin: 2px 0;", "📍 {location}" }
                        }
                        p { style: "margin: 2px 0;", "📅 Published on {publish_date}" }
                        if let Some(camera) = camera {
                            p { style: "margin: 2px 0;", "📷 {camera}" }
                        }
                        p { style: "margin: 2px 0;",
                            if photo.premium {
                                "🛡 License: Premium"
                            } else {
                                "🛡 License: Free"
                            }
                        }
                        if !resolved {
                            p { style: "margin: 2px 0; color: #aaa;", "Loading details..." }
                        }
                    }
                }

                RelatedPhotosView { photo_id: photo.id.clone(), on_photo_click: on_related_click }
            }
        }
    }
}

/// Grid of photos related to the one in the overlay; clicking one swaps the
/// overlay to it
#[component]
pub fn RelatedPhotosView(photo_id: String, on_photo_click: EventHandler<Photo>) -> Element {
    let config = use_context::<AppConfig>();

    // The resource value must be cloneable, so errors travel as their
    // user-facing message
    let related = use_resource(move || {
        let config = config.clone();
        let photo_id = photo_id.clone();
        async move {
            let client = feed_loader::api(&config).map_err(|e| e.user_message())?;
            client
                .related_photos(&photo_id)
                .await
                .map_err(|e| AppError::from(e).user_message())
        }
    });

    match related() {
        Some(Ok(related)) if !related.photos.is_empty() => {
            let photos: Vec<Photo> = related.photos.clone();
            let grid_photos: Vec<GridPhoto> = photos
                .iter()
                .map(|p| GridPhoto {
                    id: p.id.clone(),
                    src: p.urls.small.clone(),
                    download_url: p.urls.full.clone(),
                    alt: p.display_alt().to_string(),
                    color: p.color.clone().unwrap_or_else(|| "#f0f0f0".to_string()),
                    width: p.width,
                    height: p.height,
                    premium: p.premium,
                    liked: false,
                    author_name: p.user.name.clone(),
                    author_username: p.user.username.clone(),
                    author_avatar: p.user.profile_image.medium.clone(),
                })
                .collect();

            rsx! {
                div { style: "padding: 0 16px 20px;",
                    h4 { style: "margin: 12px 0;", "Related photos" }
                    MasonryGrid {
                        photos: grid_photos,
                        config: GridConfig {
                            columns: 3,
                            show_author: false,
                            show_actions: false,
                        },
                        on_photo_click: move |id: String| {
                            if let Some(photo) = photos.iter().find(|p| p.id == id).cloned() {
                                on_photo_click.call(photo);
                            }
                        },
                    }
                }
            }
        }
        Some(Err(message)) => rsx! {
            p { style: "padding: 0 16px 20px; color: #b00020; font-size: 14px;",
                "Could not load related photos: {message}"
            }
        },
        _ => rsx! {
            div {}
        },
    }
}
