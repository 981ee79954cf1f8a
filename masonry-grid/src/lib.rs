use dioxus::prelude::*;

/// Represents a single photo in the grid
#[derive(Clone, PartialEq, Debug)]
pub struct GridPhoto {
    /// Unique identifier for the photo
    pub id: String,
    /// Display URL (a mid-size variant)
    pub src: String,
    /// URL handed to the download action (the largest variant)
    pub download_url: String,
    /// Alt text / caption
    pub alt: String,
    /// Dominant color painted behind the image while it loads
    pub color: String,
    pub width: u32,
    pub height: u32,
    /// Premium photos hide the download action
    pub premium: bool,
    /// Whether the current viewer has favorited this photo
    pub liked: bool,
    pub author_name: String,
    pub author_username: String,
    pub author_avatar: String,
}

/// Configuration for the MasonryGrid component
#[derive(Clone, PartialEq)]
pub struct GridConfig {
    /// Number of masonry columns
    pub columns: u32,
    /// Whether to show the author row on each card
    pub show_author: bool,
    /// Whether to show like/download actions on each card
    pub show_actions: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            show_author: true,
            show_actions: true,
        }
    }
}

/// A reusable masonry photo grid component for Dioxus
///
/// This component displays photos in CSS masonry columns with like,
/// download, and author affordances. It handles the UI rendering while
/// delegating all data operations to the parent via callbacks.
///
/// # Example
/// ```rust,ignore
/// MasonryGrid {
///     photos: vec![
///         GridPhoto {
///             id: "1".to_string(),
///             src: "https://images.example.com/1?regular".to_string(),
///             // ...
///         }
///     ],
///     config: GridConfig::default(),
///     on_photo_click: move |id| {
///         // Open the detail overlay in the parent
///     },
///     on_like: move |id| {
///         // Toggle the favorite in the parent
///     },
/// }
/// ```
#[component]
pub fn MasonryGrid(
    /// Photos to display, in feed order
    photos: Vec<GridPhoto>,
    /// Grid configuration
    #[props(default)]
    config: GridConfig,
    /// Callback when the user clicks a photo (to open the detail view)
    #[props(default)]
    on_photo_click: Option<EventHandler<String>>,
    /// Callback when the user clicks the like action
    #[props(default)]
    on_like: Option<EventHandler<String>>,
    /// Callback when the user clicks the download action
    #[props(default)]
    on_download: Option<EventHandler<String>>,
    /// Callback when the user clicks the author row (username)
    #[props(default)]
    on_author_click: Option<EventHandler<String>>,
) -> Element {
    if photos.is_empty() {
        return rsx! {
            div {
                style: "padding: 24px; text-align: center; background: #f5f5f5; border-radius: 8px; color: #999;",
                "No photos to show"
            }
        };
    }

    let grid_style = format!(
        "column-count: {}; column-gap: 12px; width: 100%;",
        config.columns
    );

    rsx! {
        div { style: "{grid_style}",
            for photo in photos {
                PhotoCardView {
                    photo: photo.clone(),
                    show_author: config.show_author,
                    show_actions: config.show_actions,
                    on_photo_click: on_photo_click.clone(),
                    on_like: on_like.clone(),
                    on_download: on_download.clone(),
                    on_author_click: on_author_click.clone(),
                }
            }
        }
    }
}

/// Internal component for rendering a single photo card
#[component]
fn PhotoCardView(
    photo: GridPhoto,
    show_author: bool,
    show_actions: bool,
    on_photo_click: Option<EventHandler<String>>,
    on_like: Option<EventHandler<String>>,
    on_download: Option<EventHandler<String>>,
    on_author_click: Option<EventHandler<String>>,
) -> Element {
    let card_style = format!(
        "position: relative; margin-bottom: 12px; break-inside: avoid; border-radius: 6px; \
         overflow: hidden; background: {}; aspect-ratio: {} / {};",
        photo.color, photo.width, photo.height
    );
    let heart_color = if photo.liked { "#e25555" } else { "#767676" };

    rsx! {
        div {
            key: "{photo.id}",
            style: "{card_style}",
            title: "{photo.alt}",
            img {
                src: "{photo.src}",
                alt: "{photo.alt}",
                loading: "lazy",
                style: "width: 100%; height: 100%; object-fit: cover; cursor: zoom-in; display: block;",
                onclick: {
                    let photo_id = photo.id.clone();
                    move |_| {
                        if let Some(handler) = &on_photo_click {
                            handler.call(photo_id.clone());
                        }
                    }
                },
            }
            if show_actions {
                button {
                    style: format!(
                        "position: absolute; top: 10px; right: 10px; width: 34px; height: 34px; \
                         background: white; color: {}; border-radius: 6px; font-size: 16px; \
                         cursor: pointer; border: none;",
                        heart_color,
                    ),
                    title: "Add to favorites",
                    onclick: {
                        let photo_id = photo.id.clone();
                        move |_| {
                            if let Some(handler) = &on_like {
                                handler.call(photo_id.clone());
                            }
                        }
                    },
                    "♥"
                }
                if !photo.premium {
                    button {
                        style: "position: absolute; bottom: 10px; right: 10px; width: 34px; height: 34px; background: white; color: #767676; border-radius: 6px; font-size: 16px; cursor: pointer; border: none;",
                        title: "Download",
                        onclick: {
                            let photo_id = photo.id.clone();
                            move |_| {
                                if let Some(handler) = &on_download {
                                    handler.call(photo_id.clone());
                                }
                            }
                        },
                        "↓"
                    }
                }
            }
            if show_author {
                div {
                    style: "position: absolute; bottom: 10px; left: 10px; display: flex; gap: 8px; align-items: center; cursor: pointer;",
                    onclick: {
                        let username = photo.author_username.clone();
                        move |_| {
                            if let Some(handler) = &on_author_click {
                                handler.call(username.clone());
                            }
                        }
                    },
                    img {
                        src: "{photo.author_avatar}",
                        alt: "{photo.author_name}",
                        style: "width: 32px; height: 32px; border-radius: 50%;",
                    }
                    span {
                        style: "color: rgba(255, 255, 255, 0.9); font-size: 13px; text-shadow: 0 1px 2px rgba(0,0,0,0.6);",
                        "{photo.author_name}"
                    }
                }
            }
        }
    }
}

/// Viewport sentinel placed after the last grid item.
///
/// Fires `on_visible` once per becoming-visible transition, driven by the
/// intersection observer behind Dioxus' `onvisible` event. The parent is
/// expected to suppress re-entrant fetches itself (an in-flight page load
/// makes the next trigger a no-op).
#[component]
pub fn ScrollSentinel(on_visible: EventHandler<()>) -> Element {
    let mut was_visible = use_signal(|| false);

    rsx! {
        div {
            style: "width: 100%; height: 1px;",
            onvisible: move |evt| {
                let visible = evt.data().is_intersecting().unwrap_or(false);
                if visible && !was_visible() {
                    on_visible.call(());
                }
                was_visible.set(visible);
            },
        }
    }
}

/// Manual pagination affordance, equivalent to the sentinel becoming
/// visible. Doubles as the loading indicator while a fetch is outstanding.
#[component]
pub fn LoadMoreButton(loading: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            style: "display: block; margin: 20px auto; padding: 10px 24px; background: white; color: #333; border: 1px solid #ccc; border-radius: 6px; font-size: 15px; cursor: pointer;",
            disabled: loading,
            onclick: move |_| on_click.call(()),
            if loading {
                "Loading..."
            } else {
                "Load more"
            }
        }
    }
}
