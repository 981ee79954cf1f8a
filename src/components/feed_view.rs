use std::collections::HashSet;

use dioxus::prelude::*;
use masonry_grid::{GridConfig, GridPhoto, LoadMoreButton, MasonryGrid, ScrollSentinel};
use photo_feed::{DetailOverlay, FeedKey, FeedSession};
use unsplash_api::Photo;

use crate::components::PhotoDetailView;
use crate::config::AppConfig;
use crate::database;
use crate::services::{favorites_service, feed_loader};
use crate::{AppState, LoginPrompt, Screen};

/// Shared feed screen body: masonry grid, infinite scroll trigger, and the
/// photo detail overlay.
///
/// Every feed screen (home, search, topic, user, favorites) renders one of
/// these with its own [`FeedKey`]. `reload_rev` lets the parent supersede
/// the accumulated session (the favorites screen bumps it whenever the
/// store changes).
#[component]
pub fn PhotoFeedView(
    feed_key: FeedKey,
    /// Window title while the overlay is closed
    title: String,
    #[props(default = 3)] columns: u32,
    #[props(default = 0)] reload_rev: u64,
    on_navigate: EventHandler<Screen>,
) -> Element {
    let config = use_context::<AppConfig>();
    let state = use_context::<AppState>();

    let mut feed = use_signal(|| FeedSession::new(feed_key.clone()));
    let total = use_signal(|| None::<u64>);
    let mut overlay = use_signal(DetailOverlay::new);

    // Photo ids the current user has favorited, re-read on every change
    let liked_ids = use_memo(move || {
        let _rev = (state.favorites_rev)();
        match state.session.read().as_ref() {
            Some(user) => load_liked_ids(&user.uid),
            None => HashSet::new(),
        }
    });

    // First page on mount; a bumped reload_rev supersedes the session and
    // starts over (late responses for the old one are discarded)
    let config_for_effect = config.clone();
    use_effect(use_reactive!(|reload_rev| {
        if reload_rev > 0 {
            let key = feed.peek().key().clone();
            feed.write().reset(key);
        }
        request_next_page(feed, total, config_for_effect.clone());
    }));

    // Favorite toggle shared by the grid hearts and the detail overlay
    let toggle_like = {
        let mut state = state;
        move |photo: Photo| {
            let session_user = state.session.peek().as_ref().cloned();
            match session_user {
                None => {
                    state.login_prompt.set(LoginPrompt {
                        open: true,
                        photo_url: Some(photo.urls.regular.clone()),
                    });
                }
                Some(user) => {
                    let result = database::init_database()
                        .and_then(|conn| favorites_service::toggle(&conn, &photo, &user.uid));
                    match result {
                        Ok(liked) => {
                            log::debug!("Photo {} liked={}", photo.id, liked);
                            state.favorites_rev += 1;
                        }
                        Err(e) => log::error!("Favorite toggle failed: {}", e),
                    }
                }
            }
        }
    };
    let toggle_like_for_detail = toggle_like.clone();

    // Open the overlay from a feed position; paints immediately from the
    // feed's copy while the richer fetch runs
    let config_for_open = config.clone();
    let open_at = move |index: usize| {
        let Some(photo) = feed.peek().photo_at(index).cloned() else {
            return;
        };
        overlay.write().open(Some(index), &photo);
        fetch_detail(overlay, config_for_open.clone(), photo.id);
    };

    let config_for_related = config.clone();
    let open_related = move |photo: Photo| {
        overlay.write().open(None, &photo);
        fetch_detail(overlay, config_for_related.clone(), photo.id);
    };

    let config_for_prev = config.clone();
    let step_prev = move |_| {
        let stepped = overlay.write().step_prev(&feed.peek());
        if stepped {
            if let Some(id) = overlay.peek().current_id().map(str::to_owned) {
                fetch_detail(overlay, config_for_prev.clone(), id);
            }
        }
    };

    let config_for_next = config.clone();
    let step_next = move |_| {
        let stepped = overlay.write().step_next(&feed.peek());
        if stepped {
            if let Some(id) = overlay.peek().current_id().map(str::to_owned) {
                fetch_detail(overlay, config_for_next.clone(), id);
            }
        }
    };

    let config_for_more = config.clone();
    let config_for_retry = config.clone();

    let feed_state = feed.read();
    let current_detail = overlay.read().current().cloned();
    let window_title = current_detail
        .as_ref()
        .map(|d| d.photo.display_alt().to_string())
        .unwrap_or_else(|| title.clone());

    let grid_photos: Vec<GridPhoto> = {
        let liked = liked_ids.read();
        feed_state
            .photos()
            .iter()
            .map(|p| to_grid_photo(p, &liked))
            .collect()
    };

    rsx! {
        document::Title { "{window_title}" }

        section { style: "margin: 0 auto; max-width: 1200px; padding: 0 16px;",

            if let Some(total) = total() {
                p { style: "margin: 12px 0; color: #767676; font-size: 14px;",
                    "{total} photos"
                }
            }

            if feed_state.is_empty() && feed_state.is_loading() {
                p { style: "text-align: center; padding: 40px; color: #999;", "Loading..." }
            } else {
                MasonryGrid {
                    photos: grid_photos,
                    config: GridConfig { columns, ..GridConfig::default() },
                    on_photo_click: {
                        let mut open_at = open_at.clone();
                        move |id: String| {
                            if let Some(index) =
                                feed.peek().photos().iter().position(|p| p.id == id)
                            {
                                open_at(index);
                            }
                        }
                    },
                    on_like: {
                        let mut toggle_like = toggle_like.clone();
                        move |id: String| {
                            if let Some(photo) =
                                feed.peek().photos().iter().find(|p| p.id == id).cloned()
                            {
                                toggle_like(photo);
                            }
                        }
                    },
                    on_download: move |id: String| {
                        if let Some(photo) = feed.peek().photos().iter().find(|p| p.id == id) {
                            open_in_browser(&photo.urls.full);
                        }
                    },
                    on_author_click: move |username: String| {
                        on_navigate.call(Screen::UserProfile(username));
                    },
                }
            }

            if let Some(message) = feed_state.error() {
                div { style: "text-align: center; padding: 20px;",
                    p { style: "color: #b00020; margin-bottom: 8px;", "{message}" }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            feed.write().retry();
                            request_next_page(feed, total, config_for_retry.clone());
                        },
                        "Try again"
                    }
                }
            } else if feed_state.has_more() {
                // Sentinel and button both request the identical operation;
                // an in-flight fetch makes extra triggers no-ops
                ScrollSentinel {
                    on_visible: {
                        let config = config_for_more.clone();
                        move |_| request_next_page(feed, total, config.clone())
                    },
                }
                LoadMoreButton {
                    loading: feed_state.is_loading(),
                    on_click: {
                        let config = config_for_more.clone();
                        move |_| request_next_page(feed, total, config.clone())
                    },
                }
            }

            if let Some(detail) = current_detail {
                PhotoDetailView {
                    key: "{detail.photo.id}",
                    detail: detail.clone(),
                    resolved: overlay.read().is_resolved(),
                    liked: liked_ids.read().contains(&detail.photo.id),
                    can_prev: overlay.read().can_step_prev(),
                    can_next: overlay.read().can_step_next(&feed_state),
                    on_close: move |_| overlay.write().close(),
                    on_prev: step_prev,
                    on_next: step_next,
                    on_like: {
                        let mut toggle_like = toggle_like_for_detail.clone();
                        move |photo| toggle_like(photo)
                    },
                    on_download: move |url: String| open_in_browser(&url),
                    on_related_click: open_related,
                    on_author_click: move |username: String| {
                        on_navigate.call(Screen::UserProfile(username));
                    },
                }
            }
        }
    }
}

/// Kick off the next page fetch for a feed, if one may run
fn request_next_page(
    mut feed: Signal<FeedSession>,
    mut total: Signal<Option<u64>>,
    config: AppConfig,
) {
    let Some(ticket) = feed.write().begin_fetch() else {
        return;
    };
    let key = feed.peek().key().clone();

    spawn(async move {
        match feed_loader::load_page(&config, &key, ticket.page).await {
            Ok(loaded) => {
                if loaded.total.is_some() {
                    total.set(loaded.total);
                }
                feed.write().complete_fetch(ticket, loaded.page);
            }
            Err(e) => {
                feed.write().fail_fetch(ticket, e.user_message());
            }
        }
    });
}

/// Fetch the rich detail for the photo currently in the overlay.
///
/// On failure the placeholder stays on screen; the overlay itself drops
/// responses for photos no longer shown.
fn fetch_detail(mut overlay: Signal<DetailOverlay>, config: AppConfig, photo_id: String) {
    spawn(async move {
        let client = match feed_loader::api(&config) {
            Ok(client) => client,
            Err(e) => {
                log::error!("API client unavailable: {}", e);
                return;
            }
        };
        match client.get_photo(&photo_id).await {
            Ok(detail) => overlay.write().resolve(detail),
            Err(e) => log::warn!("Detail fetch for {} failed: {}", photo_id, e),
        }
    });
}

fn to_grid_photo(photo: &Photo, liked: &HashSet<String>) -> GridPhoto {
    GridPhoto {
        id: photo.id.clone(),
        src: photo.urls.regular.clone(),
        download_url: photo.urls.full.clone(),
        alt: photo.display_alt().to_string(),
        color: photo
            .color
            .clone()
            .unwrap_or_else(|| "#f0f0f0".to_string()),
        width: photo.width,
        height: photo.height,
        premium: photo.premium,
        liked: liked.contains(&photo.id),
        author_name: photo.user.name.clone(),
        author_username: photo.user.username.clone(),
        author_avatar: photo.user.profile_image.medium.clone(),
    }
}

fn load_liked_ids(user_uid: &str) -> HashSet<String> {
    let favorites =
        database::init_database().and_then(|conn| favorites_service::list_for_user(&conn, user_uid));
    match favorites {
        Ok(favorites) => favorites.into_iter().map(|f| f.photo_id).collect(),
        Err(e) => {
            log::error!("Failed to load favorites: {}", e);
            HashSet::new()
        }
    }
}

/// Open a URL in the system browser / a new tab (the download action)
pub fn open_in_browser(url: &str) {
    let js = format!("window.open('{}', '_blank')", url.replace('\'', "%27"));
    let _ = document::eval(&js);
}
