use dioxus::prelude::*;
use photo_feed::FeedKey;
use unsplash_api::UserProfile;

use crate::components::PhotoFeedView;
use crate::config::AppConfig;
use crate::services::feed_loader;
use crate::Screen;

/// A photographer's profile: header with bio and counts, then their photos
#[component]
pub fn UserScreen(username: String, on_navigate: EventHandler<Screen>) -> Element {
    let config = use_context::<AppConfig>();

    let profile = use_resource({
        let username = username.clone();
        move || {
            let config = config.clone();
            let username = username.clone();
            async move {
                match feed_loader::api(&config) {
                    Ok(client) => client.get_user(&username).await.ok(),
                    Err(e) => {
                        log::warn!("API client unavailable: {}", e);
                        None
                    }
                }
            }
        }
    });

    rsx! {
        if let Some(Some(profile)) = profile() {
            ProfileHeader { profile: profile.clone() }
        } else {
            section { style: "margin: 24px auto 8px; max-width: 1200px; padding: 0 16px;",
                h1 { style: "margin: 0; font-size: 28px;", "@{username}" }
            }
        }

        PhotoFeedView {
            feed_key: FeedKey::UserPhotos(username.clone()),
            title: format!("{} | Desplash", username),
            on_navigate,
        }
    }
}

#[component]
fn ProfileHeader(profile: UserProfile) -> Element {
    rsx! {
        section { style: "display: flex; gap: 24px; align-items: center; margin: 32px auto; max-width: 1200px; padding: 0 16px;",
            img {
                src: "{profile.user.profile_image.large}",
                alt: "{profile.user.name}",
                style: "width: 128px; height: 128px; border-radius: 50%;",
            }
            div {
                h1 { style: "margin: 0 0 4px; font-size: 30px;", "{profile.user.name}" }
                p { style: "margin: 0 0 8px; color: #767676; font-size: 14px;",
                    "@{profile.user.username}"
                }
                if let Some(bio) = &profile.user.bio {
                    p { style: "margin: 0 0 8px; max-width: 560px; font-size: 14px;", "{bio}" }
                }
                if let Some(location) = &profile.user.location {
                    p { style: "margin: 0 0 8px; color: #767676; font-size: 14px;",
                        "📍 {location}"
                    }
                }
                div { style: "display: flex; gap: 24px; color: #767676; font-size: 13px;",
                    span { "{profile.user.total_photos} photos" }
                    span { "{profile.user.total_likes} likes" }
                    span { "{profile.downloads} downloads" }
                }
            }
        }
    }
}
