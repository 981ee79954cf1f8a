use dioxus::prelude::*;
use photo_feed::FeedKey;

use crate::components::PhotoFeedView;
use crate::config::AppConfig;
use crate::services::feed_loader;
use crate::Screen;

/// A curated topic: hero from the topic's cover photo, then its feed
#[component]
pub fn TopicScreen(slug: String, on_navigate: EventHandler<Screen>) -> Element {
    let config = use_context::<AppConfig>();

    let topic = use_resource({
        let slug = slug.clone();
        move || {
            let config = config.clone();
            let slug = slug.clone();
            async move {
                match feed_loader::api(&config) {
                    Ok(client) => client.get_topic(&slug).await.ok(),
                    Err(e) => {
                        log::warn!("API client unavailable: {}", e);
                        None
                    }
                }
            }
        }
    });

    rsx! {
        if let Some(Some(topic)) = topic() {
            section { style: "position: relative; display: grid; place-content: center; gap: 12px; height: 320px; overflow: hidden; background: #262626; margin-bottom: 32px;",
                img {
                    src: "{topic.cover_photo.urls.full}",
                    alt: "{topic.title}",
                    style: "position: absolute; top: 0; left: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.6;",
                }
                h1 { style: "position: relative; margin: 0; text-align: center; color: white; font-size: 36px;",
                    "{topic.title}"
                }
                if let Some(description) = topic.description {
                    p { style: "position: relative; margin: 0 auto; max-width: 480px; text-align: center; color: white; font-size: 15px;",
                        "{description}"
                    }
                }
            }
        } else {
            section { style: "margin: 24px auto 8px; max-width: 1200px; padding: 0 16px;",
                h1 { style: "margin: 0; font-size: 28px; text-transform: capitalize;", "{slug}" }
            }
        }

        PhotoFeedView {
            feed_key: FeedKey::Topic(slug.clone()),
            title: format!("{} | Desplash", slug),
            on_navigate,
        }
    }
}
