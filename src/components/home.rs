use dioxus::prelude::*;
use photo_feed::FeedKey;
use unsplash_api::Photo;

use crate::components::PhotoFeedView;
use crate::config::AppConfig;
use crate::services::feed_loader;
use crate::Screen;

/// Home: hero with a random cover photo and search, then the latest feed
#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let config = use_context::<AppConfig>();
    let mut hero_term = use_signal(String::new);

    let hero_photo = use_resource(move || {
        let config = config.clone();
        async move {
            match feed_loader::api(&config) {
                Ok(client) => client.random_photo().await.ok(),
                Err(e) => {
                    log::warn!("API client unavailable: {}", e);
                    None
                }
            }
        }
    });

    let submit = move || {
        let term = hero_term.peek().trim().to_string();
        if !term.is_empty() {
            on_navigate.call(Screen::Search(term));
        }
    };

    rsx! {
        section { style: "position: relative; display: grid; place-content: center; gap: 20px; height: 480px; overflow: hidden; background: #262626; margin-bottom: 32px;",

            if let Some(Some(photo)) = hero_photo() {
                HeroCover { photo: photo.clone() }
            }

            h1 { style: "position: relative; margin: 0; text-align: center; color: white; font-size: 44px;",
                "Desplash"
            }
            p { style: "position: relative; margin: 0 auto; max-width: 420px; text-align: center; color: white; font-size: 17px;",
                "The internet's source for visuals. Powered by creators everywhere."
            }
            input {
                style: "position: relative; width: min(700px, 80vw); padding: 13px 18px; font-size: 15px; border: none; border-radius: 6px;",
                r#type: "text",
                placeholder: "🔍 Search your desired photos",
                value: "{hero_term}",
                oninput: move |e| hero_term.set(e.value()),
                onkeydown: {
                    let submit = submit.clone();
                    move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    }
                },
            }
        }

        PhotoFeedView {
            feed_key: FeedKey::Latest,
            title: "Best Free Photos & Images | Desplash".to_string(),
            on_navigate,
        }
    }
}

#[component]
fn HeroCover(photo: Photo) -> Element {
    rsx! {
        img {
            src: "{photo.urls.full}",
            alt: "{photo.display_alt()}",
            style: "position: absolute; top: 0; left: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.7;",
        }
        p { style: "position: absolute; bottom: 12px; left: 16px; margin: 0; color: rgba(255, 255, 255, 0.8); font-size: 13px;",
            "Photo by {photo.user.name}"
        }
    }
}
