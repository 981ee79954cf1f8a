use dioxus::prelude::*;
use photo_feed::FeedKey;

use crate::components::PhotoFeedView;
use crate::{AppState, Screen};

/// The logged-in user's favorites, paged out of the local store.
///
/// `reload_rev` follows the favorites revision counter, so any add/remove
/// anywhere in the app supersedes the accumulated feed and re-fetches.
#[component]
pub fn FavoritesScreen(on_navigate: EventHandler<Screen>) -> Element {
    let state = use_context::<AppState>();

    let session_user = (state.session)();
    let rev = (state.favorites_rev)();

    match session_user {
        Some(user) => rsx! {
            section { style: "margin: 24px auto 8px; max-width: 1200px; padding: 0 16px;",
                h1 { style: "margin: 0; text-align: center; font-size: 32px;", "Your Favorites" }
            }

            PhotoFeedView {
                feed_key: FeedKey::Favorites(user.uid.clone()),
                title: "Favorites | Desplash".to_string(),
                reload_rev: rev,
                on_navigate,
            }
        },
        None => rsx! {
            section { style: "margin: 80px auto; max-width: 420px; padding: 0 16px; text-align: center;",
                h1 { style: "font-size: 26px;", "Your Favorites" }
                p { style: "color: #767676; margin-bottom: 24px;",
                    "Log in to see the photos you have favorited."
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| on_navigate.call(Screen::Login),
                    "Log in"
                }
            }
        },
    }
}
