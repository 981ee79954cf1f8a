use dioxus::prelude::*;
use photo_feed::FeedKey;

use crate::components::PhotoFeedView;
use crate::Screen;

/// Search results for one term
#[component]
pub fn SearchScreen(query: String, on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        section { style: "margin: 24px auto 8px; max-width: 1200px; padding: 0 16px;",
            h1 { style: "margin: 0; font-size: 28px; text-transform: capitalize;", "{query}" }
        }

        PhotoFeedView {
            feed_key: FeedKey::Search(query.clone()),
            title: format!("{} | Desplash", query),
            on_navigate,
        }
    }
}
