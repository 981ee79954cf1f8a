use dioxus::prelude::*;
use unsplash_api::TopicRef;

use crate::config::AppConfig;
use crate::services::feed_loader;
use crate::{AppState, Screen};

/// Top navigation: logo, search box, session area, and the topics strip
#[component]
pub fn NavBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let config = use_context::<AppConfig>();
    let mut state = use_context::<AppState>();
    let mut search_term = use_signal(String::new);

    // The topic strip is loaded once and kept for the whole run
    let topics = use_resource(move || {
        let config = config.clone();
        async move {
            match feed_loader::api(&config) {
                Ok(client) => client.list_topics().await.unwrap_or_else(|e| {
                    log::warn!("Topic strip unavailable: {}", e);
                    Vec::new()
                }),
                Err(e) => {
                    log::warn!("API client unavailable: {}", e);
                    Vec::new()
                }
            }
        }
    });

    let submit_search = move || {
        let term = search_term.peek().trim().to_string();
        if !term.is_empty() {
            on_navigate.call(Screen::Search(term));
        }
    };

    let session_user = (state.session)();

    rsx! {
        header { style: "position: sticky; top: 0; z-index: 100; background: white; border-bottom: 1px solid #eee;",
            div { style: "display: flex; gap: 16px; align-items: center; padding: 10px 16px;",

                button {
                    style: "background: none; border: none; font-size: 20px; font-weight: 700; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::Home),
                    "Desplash"
                }

                input {
                    style: "flex: 1; padding: 10px 16px; font-size: 14px; border: 1px solid #ddd; border-radius: 20px; background: #f5f5f5;",
                    r#type: "text",
                    placeholder: "🔍 Search free high-resolution photos",
                    value: "{search_term}",
                    oninput: move |e| search_term.set(e.value()),
                    onkeydown: {
                        let submit_search = submit_search.clone();
                        move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                submit_search();
                            }
                        }
                    },
                }

                if let Some(user) = session_user {
                    button {
                        style: if matches!(current_screen, Screen::Favorites) {
                            "background: none; border: none; font-size: 14px; cursor: pointer; color: #111; font-weight: 600;"
                        } else {
                            "background: none; border: none; font-size: 14px; cursor: pointer; color: #767676;"
                        },
                        onclick: move |_| on_navigate.call(Screen::Favorites),
                        "♥ Favorites"
                    }
                    span { style: "font-size: 14px; color: #111;", "{user.username}" }
                    button {
                        class: "btn-secondary",
                        style: "padding: 6px 12px; font-size: 13px;",
                        onclick: move |_| {
                            state.logout();
                            on_navigate.call(Screen::Home);
                        },
                        "Log out"
                    }
                } else {
                    button {
                        style: "background: none; border: none; font-size: 14px; cursor: pointer; color: #767676;",
                        onclick: move |_| on_navigate.call(Screen::Login),
                        "Log in"
                    }
                    button {
                        class: "btn-primary",
                        style: "padding: 6px 12px; font-size: 13px;",
                        onclick: move |_| on_navigate.call(Screen::Join),
                        "Join"
                    }
                }
            }

            if let Some(topic_list) = topics() {
                if !topic_list.is_empty() {
                    div { style: "display: flex; gap: 4px; padding: 0 12px 8px; overflow-x: auto;",
                        for topic in topic_list {
                            TopicTab {
                                topic: topic.clone(),
                                active: matches!(&current_screen, Screen::Topic(slug) if slug == &topic.slug),
                                on_navigate,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicTab(topic: TopicRef, active: bool, on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        button {
            style: if active {
                "padding: 6px 10px; background: none; border: none; border-bottom: 2px solid #111; font-size: 14px; color: #111; cursor: pointer; white-space: nowrap;"
            } else {
                "padding: 6px 10px; background: none; border: none; border-bottom: 2px solid transparent; font-size: 14px; color: #767676; cursor: pointer; white-space: nowrap;"
            },
            onclick: {
                let slug = topic.slug.clone();
                move |_| on_navigate.call(Screen::Topic(slug.clone()))
            },
            "{topic.title}"
        }
    }
}
