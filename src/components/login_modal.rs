use dioxus::prelude::*;

use crate::{AppState, LoginPrompt, Screen};

/// Modal shown when an unauthenticated user tries to favorite a photo.
///
/// Shows the photo that was clicked as backdrop and routes to login/join;
/// no favorite is recorded until the user comes back with a session.
#[component]
pub fn LoginPromptModal(on_navigate: EventHandler<Screen>) -> Element {
    let mut state = use_context::<AppState>();

    let prompt = (state.login_prompt)();
    if !prompt.open {
        return rsx! {};
    }

    let mut close = move || state.login_prompt.set(LoginPrompt::default());

    rsx! {
        div { style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.7); z-index: 2000; display: flex; align-items: center; justify-content: center;",
            onclick: {
                let mut close = close.clone();
                move |_| close()
            },

            div {
                style: "position: relative; display: grid; grid-template-columns: 1fr 1fr; max-width: 720px; width: 90vw; background: white; border-radius: 8px; overflow: hidden;",
                // Keep clicks inside the panel from closing it
                onclick: move |e| e.stop_propagation(),

                if let Some(url) = prompt.photo_url {
                    img {
                        src: "{url}",
                        style: "width: 100%; height: 100%; min-height: 320px; object-fit: cover;",
                    }
                } else {
                    div { style: "background: #262626; min-height: 320px;" }
                }

                div { style: "display: flex; flex-direction: column; gap: 14px; justify-content: center; padding: 28px;",
                    h2 { style: "margin: 0; font-size: 22px;", "Log in to like photos" }
                    p { style: "margin: 0; color: #767676; font-size: 14px;",
                        "Join Desplash to keep the photos you love in one place."
                    }
                    button {
                        class: "btn-primary",
                        style: "padding: 10px; font-size: 14px;",
                        onclick: {
                            let mut close = close.clone();
                            move |_| {
                                close();
                                on_navigate.call(Screen::Login);
                            }
                        },
                        "Log in"
                    }
                    button {
                        class: "btn-secondary",
                        style: "padding: 10px; font-size: 14px;",
                        onclick: {
                            let mut close = close.clone();
                            move |_| {
                                close();
                                on_navigate.call(Screen::Join);
                            }
                        },
                        "Join Desplash"
                    }
                }

                button {
                    style: "position: absolute; top: 8px; right: 8px; width: 30px; height: 30px; background: rgba(255, 255, 255, 0.9); border: none; border-radius: 50%; font-size: 16px; cursor: pointer;",
                    onclick: move |_| close(),
                    "×"
                }
            }
        }
    }
}
