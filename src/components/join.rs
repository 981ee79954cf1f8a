use dioxus::prelude::*;

use crate::database;
use crate::models::NewAccount;
use crate::services::account_service;
use crate::Screen;

/// Registration form backed by the local account store
#[component]
pub fn JoinScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_| {
        let account = NewAccount {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            username: username(),
            password: password(),
        };

        let result =
            database::init_database().and_then(|conn| account_service::register(&conn, &account));

        match result {
            Ok(user) => {
                log::info!("New user registered with id {:?}", user.id);
                on_navigate.call(Screen::Login);
            }
            Err(e) => error.set(Some(e.user_message())),
        }
    };

    rsx! {
        document::Title { "Join | Desplash" }

        section { style: "margin: 60px auto; max-width: 560px; padding: 0 16px; display: flex; flex-direction: column; gap: 18px;",

            div { style: "text-align: center;",
                h1 { style: "margin: 0 0 4px; font-size: 32px;", "Join Desplash" }
                p { style: "margin: 0; font-size: 14px;",
                    "Already have an account? "
                    a {
                        style: "text-decoration: underline; cursor: pointer;",
                        onclick: move |_| on_navigate.call(Screen::Login),
                        "Login"
                    }
                }
            }

            if let Some(message) = error() {
                p { style: "margin: 0; color: #b00020; font-size: 14px;", "{message}" }
            }

            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                label { style: "font-size: 14px;",
                    "First Name"
                    input {
                        style: "width: 100%; margin-top: 4px; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 6px;",
                        r#type: "text",
                        value: "{first_name}",
                        oninput: move |e| first_name.set(e.value()),
                    }
                }
                label { style: "font-size: 14px;",
                    "Last Name"
                    input {
                        style: "width: 100%; margin-top: 4px; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 6px;",
                        r#type: "text",
                        value: "{last_name}",
                        oninput: move |e| last_name.set(e.value()),
                    }
                }
            }

            label { style: "font-size: 14px;",
                "Email"
                input {
                    style: "width: 100%; margin-top: 4px; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 6px;",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }

            label { style: "font-size: 14px;",
                "Username "
                span { style: "color: #767676; font-size: 13px;",
                    "( only letters, numbers, and underscores )"
                }
                input {
                    style: "width: 100%; margin-top: 4px; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 6px;",
                    r#type: "text",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
            }

            label { style: "font-size: 14px;",
                "Password "
                span { style: "color: #767676; font-size: 13px;", "( min. 8 characters )" }
                input {
                    style: "width: 100%; margin-top: 4px; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 6px;",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
            }

            button {
                class: "btn-primary",
                style: "padding: 12px; font-size: 15px;",
                onclick: submit,
                "Join"
            }

            p { style: "margin: 0; text-align: center; color: #767676; font-size: 13px;",
                "By signing up, you agree to our Terms of Service and Privacy Policy."
            }
        }
    }
}
