use dioxus::prelude::*;

use crate::database;
use crate::error::AppError;
use crate::models::SessionUser;
use crate::services::{account_service, session_service};
use crate::{AppState, Screen};

/// Login form backed by the local account store
#[component]
pub fn LoginScreen(on_navigate: EventHandler<Screen>) -> Element {
    let mut state = use_context::<AppState>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let mut submit = move || {
        let email_value = email().trim().to_string();
        let password_value = password();

        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Please enter your email and password.".to_string()));
            return;
        }

        let result = database::init_database().and_then(|conn| {
            let user = account_service::login(&conn, &email_value, &password_value)?;
            let session = SessionUser::from(&user);
            session_service::save(&conn, &session)?;
            Ok(session)
        });

        match result {
            Ok(session) => {
                state.session.set(Some(session));
                on_navigate.call(Screen::Home);
            }
            Err(AppError::NotFound(_)) => {
                error.set(Some("User not found. Check your email and password.".to_string()));
            }
            Err(e) => {
                log::error!("Login failed: {}", e);
                error.set(Some(e.user_message()));
            }
        }
    };

    rsx! {
        document::Title { "Login | Desplash" }

        section { style: "margin: 60px auto; max-width: 420px; padding: 0 16px; display: flex; flex-direction: column; gap: 18px;",

            div { style: "text-align: center;",
                h1 { style: "margin: 0 0 4px; font-size: 28px;", "Desplash" }
                h2 { style: "margin: 0 0 4px; font-size: 20px;", "Login" }
                p { style: "margin: 0; color: #767676;", "Welcome back" }
            }

            if let Some(message) = error() {
                p { style: "margin: 0; color: #b00020; font-size: 14px;", "{message}" }
            }

            label { style: "font-size: 14px;",
                "Email"
                input {
                    style: "width: 100%; margin-top: 4px; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 6px;",
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }

            label { style: "font-size: 14px;",
                "Password"
                input {
                    style: "width: 100%; margin-top: 4px; padding: 10px; font-size: 14px; border: 1px solid #ccc; border-radius: 6px;",
                    r#type: "password",
                    placeholder: "Enter your password",
                    value: "{password}",
                    onkeydown: {
                        let mut submit = submit.clone();
                        move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                submit();
                            }
                        }
                    },
                    oninput: move |e| password.set(e.value()),
                }
            }

            button {
                class: "btn-primary",
                style: "padding: 12px; font-size: 15px;",
                onclick: move |_| submit(),
                "Login"
            }

            p { style: "padding: 18px 0; border-top: 1px solid #eee; text-align: center; font-size: 14px;",
                "Don't have an account? "
                a {
                    style: "text-decoration: underline; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::Join),
                    "Join Desplash"
                }
            }
        }
    }
}
