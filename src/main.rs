use dioxus::prelude::*;

mod components;
mod config;
mod database;
mod error;
mod models;
mod services;

use components::{
    FavoritesScreen, HomeScreen, JoinScreen, LoginPromptModal, LoginScreen, NavBar, SearchScreen,
    TopicScreen, UserScreen,
};
use config::AppConfig;
use models::SessionUser;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    dioxus::launch(App);
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    /// Search results for a term
    Search(String),
    /// A curated topic, by slug
    Topic(String),
    /// A photographer's profile, by username
    UserProfile(String),
    Favorites,
    Login,
    Join,
}

/// State of the "log in to like photos" prompt
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginPrompt {
    pub open: bool,
    /// The photo that triggered the prompt, shown as backdrop
    pub photo_url: Option<String>,
}

/// Process-wide state shared through context.
///
/// The session signal is seeded from the persisted session before the first
/// render and cleared on logout; `favorites_rev` is bumped on every
/// favorites change so dependent views re-query.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<Option<SessionUser>>,
    pub login_prompt: Signal<LoginPrompt>,
    pub favorites_rev: Signal<u64>,
}

impl AppState {
    /// Clear the persisted session and drop the in-memory user
    pub fn logout(&mut self) {
        match database::init_database() {
            Ok(conn) => {
                if let Err(e) = services::session_service::clear(&conn) {
                    log::error!("Failed to clear session: {}", e);
                }
            }
            Err(e) => log::error!("Database unavailable on logout: {}", e),
        }
        self.session.set(None);
    }
}

/// Rehydrate the persisted session from the local store
fn load_persisted_session() -> Option<SessionUser> {
    match database::init_database() {
        Ok(conn) => match services::session_service::load(&conn) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Failed to load session: {}", e);
                None
            }
        },
        Err(e) => {
            log::warn!("Database unavailable at startup: {}", e);
            None
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(AppConfig::load);
    use_context_provider(|| AppState {
        session: Signal::new(load_persisted_session()),
        login_prompt: Signal::new(LoginPrompt::default()),
        favorites_rev: Signal::new(0),
    });

    let mut current_screen = use_signal(|| Screen::Home);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "min-height: 100vh; background: #fff; color: #111; font-family: sans-serif;",

            NavBar {
                current_screen: current_screen(),
                on_navigate: move |s| current_screen.set(s),
            }

            match current_screen() {
                Screen::Home => rsx! {
                    HomeScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::Search(query) => rsx! {
                    SearchScreen {
                        key: "{query}",
                        query: query.clone(),
                        on_navigate: move |s| current_screen.set(s),
                    }
                },
                Screen::Topic(slug) => rsx! {
                    TopicScreen {
                        key: "{slug}",
                        slug: slug.clone(),
                        on_navigate: move |s| current_screen.set(s),
                    }
                },
                Screen::UserProfile(username) => rsx! {
                    UserScreen {
                        key: "{username}",
                        username: username.clone(),
                        on_navigate: move |s| current_screen.set(s),
                    }
                },
                Screen::Favorites => rsx! {
                    FavoritesScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::Login => rsx! {
                    LoginScreen { on_navigate: move |s| current_screen.set(s) }
                },
                Screen::Join => rsx! {
                    JoinScreen { on_navigate: move |s| current_screen.set(s) }
                },
            }

            // Rendered above every screen; opens when an unauthenticated
            // user tries to favorite a photo
            LoginPromptModal { on_navigate: move |s| current_screen.set(s) }
        }
    }
}
