pub mod favorites;
pub mod feed_view;
pub mod home;
pub mod join;
pub mod login;
pub mod login_modal;
pub mod navbar;
pub mod photo_detail;
pub mod search;
pub mod topic;
pub mod user_profile;

pub use favorites::FavoritesScreen;
pub use feed_view::PhotoFeedView;
pub use home::HomeScreen;
pub use join::JoinScreen;
pub use login::LoginScreen;
pub use login_modal::LoginPromptModal;
pub use navbar::NavBar;
pub use photo_detail::{PhotoDetailView, RelatedPhotosView};
pub use search::SearchScreen;
pub use topic::TopicScreen;
pub use user_profile::UserScreen;
