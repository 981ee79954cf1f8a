pub mod favorite;
pub mod local_user;

pub use favorite::Favorite;
pub use local_user::{LocalUser, NewAccount, SessionUser};
