pub mod account_service;
pub mod favorites_service;
pub mod feed_loader;
pub mod session_service;
