use std::fmt;

use unsplash_api::ApiError;

/// Which registration field collided with an existing account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    Username,
}

/// Central error types for the Desplash app
#[derive(Debug)]
pub enum AppError {
    /// Database error (rusqlite)
    Database(rusqlite::Error),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// The upstream photo API failed or was unreachable
    Upstream(ApiError),
    /// Resource not found (login miss, missing favorite, ...)
    NotFound(String),
    /// Registration collision on email or username
    Duplicate(DuplicateField),
    /// An action that requires a logged-in user was attempted without one
    Unauthenticated,
    /// Validation error (e.g. invalid form inputs)
    Validation(String),
    /// Photo snapshot (de)serialization error
    Serialization(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Upstream(e) => write!(f, "Upstream error: {}", e),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Duplicate(DuplicateField::Email) => {
                write!(f, "Duplicate conflict: email already registered")
            }
            AppError::Duplicate(DuplicateField::Username) => {
                write!(f, "Duplicate conflict: username already taken")
            }
            AppError::Unauthenticated => write!(f, "Not logged in"),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Upstream(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e)
    }
}

/// User-friendly error messages for inline display
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "A local storage error occurred. Please try again.".to_string(),
            AppError::Filesystem(_) => {
                "Error accessing local files. Please check permissions.".to_string()
            }
            AppError::Upstream(_) => {
                "Could not reach the photo service. Please try again.".to_string()
            }
            AppError::NotFound(msg) => format!("{} was not found.", msg),
            AppError::Duplicate(DuplicateField::Email) => {
                "A user with this email already exists.".to_string()
            }
            AppError::Duplicate(DuplicateField::Username) => {
                "A user with this username already exists.".to_string()
            }
            AppError::Unauthenticated => "You must log in first.".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Serialization(_) => "Could not read stored photo data.".to_string(),
        }
    }
}
