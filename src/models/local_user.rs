use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A locally registered account row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalUser {
    pub id: Option<i64>,
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    // Stored as-is; this is a local-only demo datastore
    pub password: String,
}

impl LocalUser {
    /// Build a fresh user row with a generated uid from registration input
    pub fn from_account(account: &NewAccount) -> Self {
        Self {
            id: None,
            uid: uuid::Uuid::new_v4().to_string(),
            first_name: account.first_name.trim().to_string(),
            last_name: account.last_name.trim().to_string(),
            email: account.email.trim().to_string(),
            username: account.username.trim().to_string(),
            password: account.password.clone(),
        }
    }
}

impl<'r> TryFrom<&Row<'r>> for LocalUser {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'r>) -> Result<Self, Self::Error> {
        let id: i64 = row.get(0)?;

        Ok(LocalUser {
            id: Some(id),
            uid: row.get(1)?,
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            email: row.get(4)?,
            username: row.get(5)?,
            password: row.get(6)?,
        })
    }
}

/// Registration form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl NewAccount {
    /// Validate all registration fields
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.trim().is_empty() {
            return Err(AppError::Validation(
                "First name must not be empty".to_string(),
            ));
        }

        if self.last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "Last name must not be empty".to_string(),
            ));
        }

        let email = self.email.trim();
        if !email.contains('@') || !email.contains('.') || email.len() < 5 {
            return Err(AppError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }

        let username = self.username.trim();
        if username.is_empty() {
            return Err(AppError::Validation(
                "Username must not be empty".to_string(),
            ));
        }
        // Only letters, numbers, and underscores
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::Validation(
                "Username may only contain letters, numbers, and underscores".to_string(),
            ));
        }

        // Min. 8 characters
        if self.password.len() < 8 {
            return Err(AppError::Validation(
                "Password must be at least 8 characters long".to_string(),
            ));
        }

        Ok(())
    }
}

/// The logged-in user as held in app state and the session table.
///
/// A password-free subset of [`LocalUser`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&LocalUser> for SessionUser {
    fn from(user: &LocalUser) -> Self {
        Self {
            uid: user.uid.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> NewAccount {
        NewAccount {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            username: "jane_doe".to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }

    #[test]
    fn test_valid_account_passes() {
        assert!(account().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut a = account();
        a.email = "not-an-email".to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_username_charset_enforced() {
        let mut a = account();
        a.username = "jane doe!".to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut a = account();
        a.password = "short".to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_session_user_has_no_password() {
        let user = LocalUser::from_account(&account());
        let session = SessionUser::from(&user);
        assert_eq!(session.uid, user.uid);
        assert_eq!(session.display_name(), "Jane Doe");
    }
}
