use rusqlite::{Connection, OptionalExtension};

use crate::error::{AppError, DuplicateField};
use crate::models::{LocalUser, NewAccount};

const USER_COLUMNS: &str = "id, uid, first_name, last_name, email, username, password";

/// Register a new local account.
///
/// Duplicate detection is check-then-act: email first, then username, then
/// insert. Nothing is written when either check hits.
pub fn register(conn: &Connection, account: &NewAccount) -> Result<LocalUser, AppError> {
    account.validate()?;

    if find_by_email(conn, account.email.trim())?.is_some() {
        return Err(AppError::Duplicate(DuplicateField::Email));
    }
    if find_by_username(conn, account.username.trim())?.is_some() {
        return Err(AppError::Duplicate(DuplicateField::Username));
    }

    let user = LocalUser::from_account(account);
    conn.execute(
        "INSERT INTO users (uid, first_name, last_name, email, username, password)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (
            &user.uid,
            &user.first_name,
            &user.last_name,
            &user.email,
            &user.username,
            &user.password,
        ),
    )?;

    log::info!("Registered new user {}", user.username);

    Ok(LocalUser {
        id: Some(conn.last_insert_rowid()),
        ..user
    })
}

/// Look up an account by exact email/password match
pub fn login(conn: &Connection, email: &str, password: &str) -> Result<LocalUser, AppError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM users WHERE email = ?1 AND password = ?2",
        USER_COLUMNS
    ))?;

    let user = stmt
        .query_row((email.trim(), password), |row| LocalUser::try_from(row))
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::NotFound("User".to_string()),
            _ => AppError::Database(e),
        })?;

    Ok(user)
}

fn find_by_email(conn: &Connection, email: &str) -> Result<Option<LocalUser>, AppError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM users WHERE email = ?1",
        USER_COLUMNS
    ))?;

    Ok(stmt
        .query_row([email], |row| LocalUser::try_from(row))
        .optional()?)
}

fn find_by_username(conn: &Connection, username: &str) -> Result<Option<LocalUser>, AppError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM users WHERE username = ?1",
        USER_COLUMNS
    ))?;

    Ok(stmt
        .query_row([username], |row| LocalUser::try_from(row))
        .optional()?)
}

/// Count all registered accounts
#[allow(dead_code)]
pub fn count_users(conn: &Connection) -> Result<i64, AppError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::database::schema::init_schema(&conn).unwrap();
        conn
    }

    fn account(email: &str, username: &str) -> NewAccount {
        NewAccount {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }

    #[test]
    fn test_register_then_login_roundtrips_uid() {
        let conn = setup_test_db();

        let registered = register(&conn, &account("jane@example.com", "jane")).unwrap();
        assert!(registered.id.unwrap() > 0);

        let logged_in = login(&conn, "jane@example.com", "hunter2hunter2").unwrap();
        assert_eq!(logged_in.uid, registered.uid);
        assert_eq!(logged_in.username, "jane");
    }

    #[test]
    fn test_duplicate_email_inserts_nothing() {
        let conn = setup_test_db();
        register(&conn, &account("jane@example.com", "jane")).unwrap();

        let result = register(&conn, &account("jane@example.com", "other_name"));
        assert!(matches!(
            result,
            Err(AppError::Duplicate(DuplicateField::Email))
        ));
        assert_eq!(count_users(&conn).unwrap(), 1);
    }

    #[test]
    fn test_duplicate_username_inserts_nothing() {
        let conn = setup_test_db();
        register(&conn, &account("jane@example.com", "jane")).unwrap();

        let result = register(&conn, &account("other@example.com", "jane"));
        assert!(matches!(
            result,
            Err(AppError::Duplicate(DuplicateField::Username))
        ));
        assert_eq!(count_users(&conn).unwrap(), 1);
    }

    #[test]
    fn test_login_miss_is_not_found() {
        let conn = setup_test_db();
        register(&conn, &account("jane@example.com", "jane")).unwrap();

        // Wrong password and unknown email both read as a miss
        assert!(matches!(
            login(&conn, "jane@example.com", "wrong-password"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            login(&conn, "nobody@example.com", "hunter2hunter2"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_fields_never_reach_the_store() {
        let conn = setup_test_db();

        let mut bad = account("jane@example.com", "jane");
        bad.password = "short".to_string();
        assert!(matches!(
            register(&conn, &bad),
            Err(AppError::Validation(_))
        ));
        assert_eq!(count_users(&conn).unwrap(), 0);
    }
}
