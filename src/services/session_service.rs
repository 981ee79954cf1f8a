use rusqlite::{Connection, OptionalExtension};

use crate::error::AppError;
use crate::models::SessionUser;

/// Persist the logged-in user; replaces any previous session
pub fn save(conn: &Connection, user: &SessionUser) -> Result<(), AppError> {
    conn.execute(
        "INSERT OR REPLACE INTO session (id, uid, email, username, first_name, last_name)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)",
        (
            &user.uid,
            &user.email,
            &user.username,
            &user.first_name,
            &user.last_name,
        ),
    )?;

    Ok(())
}

/// Load the persisted session, if any
pub fn load(conn: &Connection) -> Result<Option<SessionUser>, AppError> {
    let user = conn
        .query_row(
            "SELECT uid, email, username, first_name, last_name FROM session WHERE id = 1",
            [],
            |row| {
                Ok(SessionUser {
                    uid: row.get(0)?,
                    email: row.get(1)?,
                    username: row.get(2)?,
                    first_name: row.get(3)?,
                    last_name: row.get(4)?,
                })
            },
        )
        .optional()?;

    Ok(user)
}

/// Forget the persisted session (logout)
pub fn clear(conn: &Connection) -> Result<(), AppError> {
    conn.execute("DELETE FROM session", [])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::database::schema::init_schema(&conn).unwrap();
        conn
    }

    fn session_user(uid: &str) -> SessionUser {
        SessionUser {
            uid: uid.to_string(),
            email: "jane@example.com".to_string(),
            username: "jane".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[test]
    fn test_save_load_clear_roundtrip() {
        let conn = setup_test_db();
        assert_eq!(load(&conn).unwrap(), None);

        save(&conn, &session_user("uid-1")).unwrap();
        assert_eq!(load(&conn).unwrap().unwrap().uid, "uid-1");

        clear(&conn).unwrap();
        assert_eq!(load(&conn).unwrap(), None);
    }

    #[test]
    fn test_new_login_replaces_previous_session() {
        let conn = setup_test_db();

        save(&conn, &session_user("uid-1")).unwrap();
        save(&conn, &session_user("uid-2")).unwrap();

        // Single-row table: only the latest login survives
        let loaded = load(&conn).unwrap().unwrap();
        assert_eq!(loaded.uid, "uid-2");
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM session", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
