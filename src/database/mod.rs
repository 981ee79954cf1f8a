pub mod schema;

use std::path::PathBuf;

use rusqlite::Connection;

use crate::error::AppError;

/// Path of the SQLite database file
pub fn get_database_path() -> PathBuf {
    PathBuf::from("./data/desplash.db")
}

/// Open the database and make sure the schema is in place
pub fn init_database() -> Result<Connection, AppError> {
    let db_path = get_database_path();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(&db_path)?;
    schema::init_schema(&conn)?;

    Ok(conn)
}
