use rusqlite::{Connection, OptionalExtension};
use unsplash_api::{Photo, PhotoPage};

use crate::error::AppError;
use crate::models::Favorite;

/// Find the favorite row for a (photo, user) pair, if present
pub fn find(
    conn: &Connection,
    photo_id: &str,
    user_uid: &str,
) -> Result<Option<Favorite>, AppError> {
    let row = conn
        .query_row(
            "SELECT id, photo_id, user_uid, photo_json, created_at
             FROM favorites WHERE photo_id = ?1 AND user_uid = ?2",
            (photo_id, user_uid),
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            },
        )
        .optional()?;

    match row {
        Some((id, photo_id, user_uid, photo_json, created_at)) => {
            let photo: Photo = serde_json::from_str(&photo_json)?;
            Ok(Some(Favorite {
                id,
                photo_id,
                user_uid,
                photo,
                created_at,
            }))
        }
        None => Ok(None),
    }
}

/// Whether a (photo, user) pair is already favorited
pub fn exists(conn: &Connection, photo_id: &str, user_uid: &str) -> Result<bool, AppError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM favorites WHERE photo_id = ?1 AND user_uid = ?2",
        (photo_id, user_uid),
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Store a photo snapshot as a favorite of the given user.
///
/// Callers are expected to have checked [`find`]/[`exists`] first; the
/// store itself does not reject duplicates.
pub fn add(conn: &Connection, photo: &Photo, user_uid: &str) -> Result<i64, AppError> {
    let photo_json = serde_json::to_string(photo)?;

    conn.execute(
        "INSERT INTO favorites (photo_id, user_uid, photo_json) VALUES (?1, ?2, ?3)",
        (&photo.id, user_uid, &photo_json),
    )?;

    Ok(conn.last_insert_rowid())
}

/// Delete a favorite by row id
pub fn remove(conn: &Connection, favorite_id: i64) -> Result<(), AppError> {
    let rows_affected = conn.execute("DELETE FROM favorites WHERE id = ?1", [favorite_id])?;

    if rows_affected == 0 {
        return Err(AppError::NotFound("Favorite".to_string()));
    }

    Ok(())
}

/// Check-then-act toggle: removes the favorite when present, adds it
/// otherwise. Returns whether the photo is favorited afterwards.
///
/// Not atomic across processes; two concurrent toggles can race, exactly as
/// two browser tabs could against the stock store.
pub fn toggle(conn: &Connection, photo: &Photo, user_uid: &str) -> Result<bool, AppError> {
    match find(conn, &photo.id, user_uid)? {
        Some(favorite) => {
            remove(conn, favorite.id)?;
            Ok(false)
        }
        None => {
            add(conn, photo, user_uid)?;
            Ok(true)
        }
    }
}

/// All favorites of one user, oldest first
pub fn list_for_user(conn: &Connection, user_uid: &str) -> Result<Vec<Favorite>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT id, photo_id, user_uid, photo_json, created_at
         FROM favorites WHERE user_uid = ?1 ORDER BY id",
    )?;

    let rows = stmt
        .query_map([user_uid], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut favorites = Vec::with_capacity(rows.len());
    for (id, photo_id, user_uid, photo_json, created_at) in rows {
        favorites.push(Favorite {
            id,
            photo_id,
            user_uid,
            photo: serde_json::from_str(&photo_json)?,
            created_at,
        });
    }

    Ok(favorites)
}

/// One page of a user's favorites in the same envelope the upstream feeds
/// use, so the favorites screen runs through the ordinary feed session
pub fn page_for_user(
    conn: &Connection,
    user_uid: &str,
    page: u32,
    per_page: u32,
) -> Result<PhotoPage, AppError> {
    let total: i64 = conn.query_row(
        "SELECT COUNT(*) FROM favorites WHERE user_uid = ?1",
        [user_uid],
        |row| row.get(0),
    )?;

    let offset = i64::from(page.saturating_sub(1)) * i64::from(per_page);

    let mut stmt = conn.prepare(
        "SELECT photo_json FROM favorites WHERE user_uid = ?1
         ORDER BY id LIMIT ?2 OFFSET ?3",
    )?;
    let json_rows = stmt
        .query_map((user_uid, i64::from(per_page), offset), |row| {
            row.get::<_, String>(0)
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut photos = Vec::with_capacity(json_rows.len());
    for json in json_rows {
        photos.push(serde_json::from_str(&json)?);
    }

    let next_id = if offset + i64::from(per_page) < total {
        Some(page + 1)
    } else {
        None
    };

    Ok(PhotoPage {
        photos,
        next_id,
        prev_id: if page > 1 { Some(page - 1) } else { None },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::database::schema::init_schema(&conn).unwrap();
        conn
    }

    fn photo(id: &str) -> Photo {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "created_at": "2023-04-12T08:30:00Z",
            "width": 4000,
            "height": 3000,
            "urls": {
                "raw": "https://images.example.com/p?raw",
                "full": "https://images.example.com/p?full",
                "regular": "https://images.example.com/p?regular",
                "small": "https://images.example.com/p?small",
                "thumb": "https://images.example.com/p?thumb"
            },
            "links": {
                "self": "https://api.example.com/photos/p",
                "html": "https://example.com/photos/p",
                "download": "https://example.com/photos/p/download"
            },
            "user": {
                "id": "u-1",
                "username": "jdoe",
                "name": "Jane Doe",
                "profile_image": {"small": "s", "medium": "m", "large": "l"}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_exists_after_add_and_not_after_remove() {
        let conn = setup_test_db();

        assert!(!exists(&conn, "A", "uid-1").unwrap());

        let fav_id = add(&conn, &photo("A"), "uid-1").unwrap();
        assert!(exists(&conn, "A", "uid-1").unwrap());

        remove(&conn, fav_id).unwrap();
        assert!(!exists(&conn, "A", "uid-1").unwrap());
    }

    #[test]
    fn test_favorites_are_scoped_per_user() {
        let conn = setup_test_db();
        add(&conn, &photo("A"), "uid-1").unwrap();

        assert!(exists(&conn, "A", "uid-1").unwrap());
        assert!(!exists(&conn, "A", "uid-2").unwrap());
    }

    #[test]
    fn test_snapshot_roundtrips_through_the_store() {
        let conn = setup_test_db();
        let original = photo("A");
        add(&conn, &original, "uid-1").unwrap();

        let favorite = find(&conn, "A", "uid-1").unwrap().unwrap();
        assert_eq!(favorite.photo, original);
        assert_eq!(favorite.photo_id, "A");
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let conn = setup_test_db();
        let p = photo("A");

        assert!(toggle(&conn, &p, "uid-1").unwrap());
        assert!(exists(&conn, "A", "uid-1").unwrap());

        assert!(!toggle(&conn, &p, "uid-1").unwrap());
        assert!(!exists(&conn, "A", "uid-1").unwrap());

        // Check-then-act keeps it at one row per pair
        assert!(toggle(&conn, &p, "uid-1").unwrap());
        let all = list_for_user(&conn, "uid-1").unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_remove_missing_favorite_is_not_found() {
        let conn = setup_test_db();
        assert!(matches!(remove(&conn, 999), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_paging_slices_in_insertion_order() {
        let conn = setup_test_db();
        for i in 0..25 {
            add(&conn, &photo(&format!("p{:02}", i)), "uid-1").unwrap();
        }

        let page1 = page_for_user(&conn, "uid-1", 1, 10).unwrap();
        assert_eq!(page1.photos.len(), 10);
        assert_eq!(page1.photos[0].id, "p00");
        assert_eq!(page1.next_id, Some(2));
        assert_eq!(page1.prev_id, None);

        let page2 = page_for_user(&conn, "uid-1", 2, 10).unwrap();
        assert_eq!(page2.photos[0].id, "p10");
        assert_eq!(page2.next_id, Some(3));
        assert_eq!(page2.prev_id, Some(1));

        let page3 = page_for_user(&conn, "uid-1", 3, 10).unwrap();
        assert_eq!(page3.photos.len(), 5);
        assert_eq!(page3.next_id, None);
    }

    #[test]
    fn test_page_past_the_end_is_empty_and_final() {
        let conn = setup_test_db();
        add(&conn, &photo("A"), "uid-1").unwrap();

        let page = page_for_user(&conn, "uid-1", 5, 10).unwrap();
        assert!(page.photos.is_empty());
        assert_eq!(page.next_id, None);
    }
}
