//! Queries for the `images` table.

use crate::db::bad_text;
use crate::errors::AppResult;
use crate::models::image::{ImageRecord, ImageStatus};
use rusqlite::{Connection, Row, params};
use std::collections::HashSet;

pub fn map_image(row: &Row) -> rusqlite::Result<ImageRecord> {
    let status_s: String = row.get("status")?;
    let status =
        ImageStatus::from_db_str(&status_s).ok_or_else(|| bad_text("image status", &status_s))?;

    Ok(ImageRecord {
        id: row.get("id")?,
        filename: row.get("filename")?,
        status,
    })
}

/// All filenames already tracked, for the intake diff.
pub fn known_filenames(conn: &Connection) -> AppResult<HashSet<String>> {
    let mut stmt = conn.prepare_cached("SELECT filename FROM images")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut set = HashSet::new();
    for r in rows {
        set.insert(r?);
    }
    Ok(set)
}

/// Register new files as unassigned. Returns the number inserted.
pub fn register(conn: &mut Connection, filenames: &[String]) -> AppResult<usize> {
    if filenames.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO images (filename, status) VALUES (?1, 'unassigned')",
        )?;
        for name in filenames {
            stmt.execute([name])?;
        }
    }
    tx.commit()?;
    Ok(filenames.len())
}

pub fn count_unassigned(conn: &Connection) -> AppResult<i64> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(id) FROM images WHERE status = 'unassigned'",
        [],
        |r| r.get(0),
    )?;
    Ok(n)
}

/// Pick up to `limit` unassigned images, oldest first.
pub fn take_unassigned(conn: &Connection, limit: usize) -> rusqlite::Result<Vec<ImageRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, filename, status FROM images WHERE status = 'unassigned' \
         ORDER BY id ASC LIMIT ?1",
    )?;
    let rows = stmt.query_map([limit as i64], map_image)?;
    rows.collect()
}

pub fn mark_assigned(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE images SET status = 'assigned' WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}
