//! Queries for the `inquiries` table.

use crate::errors::AppResult;
use crate::models::inquiry::Inquiry;
use rusqlite::{Connection, Row, params};

pub fn map_inquiry(row: &Row) -> rusqlite::Result<Inquiry> {
    Ok(Inquiry {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        mobile_number: row.get("mobile_number")?,
        message: row.get("message")?,
        submitted_at: row.get("submitted_at")?,
    })
}

pub fn insert_inquiry(
    conn: &Connection,
    name: &str,
    email: &str,
    mobile_number: Option<&str>,
    message: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO inquiries (name, email, mobile_number, message)
         VALUES (?1, ?2, ?3, ?4)",
        params![name, email, mobile_number, message],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_inquiries(conn: &Connection) -> AppResult<Vec<Inquiry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, email, mobile_number, message, submitted_at \
         FROM inquiries ORDER BY submitted_at DESC",
    )?;
    let rows = stmt.query_map([], map_inquiry)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
