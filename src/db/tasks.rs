//! Queries for the `tasks` table.

use crate::db::bad_text;
use crate::errors::AppResult;
use crate::models::task::{Task, TaskStatus};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn map_task(row: &Row) -> rusqlite::Result<Task> {
    let status_s: String = row.get("status")?;
    let status =
        TaskStatus::from_db_str(&status_s).ok_or_else(|| bad_text("task status", &status_s))?;

    Ok(Task {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        image_id: row.get("image_id")?,
        status,
        data_json: row.get("data_json")?,
        last_updated: row.get("last_updated")?,
    })
}

pub fn insert_task(conn: &Connection, project_id: i64, image_id: i64) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO tasks (project_id, image_id) VALUES (?1, ?2)",
        params![project_id, image_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_task(conn: &Connection, id: i64) -> AppResult<Option<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, project_id, image_id, status, data_json, last_updated \
         FROM tasks WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_task).optional()?)
}

pub fn tasks_for_project(conn: &Connection, project_id: i64) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, project_id, image_id, status, data_json, last_updated \
         FROM tasks WHERE project_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([project_id], map_task)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// (total, saved) counters used for progress and the submit precondition.
pub fn task_counts(conn: &Connection, project_id: i64) -> AppResult<(i64, i64)> {
    let total: i64 = conn.query_row(
        "SELECT COUNT(id) FROM tasks WHERE project_id = ?1",
        [project_id],
        |r| r.get(0),
    )?;
    let saved: i64 = conn.query_row(
        "SELECT COUNT(id) FROM tasks WHERE project_id = ?1 AND status = 'Saved'",
        [project_id],
        |r| r.get(0),
    )?;
    Ok((total, saved))
}

/// Store the entered data as JSON and move the task to Saved.
pub fn save_entry(conn: &Connection, task_id: i64, data_json: &str) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE tasks SET data_json = ?1, status = 'Saved', last_updated = CURRENT_TIMESTAMP \
         WHERE id = ?2",
        params![data_json, task_id],
    )?;
    Ok(())
}

/// Rewrite the entered data without touching the task status
/// (review-stage corrections on an already submitted task).
pub fn update_entry(conn: &Connection, task_id: i64, data_json: &str) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE tasks SET data_json = ?1, last_updated = CURRENT_TIMESTAMP WHERE id = ?2",
        params![data_json, task_id],
    )?;
    Ok(())
}

/// Flip every task of a project to Submitted (project hand-in).
pub fn mark_all_submitted(conn: &Connection, project_id: i64) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE tasks SET status = 'Submitted' WHERE project_id = ?1",
        params![project_id],
    )?;
    Ok(())
}

/// Filename of the image behind a task, for display and export.
pub fn image_filename(conn: &Connection, task_id: i64) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached(
        "SELECT i.filename FROM tasks t JOIN images i ON t.image_id = i.id WHERE t.id = ?1",
    )?;
    Ok(stmt.query_row([task_id], |r| r.get(0)).optional()?)
}
