//! Queries for the `projects` table.

use crate::db::bad_text;
use crate::db::filter::{apply_conditions, period_conditions};
use crate::errors::AppResult;
use crate::models::project::{Project, ProjectStatus};
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};

pub fn map_project(row: &Row) -> rusqlite::Result<Project> {
    let status_s: String = row.get("status")?;
    let status = ProjectStatus::from_db_str(&status_s)
        .ok_or_else(|| bad_text("project status", &status_s))?;

    Ok(Project {
        id: row.get("id")?,
        project_name: row.get("project_name")?,
        employee_id: row.get("employee_id")?,
        status,
        assigned_date: row.get("assigned_date")?,
        cost: row.get("cost")?,
        security_deposit: row.get("security_deposit")?,
        expiry_date: row.get("expiry_date")?,
        notes: row.get("notes")?,
    })
}

const PROJECT_COLUMNS: &str = "id, project_name, employee_id, status, assigned_date, \
     cost, security_deposit, expiry_date, notes";

/// Generate the next sequential project name, e.g. HL_B_001 → HL_B_002.
pub fn next_project_name(conn: &Connection, prefix: &str) -> rusqlite::Result<String> {
    let last: Option<String> = conn
        .query_row(
            "SELECT project_name FROM projects ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let next = match last {
        Some(name) => {
            let tail = name.rsplit('_').next().unwrap_or("0");
            tail.parse::<u64>().unwrap_or(0) + 1
        }
        None => 1,
    };

    Ok(format!("{}{:03}", prefix, next))
}

pub fn insert_project(
    conn: &Connection,
    project_name: &str,
    employee_id: i64,
    cost: f64,
    security_deposit: f64,
    expiry_date: &str,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO projects (project_name, employee_id, cost, security_deposit, expiry_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![project_name, employee_id, cost, security_deposit, expiry_date],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_project(conn: &Connection, id: i64) -> AppResult<Option<Project>> {
    let sql = format!("SELECT {} FROM projects WHERE id = ?1", PROJECT_COLUMNS);
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_project).optional()?)
}

pub fn set_status(conn: &Connection, id: i64, status: ProjectStatus) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE projects SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(())
}

/// List projects with optional period (on `assigned_date`), status and
/// employee filters; newest first.
pub fn list_projects(
    conn: &Connection,
    period: Option<&str>,
    status: Option<ProjectStatus>,
    employee: Option<i64>,
) -> AppResult<Vec<Project>> {
    let mut query = format!("SELECT {} FROM projects", PROJECT_COLUMNS);

    let (mut conditions, mut owned_params) = period_conditions("assigned_date", period)?;

    if let Some(s) = status {
        conditions.push("status = ?".to_string());
        owned_params.push(s.to_db_str().to_string());
    }
    if let Some(emp) = employee {
        conditions.push("employee_id = ?".to_string());
        owned_params.push(emp.to_string());
    }

    apply_conditions(&mut query, &conditions);
    query.push_str(" ORDER BY assigned_date DESC");

    let mut stmt = conn.prepare_cached(&query)?;
    let param_refs: Vec<&dyn ToSql> = owned_params.iter().map(|s| s as &dyn ToSql).collect();
    let rows = stmt.query_map(param_refs.as_slice(), map_project)?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// The approved projects that funded an employee's wallet, newest first.
pub fn approved_projects_for(conn: &Connection, employee_id: i64) -> AppResult<Vec<Project>> {
    let sql = format!(
        "SELECT {} FROM projects WHERE employee_id = ?1 AND status = 'Approved' \
         ORDER BY assigned_date DESC",
        PROJECT_COLUMNS
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([employee_id], map_project)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
