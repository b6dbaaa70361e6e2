use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::model::{
    ProjectExport, TaskExport, project_headers, project_to_row, task_headers, task_to_row,
};
use crate::export::range::parse_range;
use crate::export::{ExportFormat, csv, fs_utils, json, notify_export_success};
use crate::models::task::TaskEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, ToSql};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn run(
        pool: &DbPool,
        format: &ExportFormat,
        file: &str,
        range: Option<&str>,
        tasks: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::ensure_writable(path, force)?;

        let bounds = match range {
            Some(r) if r != "all" => Some(parse_range(r)?),
            _ => None,
        };

        if tasks {
            let rows = load_tasks(&pool.conn, bounds)?;
            match format {
                ExportFormat::Csv => {
                    let table: Vec<Vec<String>> = rows.iter().map(task_to_row).collect();
                    csv::write_csv(file, &task_headers(), &table)?;
                }
                ExportFormat::Json => json::write_json(file, &rows)?,
            }
            notify_export_success("Tasks", path);
        } else {
            let rows = load_projects(&pool.conn, bounds)?;
            match format {
                ExportFormat::Csv => {
                    let table: Vec<Vec<String>> = rows.iter().map(project_to_row).collect();
                    csv::write_csv(file, &project_headers(), &table)?;
                }
                ExportFormat::Json => json::write_json(file, &rows)?,
            }
            notify_export_success("Projects", path);
        }

        Ok(())
    }
}

fn bounds_params(bounds: &Option<(NaiveDate, NaiveDate)>) -> Vec<String> {
    match bounds {
        Some((d1, d2)) => vec![
            d1.format("%Y-%m-%d").to_string(),
            d2.format("%Y-%m-%d").to_string(),
        ],
        None => Vec::new(),
    }
}

fn load_projects(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<ProjectExport>> {
    let mut sql = "SELECT p.id, p.project_name, u.employee_id AS emp_code, \
         u.name AS employee_name, p.status, p.assigned_date, p.cost, \
         p.security_deposit, p.expiry_date \
         FROM projects p JOIN users u ON p.employee_id = u.id"
        .to_string();

    if bounds.is_some() {
        sql.push_str(" WHERE date(p.assigned_date) BETWEEN ?1 AND ?2");
    }
    sql.push_str(" ORDER BY p.assigned_date ASC");

    let owned = bounds_params(&bounds);
    let params: Vec<&dyn ToSql> = owned.iter().map(|s| s as &dyn ToSql).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params.as_slice(), |row| {
        Ok(ProjectExport {
            id: row.get("id")?,
            project_name: row.get("project_name")?,
            employee_id: row.get("emp_code")?,
            employee_name: row.get("employee_name")?,
            status: row.get("status")?,
            assigned_date: row.get("assigned_date")?,
            cost: row.get("cost")?,
            security_deposit: row.get("security_deposit")?,
            expiry_date: row
                .get::<_, Option<String>>("expiry_date")?
                .unwrap_or_default(),
        })
    })?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn load_tasks(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<TaskExport>> {
    let mut sql = "SELECT t.id, p.project_name, i.filename, t.status, t.data_json, t.last_updated \
         FROM tasks t \
         JOIN projects p ON t.project_id = p.id \
         JOIN images i ON t.image_id = i.id"
        .to_string();

    if bounds.is_some() {
        sql.push_str(" WHERE date(p.assigned_date) BETWEEN ?1 AND ?2");
    }
    sql.push_str(" ORDER BY t.id ASC");

    let owned = bounds_params(&bounds);
    let params: Vec<&dyn ToSql> = owned.iter().map(|s| s as &dyn ToSql).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params.as_slice(), |row| {
        let data_json: Option<String> = row.get("data_json")?;
        let entry: TaskEntry = data_json
            .as_deref()
            .and_then(|j| serde_json::from_str(j).ok())
            .unwrap_or_default();

        Ok(TaskExport {
            id: row.get("id")?,
            project_name: row.get("project_name")?,
            filename: row.get("filename")?,
            status: row.get("status")?,
            name: entry.name.unwrap_or_default(),
            age: entry.age.unwrap_or_default(),
            mobile_number: entry.mobile_number.unwrap_or_default(),
            sex: entry.sex.unwrap_or_default(),
            address: entry.address.unwrap_or_default(),
            receipt_number: entry.receipt_number.unwrap_or_default(),
            last_updated: row
                .get::<_, Option<String>>("last_updated")?
                .unwrap_or_default(),
        })
    })?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
