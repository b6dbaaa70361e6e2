//! Project creation: batch unassigned images into tasks for one employee.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{images, projects, tasks, users};
use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, UserStatus};
use chrono::{Duration, Utc};
use rusqlite::params;

pub struct AssignOutcome {
    pub project_id: i64,
    pub project_name: String,
    pub task_count: usize,
    pub expiry_date: String,
}

pub struct AssignLogic;

impl AssignLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        employee: i64,
        task_count: usize,
        cost: f64,
        deposit: f64,
        expiry_days: Option<i64>,
    ) -> AppResult<AssignOutcome> {
        if task_count == 0 {
            return Err(AppError::Other("--tasks must be at least 1".to_string()));
        }

        let user = users::get_user(&pool.conn, employee)?
            .ok_or(AppError::UserNotFound(employee))?;
        if user.role != Role::Employee || user.status != UserStatus::Active {
            return Err(AppError::Other(format!(
                "user {} ({}) is not an active employee",
                user.id, user.name
            )));
        }

        let days = expiry_days.unwrap_or(cfg.default_expiry_days);
        let expiry = (Utc::now() + Duration::days(days))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        let tx = pool.conn.transaction()?;

        let picked = images::take_unassigned(&tx, task_count)?;
        if picked.len() < task_count {
            // Transaction drops here, nothing was written.
            return Err(AppError::NotEnoughImages {
                available: picked.len(),
                requested: task_count,
            });
        }

        let project_name = projects::next_project_name(&tx, &cfg.project_prefix)?;
        let project_id =
            projects::insert_project(&tx, &project_name, employee, cost, deposit, &expiry)?;

        for image in &picked {
            tasks::insert_task(&tx, project_id, image.id)?;
            images::mark_assigned(&tx, image.id)?;
        }

        tx.execute(
            "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
            params![
                Utc::now().to_rfc3339(),
                "assign",
                &project_name,
                format!(
                    "Project {} with {} task(s) assigned to {}",
                    project_name,
                    task_count,
                    user.employee_id
                ),
            ],
        )?;

        tx.commit()?;

        Ok(AssignOutcome {
            project_id,
            project_name,
            task_count,
            expiry_date: expiry,
        })
    }
}
