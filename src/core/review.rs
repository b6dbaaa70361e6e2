//! Project lifecycle: hand-in and review decisions.

use crate::db::pool::DbPool;
use crate::db::{projects, tasks, users};
use crate::errors::{AppError, AppResult};
use crate::models::project::{Project, ProjectStatus};
use chrono::Utc;
use rusqlite::params;

pub struct FinalizeOutcome {
    pub project: Project,
    /// Amount credited to the employee wallet (approve only).
    pub credited: Option<f64>,
}

pub struct ReviewLogic;

impl ReviewLogic {
    /// Employee hand-in: In Progress → In Review, every task → Submitted.
    /// Only allowed once every task has been saved.
    pub fn submit(pool: &mut DbPool, project_id: i64) -> AppResult<Project> {
        let project = projects::get_project(&pool.conn, project_id)?
            .ok_or(AppError::ProjectNotFound(project_id))?;

        if project.status != ProjectStatus::InProgress {
            return Err(AppError::NotSubmittable(
                project.project_name,
                format!("status is {}", project.status.to_db_str()),
            ));
        }

        let (total, saved) = tasks::task_counts(&pool.conn, project_id)?;
        if total == 0 || saved < total {
            return Err(AppError::NotSubmittable(
                project.project_name,
                format!("{}/{} tasks saved", saved, total),
            ));
        }

        let tx = pool.conn.transaction()?;
        projects::set_status(&tx, project_id, ProjectStatus::InReview)?;
        tasks::mark_all_submitted(&tx, project_id)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
            params![
                Utc::now().to_rfc3339(),
                "submit",
                &project.project_name,
                format!("Project {} submitted for review", project.project_name),
            ],
        )?;
        tx.commit()?;

        projects::get_project(&pool.conn, project_id)?
            .ok_or(AppError::ProjectNotFound(project_id))
    }

    /// Review decision on a project In Review. Approval credits the project
    /// cost to the employee wallet in the same transaction as the status
    /// change; rejection only flips the status.
    pub fn finalize(pool: &mut DbPool, project_id: i64, approve: bool) -> AppResult<FinalizeOutcome> {
        let project = projects::get_project(&pool.conn, project_id)?
            .ok_or(AppError::ProjectNotFound(project_id))?;

        if project.status != ProjectStatus::InReview {
            return Err(AppError::NotFinalizable(
                project.project_name,
                project.status.to_db_str().to_string(),
            ));
        }

        let tx = pool.conn.transaction()?;

        let (new_status, credited) = if approve {
            users::credit_wallet(&tx, project.employee_id, project.cost)?;
            (ProjectStatus::Approved, Some(project.cost))
        } else {
            (ProjectStatus::Rejected, None)
        };

        projects::set_status(&tx, project_id, new_status)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
            params![
                Utc::now().to_rfc3339(),
                "finalize",
                &project.project_name,
                format!(
                    "Project {} {}",
                    project.project_name,
                    new_status.to_db_str().to_lowercase()
                ),
            ],
        )?;
        tx.commit()?;

        let project = projects::get_project(&pool.conn, project_id)?
            .ok_or(AppError::ProjectNotFound(project_id))?;

        Ok(FinalizeOutcome { project, credited })
    }
}
