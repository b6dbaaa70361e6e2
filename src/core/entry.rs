//! Data entry on a single task.

use crate::db::pool::DbPool;
use crate::db::{log, projects, tasks};
use crate::errors::{AppError, AppResult};
use crate::models::project::{Project, ProjectStatus};
use crate::models::task::{Task, TaskEntry};
use chrono::{NaiveDateTime, Utc};

pub struct EntryLogic;

impl EntryLogic {
    /// Merge the provided fields over the task's saved data and store the
    /// result; the task moves to Saved. Refused when the project already
    /// left In Progress or is past its expiry date.
    ///
    /// With `allow_review` set, data on an In Review project can still be
    /// corrected; the task keeps its Submitted status and the expiry check
    /// does not apply.
    pub fn save(
        pool: &mut DbPool,
        task_id: i64,
        patch: TaskEntry,
        allow_review: bool,
    ) -> AppResult<Task> {
        let task = tasks::get_task(&pool.conn, task_id)?
            .ok_or(AppError::TaskNotFound(task_id))?;
        let project = projects::get_project(&pool.conn, task.project_id)?
            .ok_or(AppError::ProjectNotFound(task.project_id))?;

        let review_edit = allow_review && project.status == ProjectStatus::InReview;

        if project.status != ProjectStatus::InProgress && !review_edit {
            return Err(AppError::TaskLocked(
                task.label(),
                format!("project {} is {}", project.project_name, project.status.to_db_str()),
            ));
        }
        if !review_edit {
            check_not_expired(&project)?;
        }

        let mut entry = task.entry();
        merge(&mut entry, patch);

        let json = serde_json::to_string(&entry)
            .map_err(|e| AppError::Other(format!("cannot encode entry data: {}", e)))?;

        if review_edit {
            tasks::update_entry(&pool.conn, task_id, &json)?;
        } else {
            tasks::save_entry(&pool.conn, task_id, &json)?;
        }

        log::ttlog(
            &pool.conn,
            "entry",
            &task.label(),
            &if review_edit {
                format!("Data corrected in review for {}", task.label())
            } else {
                format!("Progress saved for {}", task.label())
            },
        )?;

        // Re-read so the caller sees the Saved status and timestamp.
        tasks::get_task(&pool.conn, task_id)?.ok_or(AppError::TaskNotFound(task_id))
    }
}

/// Expiry dates are stored as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn check_not_expired(project: &Project) -> AppResult<()> {
    let Some(exp) = project.expiry_date.as_deref() else {
        return Ok(());
    };

    let expiry = NaiveDateTime::parse_from_str(exp, "%Y-%m-%d %H:%M:%S")
        .map_err(|_| AppError::InvalidDate(exp.to_string()))?;

    if Utc::now().naive_utc() > expiry {
        return Err(AppError::ProjectExpired(
            project.project_name.clone(),
            exp.to_string(),
        ));
    }
    Ok(())
}

fn merge(entry: &mut TaskEntry, patch: TaskEntry) {
    if patch.name.is_some() {
        entry.name = patch.name;
    }
    if patch.age.is_some() {
        entry.age = patch.age;
    }
    if patch.mobile_number.is_some() {
        entry.mobile_number = patch.mobile_number;
    }
    if patch.sex.is_some() {
        entry.sex = patch.sex;
    }
    if patch.address.is_some() {
        entry.address = patch.address;
    }
    if patch.receipt_number.is_some() {
        entry.receipt_number = patch.receipt_number;
    }
}
