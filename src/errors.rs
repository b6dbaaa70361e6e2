//! Crate-wide error type. Every layer returns `AppResult` so failures
//! surface in `main` with a single printable message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // io / database plumbing
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // input validation
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid role '{0}'. Use 'admin' or 'employee'")]
    InvalidRole(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // accounts
    #[error("No user found with id {0}")]
    UserNotFound(i64),

    #[error("An account with the email '{0}' already exists")]
    EmailTaken(String),

    #[error("Password hashing error: {0}")]
    Auth(String),

    // project / task lifecycle
    #[error("No project found with id {0}")]
    ProjectNotFound(i64),

    #[error("No task found with id {0}")]
    TaskNotFound(i64),

    #[error("Only {available} unassigned images available, {requested} requested")]
    NotEnoughImages { available: usize, requested: usize },

    #[error("Project {0} cannot be submitted: {1}")]
    NotSubmittable(String, String),

    #[error("Project {0} cannot be finalized from status '{1}'")]
    NotFinalizable(String, String),

    #[error("Project {0} expired on {1}")]
    ProjectExpired(String, String),

    #[error("Task {0} cannot be edited: {1}")]
    TaskLocked(String, String),

    // image intake
    #[error("Filename '{0}' rejected: {1}")]
    BadFilename(String, String),

    // config and exports
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
