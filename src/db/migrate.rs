//! Schema creation and upgrades.
//!
//! Everything uses `CREATE TABLE IF NOT EXISTS` plus column-presence checks,
//! so running the initializer against an existing `dems.db` verifies the
//! schema and never destroys data.

use crate::ui::messages::warning;
use rusqlite::{Connection, Result};

/// Run all pending migrations in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_base_tables(conn)?;
    migrate_add_profile_columns_to_users(conn)?;
    migrate_add_notes_to_projects(conn)?;
    migrate_add_last_updated_to_tasks(conn)?;
    Ok(())
}

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the application tables with the modern schema.
fn create_base_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id     TEXT NOT NULL UNIQUE,
            name            TEXT NOT NULL,
            email           TEXT NOT NULL UNIQUE,
            password_hash   TEXT NOT NULL,
            role            TEXT NOT NULL CHECK(role IN ('admin','employee')),
            joining_date    TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            status          TEXT NOT NULL DEFAULT 'active' CHECK(status IN ('active','inactive')),
            wallet_balance  REAL NOT NULL DEFAULT 0.0,
            profile_picture TEXT,
            bank_details    TEXT,
            phone_number    TEXT,
            gender          TEXT,
            date_of_birth   DATE,
            designation     TEXT,
            last_login      TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS images (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            filename TEXT NOT NULL UNIQUE,
            status   TEXT NOT NULL DEFAULT 'unassigned' CHECK(status IN ('unassigned','assigned'))
        );

        CREATE TABLE IF NOT EXISTS projects (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            project_name     TEXT NOT NULL UNIQUE,
            employee_id      INTEGER NOT NULL,
            status           TEXT NOT NULL DEFAULT 'In Progress'
                             CHECK(status IN ('In Progress','In Review','Approved','Rejected')),
            assigned_date    TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            cost             REAL NOT NULL DEFAULT 0.0,
            security_deposit REAL NOT NULL DEFAULT 0.0,
            expiry_date      TIMESTAMP,
            notes            TEXT,
            FOREIGN KEY (employee_id) REFERENCES users (id)
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id   INTEGER NOT NULL,
            image_id     INTEGER NOT NULL,
            status       TEXT NOT NULL DEFAULT 'Pending'
                         CHECK(status IN ('Pending','Saved','Submitted')),
            data_json    TEXT,
            last_updated TIMESTAMP,
            FOREIGN KEY (project_id) REFERENCES projects (id),
            FOREIGN KEY (image_id) REFERENCES images (id)
        );

        CREATE TABLE IF NOT EXISTS inquiries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            email         TEXT NOT NULL,
            mobile_number TEXT,
            message       TEXT NOT NULL,
            submitted_at  TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_images_status ON images(status);
        CREATE INDEX IF NOT EXISTS idx_projects_employee ON projects(employee_id);
        CREATE INDEX IF NOT EXISTS idx_projects_status ON projects(status);
        CREATE INDEX IF NOT EXISTS idx_tasks_project ON tasks(project_id);
        "#,
    )?;
    Ok(())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Databases created before the profile rework are missing the enhanced
/// profile fields on `users`.
fn migrate_add_profile_columns_to_users(conn: &Connection) -> Result<()> {
    let additions = [
        ("phone_number", "TEXT"),
        ("gender", "TEXT"),
        ("date_of_birth", "DATE"),
        ("designation", "TEXT"),
        ("last_login", "TIMESTAMP"),
    ];

    for (col, ty) in additions {
        if !has_column(conn, "users", col)? {
            warning(format!("Adding '{}' column to users table...", col));
            conn.execute_batch(&format!("ALTER TABLE users ADD COLUMN {} {};", col, ty))?;
        }
    }
    Ok(())
}

/// `notes` holds admin comments on a project; added after the first release.
fn migrate_add_notes_to_projects(conn: &Connection) -> Result<()> {
    if !has_column(conn, "projects", "notes")? {
        warning("Adding 'notes' column to projects table...");
        conn.execute_batch("ALTER TABLE projects ADD COLUMN notes TEXT;")?;
    }
    Ok(())
}

fn migrate_add_last_updated_to_tasks(conn: &Connection) -> Result<()> {
    if !has_column(conn, "tasks", "last_updated")? {
        warning("Adding 'last_updated' column to tasks table...");
        conn.execute_batch("ALTER TABLE tasks ADD COLUMN last_updated TIMESTAMP;")?;
    }
    Ok(())
}
