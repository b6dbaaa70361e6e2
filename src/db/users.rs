//! Queries for the `users` table.

use crate::db::bad_text;
use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, User, UserStatus};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn map_user(row: &Row) -> rusqlite::Result<User> {
    let role_s: String = row.get("role")?;
    let role = Role::from_db_str(&role_s).ok_or_else(|| bad_text("role", &role_s))?;

    let status_s: String = row.get("status")?;
    let status =
        UserStatus::from_db_str(&status_s).ok_or_else(|| bad_text("user status", &status_s))?;

    Ok(User {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        role,
        joining_date: row.get("joining_date")?,
        status,
        wallet_balance: row.get("wallet_balance")?,
        profile_picture: row.get("profile_picture")?,
        bank_details: row.get("bank_details")?,
        phone_number: row.get("phone_number")?,
        gender: row.get("gender")?,
        date_of_birth: row.get("date_of_birth")?,
        designation: row.get("designation")?,
        last_login: row.get("last_login")?,
    })
}

const USER_COLUMNS: &str = "id, employee_id, name, email, role, joining_date, status, \
     wallet_balance, profile_picture, bank_details, phone_number, gender, \
     date_of_birth, designation, last_login";

/// Generate the next sequential employee id, e.g. DT-UAO-000001 → DT-UAO-000002.
pub fn next_employee_id(conn: &Connection, prefix: &str) -> AppResult<String> {
    let last: Option<String> = conn
        .query_row(
            "SELECT employee_id FROM users ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let next = match last {
        Some(id) => {
            let tail = id.rsplit('-').next().unwrap_or("0");
            tail.parse::<u64>().unwrap_or(0) + 1
        }
        None => 1,
    };

    Ok(format!("{}{:06}", prefix, next))
}

/// Insert a new account. The email is stored lowercase and must be unique.
pub fn insert_user(
    conn: &Connection,
    employee_id: &str,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> AppResult<i64> {
    let email = email.to_lowercase();

    if find_by_email(conn, &email)?.is_some() {
        return Err(AppError::EmailTaken(email));
    }

    conn.execute(
        "INSERT INTO users (employee_id, name, email, password_hash, role)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![employee_id, name, email, password_hash, role.to_db_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_user(conn: &Connection, id: i64) -> AppResult<Option<User>> {
    let sql = format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS);
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_user).optional()?)
}

pub fn find_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    let sql = format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS);
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt
        .query_row([email.to_lowercase()], map_user)
        .optional()?)
}

pub fn list_users(conn: &Connection) -> AppResult<Vec<User>> {
    let sql = format!("SELECT {} FROM users ORDER BY name ASC", USER_COLUMNS);
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([], map_user)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Update the optional profile fields; a `None` leaves the stored value
/// untouched.
pub fn update_profile(
    conn: &Connection,
    id: i64,
    phone: Option<&str>,
    gender: Option<&str>,
    date_of_birth: Option<&str>,
    designation: Option<&str>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET
             phone_number  = COALESCE(?1, phone_number),
             gender        = COALESCE(?2, gender),
             date_of_birth = COALESCE(?3, date_of_birth),
             designation   = COALESCE(?4, designation)
         WHERE id = ?5",
        params![phone, gender, date_of_birth, designation, id],
    )?;
    Ok(())
}

pub fn set_status(conn: &Connection, id: i64, status: UserStatus) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(())
}

/// Add `amount` to the wallet balance. Callers wrap this in the same
/// transaction as the status change that justifies the credit.
pub fn credit_wallet(conn: &Connection, id: i64, amount: f64) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE users SET wallet_balance = wallet_balance + ?1 WHERE id = ?2",
        params![amount, id],
    )?;
    Ok(())
}

/// Projects assigned / completed counters for the details view.
/// "Completed" means the project left In Progress.
pub fn project_counts(conn: &Connection, user_id: i64) -> AppResult<(i64, i64)> {
    let assigned: i64 = conn.query_row(
        "SELECT COUNT(id) FROM projects WHERE employee_id = ?1",
        [user_id],
        |r| r.get(0),
    )?;
    let completed: i64 = conn.query_row(
        "SELECT COUNT(id) FROM projects WHERE employee_id = ?1 \
         AND status IN ('In Review', 'Approved', 'Rejected')",
        [user_id],
        |r| r.get(0),
    )?;
    Ok((assigned, completed))
}
