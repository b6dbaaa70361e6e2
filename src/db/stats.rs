use crate::db::images;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

const COUNTED_TABLES: [&str; 5] = ["users", "images", "projects", "tasks", "inquiries"];

/// `db --info`: file size, per-table row counts, unassigned image pool and
/// the span of project assignment dates.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    let file_mb = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0) as f64 / (1024.0 * 1024.0);

    println!();
    println!("{CYAN}• File:{RESET} {YELLOW}{db_path}{RESET}");
    println!("{CYAN}• Size:{RESET} {file_mb:.2} MB");

    for table in COUNTED_TABLES {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
        println!("{CYAN}• {table:<10}{RESET} {GREEN}{count}{RESET}");
    }

    let unassigned = images::count_unassigned(&pool.conn)?;
    println!("{CYAN}• {:<10}{RESET} {YELLOW}{unassigned}{RESET} unassigned", "pool");

    let span: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row(
            "SELECT date(MIN(assigned_date)), date(MAX(assigned_date)) FROM projects",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let none = || format!("{GREY}--{RESET}");
    let (first, last) = match span {
        Some((f, l)) => (f.unwrap_or_else(none), l.unwrap_or_else(none)),
        None => (none(), none()),
    };

    println!("{CYAN}• Assignments:{RESET}");
    println!("    from: {first}");
    println!("    to:   {last}");
    println!();

    Ok(())
}
