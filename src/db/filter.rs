//! Period filters for timestamp columns.
//!
//! Supported period grammar (applied to the date part of the column):
//! - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
//! - ranges `start:end` with both sides in the same format
//! - `all` (handled by callers: no date condition at all)

use rusqlite::Result;

/// Build WHERE conditions and their parameters for an optional period filter
/// on a TIMESTAMP column such as `assigned_date`.
pub fn period_conditions(
    column: &str,
    period: Option<&str>,
) -> Result<(Vec<String>, Vec<String>)> {
    let mut conditions = Vec::new();
    let mut params: Vec<String> = Vec::new();

    let Some(p) = period else {
        return Ok((conditions, params));
    };
    if p == "all" {
        return Ok((conditions, params));
    }

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.is_empty() || end.is_empty() || start.len() != end.len() {
            return Err(rusqlite::Error::InvalidQuery);
        }

        match start.len() {
            4 => {
                // Year range, e.g. "2024:2025"
                conditions.push(format!("strftime('%Y', {}) >= ?", column));
                conditions.push(format!("strftime('%Y', {}) <= ?", column));
            }
            7 => {
                // Month range, e.g. "2025-01:2025-03"
                conditions.push(format!("strftime('%Y-%m', {}) >= ?", column));
                conditions.push(format!("strftime('%Y-%m', {}) <= ?", column));
            }
            10 => {
                // Day range, e.g. "2025-06-01:2025-06-30"
                conditions.push(format!("date({}) >= ?", column));
                conditions.push(format!("date({}) <= ?", column));
            }
            _ => return Err(rusqlite::Error::InvalidQuery),
        }
        params.push(start.to_string());
        params.push(end.to_string());
    } else {
        match p.len() {
            4 => conditions.push(format!("strftime('%Y', {}) = ?", column)),
            7 => conditions.push(format!("strftime('%Y-%m', {}) = ?", column)),
            10 => conditions.push(format!("date({}) = ?", column)),
            _ => return Err(rusqlite::Error::InvalidQuery),
        }
        params.push(p.to_string());
    }

    Ok((conditions, params))
}

/// Append a WHERE clause built from `conditions` to `query` (no-op when the
/// condition list is empty).
pub fn apply_conditions(query: &mut String, conditions: &[String]) {
    if !conditions.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));
    }
}
