use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Write any serializable row set as pretty-printed JSON.
pub(crate) fn write_json<T: Serialize>(path: &str, rows: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
