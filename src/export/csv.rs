use crate::errors::{AppError, AppResult};
use csv::Writer;

/// Write headers plus pre-flattened string rows to a CSV file.
pub(crate) fn write_csv(path: &str, headers: &[&'static str], rows: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(headers)
        .map_err(|e| AppError::Export(e.to_string()))?;
    for row in rows {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
