use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

fn bad(msg: &str) -> AppError {
    AppError::Export(msg.to_string())
}

/// Parse --range (year / month / day / interval) into inclusive day bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(bad("start and end must have same format"));
        }

        match start.len() {
            // YYYY:YYYY
            4 => {
                let ys: i32 = start.parse().map_err(|_| bad("invalid start year"))?;
                let ye: i32 = end.parse().map_err(|_| bad("invalid end year"))?;

                let d1 = NaiveDate::from_ymd_opt(ys, 1, 1).ok_or_else(|| bad("invalid start date"))?;
                let d2 =
                    NaiveDate::from_ymd_opt(ye, 12, 31).ok_or_else(|| bad("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM:YYYY-MM
            7 => {
                let d1 = month_first_day(start)?;
                let d2 = month_last_date(end)?;
                Ok((d1, d2))
            }
            // YYYY-MM-DD:YYYY-MM-DD
            10 => {
                let d1 = NaiveDate::parse_from_str(start, "%Y-%m-%d")
                    .map_err(|_| bad("invalid start date"))?;
                let d2 = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                    .map_err(|_| bad("invalid end date"))?;
                Ok((d1, d2))
            }
            _ => Err(bad("unsupported range format")),
        }
    } else {
        match r.len() {
            // YYYY
            4 => {
                let y: i32 = r.parse().map_err(|_| bad("invalid year"))?;
                let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid start date"))?;
                let d2 =
                    NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM
            7 => Ok((month_first_day(r)?, month_last_date(r)?)),
            // YYYY-MM-DD
            10 => {
                let d = NaiveDate::parse_from_str(r, "%Y-%m-%d")
                    .map_err(|_| bad("invalid date"))?;
                Ok((d, d))
            }
            _ => Err(bad("unsupported --range format")),
        }
    }
}

fn month_first_day(ym: &str) -> AppResult<NaiveDate> {
    let y: i32 = ym
        .get(0..4)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| bad("invalid year"))?;
    let m: u32 = ym
        .get(5..7)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| bad("invalid month"))?;
    NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| bad("invalid month"))
}

fn month_last_date(ym: &str) -> AppResult<NaiveDate> {
    use chrono::Datelike;
    let first = month_first_day(ym)?;
    let last = month_last_day(first.year(), first.month());
    NaiveDate::from_ymd_opt(first.year(), first.month(), last)
        .ok_or_else(|| bad("invalid month"))
}

fn month_last_day(y: i32, m: u32) -> u32 {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}
