//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Render a money amount with two decimals and the configured currency
/// symbol, e.g. `₹1500.00`.
pub fn money(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Saved-task progress as an integer percentage (0 when there are no tasks).
pub fn progress_percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(1500.0, "₹"), "₹1500.00");
        assert_eq!(money(0.5, "$"), "$0.50");
    }

    #[test]
    fn progress_rounds_down() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(3, 3), 100);
    }
}
