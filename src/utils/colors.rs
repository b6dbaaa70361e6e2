/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Status color: Approved → green, Rejected → red, In Review → yellow,
/// everything else → reset.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "Approved" | "active" => GREEN,
        "Rejected" | "inactive" => RED,
        "In Review" => YELLOW,
        _ => RESET,
    }
}
