//! ANSI color helper utilities for terminal output.

use crate::core::monitoring::Band;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Grey for blank time cells (`""` or `--:--`).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" {
        format!("{GREY}{}{RESET}", if v.is_empty() { "--:--" } else { v })
    } else {
        value.to_string()
    }
}

/// Time-in green, time-out red, blanks grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" {
        return colorize_optional(value);
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

pub fn color_for_band(band: Band) -> &'static str {
    match band {
        Band::Green => GREEN,
        Band::Yellow => YELLOW,
        Band::Red => RED,
        Band::Neutral => RESET,
    }
}

/// Spreadsheet status colours.
pub fn colorize_status(status: &str) -> String {
    let color = match status {
        "NA" => GREY,
        "Absent" => RED,
        "Present" => GREEN,
        "Excused" => BLUE,
        "Late" => YELLOW,
        _ => RESET,
    };
    format!("{color}{status}{RESET}")
}

pub fn colorize_active(active: bool) -> String {
    if active {
        format!("{GREEN}active{RESET}")
    } else {
        format!("{RED}inactive{RESET}")
    }
}
