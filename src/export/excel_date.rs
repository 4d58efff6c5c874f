// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Interpret a report cell as a clock time or a calendar date and return
/// the Excel number format with the serial value.
pub(crate) fn parse_to_excel_serial(s: &str) -> Option<(&'static str, f64)> {
    let s = s.trim();

    // check-in times come as "08:15 AM"
    if let Ok(t) = NaiveTime::parse_from_str(s, "%I:%M %p") {
        return Some(("hh:mm AM/PM", time_serial(t)));
    }

    for fmt in ["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(("hh:mm", time_serial(t)));
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date_serial(d).map(|serial| ("yyyy-mm-dd", serial));
    }

    None
}

fn time_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}

fn date_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}
