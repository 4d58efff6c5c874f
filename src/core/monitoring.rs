//! Live monitoring numbers for the active event.

use crate::models::attendance::EventStats;

/// Colour band of the attendance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Green,
    Yellow,
    Red,
    /// Nobody on the roster.
    Neutral,
}

impl EventStats {
    /// `checked / roster * 100`, one decimal. 0 when the roster is empty.
    pub fn percentage(&self) -> f64 {
        if self.total_roster_size == 0 {
            return 0.0;
        }
        let raw = self.checked_in_count as f64 / self.total_roster_size as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }

    pub fn band(&self) -> Band {
        let pct = self.percentage();
        if pct >= 75.0 {
            Band::Green
        } else if pct >= 50.0 {
            Band::Yellow
        } else if self.total_roster_size == 0 {
            Band::Neutral
        } else {
            Band::Red
        }
    }

    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage())
    }
}
