//! Section spreadsheet display rules.

use crate::models::section::SheetRow;

pub const STATUS_NA: &str = "NA";
pub const STATUS_PRESENT: &str = "Present";
pub const STATUS_ABSENT: &str = "Absent";

/// A time cell counts when it is neither blank nor the `--:--` placeholder.
pub fn has_time(cell: &str) -> bool {
    let t = cell.trim();
    !t.is_empty() && t != "--:--"
}

impl SheetRow {
    pub fn has_attendance(&self) -> bool {
        [&self.am_in, &self.am_out, &self.pm_in, &self.pm_out]
            .iter()
            .any(|c| has_time(c))
    }

    /// Status as shown in the sheet. Without any time cell Present, Absent
    /// and blank read as `NA`; with one, a blank status reads as `Present`.
    /// Anything else (Excused, Late, ...) passes through.
    pub fn display_status(&self) -> &str {
        let status = self.status.trim();
        if !self.has_attendance() {
            if status.is_empty() || status == STATUS_PRESENT || status == STATUS_ABSENT {
                return STATUS_NA;
            }
        } else if status.is_empty() {
            return STATUS_PRESENT;
        }
        status
    }
}
