//! Options controlling how a schedule is checked and paired.

use serde::{Deserialize, Serialize};

/// Switches for a single report run. Both are off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Check the raw record's shape and day names before pairing.
    /// Skipping the check never changes the output of a valid record.
    pub validate: bool,
    /// Allow a day's last open to be closed by the next day's first close
    /// (Sunday wraps to Monday).
    pub overnight: bool,
}

impl ReportOptions {
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_overnight(mut self, overnight: bool) -> Self {
        self.overnight = overnight;
        self
    }
}
