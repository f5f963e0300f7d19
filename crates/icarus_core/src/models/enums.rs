//! Core enums used throughout the engine.

use serde::{Deserialize, Serialize};

/// Service lane a job is queued in.
///
/// Fixed when the job is submitted; express jobs carry a surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Standard turnaround.
    #[default]
    Regular,
    /// Expedited turnaround with surcharge.
    Express,
}

impl Priority {
    /// Both lanes, in display order.
    pub const ALL: [Priority; 2] = [Priority::Regular, Priority::Express];

    /// Get display string for UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Express => "Express",
        }
    }

    /// Parse a priority label the way the service form reports it.
    ///
    /// Anything other than "express" (case-insensitive) is regular.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("express") {
            Self::Express
        } else {
            Self::Regular
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
