//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Queue policy.
    #[serde(default)]
    pub queue: QueueSettings,

    /// Service tag allocation.
    #[serde(default)]
    pub tags: TagSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Check cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), String> {
        self.tags.validate()
    }
}

/// Queue policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSettings {
    /// Allow `update` to replace the cost of a queued job.
    ///
    /// Off by default: once the express surcharge has been applied the
    /// quoted cost is locked.
    #[serde(default)]
    pub allow_cost_edit: bool,

    /// Express surcharge in basis points (1500 = 15%).
    #[serde(default = "default_surcharge_bps")]
    pub express_surcharge_bps: u32,
}

fn default_surcharge_bps() -> u32 {
    1500
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            allow_cost_edit: false,
            express_surcharge_bps: default_surcharge_bps(),
        }
    }
}

/// Service tag allocation range `[start, limit)` stepping by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSettings {
    /// First tag issued, and the value the counter wraps back to.
    #[serde(default = "default_tag_start")]
    pub start: u32,

    /// Increment between consecutive tags.
    #[serde(default = "default_tag_step")]
    pub step: u32,

    /// Exclusive upper bound.
    #[serde(default = "default_tag_limit")]
    pub limit: u32,
}

fn default_tag_start() -> u32 {
    100
}

fn default_tag_step() -> u32 {
    10
}

fn default_tag_limit() -> u32 {
    900
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            start: default_tag_start(),
            step: default_tag_step(),
            limit: default_tag_limit(),
        }
    }
}

impl TagSettings {
    fn validate(&self) -> Result<(), String> {
        if self.step == 0 {
            return Err("tags.step must be greater than zero".to_string());
        }
        if self.limit <= self.start {
            return Err(format!(
                "tags.limit ({}) must be greater than tags.start ({})",
                self.limit, self.start
            ));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Include the event target (module path) in output.
    #[serde(default = "default_true")]
    pub with_target: bool,

    /// Folder for the trace log file. Empty disables file logging.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Trace log file name inside `logs_folder`.
    #[serde(default = "default_log_file")]
    pub file_name: String,
}

fn default_true() -> bool {
    true
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

fn default_log_file() -> String {
    "trace.log".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            with_target: true,
            logs_folder: default_logs_folder(),
            file_name: default_log_file(),
        }
    }
}

/// Config sections that can be rewritten independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Queue,
    Tags,
    Logging,
}

impl ConfigSection {
    /// Every section, in file order.
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Queue,
        ConfigSection::Tags,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Queue => "queue",
            ConfigSection::Tags => "tags",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section in a generated file.
    pub fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Queue => "# Queue policy (cost locking, express surcharge)",
            ConfigSection::Tags => "# Service tag allocation range",
            ConfigSection::Logging => "# Logging configuration",
        }
    }
}
