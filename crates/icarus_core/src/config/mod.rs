//! Configuration management for the Icarus Drone Service.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use icarus_core::config::{ConfigManager, ConfigSection};
//! use icarus_core::JobQueue;
//!
//! let mut config = ConfigManager::new(".config/icarus.toml");
//! config.load_or_create().unwrap();
//!
//! let queue = JobQueue::with_settings(config.settings());
//!
//! // Unlock cost editing and persist just that section
//! config.settings_mut().queue.allow_cost_edit = true;
//! config.update_section(ConfigSection::Queue).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, QueueSettings, Settings, TagSettings};
