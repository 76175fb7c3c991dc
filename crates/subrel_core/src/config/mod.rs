//! Configuration management.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Defaults for every missing key
//!
//! # Example
//!
//! ```no_run
//! use subrel_core::config::{ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new(".config/subrel.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Font dirs: {:?}", config.settings().fonts.directories);
//!
//! config.settings_mut().validation.warn_on_exact_mismatch = true;
//! config.update_section(ConfigSection::Validation).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, FontSettings, LoggingSettings, Settings, ValidationSettings};
