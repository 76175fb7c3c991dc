//! Settings struct with TOML-based sections.
//!
//! Each section maps to one TOML table and can be rewritten on its own.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::validation::Category;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Font discovery.
    #[serde(default)]
    pub fonts: FontSettings,

    /// Validation behaviour.
    #[serde(default)]
    pub validation: ValidationSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where fonts are looked up and how they are loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontSettings {
    /// Directories scanned for font files, in priority order.
    #[serde(default)]
    pub directories: Vec<String>,

    /// Recognised font file extensions (case-insensitive).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Load font files on the rayon thread pool.
    #[serde(default = "default_true")]
    pub parallel_load: bool,
}

fn default_extensions() -> Vec<String> {
    crate::fonts::DEFAULT_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            extensions: default_extensions(),
            parallel_load: true,
        }
    }
}

/// Validation behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Skip font and glyph checks for drawing-mode text.
    #[serde(default = "default_true")]
    pub ignore_drawings: bool,

    /// Report weight and italic mismatches on exact-name matches too.
    #[serde(default)]
    pub warn_on_exact_mismatch: bool,

    /// Line numbers listed per diagnostic before truncating.
    #[serde(default = "default_line_display_limit")]
    pub line_display_limit: usize,

    /// Categories that make a report fail.
    #[serde(default = "default_blocking")]
    pub blocking: Vec<Category>,
}

fn default_line_display_limit() -> usize {
    10
}

fn default_blocking() -> Vec<Category> {
    vec![Category::MissingFont, Category::MissingGlyphs]
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            ignore_drawings: true,
            warn_on_exact_mismatch: false,
            line_display_limit: default_line_display_limit(),
            blocking: default_blocking(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is unset.
    #[serde(default)]
    pub level: LogLevel,
}

/// Configuration sections for atomic updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Fonts,
    Validation,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 3] = [Self::Fonts, Self::Validation, Self::Logging];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Fonts => "fonts",
            ConfigSection::Validation => "validation",
            ConfigSection::Logging => "logging",
        }
    }
}
