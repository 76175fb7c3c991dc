//! Subrel Core - font validation for merged subtitle releases
//!
//! This crate interprets the override tags embedded in subtitle lines,
//! indexes the font files shipped with a release and reports every line
//! whose fonts, weights, slants or glyphs cannot be honoured.

pub mod config;
pub mod fonts;
pub mod logging;
pub mod subtitles;
pub mod tags;
pub mod validation;

pub use fonts::{Catalog, FontMatch, FontMatcher, FontRecord};
pub use tags::{parse_line, RenderingState, StyleTable};
pub use validation::{validate, validate_with, Category, DiagnosticKey, DiagnosticsReport};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
