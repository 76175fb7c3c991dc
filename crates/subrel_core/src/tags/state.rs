//! Rendering state and per-document style baselines.

use std::collections::HashMap;

use crate::subtitles::SubtitleStyle;

/// Regular weight on the nominal 100-900 scale.
pub const WEIGHT_REGULAR: u16 = 400;

/// Bold weight on the nominal 100-900 scale.
pub const WEIGHT_BOLD: u16 = 700;

/// Font attributes in effect for a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderingState {
    /// Requested font name, as written in the script.
    pub font: String,
    /// Italic requested.
    pub italic: bool,
    /// Requested weight (100-900).
    pub weight: u16,
    /// Text is vector drawing commands rather than glyphs.
    pub drawing: bool,
}

impl RenderingState {
    /// Create a non-drawing state.
    pub fn new(font: impl Into<String>, italic: bool, weight: u16) -> Self {
        Self {
            font: font.into(),
            italic,
            weight,
            drawing: false,
        }
    }

    /// Baseline used for lines whose style does not exist.
    pub fn default_baseline() -> Self {
        Self::new("Arial", false, WEIGHT_REGULAR)
    }

    /// Baseline derived from a style definition.
    pub fn from_style(style: &SubtitleStyle) -> Self {
        let weight = if style.bold { WEIGHT_BOLD } else { WEIGHT_REGULAR };
        Self::new(strip_font_name(&style.fontname), style.italic, weight)
    }

    /// Copy font, italic and weight from another state, keeping drawing mode.
    pub fn reset_to(&mut self, other: &RenderingState) {
        self.font.clone_from(&other.font);
        self.italic = other.italic;
        self.weight = other.weight;
    }
}

/// Strip the vertical-text `@` marker from a font name.
pub fn strip_font_name(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}

/// Baseline rendering state for every style of a document.
///
/// Built once before any line is interpreted and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    styles: HashMap<String, RenderingState>,
}

impl StyleTable {
    /// Build baselines from style definitions.
    ///
    /// A later definition with a duplicate name replaces an earlier one.
    pub fn from_styles<'a>(styles: impl IntoIterator<Item = &'a SubtitleStyle>) -> Self {
        let styles = styles
            .into_iter()
            .map(|style| (style.name.clone(), RenderingState::from_style(style)))
            .collect();
        Self { styles }
    }

    /// Look up a style baseline by exact name.
    pub fn get(&self, name: &str) -> Option<&RenderingState> {
        self.styles.get(name)
    }

    /// Look up a style baseline, falling back to the default baseline.
    ///
    /// Returns the baseline and whether the style was found.
    pub fn resolve(&self, name: &str) -> (RenderingState, bool) {
        match self.styles.get(name) {
            Some(state) => (state.clone(), true),
            None => (RenderingState::default_baseline(), false),
        }
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the table has no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
