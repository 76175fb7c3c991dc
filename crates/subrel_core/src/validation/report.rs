//! Diagnostics collected while validating a document.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ValidationSettings;

/// Kind of problem found on a line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// No face matches the requested font name.
    MissingFont,
    /// Characters the matched face has no glyph for.
    MissingGlyphs,
    /// Lines on which glyphs were missing.
    MissingGlyphLines,
    /// Requested weight well above the face's weight.
    FauxBold,
    /// Italic requested from an upright face.
    FauxItalic,
    /// Requested weight well below the face's weight.
    MismatchedWeight,
    /// Upright text rendered with an italic face.
    MismatchedItalic,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::MissingFont,
        Category::MissingGlyphs,
        Category::MissingGlyphLines,
        Category::FauxBold,
        Category::FauxItalic,
        Category::MismatchedWeight,
        Category::MismatchedItalic,
    ];

    /// Stable snake_case name, as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Category::MissingFont => "missing_font",
            Category::MissingGlyphs => "missing_glyphs",
            Category::MissingGlyphLines => "missing_glyph_lines",
            Category::FauxBold => "faux_bold",
            Category::FauxItalic => "faux_italic",
            Category::MismatchedWeight => "mismatched_weight",
            Category::MismatchedItalic => "mismatched_italic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key of a diagnostic entry. Font names are normalized (lower case).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum DiagnosticKey {
    Font(String),
    Weight {
        font: String,
        requested: u16,
        actual: u16,
    },
}

impl DiagnosticKey {
    pub fn font(&self) -> &str {
        match self {
            DiagnosticKey::Font(font) | DiagnosticKey::Weight { font, .. } => font,
        }
    }
}

/// Line numbers per category and key, plus the missing characters per font.
///
/// Line numbers are 1-based over all events, comments included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsReport {
    entries: BTreeMap<Category, BTreeMap<DiagnosticKey, BTreeSet<usize>>>,
    missing_glyphs: BTreeMap<String, BTreeSet<char>>,
}

impl DiagnosticsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `line` under `category` and `key`.
    pub fn add(&mut self, category: Category, key: DiagnosticKey, line: usize) {
        self.entries
            .entry(category)
            .or_default()
            .entry(key)
            .or_default()
            .insert(line);
    }

    /// Record characters missing from a font's face.
    pub fn add_missing_glyphs(&mut self, font: &str, glyphs: impl IntoIterator<Item = char>) {
        let mut glyphs = glyphs.into_iter().peekable();
        if glyphs.peek().is_none() {
            return;
        }
        self.missing_glyphs
            .entry(font.to_string())
            .or_default()
            .extend(glyphs);
    }

    /// Entries of one category, sorted by key.
    pub fn entries(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&DiagnosticKey, &BTreeSet<usize>)> + '_ {
        self.entries.get(&category).into_iter().flatten()
    }

    /// Lines recorded for a key, if any.
    pub fn lines(&self, category: Category, key: &DiagnosticKey) -> Option<&BTreeSet<usize>> {
        self.entries.get(&category)?.get(key)
    }

    /// Characters missing from a font, if any.
    pub fn missing_glyphs(&self, font: &str) -> Option<&BTreeSet<char>> {
        self.missing_glyphs.get(font)
    }

    /// Whether anything was recorded under `category`.
    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::MissingGlyphs => !self.missing_glyphs.is_empty(),
            _ => self.entries.get(&category).is_some_and(|e| !e.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| !self.has(c))
    }

    /// Whether any of the given categories has an entry.
    pub fn has_blocking(&self, blocking: &[Category]) -> bool {
        blocking.iter().any(|&c| self.has(c))
    }

    /// Whether the report fails under the configured blocking categories.
    pub fn is_blocking(&self, settings: &ValidationSettings) -> bool {
        self.has_blocking(&settings.blocking)
    }

    /// Number of keys recorded under `category`.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::MissingGlyphs => self.missing_glyphs.len(),
            _ => self.entries.get(&category).map_or(0, BTreeMap::len),
        }
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let categories = self
            .entries
            .iter()
            .map(|(category, entries)| {
                let entries = entries
                    .iter()
                    .map(|(key, lines)| JsonEntry { key, lines })
                    .collect();
                (*category, entries)
            })
            .collect();
        let missing_glyphs = self
            .missing_glyphs
            .iter()
            .map(|(font, glyphs)| (font.as_str(), glyphs.iter().collect()))
            .collect();

        serde_json::to_string_pretty(&JsonReport {
            categories,
            missing_glyphs,
        })
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    key: &'a DiagnosticKey,
    lines: &'a BTreeSet<usize>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    categories: BTreeMap<Category, Vec<JsonEntry<'a>>>,
    missing_glyphs: BTreeMap<&'a str, String>,
}
