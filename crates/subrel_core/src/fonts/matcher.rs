//! Resolve rendering states to catalog faces.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::catalog::Catalog;
use super::record::{normalize_font_name, FontRecord};
use crate::tags::RenderingState;

/// Result of matching a rendering state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMatch<'c> {
    /// Selected face, if any.
    pub font: Option<&'c FontRecord>,
    /// Whether the face was selected by its full or PostScript name.
    pub exact: bool,
}

impl<'c> FontMatch<'c> {
    const NONE: Self = Self {
        font: None,
        exact: false,
    };
}

/// Distance between a requested state and a candidate face.
pub fn similarity(state: &RenderingState, font: &FontRecord) -> u32 {
    let requested_slant: i32 = if state.italic { 100 } else { 0 };
    let weight = (i32::from(state.weight) - i32::from(font.weight)).unsigned_abs();
    let slant = (requested_slant - i32::from(font.slant)).unsigned_abs();
    weight + slant
}

/// Font matcher with a per-instance cache.
///
/// The cache is keyed by the normalized font name alone: the first state
/// resolved for a name decides the face for every later state with that
/// name, whatever its weight or slant.
#[derive(Debug)]
pub struct FontMatcher<'c> {
    catalog: &'c Catalog,
    cache: Mutex<HashMap<String, FontMatch<'c>>>,
}

impl<'c> FontMatcher<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Match a state. The caller's state is left untouched.
    pub fn match_state(&self, state: &RenderingState) -> FontMatch<'c> {
        let mut query = state.clone();
        query.font = normalize_font_name(&query.font);
        query.drawing = false;

        if let Some(found) = self.cache.lock().get(&query.font) {
            return *found;
        }

        let found = self.resolve(&query);
        self.cache.lock().entry(query.font).or_insert(found);
        found
    }

    fn resolve(&self, query: &RenderingState) -> FontMatch<'c> {
        if let Some(font) = self.catalog.exact(&query.font) {
            return FontMatch {
                font: Some(font),
                exact: true,
            };
        }

        // min_by_key keeps the last minimum; fold keeps the first
        let best = self
            .catalog
            .family(&query.font)
            .into_iter()
            .fold(None::<(&'c FontRecord, u32)>, |best, font| {
                let score = similarity(query, font);
                match best {
                    Some((_, best_score)) if best_score <= score => best,
                    _ => Some((font, score)),
                }
            });

        match best {
            Some((font, _)) => FontMatch {
                font: Some(font),
                exact: false,
            },
            None => FontMatch::NONE,
        }
    }

    /// Number of cached font names.
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }
}
