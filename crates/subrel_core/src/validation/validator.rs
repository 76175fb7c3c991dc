//! Font validation over a whole document.

use crate::config::ValidationSettings;
use crate::fonts::{Catalog, FontMatch, FontMatcher};
use crate::subtitles::SubtitleDocument;
use crate::tags::{parse_line, RenderingState, StyleTable};

use super::report::{Category, DiagnosticKey, DiagnosticsReport};

/// Weight difference at which a renderer synthesizes or drops boldness.
const WEIGHT_TOLERANCE: u16 = 150;

/// Raw marker that always puts a line in drawing mode.
const DRAWING_MARKER: &str = "\\p1";

/// Validate every dialogue line of `doc` against `catalog`.
///
/// With `ignore_drawings`, drawing-mode fragments and lines containing a raw
/// `\p1` are skipped. With `warn_on_exact_mismatch`, weight and italic
/// mismatches are reported for exact-name matches too.
pub fn validate(
    doc: &SubtitleDocument,
    catalog: &Catalog,
    ignore_drawings: bool,
    warn_on_exact_mismatch: bool,
) -> DiagnosticsReport {
    let styles = StyleTable::from_styles(&doc.styles);
    let matcher = FontMatcher::new(catalog);
    let mut report = DiagnosticsReport::new();

    tracing::debug!(
        "Validating {} events against {} faces",
        doc.events.len(),
        catalog.len()
    );

    for (index, event) in doc.events.iter().enumerate() {
        if event.is_comment {
            continue;
        }
        let line = index + 1;
        let forced_drawing = event.text.contains(DRAWING_MARKER);

        let (baseline, known) = styles.resolve(&event.style);
        if !known {
            tracing::warn!(
                "Unknown style {} on line {}, assuming default style",
                event.style,
                line
            );
        }

        for (state, text) in parse_line(&event.text, &baseline, &styles) {
            if ignore_drawings && (state.drawing || forced_drawing) {
                continue;
            }
            let found = matcher.match_state(&state);
            check_fragment(
                &mut report,
                line,
                &state,
                &text,
                found,
                warn_on_exact_mismatch,
            );
        }
    }

    report
}

/// [`validate`] with options taken from the `[validation]` settings.
pub fn validate_with(
    doc: &SubtitleDocument,
    catalog: &Catalog,
    settings: &ValidationSettings,
) -> DiagnosticsReport {
    validate(
        doc,
        catalog,
        settings.ignore_drawings,
        settings.warn_on_exact_mismatch,
    )
}

fn check_fragment(
    report: &mut DiagnosticsReport,
    line: usize,
    state: &RenderingState,
    text: &str,
    found: FontMatch<'_>,
    warn_on_exact_mismatch: bool,
) {
    let font_key = crate::fonts::normalize_font_name(&state.font);

    let Some(font) = found.font else {
        report.add(Category::MissingFont, DiagnosticKey::Font(font_key), line);
        return;
    };

    let check_mismatch = !found.exact || warn_on_exact_mismatch;
    let weight_key = || DiagnosticKey::Weight {
        font: font_key.clone(),
        requested: state.weight,
        actual: font.weight,
    };

    if state.weight >= font.weight.saturating_add(WEIGHT_TOLERANCE) {
        report.add(Category::FauxBold, weight_key(), line);
    }
    if i32::from(state.weight) <= i32::from(font.weight) - i32::from(WEIGHT_TOLERANCE)
        && check_mismatch
    {
        report.add(Category::MismatchedWeight, weight_key(), line);
    }
    if state.italic && !font.italic {
        report.add(Category::FauxItalic, DiagnosticKey::Font(font_key.clone()), line);
    }
    if !state.italic && font.italic && check_mismatch {
        report.add(
            Category::MismatchedItalic,
            DiagnosticKey::Font(font_key.clone()),
            line,
        );
    }

    if !state.drawing {
        let missing = font.missing_glyphs(text);
        if !missing.is_empty() {
            report.add_missing_glyphs(&font_key, missing);
            report.add(Category::MissingGlyphLines, DiagnosticKey::Font(font_key), line);
        }
    }
}
