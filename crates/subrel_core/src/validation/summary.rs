//! Human-readable report messages.

use std::collections::BTreeSet;

use super::report::{Category, DiagnosticKey, DiagnosticsReport};
use crate::config::ValidationSettings;

/// Join sorted line numbers, truncating after `limit` entries with `[...]`.
pub fn format_lines<'a>(lines: impl IntoIterator<Item = &'a usize>, limit: usize) -> String {
    let sorted: BTreeSet<usize> = lines.into_iter().copied().collect();
    let mut parts: Vec<String> = sorted.iter().take(limit).map(usize::to_string).collect();
    if sorted.len() > limit {
        parts.push("[...]".to_string());
    }
    parts.join(" ")
}

fn format_glyphs(glyphs: &BTreeSet<char>) -> String {
    glyphs
        .iter()
        .map(|&g| format!("{}(U+{:04X})", g, u32::from(g)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One message per diagnostic entry.
///
/// Missing fonts come first, then faux bold, faux italic, mismatched weight,
/// mismatched italic and missing glyphs; entries within a category are sorted
/// by key.
pub fn summarize(report: &DiagnosticsReport, limit: usize) -> Vec<String> {
    let mut messages = Vec::new();

    for (key, lines) in report.entries(Category::MissingFont) {
        messages.push(format!(
            "Could not find font {} on line(s): {}",
            key.font(),
            format_lines(lines, limit)
        ));
    }

    for (key, lines) in report.entries(Category::FauxBold) {
        if let DiagnosticKey::Weight {
            font,
            requested,
            actual,
        } = key
        {
            messages.push(format!(
                "Faux bold used for font {} (requested weight {}, got {}) on line(s): {}",
                font,
                requested,
                actual,
                format_lines(lines, limit)
            ));
        }
    }

    for (key, lines) in report.entries(Category::FauxItalic) {
        messages.push(format!(
            "Faux italic used for font {} on line(s): {}",
            key.font(),
            format_lines(lines, limit)
        ));
    }

    for (key, lines) in report.entries(Category::MismatchedWeight) {
        if let DiagnosticKey::Weight {
            font,
            requested,
            actual,
        } = key
        {
            messages.push(format!(
                "Requested weight {} but got {} for font {} on line(s): {}",
                requested,
                actual,
                font,
                format_lines(lines, limit)
            ));
        }
    }

    for (key, lines) in report.entries(Category::MismatchedItalic) {
        messages.push(format!(
            "Requested non-italic but got italic for font {} on line(s): {}",
            key.font(),
            format_lines(lines, limit)
        ));
    }

    for (key, lines) in report.entries(Category::MissingGlyphLines) {
        let glyphs = report
            .missing_glyphs(key.font())
            .map(format_glyphs)
            .unwrap_or_default();
        messages.push(format!(
            "Font {} is missing glyphs {} on line(s): {}",
            key.font(),
            glyphs,
            format_lines(lines, limit)
        ));
    }

    messages
}

/// [`summarize`] with the configured `line_display_limit`.
pub fn summarize_with(report: &DiagnosticsReport, settings: &ValidationSettings) -> Vec<String> {
    summarize(report, settings.line_display_limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_lines_sorts_and_truncates() {
        let lines = [5, 1, 3];
        assert_eq!(format_lines(&lines, 10), "1 3 5");
        assert_eq!(format_lines(&lines, 2), "1 3 [...]");
        assert_eq!(format_lines(&lines, 3), "1 3 5");
        assert_eq!(format_lines(&[], 10), "");
    }

    #[test]
    fn summarize_orders_categories() {
        let mut report = DiagnosticsReport::new();
        report.add(Category::MissingGlyphLines, DiagnosticKey::Font("noto".into()), 4);
        report.add_missing_glyphs("noto", ['é', 'あ']);
        report.add(Category::FauxItalic, DiagnosticKey::Font("noto".into()), 2);
        report.add(
            Category::FauxBold,
            DiagnosticKey::Weight {
                font: "noto".into(),
                requested: 700,
                actual: 400,
            },
            3,
        );
        report.add(Category::MissingFont, DiagnosticKey::Font("zeta".into()), 9);
        report.add(Category::MissingFont, DiagnosticKey::Font("arial".into()), 1);

        let messages = summarize(&report, 10);
        assert_eq!(
            messages,
            vec![
                "Could not find font arial on line(s): 1",
                "Could not find font zeta on line(s): 9",
                "Faux bold used for font noto (requested weight 700, got 400) on line(s): 3",
                "Faux italic used for font noto on line(s): 2",
                "Font noto is missing glyphs é(U+00E9) あ(U+3042) on line(s): 4",
            ]
        );
    }

    #[test]
    fn summarize_with_truncates_at_configured_limit() {
        let mut report = DiagnosticsReport::new();
        for line in 1..=12 {
            report.add(Category::MissingFont, DiagnosticKey::Font("arial".into()), line);
        }

        let settings = ValidationSettings::default();
        assert_eq!(
            summarize_with(&report, &settings),
            vec!["Could not find font arial on line(s): 1 2 3 4 5 6 7 8 9 10 [...]"]
        );

        let settings = ValidationSettings {
            line_display_limit: 2,
            ..ValidationSettings::default()
        };
        assert_eq!(
            summarize_with(&report, &settings),
            vec!["Could not find font arial on line(s): 1 2 [...]"]
        );
    }

    #[test]
    fn summarize_mismatches() {
        let mut report = DiagnosticsReport::new();
        report.add(
            Category::MismatchedWeight,
            DiagnosticKey::Weight {
                font: "heavy".into(),
                requested: 400,
                actual: 900,
            },
            1,
        );
        report.add(Category::MismatchedItalic, DiagnosticKey::Font("slanted".into()), 2);

        assert_eq!(
            summarize(&report, 10),
            vec![
                "Requested weight 400 but got 900 for font heavy on line(s): 1",
                "Requested non-italic but got italic for font slanted on line(s): 2",
            ]
        );
        assert!(summarize(&DiagnosticsReport::new(), 10).is_empty());
    }
}
