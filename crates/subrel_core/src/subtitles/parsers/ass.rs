//! ASS/SSA reader for font validation.
//!
//! Only two sections matter here:
//! - `[V4+ Styles]` or `[V4 Styles]`: Style definitions
//! - `[Events]`: Dialogue and comment lines
//!
//! Every other section is skipped. Field positions come from the section's
//! `Format:` line, falling back to the standard layout when it is missing.

use crate::subtitles::error::ParseError;
use crate::subtitles::types::{SubtitleDocument, SubtitleEvent, SubtitleStyle};

/// Parse ASS/SSA content into a SubtitleDocument.
///
/// # Arguments
/// * `content` - The raw ASS file content as a string.
///
/// # Returns
/// * `Ok(SubtitleDocument)` - Styles and events in file order.
/// * `Err(ParseError)` - If a style or event line is truncated.
pub fn parse_ass(content: &str) -> Result<SubtitleDocument, ParseError> {
    let mut doc = SubtitleDocument::new();
    let mut current_section = String::new();
    let mut style_format: Vec<String> = Vec::new();
    let mut event_format: Vec<String> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // 1-indexed for error messages
        let line = line.trim_start_matches('\u{feff}').trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].to_lowercase();
            continue;
        }

        if line.starts_with(';') || line.starts_with('!') {
            continue;
        }

        match current_section.as_str() {
            "v4+ styles" | "v4 styles" => {
                if line.starts_with("Format:") {
                    style_format = parse_format_line(line);
                } else if line.starts_with("Style:") {
                    doc.styles
                        .push(parse_style_line(line, &style_format, line_num)?);
                }
            }
            "events" => {
                if line.starts_with("Format:") {
                    event_format = parse_format_line(line);
                } else if line.starts_with("Dialogue:") || line.starts_with("Comment:") {
                    let is_comment = line.starts_with("Comment:");
                    doc.events.push(parse_event_line(
                        line,
                        &event_format,
                        is_comment,
                        line_num,
                    )?);
                }
            }
            _ => {}
        }
    }

    Ok(doc)
}

/// Parse a Format: line to get field names.
fn parse_format_line(line: &str) -> Vec<String> {
    line.trim_start_matches("Format:")
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .collect()
}

fn parse_flag(value: &str) -> bool {
    value == "-1" || value == "1"
}

/// Parse a Style: line.
fn parse_style_line(
    line: &str,
    format: &[String],
    line_num: usize,
) -> Result<SubtitleStyle, ParseError> {
    let content = line.trim_start_matches("Style:").trim();
    let fields: Vec<&str> = content.split(',').collect();

    let default_format;
    let format = if format.is_empty() {
        default_format = default_style_format();
        default_format.as_slice()
    } else {
        format
    };

    if fields.len() < format.len() {
        return Err(ParseError::invalid_style(
            line_num,
            format!("Expected {} fields, got {}", format.len(), fields.len()),
        ));
    }

    let mut style = SubtitleStyle::default();

    for (field_name, value) in format.iter().zip(fields.iter().map(|s| s.trim())) {
        match field_name.as_str() {
            "name" => style.name = value.to_string(),
            "fontname" => style.fontname = value.to_string(),
            "bold" => style.bold = parse_flag(value),
            "italic" => style.italic = parse_flag(value),
            _ => {}
        }
    }

    Ok(style)
}

/// Parse a Dialogue: or Comment: line.
fn parse_event_line(
    line: &str,
    format: &[String],
    is_comment: bool,
    line_num: usize,
) -> Result<SubtitleEvent, ParseError> {
    let prefix = if is_comment { "Comment:" } else { "Dialogue:" };
    let content = line.trim_start_matches(prefix).trim();

    let default_format;
    let format = if format.is_empty() {
        default_format = default_event_format();
        default_format.as_slice()
    } else {
        format
    };

    // Text is the last field and may itself contain commas
    let text_index = format.iter().position(|f| f == "text").unwrap_or(9);
    let parts: Vec<&str> = content.splitn(text_index + 1, ',').collect();

    if parts.len() <= text_index {
        return Err(ParseError::invalid_event(
            line_num,
            format!("Expected at least {} fields", text_index + 1),
        ));
    }

    let mut event = SubtitleEvent {
        is_comment,
        ..Default::default()
    };

    for (i, field_name) in format.iter().enumerate() {
        let Some(value) = parts.get(i) else {
            continue;
        };

        match field_name.as_str() {
            "style" => event.style = value.trim().to_string(),
            // Leading spaces in the text are significant
            "text" => event.text = value.to_string(),
            _ => {}
        }
    }

    Ok(event)
}

/// Default style format for V4+ Styles.
fn default_style_format() -> Vec<String> {
    [
        "name",
        "fontname",
        "fontsize",
        "primarycolour",
        "secondarycolour",
        "outlinecolour",
        "backcolour",
        "bold",
        "italic",
        "underline",
        "strikeout",
        "scalex",
        "scaley",
        "spacing",
        "angle",
        "borderstyle",
        "outline",
        "shadow",
        "alignment",
        "marginl",
        "marginr",
        "marginv",
        "encoding",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Default event format for Events section.
fn default_event_format() -> Vec<String> {
    [
        "layer", "start", "end", "style", "name", "marginl", "marginr", "marginv", "effect", "text",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
