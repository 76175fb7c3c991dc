//! Document model consumed by font validation.
//!
//! Only the parts of a script that affect font selection are kept: style
//! definitions (font name, bold, italic) and the raw text of every event.

use std::path::PathBuf;

/// A subtitle script reduced to its styles and events.
#[derive(Debug, Clone, Default)]
pub struct SubtitleDocument {
    /// Style definitions in file order.
    pub styles: Vec<SubtitleStyle>,
    /// Events (dialogue and comment lines) in file order.
    pub events: Vec<SubtitleEvent>,
    /// Source file path (if loaded from file).
    pub source_path: Option<PathBuf>,
}

impl SubtitleDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dialogue events (excluding comments).
    pub fn dialogue_count(&self) -> usize {
        self.events.iter().filter(|e| !e.is_comment).count()
    }

    /// Get style by name.
    pub fn get_style(&self, name: &str) -> Option<&SubtitleStyle> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Add a style, replacing any existing style with the same name.
    pub fn set_style(&mut self, style: SubtitleStyle) {
        if let Some(existing) = self.styles.iter_mut().find(|s| s.name == style.name) {
            *existing = style;
        } else {
            self.styles.push(style);
        }
    }

    /// Append a dialogue line using the given style.
    pub fn push_dialogue(&mut self, style: impl Into<String>, text: impl Into<String>) {
        self.events.push(SubtitleEvent::new(text).with_style(style));
    }
}

/// Style definition, limited to the fields that select a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleStyle {
    /// Style name (required).
    pub name: String,
    /// Font name, possibly prefixed with `@` for vertical text.
    pub fontname: String,
    /// Bold (-1 = true, 0 = false).
    pub bold: bool,
    /// Italic (-1 = true, 0 = false).
    pub italic: bool,
}

impl Default for SubtitleStyle {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            fontname: "Arial".to_string(),
            bold: false,
            italic: false,
        }
    }
}

impl SubtitleStyle {
    /// Create a new style with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the font name.
    pub fn with_font(mut self, fontname: impl Into<String>) -> Self {
        self.fontname = fontname.into();
        self
    }

    /// Set the bold flag.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the italic flag.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

/// A single subtitle event (dialogue line or comment).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleEvent {
    /// Whether this is a comment line.
    pub is_comment: bool,
    /// Style name the event refers to.
    pub style: String,
    /// Text content including override blocks.
    pub text: String,
}

impl SubtitleEvent {
    /// Create a new dialogue event on the `Default` style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            is_comment: false,
            style: "Default".to_string(),
            text: text.into(),
        }
    }

    /// Create a comment event on the `Default` style.
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            is_comment: true,
            ..Self::new(text)
        }
    }

    /// Create with style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }
}
