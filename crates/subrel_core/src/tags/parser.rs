//! Override tag interpreter.
//!
//! A line is a sequence of override blocks (`{...}`, the closing brace may be
//! missing at the end of the line) and plain text runs. Each block holds zero
//! or more tags of the form `\name`, `\name arg` or `\name(arg)`.
//!
//! Only the tags that change which font is needed are interpreted:
//!
//! | Tag    | Effect                                     |
//! |--------|--------------------------------------------|
//! | `\fn`  | font name                                  |
//! | `\b`   | weight (not `\blur`, `\be`, `\bord`)       |
//! | `\i`   | italic (not `\iclip`)                      |
//! | `\p`   | drawing mode (not `\pos`, `\pbo`)          |
//! | `\r`   | reset to the line style or a named style   |
//! | `\t`   | animated tags, applied immediately         |
//!
//! Everything else is ignored. Malformed arguments behave like a missing one.

use std::iter::FusedIterator;

use super::state::{strip_font_name, RenderingState, StyleTable, WEIGHT_BOLD, WEIGHT_REGULAR};

/// Tags that influence font selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    FontName,
    Bold,
    Italic,
    Drawing,
    Reset,
    Transform,
}

/// Recognized tag prefixes with the longer tags that share them.
///
/// Checked in order; the first entry whose prefix matches and none of whose
/// exclusions match wins.
const TAG_TABLE: &[(&str, TagKind, &[&str])] = &[
    ("fn", TagKind::FontName, &[]),
    ("b", TagKind::Bold, &["blur", "be", "bord"]),
    ("i", TagKind::Italic, &["iclip"]),
    ("p", TagKind::Drawing, &["pos", "pbo"]),
    ("r", TagKind::Reset, &[]),
    ("t", TagKind::Transform, &[]),
];

/// One `\name(arg)` occurrence inside an override block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TagInvocation<'a> {
    /// Tag name including any trailing argument, right-trimmed.
    name: &'a str,
    /// Trimmed content after `(`, up to `)` or the end of the block.
    paren: Option<&'a str>,
}

impl<'a> TagInvocation<'a> {
    /// Classify the tag and return the text following its prefix.
    fn classify(&self) -> Option<(TagKind, &'a str)> {
        TAG_TABLE.iter().find_map(|(prefix, kind, exclude)| {
            let rest = self.name.strip_prefix(prefix)?;
            if exclude.iter().any(|ex| self.name.starts_with(ex)) {
                return None;
            }
            Some((*kind, rest.trim_start()))
        })
    }

    /// The first argument: the parenthesized one, else the inline remainder.
    fn argument(paren: Option<&'a str>, inline: &'a str) -> Option<&'a str> {
        paren.or_else(|| Some(inline).filter(|s| !s.is_empty()))
    }
}

/// Iterator over the tags of one override block.
struct Tags<'a> {
    block: &'a str,
    pos: usize,
}

impl<'a> Tags<'a> {
    fn new(block: &'a str) -> Self {
        Self { block, pos: 0 }
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = TagInvocation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.block.get(self.pos..)?;
            let slash = rest.find('\\')?;
            let start = self.pos + slash + 1;

            let after_slash = &self.block[start..];
            let name_start = start + (after_slash.len() - after_slash.trim_start().len());
            let raw = &self.block[name_start..];
            let name_len = raw.find(['(', '\\']).unwrap_or(raw.len());
            let name = raw[..name_len].trim_end();
            let name_end = name_start + name_len;

            if name.is_empty() {
                self.pos = start;
                continue;
            }

            self.pos = name_end;
            let mut paren = None;
            if let Some(inner) = self.block[name_end..].strip_prefix('(') {
                let content_len = inner.find(')').unwrap_or(inner.len());
                let content = inner[..content_len].trim();
                if !content.is_empty() {
                    paren = Some(content);
                    self.pos = name_end + 1 + content_len;
                }
            }

            return Some(TagInvocation { name, paren });
        }
    }
}

/// The leading `[+-]?\d+` of `s`, if any.
fn int_prefix(s: &str) -> Option<&str> {
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    Some(&s[..sign_len + digits])
}

/// Parse a leading `[+-]?\d+` integer, ignoring anything after it.
///
/// Values outside `i64` are `None`.
fn parse_int(s: &str) -> Option<i64> {
    int_prefix(s)?.parse().ok()
}

/// Whether a leading integer is present and non-zero, whatever its size.
fn is_nonzero_int(s: &str) -> bool {
    int_prefix(s).is_some_and(|n| n.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

/// Map a `\b` argument to a weight, `None` meaning "use the line style".
fn weight_from_arg(value: Option<i64>) -> Option<u16> {
    match value? {
        0 => Some(WEIGHT_REGULAR),
        1 | -1 => Some(WEIGHT_BOLD),
        w @ 100..=900 => u16::try_from(w).ok(),
        _ => None,
    }
}

/// Apply every tag of an override block to `state`.
///
/// `baseline` is the line's style; `\t` recurses on the running state.
pub fn apply_block(
    block: &str,
    state: &mut RenderingState,
    baseline: &RenderingState,
    styles: &StyleTable,
) {
    for tag in Tags::new(block) {
        let Some((kind, inline)) = tag.classify() else {
            continue;
        };
        let arg = TagInvocation::argument(tag.paren, inline);

        match kind {
            TagKind::FontName => {
                state.font = match arg {
                    Some(name) => strip_font_name(name).to_string(),
                    None => baseline.font.clone(),
                };
            }
            TagKind::Bold => {
                state.weight = weight_from_arg(arg.and_then(parse_int)).unwrap_or(baseline.weight);
            }
            TagKind::Italic => {
                state.italic = match arg.and_then(parse_int) {
                    Some(0) => false,
                    Some(1) => true,
                    _ => baseline.italic,
                };
            }
            TagKind::Drawing => {
                state.drawing = arg.is_some_and(is_nonzero_int);
            }
            TagKind::Reset => match arg {
                None => state.reset_to(baseline),
                Some(name) => match styles.get(name) {
                    Some(style) => state.reset_to(style),
                    None => {
                        tracing::warn!(
                            "\\r argument {} does not exist; defaulting to line style",
                            name
                        );
                        state.reset_to(baseline);
                    }
                },
            },
            TagKind::Transform => {
                if let Some(inner) = arg {
                    apply_block(inner, state, baseline, styles);
                }
            }
        }
    }
}

/// Replace the `\n`, `\N` and `\h` break markers with a plain space.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && matches!(chars.peek(), Some('n' | 'N' | 'h')) {
            chars.next();
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Interpret a line, yielding the state in effect for each text run.
///
/// Every yielded state is an independent copy; the running state starts
/// from `baseline` and is never shared with the caller.
pub fn parse_line<'a>(
    text: &'a str,
    baseline: &'a RenderingState,
    styles: &'a StyleTable,
) -> LineSpans<'a> {
    LineSpans {
        rest: text,
        state: baseline.clone(),
        baseline,
        styles,
    }
}

/// Lazy sequence of `(state, text)` pairs for one line.
///
/// Created by [`parse_line`].
#[derive(Debug, Clone)]
pub struct LineSpans<'a> {
    rest: &'a str,
    state: RenderingState,
    baseline: &'a RenderingState,
    styles: &'a StyleTable,
}

impl Iterator for LineSpans<'_> {
    type Item = (RenderingState, String);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let after_block = match self.rest.strip_prefix('{') {
                Some(body) => {
                    let (block, after) = match body.find('}') {
                        Some(end) => (&body[..end], &body[end + 1..]),
                        None => (body, ""),
                    };
                    if !block.is_empty() {
                        apply_block(block, &mut self.state, self.baseline, self.styles);
                    }
                    after
                }
                None => self.rest,
            };

            let text_len = after_block.find('{').unwrap_or(after_block.len());
            let (text, rest) = after_block.split_at(text_len);
            self.rest = rest;

            if !text.is_empty() {
                return Some((self.state.clone(), normalize_text(text)));
            }
        }
        None
    }
}

impl FusedIterator for LineSpans<'_> {}
