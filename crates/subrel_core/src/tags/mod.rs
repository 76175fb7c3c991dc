//! Override tag interpretation.
//!
//! Walks the inline override blocks of a subtitle line and reconstructs the
//! font attributes in effect for every run of visible text.
//!
//! # Usage
//!
//! ```
//! use subrel_core::subtitles::SubtitleStyle;
//! use subrel_core::tags::{parse_line, StyleTable};
//!
//! let styles = StyleTable::from_styles(&[SubtitleStyle::new("Default")]);
//! let (baseline, _) = styles.resolve("Default");
//!
//! let spans: Vec<_> = parse_line(r"Plain {\b1}bold", &baseline, &styles).collect();
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[1].0.weight, 700);
//! assert_eq!(spans[1].1, "bold");
//! ```

mod parser;
mod state;

pub use parser::{apply_block, normalize_text, parse_line, LineSpans};
pub use state::{
    strip_font_name, RenderingState, StyleTable, WEIGHT_BOLD, WEIGHT_REGULAR,
};
