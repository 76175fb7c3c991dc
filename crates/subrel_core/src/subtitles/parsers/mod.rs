//! Subtitle parsers.
//!
//! Each parser is a pure function that takes content and returns a `SubtitleDocument`.

mod ass;

pub use ass::parse_ass;
