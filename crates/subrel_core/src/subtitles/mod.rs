//! Subtitle document model.
//!
//! Provides the style and event view of a script that font validation
//! consumes, plus a reader for ASS/SSA files.
//!
//! # Usage
//!
//! ```no_run
//! use subrel_core::subtitles::parse_file;
//!
//! let doc = parse_file("episode.merged.ass")?;
//! println!("{} dialogue lines", doc.dialogue_count());
//! # Ok::<(), subrel_core::subtitles::SubtitleError>(())
//! ```

mod error;
pub mod parsers;
mod types;

use std::fs;
use std::path::Path;

pub use error::{ParseError, SubtitleError};
pub use parsers::parse_ass;
pub use types::{SubtitleDocument, SubtitleEvent, SubtitleStyle};

/// Parse a subtitle file from disk.
///
/// # Arguments
/// * `path` - Path to the ASS/SSA file.
///
/// # Returns
/// * `Ok(SubtitleDocument)` - Parsed document with source_path set.
/// * `Err(SubtitleError)` - If reading or parsing fails.
pub fn parse_file(path: impl AsRef<Path>) -> Result<SubtitleDocument, SubtitleError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| SubtitleError::read(path, e))?;
    let mut doc = parse_ass(&content).map_err(|e| SubtitleError::parse(path, e))?;
    doc.source_path = Some(path.to_path_buf());

    tracing::debug!(
        "Loaded {} styles and {} events from {}",
        doc.styles.len(),
        doc.events.len(),
        path.display()
    );

    Ok(doc)
}
