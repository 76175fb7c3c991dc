//! Font discovery, metadata and matching.
//!
//! - [`Catalog`] scans font directories and indexes every face by exact
//!   name (full or PostScript) and by family.
//! - [`FontMatcher`] resolves a [`RenderingState`](crate::tags::RenderingState)
//!   to the closest face.
//!
//! Files that fail to load are logged and kept on [`Catalog::errors`]; they
//! never abort catalog construction.

mod catalog;
mod coverage;
mod error;
mod matcher;
mod record;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{find_font_files, Catalog, DEFAULT_EXTENSIONS};
pub use coverage::GlyphCoverage;
pub use error::FontError;
pub use matcher::{similarity, FontMatch, FontMatcher};
pub use record::{load_font_file, normalize_font_name, FileLoad, FontRecord, ITALIC_SLANT};
