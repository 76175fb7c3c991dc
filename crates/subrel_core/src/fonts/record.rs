//! Font face metadata.
//!
//! One [`FontRecord`] is produced per face; collection files (`.ttc`/`.otc`)
//! produce one record per embedded face.

use std::fs;
use std::path::{Path, PathBuf};

use ttf_parser::{name_id, Face, PlatformId, Tag};

use super::coverage::GlyphCoverage;
use super::error::FontError;

const CFF_TAG: Tag = Tag::from_bytes(b"CFF ");
const HEAD_TAG: Tag = Tag::from_bytes(b"head");

/// Offset of `macStyle` within the `head` table.
const HEAD_MAC_STYLE_OFFSET: usize = 44;

/// Synthetic slant of an italic face, used only for similarity scoring.
pub const ITALIC_SLANT: u16 = 110;

/// Lower-case a font name for index lookups.
pub fn normalize_font_name(name: &str) -> String {
    name.to_lowercase()
}

/// Metadata of one loaded font face.
#[derive(Debug, Clone, PartialEq)]
pub struct FontRecord {
    /// File the face was loaded from.
    pub path: PathBuf,
    /// Index of the face inside a collection (0 for single fonts).
    pub face_index: u32,
    /// Family names (Windows platform, name ID 1).
    pub family_names: Vec<String>,
    /// Full names (Windows platform, name ID 4).
    pub full_names: Vec<String>,
    /// PostScript name (name ID 6), empty when absent.
    pub postscript_name: String,
    /// Names a script can use to select exactly this face.
    pub exact_names: Vec<String>,
    /// `usWeightClass`.
    pub weight: u16,
    /// `fsSelection` italic bit.
    pub italic: bool,
    /// Synthetic slant for similarity scoring.
    pub slant: u16,
    /// Whether the face carries CFF outlines.
    pub is_postscript_outline: bool,
    /// Characters with a glyph.
    pub coverage: GlyphCoverage,
}

impl FontRecord {
    /// Create an in-memory record for a family with no exact names.
    pub fn new(family: impl Into<String>, weight: u16, italic: bool) -> Self {
        Self {
            path: PathBuf::new(),
            face_index: 0,
            family_names: vec![family.into()],
            full_names: Vec::new(),
            postscript_name: String::new(),
            exact_names: Vec::new(),
            weight,
            italic,
            slant: if italic { ITALIC_SLANT } else { 0 },
            is_postscript_outline: false,
            coverage: GlyphCoverage::Unavailable,
        }
    }

    /// Add a full name usable for exact matching.
    pub fn with_exact_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.full_names.push(name.clone());
        self.exact_names.push(name);
        self
    }

    /// Set the glyph coverage.
    pub fn with_coverage(mut self, coverage: GlyphCoverage) -> Self {
        self.coverage = coverage;
        self
    }

    /// Load a single face from font data.
    pub fn from_face_data(path: &Path, data: &[u8], face_index: u32) -> Result<Self, FontError> {
        let face = Face::parse(data, face_index)
            .map_err(|e| FontError::parse(path, face_index, e))?;
        let tables = face.tables();
        let os2 = tables
            .os2
            .as_ref()
            .ok_or_else(|| FontError::missing_table(path, face_index, "OS/2"))?;
        let cmap = tables
            .cmap
            .as_ref()
            .ok_or_else(|| FontError::missing_table(path, face_index, "cmap"))?;

        let (family_names, full_names) = windows_names(&face);
        let postscript_name = postscript_name(&face);
        let is_postscript_outline = face.raw_face().table(CFF_TAG).is_some();

        let weight = os2.weight().to_number();
        let italic = os2.style() == ttf_parser::Style::Italic;

        let mac_italic = face
            .raw_face()
            .table(HEAD_TAG)
            .and_then(|head| head.get(HEAD_MAC_STYLE_OFFSET..HEAD_MAC_STYLE_OFFSET + 2))
            .map(|b| u16::from_be_bytes([b[0], b[1]]) & 0b10 != 0);
        if mac_italic.is_some_and(|mac| mac != italic) {
            tracing::warn!(
                "Different italic values in macStyle and fsSelection for font {}",
                postscript_name
            );
        }

        let candidates = if is_postscript_outline && !postscript_name.is_empty() {
            vec![postscript_name.clone()]
        } else {
            full_names.clone()
        };
        let families: Vec<String> = family_names.iter().map(|f| normalize_font_name(f)).collect();
        let exact_names = candidates
            .into_iter()
            .filter(|name| !families.contains(&normalize_font_name(name)))
            .collect();

        let coverage = coverage_from_cmap(cmap);
        if !coverage.is_available() {
            tracing::warn!(
                "Could not read glyphs for font {} in {}",
                postscript_name,
                path.display()
            );
        }

        let record = Self {
            path: path.to_path_buf(),
            face_index,
            family_names,
            full_names,
            postscript_name,
            exact_names,
            weight,
            italic,
            slant: if italic { ITALIC_SLANT } else { 0 },
            is_postscript_outline,
            coverage,
        };

        Ok(record)
    }

    /// Characters of `text` the face has no glyph for.
    pub fn missing_glyphs(&self, text: &str) -> Vec<char> {
        self.coverage.missing(text)
    }

    /// Display label used in logs and reports.
    pub fn label(&self) -> &str {
        if !self.postscript_name.is_empty() {
            &self.postscript_name
        } else if let Some(name) = self.full_names.first() {
            name
        } else {
            self.family_names.first().map(String::as_str).unwrap_or("")
        }
    }
}

impl std::fmt::Display for FontRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(italic={}, weight={})", self.label(), self.italic, self.weight)
    }
}

/// Family and full names from Windows Unicode name records.
fn windows_names(face: &Face<'_>) -> (Vec<String>, Vec<String>) {
    let mut families = Vec::new();
    let mut full_names = Vec::new();

    for name in face.names() {
        if name.platform_id != PlatformId::Windows || !matches!(name.encoding_id, 0 | 1) {
            continue;
        }
        let target = match name.name_id {
            name_id::FAMILY => &mut families,
            name_id::FULL_NAME => &mut full_names,
            _ => continue,
        };
        if let Some(value) = name.to_string() {
            target.push(value);
        }
    }

    (families, full_names)
}

/// PostScript name, preferring the Mac Roman English and Windows US English records.
fn postscript_name(face: &Face<'_>) -> String {
    let mut found = String::new();

    for name in face.names() {
        if name.name_id != name_id::POST_SCRIPT_NAME {
            continue;
        }
        let Some(value) = name.to_string() else {
            continue;
        };
        found = value.trim().to_string();

        let preferred = matches!(
            (name.platform_id, name.encoding_id, name.language_id),
            (PlatformId::Macintosh, 0, 0) | (PlatformId::Windows, 1, 0x409)
        );
        if preferred {
            break;
        }
    }

    found
}

/// Build glyph coverage, preferring Unicode subtables over the symbol map.
fn coverage_from_cmap(cmap: &ttf_parser::cmap::Table<'_>) -> GlyphCoverage {
    let mut unicode = std::collections::HashSet::new();
    let mut symbol = std::collections::HashSet::new();

    for subtable in cmap.subtables {
        let is_symbol = subtable.platform_id == PlatformId::Windows && subtable.encoding_id == 0;
        if is_symbol {
            subtable.codepoints(|cp| {
                symbol.insert(cp);
            });
        } else if subtable.is_unicode() {
            subtable.codepoints(|cp| {
                unicode.insert(cp);
            });
        }
    }

    if !unicode.is_empty() {
        GlyphCoverage::Unicode(unicode)
    } else if !symbol.is_empty() {
        GlyphCoverage::Symbol(symbol)
    } else {
        GlyphCoverage::Unavailable
    }
}

/// Outcome of loading one font file.
#[derive(Debug)]
pub struct FileLoad {
    /// Path of the file.
    pub path: PathBuf,
    /// Faces loaded before any failure.
    pub records: Vec<FontRecord>,
    /// The failure that stopped loading, if any.
    pub error: Option<FontError>,
}

/// Load every face of a font file.
///
/// A failing face stops loading the file but keeps the faces before it.
pub fn load_font_file(path: &Path) -> FileLoad {
    let mut load = FileLoad {
        path: path.to_path_buf(),
        records: Vec::new(),
        error: None,
    };

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            load.error = Some(FontError::read(path, e));
            return load;
        }
    };

    let face_count = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
    for face_index in 0..face_count {
        match FontRecord::from_face_data(path, &data, face_index) {
            Ok(record) => {
                tracing::trace!("Loaded {} from {}", record, path.display());
                load.records.push(record);
            }
            Err(e) => {
                load.error = Some(e);
                break;
            }
        }
    }

    load
}
