//! Glyph coverage extracted from a face's character map.

use std::collections::HashSet;

/// Private-use offset at which symbol-encoded fonts map their byte codes.
const SYMBOL_BASE: u32 = 0xF000;

/// Mac OS Roman code points for bytes 0x80-0xFF.
const MAC_ROMAN_HIGH: [u16; 128] = [
    0x00C4, 0x00C5, 0x00C7, 0x00C9, 0x00D1, 0x00D6, 0x00DC, 0x00E1, // 0x80
    0x00E0, 0x00E2, 0x00E4, 0x00E3, 0x00E5, 0x00E7, 0x00E9, 0x00E8, // 0x88
    0x00EA, 0x00EB, 0x00ED, 0x00EC, 0x00EE, 0x00EF, 0x00F1, 0x00F3, // 0x90
    0x00F2, 0x00F4, 0x00F6, 0x00F5, 0x00FA, 0x00F9, 0x00FB, 0x00FC, // 0x98
    0x2020, 0x00B0, 0x00A2, 0x00A3, 0x00A7, 0x2022, 0x00B6, 0x00DF, // 0xA0
    0x00AE, 0x00A9, 0x2122, 0x00B4, 0x00A8, 0x2260, 0x00C6, 0x00D8, // 0xA8
    0x221E, 0x00B1, 0x2264, 0x2265, 0x00A5, 0x00B5, 0x2202, 0x2211, // 0xB0
    0x220F, 0x03C0, 0x222B, 0x00AA, 0x00BA, 0x03A9, 0x00E6, 0x00F8, // 0xB8
    0x00BF, 0x00A1, 0x00AC, 0x221A, 0x0192, 0x2248, 0x2206, 0x00AB, // 0xC0
    0x00BB, 0x2026, 0x00A0, 0x00C0, 0x00C3, 0x00D5, 0x0152, 0x0153, // 0xC8
    0x2013, 0x2014, 0x201C, 0x201D, 0x2018, 0x2019, 0x00F7, 0x25CA, // 0xD0
    0x00FF, 0x0178, 0x2044, 0x20AC, 0x2039, 0x203A, 0xFB01, 0xFB02, // 0xD8
    0x2021, 0x00B7, 0x201A, 0x201E, 0x2030, 0x00C2, 0x00CA, 0x00C1, // 0xE0
    0x00CB, 0x00C8, 0x00CD, 0x00CE, 0x00CF, 0x00CC, 0x00D3, 0x00D4, // 0xE8
    0xF8FF, 0x00D2, 0x00DA, 0x00DB, 0x00D9, 0x0131, 0x02C6, 0x02DC, // 0xF0
    0x00AF, 0x02D8, 0x02D9, 0x02DA, 0x00B8, 0x02DD, 0x02DB, 0x02C7, // 0xF8
];

/// Encode a character as a single Mac OS Roman byte.
fn mac_roman_byte(c: char) -> Option<u8> {
    let cp = u32::from(c);
    if cp < 0x80 {
        return u8::try_from(cp).ok();
    }
    let index = MAC_ROMAN_HIGH.iter().position(|&m| u32::from(m) == cp)?;
    u8::try_from(0x80 + index).ok()
}

/// Which characters a face can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphCoverage {
    /// Unicode character map.
    Unicode(HashSet<u32>),
    /// Windows symbol map: characters are encoded to a Mac OS Roman byte
    /// and looked up at `0xF000 + byte`.
    ///
    /// The language of a `(1,0)` subtable is not consulted, so faces whose
    /// Mac map declares a regional variant (Turkish, Icelandic, Central
    /// European and so on) are still looked up through Mac OS Roman. Characters
    /// outside Mac OS Roman always count as missing.
    Symbol(HashSet<u32>),
    /// No usable character map; nothing is reported as missing.
    Unavailable,
}

impl GlyphCoverage {
    /// Unicode coverage of exactly the given characters.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self::Unicode(chars.into_iter().map(u32::from).collect())
    }

    /// Whether the face has a glyph for `c`.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Unicode(codes) => codes.contains(&u32::from(c)),
            Self::Symbol(codes) => mac_roman_byte(c)
                .is_some_and(|byte| codes.contains(&(SYMBOL_BASE + u32::from(byte)))),
            Self::Unavailable => true,
        }
    }

    /// Characters of `text` without a glyph, in order of appearance.
    pub fn missing(&self, text: &str) -> Vec<char> {
        text.chars().filter(|&c| !self.contains(c)).collect()
    }

    /// Whether a usable character map was found.
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}
