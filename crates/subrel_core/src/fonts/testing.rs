//! Synthetic font binaries for tests.
//!
//! Emits the smallest sfnt files the parser accepts: `head`, `hhea`, `maxp`,
//! `OS/2`, `name` and a format 12 `cmap`, plus an optional `CFF ` marker.
//! No outlines are written.

const TRUETYPE_MAGIC: u32 = 0x0001_0000;
const OPENTYPE_MAGIC: u32 = 0x4F54_544F; // 'OTTO'
const SYMBOL_BASE: u32 = 0xF000;

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap()
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap()
}

/// Builder for one synthetic face.
#[derive(Debug, Clone)]
pub struct FaceBuilder {
    family: String,
    full_name: Option<String>,
    postscript_name: Option<String>,
    weight: u16,
    italic: bool,
    chars: Vec<char>,
    symbol_chars: Vec<char>,
    cff: bool,
    cmap: bool,
}

impl FaceBuilder {
    /// Regular, upright face of the given family covering nothing.
    pub fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            full_name: None,
            postscript_name: None,
            weight: 400,
            italic: false,
            chars: Vec::new(),
            symbol_chars: Vec::new(),
            cff: false,
            cmap: true,
        }
    }

    pub fn full_name(mut self, name: &str) -> Self {
        self.full_name = Some(name.to_string());
        self
    }

    pub fn postscript_name(mut self, name: &str) -> Self {
        self.postscript_name = Some(name.to_string());
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Unicode characters with a glyph.
    pub fn chars(mut self, chars: &str) -> Self {
        self.chars.extend(chars.chars());
        self
    }

    /// ASCII characters mapped through a Windows symbol subtable.
    pub fn symbol_chars(mut self, chars: &str) -> Self {
        self.symbol_chars.extend(chars.chars());
        self
    }

    /// Mark the face as carrying CFF outlines.
    pub fn cff(mut self) -> Self {
        self.cff = true;
        self
    }

    /// Omit the character map entirely.
    pub fn without_cmap(mut self) -> Self {
        self.cmap = false;
        self
    }

    /// Serialize as a standalone font file.
    pub fn build(&self) -> Vec<u8> {
        write_sfnt(&[self.tables()], false)
    }

    /// Serialize several faces as a font collection.
    pub fn collection(faces: &[FaceBuilder]) -> Vec<u8> {
        let tables: Vec<_> = faces.iter().map(FaceBuilder::tables).collect();
        write_sfnt(&tables, true)
    }

    fn glyph_count(&self) -> usize {
        self.chars.len() + self.symbol_chars.len() + 1
    }

    fn tables(&self) -> (u32, Vec<([u8; 4], Vec<u8>)>) {
        let mut tables = vec![
            (*b"OS/2", self.os2()),
            (*b"head", self.head()),
            (*b"hhea", hhea()),
            (*b"maxp", self.maxp()),
            (*b"name", self.name()),
        ];
        if self.cmap {
            tables.push((*b"cmap", self.cmap_table()));
        }
        if self.cff {
            // Header only; enough for the table to be present
            tables.push((*b"CFF ", vec![1, 0, 4, 1]));
        }
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        let magic = if self.cff { OPENTYPE_MAGIC } else { TRUETYPE_MAGIC };
        (magic, tables)
    }

    fn head(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(54);
        push_u32(&mut out, 0x0001_0000); // version
        push_u32(&mut out, 0x0001_0000); // fontRevision
        push_u32(&mut out, 0); // checksumAdjustment
        push_u32(&mut out, 0x5F0F_3CF5); // magicNumber
        push_u16(&mut out, 0); // flags
        push_u16(&mut out, 1000); // unitsPerEm
        out.extend_from_slice(&[0; 16]); // created, modified
        out.extend_from_slice(&[0; 8]); // bounding box
        let mut mac_style = 0;
        if self.weight >= 700 {
            mac_style |= 0b01;
        }
        if self.italic {
            mac_style |= 0b10;
        }
        push_u16(&mut out, mac_style);
        push_u16(&mut out, 8); // lowestRecPPEM
        push_u16(&mut out, 2); // fontDirectionHint
        push_u16(&mut out, 0); // indexToLocFormat
        push_u16(&mut out, 0); // glyphDataFormat
        out
    }

    fn maxp(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(6);
        push_u32(&mut out, 0x0000_5000);
        push_u16(&mut out, to_u16(self.glyph_count()));
        out
    }

    fn os2(&self) -> Vec<u8> {
        let mut out = vec![0; 78];
        out[4..6].copy_from_slice(&self.weight.to_be_bytes()); // usWeightClass
        out[6..8].copy_from_slice(&5u16.to_be_bytes()); // usWidthClass
        let fs_selection: u16 = if self.italic { 0x0001 } else { 0x0040 };
        out[62..64].copy_from_slice(&fs_selection.to_be_bytes());
        out
    }

    fn name(&self) -> Vec<u8> {
        let mut entries: Vec<(u16, &str)> = vec![(1, self.family.as_str())];
        if let Some(full) = &self.full_name {
            entries.push((4, full));
        }
        if let Some(ps) = &self.postscript_name {
            entries.push((6, ps));
        }

        let mut storage = Vec::new();
        let mut out = Vec::new();
        push_u16(&mut out, 0); // format
        push_u16(&mut out, to_u16(entries.len()));
        push_u16(&mut out, to_u16(6 + 12 * entries.len()));
        for (name_id, value) in entries {
            let encoded: Vec<u8> = value.encode_utf16().flat_map(u16::to_be_bytes).collect();
            push_u16(&mut out, 3); // Windows
            push_u16(&mut out, 1); // Unicode BMP
            push_u16(&mut out, 0x409); // en-US
            push_u16(&mut out, name_id);
            push_u16(&mut out, to_u16(encoded.len()));
            push_u16(&mut out, to_u16(storage.len()));
            storage.extend_from_slice(&encoded);
        }
        out.extend_from_slice(&storage);
        out
    }

    fn cmap_table(&self) -> Vec<u8> {
        let mut subtables: Vec<(u16, Vec<u32>)> = Vec::new();
        if !self.chars.is_empty() {
            subtables.push((10, self.chars.iter().map(|&c| u32::from(c)).collect()));
        }
        if !self.symbol_chars.is_empty() {
            let codes = self
                .symbol_chars
                .iter()
                .map(|&c| SYMBOL_BASE + u32::from(c))
                .collect();
            subtables.push((0, codes));
        }

        let mut out = Vec::new();
        push_u16(&mut out, 0); // version
        push_u16(&mut out, to_u16(subtables.len()));

        let mut bodies = Vec::new();
        let records_end = 4 + 8 * subtables.len();
        for (encoding_id, codes) in &subtables {
            let body = format12(codes);
            push_u16(&mut out, 3); // Windows
            push_u16(&mut out, *encoding_id);
            push_u32(&mut out, to_u32(records_end + bodies.len()));
            bodies.extend_from_slice(&body);
        }
        out.extend_from_slice(&bodies);
        out
    }
}

fn hhea() -> Vec<u8> {
    let mut out = Vec::with_capacity(36);
    push_u32(&mut out, 0x0001_0000);
    out.extend_from_slice(&[0; 32]);
    out
}

/// Segmented coverage subtable with one group per code point.
fn format12(codes: &[u32]) -> Vec<u8> {
    let mut codes = codes.to_vec();
    codes.sort_unstable();
    codes.dedup();

    let mut out = Vec::new();
    push_u16(&mut out, 12);
    push_u16(&mut out, 0);
    push_u32(&mut out, to_u32(16 + 12 * codes.len()));
    push_u32(&mut out, 0); // language
    push_u32(&mut out, to_u32(codes.len()));
    for (i, code) in codes.iter().enumerate() {
        push_u32(&mut out, *code);
        push_u32(&mut out, *code);
        push_u32(&mut out, to_u32(i + 1));
    }
    out
}

/// Lay out table directories followed by all table data.
fn write_sfnt(faces: &[(u32, Vec<([u8; 4], Vec<u8>)>)], collection: bool) -> Vec<u8> {
    let header_len = if collection { 12 + 4 * faces.len() } else { 0 };
    let dir_sizes: Vec<usize> = faces.iter().map(|(_, t)| 12 + 16 * t.len()).collect();
    let data_start = header_len + dir_sizes.iter().sum::<usize>();

    let mut dirs = Vec::new();
    let mut blob = Vec::new();
    for (magic, tables) in faces {
        push_u32(&mut dirs, *magic);
        push_u16(&mut dirs, to_u16(tables.len()));
        dirs.extend_from_slice(&[0; 6]);
        for (tag, body) in tables {
            dirs.extend_from_slice(tag);
            push_u32(&mut dirs, 0); // checksum
            push_u32(&mut dirs, to_u32(data_start + blob.len()));
            push_u32(&mut dirs, to_u32(body.len()));
            blob.extend_from_slice(body);
            while blob.len() % 4 != 0 {
                blob.push(0);
            }
        }
    }

    let mut out = Vec::with_capacity(data_start + blob.len());
    if collection {
        out.extend_from_slice(b"ttcf");
        push_u32(&mut out, 0x0001_0000);
        push_u32(&mut out, to_u32(faces.len()));
        let mut offset = header_len;
        for size in &dir_sizes {
            push_u32(&mut out, to_u32(offset));
            offset += size;
        }
    }
    out.extend_from_slice(&dirs);
    out.extend_from_slice(&blob);
    out
}
