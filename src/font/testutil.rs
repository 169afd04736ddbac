//! Test fixtures: minimal-but-valid sfnt fonts built in memory.
//!
//! The builders emit just the tables `ttf_parser` requires (`head`, `hhea`,
//! `maxp`) plus a `name` table populated from (name ID, value) pairs, so
//! extraction behavior can be tested against real bytes without shipping
//! binary fixtures.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique scratch directory removed on drop
pub struct TestDir {
    pub path: PathBuf,
}

impl TestDir {
    pub fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path =
            std::env::temp_dir().join(format!("fontinfo_{tag}_{}_{}", std::process::id(), ts));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

// 54-byte head table; only unitsPerEm and indexToLocFormat matter to the
// parser, the rest is filled with plausible constants.
fn head_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(54);
    push_u32(&mut t, 0x0001_0000); // version
    push_u32(&mut t, 0); // fontRevision
    push_u32(&mut t, 0); // checkSumAdjustment
    push_u32(&mut t, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, 1000); // unitsPerEm
    t.extend_from_slice(&[0u8; 16]); // created + modified
    for _ in 0..4 {
        push_u16(&mut t, 0); // xMin, yMin, xMax, yMax
    }
    push_u16(&mut t, 0); // macStyle
    push_u16(&mut t, 8); // lowestRecPPEM
    push_u16(&mut t, 2); // fontDirectionHint
    push_u16(&mut t, 0); // indexToLocFormat
    push_u16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(36);
    push_u32(&mut t, 0x0001_0000); // version
    push_u16(&mut t, 800); // ascender
    push_u16(&mut t, (-200i16) as u16); // descender
    push_u16(&mut t, 0); // lineGap
    t.extend_from_slice(&[0u8; 24]); // advance/bearing extremes, reserved
    push_u16(&mut t, 1); // numberOfHMetrics
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = Vec::with_capacity(6);
    push_u32(&mut t, 0x0000_5000); // version 0.5
    push_u16(&mut t, 1); // numGlyphs
    t
}

// name table, format 0, Windows platform / Unicode BMP encoding, en-US.
fn name_table(names: &[(u16, &str)]) -> Vec<u8> {
    let mut records = Vec::new();
    let mut storage = Vec::new();
    for &(name_id, value) in names {
        let offset = storage.len() as u16;
        for unit in value.encode_utf16() {
            storage.extend_from_slice(&unit.to_be_bytes());
        }
        let length = storage.len() as u16 - offset;
        push_u16(&mut records, 3); // platform ID: Windows
        push_u16(&mut records, 1); // encoding ID: Unicode BMP
        push_u16(&mut records, 0x0409); // language ID: en-US
        push_u16(&mut records, name_id);
        push_u16(&mut records, length);
        push_u16(&mut records, offset);
    }

    let mut t = Vec::new();
    push_u16(&mut t, 0); // format
    push_u16(&mut t, names.len() as u16);
    push_u16(&mut t, 6 + records.len() as u16); // storage offset
    t.extend_from_slice(&records);
    t.extend_from_slice(&storage);
    t
}

/// Build a single-font sfnt whose table record offsets assume the blob
/// starts at `base` within the final file (0 for a standalone font).
pub fn build_font(names: &[(u16, &str)], base: u32) -> Vec<u8> {
    // Tags must stay sorted: the parser looks tables up by binary search.
    let tables: [(&[u8; 4], Vec<u8>); 4] = [
        (b"head", head_table()),
        (b"hhea", hhea_table()),
        (b"maxp", maxp_table()),
        (b"name", name_table(names)),
    ];

    let mut out = Vec::new();
    push_u32(&mut out, 0x0001_0000); // sfnt version
    push_u16(&mut out, tables.len() as u16);
    push_u16(&mut out, 64); // searchRange
    push_u16(&mut out, 2); // entrySelector
    push_u16(&mut out, 0); // rangeShift

    let mut offset = base + 12 + 16 * tables.len() as u32;
    for (tag, data) in &tables {
        out.extend_from_slice(*tag);
        push_u32(&mut out, 0); // checksum, unchecked
        push_u32(&mut out, offset);
        push_u32(&mut out, data.len() as u32);
        offset += data.len() as u32;
    }
    for (_, data) in &tables {
        out.extend_from_slice(data);
    }
    out
}

/// Build a ttcf collection embedding one sfnt per name set, in order
pub fn build_collection(fonts: &[&[(u16, &str)]]) -> Vec<u8> {
    let header_len = 12 + 4 * fonts.len() as u32;

    let mut blobs = Vec::with_capacity(fonts.len());
    let mut offsets = Vec::with_capacity(fonts.len());
    let mut base = header_len;
    for names in fonts {
        let blob = build_font(names, base);
        offsets.push(base);
        base += blob.len() as u32;
        blobs.push(blob);
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"ttcf");
    push_u32(&mut out, 0x0001_0000); // version
    push_u32(&mut out, fonts.len() as u32);
    for offset in offsets {
        push_u32(&mut out, offset);
    }
    for blob in blobs {
        out.extend_from_slice(&blob);
    }
    out
}
