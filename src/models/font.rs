use std::path::PathBuf;

/// A font file discovered during a directory scan
#[derive(Clone, Debug)]
pub struct FontFileEntry {
    /// Absolute path of the file
    pub path: PathBuf,
    /// File base name shown in listings
    pub display_name: String,
}

/// Descriptive metadata for one font program.
///
/// All five fields are always present for a successfully parsed program;
/// a field the font does not declare is an empty string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontMetadataRecord {
    /// Unique machine-readable identifier for the font program
    pub post_script_name: String,
    /// Family names, possibly several localized variants, in the order the
    /// font declares them
    pub family_names: Vec<String>,
    /// Style variant within the family (e.g. "Bold")
    pub sub_family_name: String,
    /// Complete human-readable display name
    pub full_name: String,
    /// Copyright notice declared by the font
    pub copyright_notice: String,
}

/// On-disk container kind, decided by file extension alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    /// Exactly one font program (TTF/OTF-like)
    Single,
    /// One or more font programs bundled together (TTC-like)
    Collection,
}
