use std::fs;
use std::path::Path;
use ttf_parser::Face;
use crate::error::{Error, Result};
use crate::models::{Config, FontKind, FontMetadataRecord};
use crate::utils::log;
use super::names::read_record;

/// Extension identifying a font-collection container. Compared literally,
/// without case normalization: `Fonts.TTC` classifies as a single font.
pub const COLLECTION_EXTENSION: &str = "ttc";

/// Classify a path as a single font or a collection container.
///
/// Purely extension-based; file contents are never inspected.
pub fn classify(path: &Path) -> FontKind {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == COLLECTION_EXTENSION => FontKind::Collection,
        _ => FontKind::Single,
    }
}

/// Extract metadata from a font file.
///
/// Returns one record for a single font, or one record per embedded font
/// program in container order for a collection. Fails with `Error::Read`
/// when the file cannot be read and `Error::Parse` when the bytes are not
/// a valid font of the kind the extension promised; there is no fallback
/// to the other parsing mode.
pub fn extract_font_metadata(path: &Path, config: &Config) -> Result<Vec<FontMetadataRecord>> {
    log(config, &format!("Extracting metadata from: {}", path.display()));

    let data = fs::read(path).map_err(|e| Error::Read(path.to_path_buf(), e))?;

    let records = match classify(path) {
        FontKind::Collection => {
            let count = ttf_parser::fonts_in_collection(&data).ok_or_else(|| {
                Error::Parse(path.to_path_buf(), "missing font collection header".to_string())
            })?;

            let mut records = Vec::with_capacity(count as usize);
            for index in 0..count {
                let face = Face::parse(&data, index)
                    .map_err(|e| Error::Parse(path.to_path_buf(), e.to_string()))?;
                records.push(read_record(&face));
            }
            records
        }
        FontKind::Single => {
            let face = Face::parse(&data, 0)
                .map_err(|e| Error::Parse(path.to_path_buf(), e.to_string()))?;
            vec![read_record(&face)]
        }
    };

    for record in &records {
        log(config, &format!(
            "Metadata extracted - PostScript: {}, Families: [{}], Subfamily: {}, Full: {}",
            record.post_script_name,
            record.family_names.join(", "),
            record.sub_family_name,
            record.full_name
        ));
    }

    Ok(records)
}
