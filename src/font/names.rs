use ttf_parser::{name_id, Face};
use crate::models::FontMetadataRecord;

/// Read the five descriptive fields out of a parsed face's name table.
///
/// Family names collect both the legacy and typographic family IDs, keeping
/// every distinct decodable value in table order. The other fields take the
/// first decodable value; only Unicode-encoded records are considered.
/// Fields the font does not declare come back as empty strings.
pub fn read_record(face: &Face) -> FontMetadataRecord {
    let mut record = FontMetadataRecord::default();

    for name in face.names().into_iter() {
        let value = match name.to_string() {
            Some(value) => value,
            None => continue,
        };

        match name.name_id {
            name_id::COPYRIGHT_NOTICE => {
                if record.copyright_notice.is_empty() {
                    record.copyright_notice = value;
                }
            }
            name_id::FAMILY | name_id::TYPOGRAPHIC_FAMILY => {
                if !record.family_names.contains(&value) {
                    record.family_names.push(value);
                }
            }
            name_id::SUBFAMILY | name_id::TYPOGRAPHIC_SUBFAMILY => {
                if record.sub_family_name.is_empty() {
                    record.sub_family_name = value;
                }
            }
            name_id::FULL_NAME => {
                if record.full_name.is_empty() {
                    record.full_name = value;
                }
            }
            name_id::POST_SCRIPT_NAME => {
                if record.post_script_name.is_empty() {
                    record.post_script_name = value;
                }
            }
            _ => {}
        }
    }

    // Fonts without an explicit PostScript name fall back to the full name
    // with whitespace stripped.
    if record.post_script_name.is_empty() {
        record.post_script_name = record.full_name.split_whitespace().collect();
    }

    record
}
