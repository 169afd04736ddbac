use std::path::Path;
use crate::models::FontMetadataRecord;

/// Render metadata records as labeled detail lines.
///
/// The first line names the file; each record then contributes its five
/// fields in a fixed order. When the file held more than one program, a
/// blank separator line follows every record, the last one included.
pub fn detail_lines(path: &Path, records: &[FontMetadataRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + records.len() * 6);
    lines.push(format!("filePath: {}", path.display()));

    let separated = records.len() > 1;
    for record in records {
        lines.push(format!("postScriptName: {}", record.post_script_name));
        lines.push(format!("familyNames: [{}]", record.family_names.join(", ")));
        lines.push(format!("subFamilyName: {}", record.sub_family_name));
        lines.push(format!("fullName: {}", record.full_name));
        lines.push(format!("copyrightNotice: {}", record.copyright_notice));
        if separated {
            lines.push(String::new());
        }
    }

    lines
}
