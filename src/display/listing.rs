use std::path::Path;
use crate::models::FontFileEntry;

/// Render the scanned entries as listing lines, one display name per entry,
/// in the order received
pub fn listing_lines(entries: &[FontFileEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.display_name.clone()).collect()
}

/// Map a selection index back to the selected entry's path
#[allow(dead_code)]
pub fn selected_path(entries: &[FontFileEntry], index: usize) -> Option<&Path> {
    entries.get(index).map(|entry| entry.path.as_path())
}
