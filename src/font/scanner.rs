use std::fs;
use crate::models::{Config, FontFileEntry};
use crate::utils::log;

/// Scan the configured font directories for font files.
///
/// Each directory is listed non-recursively, in configuration order, and the
/// combined results are sorted ascending by path. A directory that does not
/// exist or cannot be read is skipped without error, as is any individual
/// entry that cannot be inspected; the scan itself never fails.
pub fn scan_font_dirs(config: &Config) -> Vec<FontFileEntry> {
    let mut entries = Vec::new();

    for dir in &config.directories {
        let listing = match fs::read_dir(dir) {
            Ok(listing) => listing,
            Err(e) => {
                log(config, &format!("Skipping directory {}: {}", dir.display(), e));
                continue;
            }
        };

        for entry in listing {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log(config, &format!("Skipping entry in {}: {}", dir.display(), e));
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let display_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            log(config, &format!("Found font file: {}", path.display()));
            entries.push(FontFileEntry { path, display_name });
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    entries
}
