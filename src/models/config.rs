use std::path::PathBuf;

/// Candidate font directories scanned when none are given on the command
/// line: the primary system directory, the legacy-named alternate, and the
/// user data directory, in that order.
pub const DEFAULT_FONT_DIRECTORIES: [&str; 3] = ["/system/fonts", "/system/font", "/data/fonts"];

/// Configuration for a font inspection run
#[derive(Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Directories scanned for font files, in search order
    pub directories: Vec<PathBuf>,
}

impl Config {
    /// Create a configuration scanning the default font directories
    pub fn new(debug_mode: bool) -> Self {
        Self {
            debug_mode,
            directories: DEFAULT_FONT_DIRECTORIES
                .iter()
                .map(PathBuf::from)
                .collect(),
        }
    }

    /// Create a configuration scanning the given directories instead of the
    /// defaults. An empty list falls back to the defaults.
    pub fn with_directories(debug_mode: bool, directories: Vec<PathBuf>) -> Self {
        if directories.is_empty() {
            Self::new(debug_mode)
        } else {
            Self {
                debug_mode,
                directories,
            }
        }
    }
}
