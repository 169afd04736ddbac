//! Font file discovery and metadata extraction

pub mod metadata;
pub mod names;
pub mod scanner;

#[cfg(test)]
pub mod testutil;

pub use metadata::{classify, extract_font_metadata, COLLECTION_EXTENSION};
pub use names::read_record;
pub use scanner::scan_font_dirs;
