//! Value objects shared across the application

pub mod config;
pub mod font;

pub use config::{Config, DEFAULT_FONT_DIRECTORIES};
pub use font::{FontFileEntry, FontKind, FontMetadataRecord};
