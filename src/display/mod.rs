//! Listing and detail presentation

pub mod detail;
pub mod listing;

pub use detail::detail_lines;
pub use listing::{listing_lines, selected_path};
