//! Command-line interface handling and user interaction

mod args;
mod interaction;

pub use args::{get_help_message, parse_args, Command};
pub use interaction::get_font_file_input;
