use std::io::{self, Write};
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::log;

/// Ask the user for a font file path on standard input
pub fn get_font_file_input(config: &Config) -> Result<PathBuf> {
    print!("Enter the path to a font file: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let path = Path::new(input.trim()).to_path_buf();

    if !path.is_file() {
        return Err(Error::InvalidPath(path));
    }

    log(config, &format!("User input font file: {}", path.display()));
    Ok(path)
}
