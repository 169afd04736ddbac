//! FontInfo: list the font files on a device and inspect their metadata.
//!
//! `fontinfo list` scans the conventional font directories (or the ones
//! given on the command line) and prints the discovered file names sorted
//! ascending. `fontinfo info FILE` parses one font file, single or
//! collection, and prints the descriptive fields of every font program it
//! contains.

mod cli;
mod display;
mod error;
mod font;
mod models;
mod utils;

use std::env;
use std::path::PathBuf;

use cli::{get_font_file_input, get_help_message, parse_args, Command};
use display::{detail_lines, listing_lines};
use error::Error;
use font::{extract_font_metadata, scan_font_dirs};
use models::Config;
use utils::log;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    // Check if help is requested
    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        println!("{}", get_help_message());
        return Ok(());
    }

    let debug_mode = args.contains(&"--debug".to_string());
    if debug_mode {
        println!("Debug mode enabled");
    }

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            println!("Error: {}", e);
            println!("{}", get_help_message());
            return Err(Box::new(e));
        }
    };

    let result = match command {
        Command::List(directories) => {
            let config = Config::with_directories(debug_mode, directories);
            run_list(&config)
        }
        Command::Info(path) => {
            let config = Config::new(debug_mode);
            run_info(&config, path)
        }
    };

    if let Err(e) = result {
        println!("Error: {}", e);
        return Err(Box::new(e));
    }
    Ok(())
}

/// Scan the configured directories and print the discovered file names
fn run_list(config: &Config) -> Result<(), Error> {
    let entries = scan_font_dirs(config);
    log(config, &format!("Scan complete: {} font files found", entries.len()));

    for line in listing_lines(&entries) {
        println!("{}", line);
    }
    Ok(())
}

/// Parse one font file and print its detail lines
fn run_info(config: &Config, path: Option<PathBuf>) -> Result<(), Error> {
    let path = match path {
        Some(path) => path,
        None => get_font_file_input(config)?,
    };

    let records = extract_font_metadata(&path, config)?;
    for line in detail_lines(&path, &records) {
        println!("{}", line);
    }
    Ok(())
}
