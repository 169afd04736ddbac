use std::path::PathBuf;
use crate::error::{Error, Result};

/// Action requested on the command line
pub enum Command {
    /// Scan font directories and print discovered file names
    List(Vec<PathBuf>),
    /// Print metadata for one font file, prompting when no path is given
    Info(Option<PathBuf>),
}

/// Parse command line arguments into a command.
///
/// Flags are filtered out (handled separately); the first positional token
/// selects the command, defaulting to `list` when absent.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|arg| !arg.starts_with('-'))
        .collect();

    match positional.first().map(|s| s.as_str()) {
        None | Some("list") => Ok(Command::List(
            positional
                .iter()
                .skip(1)
                .map(|s| PathBuf::from(s.as_str()))
                .collect(),
        )),
        Some("info") => Ok(Command::Info(
            positional.get(1).map(|s| PathBuf::from(s.as_str())),
        )),
        Some(other) => Err(Error::Config(format!("Unknown command '{}'", other))),
    }
}

/// Get the help message for command-line usage
pub fn get_help_message() -> String {
    r#"FontInfo - A tool for inspecting font files

USAGE:
    fontinfo [OPTIONS] list [DIRECTORY...]
    fontinfo [OPTIONS] info [FILE]

COMMANDS:
    list    Scan font directories and print the discovered file names,
            sorted ascending. Without arguments the conventional device
            directories are scanned: /system/fonts, /system/font and
            /data/fonts. Missing directories are skipped.
    info    Parse one font file and print its metadata: postScriptName,
            familyNames, subFamilyName, fullName and copyrightNotice.
            Collection files (.ttc) print one block per embedded font.
            Without a FILE argument the path is read from standard input.

OPTIONS:
    -h, --help    Show this help message
    --debug       Enable debug output

Without a command, fontinfo behaves as if "list" was given.
"#
    .to_string()
}
