use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the FontInfo application
#[derive(Debug)]
pub enum Error {
    /// IO operations errors (stdin/stdout plumbing)
    Io(io::Error),
    /// A font file could not be read from disk
    Read(PathBuf, io::Error),
    /// Font data could not be interpreted as a valid font
    Parse(PathBuf, String),
    /// Invalid file or directory path
    InvalidPath(PathBuf),
    /// Configuration errors
    Config(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            // Read and Parse stay separate variants but present the same
            // way: the file could not be parsed.
            Error::Read(path, err) => {
                write!(f, "Cannot parse font file {}: {}", path.display(), err)
            }
            Error::Parse(path, msg) => {
                write!(f, "Cannot parse font file {}: {}", path.display(), msg)
            }
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for FontInfo operations
pub type Result<T> = std::result::Result<T, Error>;
