//! Global error handling for flatcode
//!
//! This module provides a centralized error type for every stage of a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for flatcode operations
#[derive(Error, Debug)]
pub enum FlattenError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Errors raised while listing a directory
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Base folder does not exist
    #[error("Folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    /// Base folder exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A selected file could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A selected file is not valid UTF-8 text
    #[error("Failed to decode {} as UTF-8 text", .0.display())]
    Decode(PathBuf),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for flatcode operations
pub type Result<T> = std::result::Result<T, FlattenError>;

/// Creates a FlattenError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::FlattenError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

impl FlattenError {
    /// Whether this error came from reading or decoding a single selected file
    pub fn is_file_level(&self) -> bool {
        matches!(self, Self::ReadFile { .. } | Self::Decode(_))
    }
}

// Allow converting FlattenError to io::Error for tests returning io::Result
impl From<FlattenError> for io::Error {
    fn from(err: FlattenError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
