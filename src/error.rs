//! Error types for the Ejaan library.
//!
//! All fallible operations return [`EjaanError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use ejaan::error::{EjaanError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(EjaanError::invalid_config("max_suggestions must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Ejaan operations.
#[derive(Error, Debug)]
pub enum EjaanError {
    /// I/O errors (reading input, writing output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The vocabulary file does not exist.
    #[error("Could not find file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The vocabulary file exists but could not be read or parsed.
    #[error("Failed to load vocabulary from file: {}. Error: {source}", path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The word to check was empty, so no similarity score can be computed.
    #[error("Input word must not be empty")]
    EmptyInput,

    /// Invalid cost tables or ranker settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with EjaanError.
pub type Result<T> = std::result::Result<T, EjaanError>;

impl EjaanError {
    /// Create a new load failure error for the given path.
    pub fn load_failure<P, E>(path: P, source: E) -> Self
    where
        P: Into<PathBuf>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        EjaanError::LoadFailure {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        EjaanError::Config(msg.into())
    }
}
