//! Error types for latexclip

use thiserror::Error;

/// Main error type for latexclip operations.
///
/// The conversions themselves never fail; this covers loading
/// configuration and reading input.
#[derive(Error, Debug)]
pub enum LatexclipError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unusable input (e.g. unknown output mode name)
    #[error("Input error: {0}")]
    Input(String),
}

/// Result type alias for latexclip operations
pub type Result<T> = std::result::Result<T, LatexclipError>;
