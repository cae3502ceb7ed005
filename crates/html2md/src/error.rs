//! Error types for HTML to Markdown conversion.

use std::io;

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors that can occur during HTML to Markdown conversion.
///
/// The substitution engine itself never fails; every variant originates at the
/// I/O boundary around it.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The HTML parser could not consume the input stream.
    #[error("HTML parsing error: {0}")]
    Parse(#[source] io::Error),

    /// Writing the Markdown output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
