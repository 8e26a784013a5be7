//! Error types for the campos-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the campos library.
#[derive(Error, Debug)]
pub enum CamposError {
    /// Document reading error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Spreadsheet export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while opening or parsing a Word document.
///
/// In batch mode these are captured into the failing row; in single-document
/// mode they are terminal.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read from disk.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a valid DOCX package.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Errors raised while writing the output spreadsheet.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The destination could not be written (permissions, missing directory,
    /// file locked by another program).
    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    /// The destination extension maps to no known spreadsheet format.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for the campos library.
pub type Result<T> = std::result::Result<T, CamposError>;
