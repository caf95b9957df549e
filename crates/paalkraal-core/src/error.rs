//! Error handling for PaalKraalForge
//!
//! Layer-specific errors are collected into the unified [`Error`] type.
//! All error types use `thiserror`.

use thiserror::Error;

/// Catalog error type
///
/// Raised when user input names a pole that cannot be bought.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Length parsed but is not one of the catalog lengths
    #[error("No catalog pole of length {0}m (available: 1.8, 2.4, 3.6)")]
    UnknownPoleLength(f64),

    /// Input could not be read as a length
    #[error("Invalid pole length: {0}")]
    InvalidPoleLength(String),
}

/// Main error type for PaalKraalForge
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog lookup error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
