//! Error types for the designer crate.

use paalkraal_settings::ConfigError;
use thiserror::Error;

/// Errors raised when a designer command is rejected.
///
/// Geometry and material derivation never fail; only input arriving from
/// outside the designer is checked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// Replacement settings failed validation
    #[error("Settings rejected: {0}")]
    InvalidSettings(#[from] ConfigError),

    /// Turn angle is NaN or infinite
    #[error("Turn angle must be a finite number of degrees, got {0}")]
    NonFiniteTurn(f64),
}

/// Result type alias for designer commands.
pub type DesignerResult<T> = Result<T, DesignerError>;
