//! Centralized validation of run configuration.

use crate::core::types::Cutoffs;

/// Inclusive range accepted for the identity cutoff
pub const MIN_IDENTITY_RANGE: (f64, f64) = (0.0, 1.0);

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Minimum identity must be a number between 0 and 1, got {0}")]
    IdentityOutOfRange(f64),
    #[error("Invalid minimum identity '{0}': expected a floating point number")]
    InvalidIdentity(String),
    #[error("Invalid minimum length '{0}': expected a non-negative integer")]
    InvalidLength(String),
}

/// Check that an identity cutoff lies in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use assembly_stats::utils::validation::validate_identity;
///
/// assert!(validate_identity(0.95).is_ok());
/// assert!(validate_identity(1.5).is_err());
/// assert!(validate_identity(f64::NAN).is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::IdentityOutOfRange` for values outside the range or NaN.
pub fn validate_identity(value: f64) -> Result<f64, ValidationError> {
    let (low, high) = MIN_IDENTITY_RANGE;
    if (low..=high).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::IdentityOutOfRange(value))
    }
}

/// Check a complete cutoff set before any file is opened.
///
/// # Errors
///
/// Returns `ValidationError::IdentityOutOfRange` if the identity cutoff is invalid.
pub fn validate_cutoffs(cutoffs: &Cutoffs) -> Result<(), ValidationError> {
    validate_identity(cutoffs.min_identity)?;
    Ok(())
}

/// Parse a `-q` value. Used as a clap value parser.
///
/// # Errors
///
/// Returns `ValidationError::InvalidIdentity` if the text is not a float, or
/// `ValidationError::IdentityOutOfRange` if it is outside `[0, 1]`.
pub fn parse_identity(text: &str) -> Result<f64, ValidationError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidIdentity(text.to_string()))?;
    validate_identity(value)
}

/// Parse a `-m` value. Used as a clap value parser.
///
/// # Errors
///
/// Returns `ValidationError::InvalidLength` if the text is not a non-negative integer.
pub fn parse_min_length(text: &str) -> Result<u64, ValidationError> {
    text.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidLength(text.to_string()))
}
