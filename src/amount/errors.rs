// ============================================================================
// Spelling Errors
// Error types for amount construction and spelling
// ============================================================================

use crate::tables::MAGNITUDE_CEILING_POW10;
use std::fmt;

/// Errors that can occur while constructing or spelling an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellError {
    /// Integer magnitude at or above the supported ceiling (10^64)
    MagnitudeExceeded,
    /// Input string or value is not a decimal amount
    InvalidAmount,
}

impl fmt::Display for SpellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpellError::MagnitudeExceeded => write!(
                f,
                "magnitude exceeded: supported amounts are below 10^{}",
                MAGNITUDE_CEILING_POW10
            ),
            SpellError::InvalidAmount => {
                write!(f, "invalid amount: could not parse value")
            },
        }
    }
}

impl std::error::Error for SpellError {}

/// Result type alias for spelling operations
pub type SpellResult<T> = Result<T, SpellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SpellError::MagnitudeExceeded.to_string(),
            "magnitude exceeded: supported amounts are below 10^64"
        );
        assert_eq!(
            SpellError::InvalidAmount.to_string(),
            "invalid amount: could not parse value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(SpellError::MagnitudeExceeded, SpellError::MagnitudeExceeded);
        assert_ne!(SpellError::MagnitudeExceeded, SpellError::InvalidAmount);
    }
}
