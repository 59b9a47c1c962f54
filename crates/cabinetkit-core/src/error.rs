//! Error handling for CabinetKit
//!
//! Every failure the construction engine can report is a caller input error:
//! - dimensions outside the supported size ladder
//! - an archetype name the engine does not know
//! - a configuration that would produce unbuildable parts
//!
//! All error types use `thiserror`. Nothing is clamped or partially applied;
//! a call either returns a complete result or one of these errors.

use crate::archetype::CabinetArchetype;
use thiserror::Error;

/// Cabinet engine error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CabinetError {
    /// Width or height is not on the archetype's size ladder
    #[error("Invalid {field} {value} for {archetype} cabinet (allowed: {allowed})")]
    InvalidDimension {
        /// Which dimension was rejected ("width" or "height").
        field: String,
        /// The rejected value in inches.
        value: f64,
        /// The archetype whose ladder was checked.
        archetype: CabinetArchetype,
        /// Human readable list of accepted values.
        allowed: String,
    },

    /// Archetype name is not one of base, wall, tall
    #[error("Unsupported cabinet archetype: {0}")]
    UnsupportedArchetype(String),

    /// Configuration would produce negative or empty geometry
    #[error("Degenerate configuration: {0}")]
    DegenerateConfiguration(String),
}

impl CabinetError {
    /// Create a degenerate configuration error from a message
    pub fn degenerate(msg: impl Into<String>) -> Self {
        CabinetError::DegenerateConfiguration(msg.into())
    }

    /// Build an invalid dimension error, listing the accepted ladder values
    pub fn invalid_dimension(
        field: &str,
        value: f64,
        archetype: CabinetArchetype,
        ladder: &[f64],
    ) -> Self {
        let allowed = ladder
            .iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<_>>()
            .join(", ");
        CabinetError::InvalidDimension {
            field: field.to_string(),
            value,
            archetype,
            allowed,
        }
    }

    /// Check if this error was caused by an off-ladder dimension
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, CabinetError::InvalidDimension { .. })
    }

    /// Check if this error was caused by a degenerate configuration
    pub fn is_degenerate(&self) -> bool {
        matches!(self, CabinetError::DegenerateConfiguration(_))
    }
}

/// Result type using CabinetError
pub type Result<T> = std::result::Result<T, CabinetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = CabinetError::invalid_dimension("width", 10.0, CabinetArchetype::Wall, &[9.0, 12.0]);
        assert_eq!(
            err.to_string(),
            "Invalid width 10 for wall cabinet (allowed: 9, 12)"
        );
        assert!(err.is_invalid_dimension());
        assert!(!err.is_degenerate());
    }

    #[test]
    fn test_unsupported_archetype_display() {
        let err = CabinetError::UnsupportedArchetype("corner".to_string());
        assert_eq!(err.to_string(), "Unsupported cabinet archetype: corner");
    }

    #[test]
    fn test_degenerate_display() {
        let err = CabinetError::degenerate("shelf count must not be negative");
        assert_eq!(
            err.to_string(),
            "Degenerate configuration: shelf count must not be negative"
        );
        assert!(err.is_degenerate());
    }
}
