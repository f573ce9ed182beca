//! Error types for geodetic calculations.
//!
//! The conversions in this crate are total over finite input and never fail on their own.
//! Errors come from the two places where values are checked: building custom
//! [`EllipsoidConstants`](crate::EllipsoidConstants) and validating positions at an input
//! boundary.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MathError`](GeoError::MathError) | Non-finite values, out-of-range angles |
//! | [`ConfigError`](GeoError::ConfigError) | Ellipsoid parameters that do not describe an ellipsoid |
//!
//! ```
//! use geoframe_core::{GeoError, MathErrorKind};
//!
//! fn checked_latitude(lat_deg: f64) -> Result<f64, GeoError> {
//!     if !lat_deg.is_finite() {
//!         return Err(GeoError::math_error(
//!             "checked_latitude",
//!             MathErrorKind::NotFinite,
//!             "latitude is not finite",
//!         ));
//!     }
//!     Ok(lat_deg)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Value is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

/// Unified error type for geodetic calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Numerical or domain failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Invalid model configuration.
    #[error("Invalid configuration for {parameter}: {message}")]
    ConfigError { parameter: String, message: String },
}

/// Convenience alias for `Result<T, GeoError>`.
pub type GeoResult<T> = Result<T, GeoError>;

impl GeoError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates a [`ConfigError`](Self::ConfigError).
    pub fn config_error(parameter: &str, reason: &str) -> Self {
        Self::ConfigError {
            parameter: parameter.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the math error kind, if this is a [`MathError`](Self::MathError).
    pub fn math_kind(&self) -> Option<MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(*kind),
            Self::ConfigError { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_with_kind() {
        let err = GeoError::math_error(
            "validate_latitude",
            MathErrorKind::OutOfRange,
            "latitude 95.00° out of range",
        );
        assert!(err.to_string().contains("Math error in validate_latitude"));
        assert!(err.to_string().contains("OutOfRange"));
        assert_eq!(err.math_kind(), Some(MathErrorKind::OutOfRange));
    }

    #[test]
    fn test_config_error() {
        let err = GeoError::config_error("eccentricity", "must be in [0, 1)");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for eccentricity: must be in [0, 1)"
        );
        assert_eq!(err.math_kind(), None);
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<GeoError>();
        _assert_sync::<GeoError>();
    }
}
