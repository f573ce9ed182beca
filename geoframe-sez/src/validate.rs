//! Input validation boundary.
//!
//! The transform itself accepts any `f64` and lets NaN or infinity flow into its output. This
//! module is the point where a request can instead be rejected with a typed error.
//!
//! | Mode | Non-finite input | Latitude beyond ±90° |
//! |------|------------------|----------------------|
//! | [`Checked`](ValidationMode::Checked) | `NotFinite` error | `OutOfRange` error |
//! | [`Unchecked`](ValidationMode::Unchecked) | passed through, logged | passed through |
//!
//! Longitude and height are never range-checked.

use geoframe_core::{GeoError, GeoResult, MathErrorKind};
use tracing::warn;

use crate::request::SezRequest;
use crate::sez::SezDisplacement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Checked,
    /// Reproduces the unvalidated behavior: whatever is parsed is transformed.
    Unchecked,
}

impl ValidationMode {
    pub fn validate(self, request: &SezRequest) -> GeoResult<()> {
        match self {
            Self::Checked => {
                request.observer.validate()?;
                validate_displacement(&request.displacement)
            }
            Self::Unchecked => {
                if !request.is_finite() {
                    warn!(
                        ?request,
                        "validation disabled; non-finite input will produce non-finite output"
                    );
                }
                Ok(())
            }
        }
    }
}

/// Rejects displacements with a NaN or infinite component.
pub fn validate_displacement(sez: &SezDisplacement) -> GeoResult<()> {
    let components = [("s_km", sez.s_km), ("e_km", sez.e_km), ("z_km", sez.z_km)];
    for (name, value) in components {
        if !value.is_finite() {
            return Err(GeoError::math_error(
                "validate_displacement",
                MathErrorKind::NotFinite,
                &format!("{} must be finite, got {}", name, value),
            ));
        }
    }
    Ok(())
}
