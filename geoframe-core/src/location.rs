//! Observer position on Earth in geodetic coordinates.
//!
//! # Coordinate conventions
//!
//! - **Latitude**: North positive, degrees, meaningful range [-90, 90]
//! - **Longitude**: East positive, degrees, any value (wraps through the trigonometry)
//! - **Height**: Kilometers above the reference ellipsoid, may be negative
//!
//! [`GeodeticPosition::new`] stores whatever it is given, so NaN or an out-of-range latitude
//! flows into the ellipsoid model unchanged. Use [`GeodeticPosition::checked`] at an input
//! boundary to reject such values with a typed error instead.
//!
//! ```
//! use geoframe_core::GeodeticPosition;
//!
//! let obs = GeodeticPosition::checked(40.496, -80.246, 0.37)?;
//! assert_eq!(obs.latitude_deg, 40.496);
//! assert!(GeodeticPosition::checked(91.0, 0.0, 0.0).is_err());
//! # Ok::<(), geoframe_core::GeoError>(())
//! ```

use crate::errors::{GeoError, GeoResult, MathErrorKind};
use crate::utils::deg_to_rad;

/// A geodetic position: latitude and longitude in degrees, height in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    /// Geodetic latitude in degrees. North is positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees. East is positive.
    pub longitude_deg: f64,
    /// Height above the ellipsoid in kilometers.
    pub height_km: f64,
}

impl GeodeticPosition {
    /// Creates a position without any validation.
    pub const fn new(latitude_deg: f64, longitude_deg: f64, height_km: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_km,
        }
    }

    /// Creates a position, rejecting non-finite components and latitudes beyond ±90°.
    ///
    /// Longitude is not range-checked; 370° and 10° describe the same meridian.
    pub fn checked(latitude_deg: f64, longitude_deg: f64, height_km: f64) -> GeoResult<Self> {
        let position = Self::new(latitude_deg, longitude_deg, height_km);
        position.validate()?;
        Ok(position)
    }

    /// Checks this position against the constraints of [`checked`](Self::checked).
    pub fn validate(&self) -> GeoResult<()> {
        if !self.latitude_deg.is_finite() {
            return Err(GeoError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Latitude degrees must be finite",
            ));
        }
        if !self.longitude_deg.is_finite() {
            return Err(GeoError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Longitude degrees must be finite",
            ));
        }
        if !self.height_km.is_finite() {
            return Err(GeoError::math_error(
                "location_validation",
                MathErrorKind::NotFinite,
                "Height must be finite",
            ));
        }
        if self.latitude_deg.abs() > 90.0 {
            return Err(GeoError::math_error(
                "location_validation",
                MathErrorKind::OutOfRange,
                &format!(
                    "Latitude {:.6}° outside valid range [-90, 90] degrees",
                    self.latitude_deg
                ),
            ));
        }
        Ok(())
    }

    /// Returns the latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        deg_to_rad(self.latitude_deg)
    }

    /// Returns the longitude in radians.
    pub fn longitude_rad(&self) -> f64 {
        deg_to_rad(self.longitude_deg)
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.latitude_deg.is_finite() && self.longitude_deg.is_finite() && self.height_km.is_finite()
    }
}
