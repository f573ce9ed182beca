//! Geodetic to ECEF conversion on a reference ellipsoid.
//!
//! # Geodetic vs Geocentric
//!
//! A geodetic latitude is the angle between the equatorial plane and the ellipsoid surface
//! normal at the observer, not the angle subtended at Earth's center. Because the ellipsoid is
//! oblate, the normal misses the center, and converting to Earth-Centered-Earth-Fixed (ECEF)
//! Cartesian coordinates needs two radius-of-curvature terms:
//!
//! - `C_E = R_E / sqrt(1 - e² sin²φ)`: transverse radius of curvature (prime vertical)
//! - `S_E = R_E (1 - e²) / sqrt(1 - e² sin²φ)`: its meridional-adjusted counterpart
//!
//! ```text
//! x = (C_E + h) cos φ cos λ
//! y = (C_E + h) cos φ sin λ
//! z = (S_E + h) sin φ
//! ```
//!
//! # Ellipsoid parameters
//!
//! [`EllipsoidConstants::REFERENCE`] holds the ellipsoid this workspace is calibrated against:
//! - Equatorial radius: 6378.1363 km
//! - First eccentricity: 0.081819221456
//!
//! The constants are a plain value passed to the conversion, never read from globals.
//!
//! # Non-finite input
//!
//! [`EllipsoidConstants::to_ecef`] performs no validation. NaN or infinite components yield NaN
//! or infinite output; validate with [`GeodeticPosition::checked`] first when that matters.

use crate::constants::{REFERENCE_ECCENTRICITY, REFERENCE_EQUATORIAL_RADIUS_KM};
use crate::errors::{GeoError, GeoResult};
use crate::location::GeodeticPosition;
use crate::matrix::Vector3;

/// Defining constants of a reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidConstants {
    /// Semi-major axis in kilometers.
    pub equatorial_radius_km: f64,
    /// First eccentricity `e` (not squared).
    pub eccentricity: f64,
}

impl Default for EllipsoidConstants {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl EllipsoidConstants {
    /// The reference ellipsoid: `R_E = 6378.1363 km`, `e = 0.081819221456`.
    pub const REFERENCE: Self = Self {
        equatorial_radius_km: REFERENCE_EQUATORIAL_RADIUS_KM,
        eccentricity: REFERENCE_ECCENTRICITY,
    };

    /// Creates a custom ellipsoid.
    ///
    /// # Errors
    ///
    /// The radius must be finite and positive, the eccentricity finite and in `[0, 1)`.
    /// An eccentricity of 1 or more has no real radius of curvature at the poles.
    pub fn new(equatorial_radius_km: f64, eccentricity: f64) -> GeoResult<Self> {
        if !equatorial_radius_km.is_finite() || equatorial_radius_km <= 0.0 {
            return Err(GeoError::config_error(
                "equatorial_radius_km",
                &format!("{} is not a positive finite radius", equatorial_radius_km),
            ));
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(GeoError::config_error(
                "eccentricity",
                &format!("{} is outside [0, 1)", eccentricity),
            ));
        }
        Ok(Self {
            equatorial_radius_km,
            eccentricity,
        })
    }

    /// Returns `e²`.
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity * self.eccentricity
    }

    /// Returns the semi-minor axis `R_E · sqrt(1 - e²)` in kilometers.
    pub fn polar_radius_km(&self) -> f64 {
        self.equatorial_radius_km * (1.0 - self.eccentricity_squared()).sqrt()
    }

    /// Returns `(C_E, S_E)` in kilometers at geodetic latitude `lat_rad`.
    pub fn radii_of_curvature(&self, lat_rad: f64) -> (f64, f64) {
        let e2 = self.eccentricity_squared();
        let sin_lat = lat_rad.sin();

        let denom = (1.0 - e2 * (sin_lat * sin_lat)).sqrt();

        let c_e = self.equatorial_radius_km / denom;
        let s_e = self.equatorial_radius_km * (1.0 - e2) / denom;

        (c_e, s_e)
    }

    /// Converts a geodetic position to an ECEF position vector in kilometers.
    ///
    /// ```
    /// use geoframe_core::{EllipsoidConstants, GeodeticPosition};
    ///
    /// let origin = GeodeticPosition::new(0.0, 0.0, 0.0);
    /// let r = EllipsoidConstants::REFERENCE.to_ecef(&origin);
    ///
    /// assert_eq!(r.x, 6378.1363);
    /// assert_eq!(r.y, 0.0);
    /// assert_eq!(r.z, 0.0);
    /// ```
    pub fn to_ecef(&self, position: &GeodeticPosition) -> Vector3 {
        let lat = position.latitude_rad();
        let lon = position.longitude_rad();
        let h = position.height_km;

        let (c_e, s_e) = self.radii_of_curvature(lat);

        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        Vector3::new(
            (c_e + h) * cos_lat * cos_lon,
            (c_e + h) * cos_lat * sin_lon,
            (s_e + h) * sin_lat,
        )
    }
}
