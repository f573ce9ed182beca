//! South-East-Zenith displacements and their rotation into ECEF-aligned axes.
//!
//! # The SEZ frame
//!
//! A topocentric frame anchored at an observer on the ellipsoid:
//! - **S**: horizontal, toward geographic south along the local meridian
//! - **E**: horizontal, toward east
//! - **Z**: along the ellipsoid normal, away from the Earth
//!
//! Rotating an SEZ offset into ECEF axes gives the displacement that, added to the observer's
//! ECEF position, locates the target.
//!
//! # Rotation conventions
//!
//! The rotation is behind the [`SezRotation`] trait so conventions can be swapped and compared.
//!
//! - [`ReferenceRotation`] evaluates the closed-form expression
//!
//!   ```text
//!   x = cos θ sin φ · s + cos θ cos φ · z − sin θ · e
//!   y = sin θ sin φ · s + sin θ cos φ · z + cos θ · e
//!   z = −cos φ · s + sin φ · z
//!   ```
//!
//!   with θ = observer longitude and φ = observer latitude, operation for operation, so its
//!   output matches the published regression values bit for bit.
//!
//! - [`TextbookRotation`] builds the ECEF → SEZ matrix `Ry(90° − lat) · Rz(lon)` from
//!   [`RotationMatrix3`] and applies its transpose.
//!
//! The two describe the same rotation and agree to rounding. The θ/φ labels in the closed form
//! read like "latitude, longitude" but the longitude really drives θ; only the labels are
//! swapped, not the geometry.

use geoframe_core::constants::HALF_PI;
use geoframe_core::utils::deg_to_rad;
use clap::ValueEnum;
use geoframe_core::{GeodeticPosition, RotationMatrix3, Vector3};

/// Offset from an observer along South, East and Zenith, in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SezDisplacement {
    pub s_km: f64,
    pub e_km: f64,
    pub z_km: f64,
}

impl SezDisplacement {
    pub const fn new(s_km: f64, e_km: f64, z_km: f64) -> Self {
        Self { s_km, e_km, z_km }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the components as a vector in SEZ axes (`x = S`, `y = E`, `z = Z`).
    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(self.s_km, self.e_km, self.z_km)
    }

    pub fn is_finite(&self) -> bool {
        self.s_km.is_finite() && self.e_km.is_finite() && self.z_km.is_finite()
    }
}

impl std::ops::Add for SezDisplacement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.s_km + rhs.s_km,
            self.e_km + rhs.e_km,
            self.z_km + rhs.z_km,
        )
    }
}

/// Rotation of an SEZ displacement at an observer into ECEF-aligned axes.
pub trait SezRotation {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Returns `sez` expressed along ECEF axes. Only the observer's latitude and longitude are
    /// used; height does not change the local axes.
    fn rotate(&self, observer: &GeodeticPosition, sez: &SezDisplacement) -> Vector3;
}

/// Closed-form rotation with the longitude as θ and the latitude as φ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceRotation;

impl SezRotation for ReferenceRotation {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn rotate(&self, observer: &GeodeticPosition, sez: &SezDisplacement) -> Vector3 {
        rotate_by_angles(observer.longitude_deg, observer.latitude_deg, sez)
    }
}

/// Evaluates the closed-form SEZ rotation for angles `theta_deg` and `phi_deg`.
///
/// ```
/// use geoframe_sez::sez::{rotate_by_angles, SezDisplacement};
///
/// // At latitude 0, longitude 0 the zenith is +X, east is +Y, south is -Z.
/// let d = rotate_by_angles(0.0, 0.0, &SezDisplacement::new(1.0, 2.0, 3.0));
/// assert_eq!((d.x, d.y, d.z), (3.0, 2.0, -1.0));
/// ```
pub fn rotate_by_angles(theta_deg: f64, phi_deg: f64, sez: &SezDisplacement) -> Vector3 {
    let th = deg_to_rad(theta_deg);
    let ph = deg_to_rad(phi_deg);

    let (sin_th, cos_th) = (th.sin(), th.cos());
    let (sin_ph, cos_ph) = (ph.sin(), ph.cos());

    let (s, e, z) = (sez.s_km, sez.e_km, sez.z_km);

    Vector3::new(
        cos_th * sin_ph * s + cos_th * cos_ph * z - sin_th * e,
        sin_th * sin_ph * s + sin_th * cos_ph * z + cos_th * e,
        -cos_ph * s + sin_ph * z,
    )
}

/// Rotation built from elementary frame rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextbookRotation;

impl TextbookRotation {
    /// Returns the ECEF → SEZ matrix at the observer: `Ry(90° − lat) · Rz(lon)`.
    pub fn ecef_to_sez_matrix(observer: &GeodeticPosition) -> RotationMatrix3 {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(observer.longitude_rad());
        m.rotate_y(HALF_PI - observer.latitude_rad());
        m
    }
}

impl SezRotation for TextbookRotation {
    fn name(&self) -> &'static str {
        "textbook"
    }

    fn rotate(&self, observer: &GeodeticPosition, sez: &SezDisplacement) -> Vector3 {
        Self::ecef_to_sez_matrix(observer).transpose() * sez.to_vector()
    }
}

/// Runtime choice between the rotation conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RotationConvention {
    /// Closed form with longitude as the first angle (matches published values)
    #[default]
    Reference,
    /// Matrix built from elementary rotations
    Textbook,
}

impl SezRotation for RotationConvention {
    fn name(&self) -> &'static str {
        match self {
            Self::Reference => ReferenceRotation.name(),
            Self::Textbook => TextbookRotation.name(),
        }
    }

    fn rotate(&self, observer: &GeodeticPosition, sez: &SezDisplacement) -> Vector3 {
        match self {
            Self::Reference => ReferenceRotation.rotate(observer, sez),
            Self::Textbook => TextbookRotation.rotate(observer, sez),
        }
    }
}
