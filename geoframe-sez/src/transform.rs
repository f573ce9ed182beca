//! Composition of the observer position and the rotated displacement.
//!
//! ```text
//! target_ecef = ellipsoid.to_ecef(observer) + rotation.rotate(observer, sez)
//! ```
//!
//! The ellipsoid and the rotation convention are injected into [`SezToEcef`]; both default to
//! the reference values the published regression output was produced with.

use geoframe_core::{EllipsoidConstants, GeodeticPosition, Vector3};
use tracing::debug;

use crate::sez::{ReferenceRotation, SezDisplacement, SezRotation};

/// Adds an ECEF-aligned displacement to an ECEF position.
#[inline]
pub fn compose(observer_ecef: Vector3, delta_ecef: Vector3) -> Vector3 {
    observer_ecef + delta_ecef
}

/// SEZ → ECEF transform for a given ellipsoid and rotation convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezToEcef<R = ReferenceRotation> {
    ellipsoid: EllipsoidConstants,
    rotation: R,
}

impl Default for SezToEcef<ReferenceRotation> {
    fn default() -> Self {
        Self::new(EllipsoidConstants::REFERENCE, ReferenceRotation)
    }
}

impl<R: SezRotation> SezToEcef<R> {
    pub fn new(ellipsoid: EllipsoidConstants, rotation: R) -> Self {
        Self {
            ellipsoid,
            rotation,
        }
    }

    pub fn ellipsoid(&self) -> &EllipsoidConstants {
        &self.ellipsoid
    }

    pub fn rotation(&self) -> &R {
        &self.rotation
    }

    /// ECEF position of the observer itself.
    pub fn observer_ecef(&self, observer: &GeodeticPosition) -> Vector3 {
        self.ellipsoid.to_ecef(observer)
    }

    /// The SEZ offset along ECEF axes, without the observer position.
    pub fn delta_ecef(&self, observer: &GeodeticPosition, sez: &SezDisplacement) -> Vector3 {
        self.rotation.rotate(observer, sez)
    }

    /// ECEF position of the point `sez` away from `observer`, in kilometers.
    ///
    /// ```
    /// use geoframe_core::GeodeticPosition;
    /// use geoframe_sez::sez::SezDisplacement;
    /// use geoframe_sez::transform::SezToEcef;
    ///
    /// let transform = SezToEcef::default();
    /// let observer = GeodeticPosition::new(40.496, -80.246, 0.37);
    /// let target = transform.transform(&observer, &SezDisplacement::new(0.0, 1.0, 0.3));
    ///
    /// assert_eq!(target.x, 823.9574278775165);
    /// ```
    pub fn transform(&self, observer: &GeodeticPosition, sez: &SezDisplacement) -> Vector3 {
        let observer_ecef = self.observer_ecef(observer);
        let delta_ecef = self.delta_ecef(observer, sez);
        let target = compose(observer_ecef, delta_ecef);

        debug!(
            rotation = self.rotation.name(),
            ?observer_ecef,
            ?delta_ecef,
            ?target,
            "sez to ecef"
        );

        target
    }
}

/// Transforms with the reference ellipsoid and reference rotation.
pub fn sez_to_ecef(observer: &GeodeticPosition, sez: &SezDisplacement) -> Vector3 {
    SezToEcef::default().transform(observer, sez)
}
