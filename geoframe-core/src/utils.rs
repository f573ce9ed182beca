//! Angle unit conversions.
//!
//! `f64::to_radians` multiplies by a pre-rounded `π/180`, which can land one ULP away from
//! `deg * π / 180`. The transforms in this workspace are regression-tested against published
//! values computed the latter way, so they convert through these helpers instead.

use crate::constants::{DEGREES_PER_HALF_TURN, PI};

/// Converts degrees to radians as `deg * π / 180`.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / DEGREES_PER_HALF_TURN
}
