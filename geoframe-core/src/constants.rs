#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

/// Degrees in a half turn, the divisor of the degree → radian conversion.
pub const DEGREES_PER_HALF_TURN: f64 = 180.0;

/// Equatorial radius of the reference ellipsoid in kilometers.
pub const REFERENCE_EQUATORIAL_RADIUS_KM: f64 = 6378.1363;

/// First eccentricity of the reference ellipsoid.
pub const REFERENCE_ECCENTRICITY: f64 = 0.081819221456;
