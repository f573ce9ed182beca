//! Geodetic building blocks for Earth-fixed coordinate transforms.
//!
//! `geoframe-core` converts geodetic positions to Earth-Centered-Earth-Fixed (ECEF) Cartesian
//! vectors on an explicit reference ellipsoid, and provides the small vector and rotation
//! types the frame transforms are written in.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`ellipsoid`] | [`EllipsoidConstants`] and the geodetic → ECEF conversion |
//! | [`location`] | [`GeodeticPosition`] and its validation |
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`] |
//! | [`constants`] | Reference ellipsoid values and angle constants |
//! | [`errors`] | [`GeoError`] and [`GeoResult`] |
//!
//! ```
//! use geoframe_core::{EllipsoidConstants, GeodeticPosition};
//!
//! let observer = GeodeticPosition::checked(40.496, -80.246, 0.37)?;
//! let r = EllipsoidConstants::REFERENCE.to_ecef(&observer);
//! assert!((r.magnitude() - 6369.3).abs() < 1.0);
//! # Ok::<(), geoframe_core::GeoError>(())
//! ```
//!
//! # Design Notes
//!
//! - **Degrees at the edges**: positions are stored in degrees and kilometers, as they are
//!   entered. Conversion to radians goes through [`utils::deg_to_rad`].
//! - **No implicit state**: the ellipsoid is a value handed to each conversion.
//! - **No hidden validation**: conversions accept any `f64`. NaN in, NaN out. Check at the
//!   input boundary with [`GeodeticPosition::checked`].

pub mod constants;
pub mod ellipsoid;
pub mod errors;
pub mod location;
pub mod matrix;
pub mod utils;

pub use ellipsoid::EllipsoidConstants;
pub use errors::{GeoError, GeoResult, MathErrorKind};
pub use location::GeodeticPosition;
pub use matrix::{RotationMatrix3, Vector3};

pub mod test_helpers;
