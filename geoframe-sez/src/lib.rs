//! Conversion of a topocentric South-East-Zenith (SEZ) offset into an ECEF position.
//!
//! Given an observer's geodetic latitude, longitude and height and an offset along the
//! observer's local South, East and Zenith axes, compute where that point sits in the
//! Earth-Centered-Earth-Fixed frame:
//!
//! 1. observer LLH → observer ECEF ([`geoframe_core::EllipsoidConstants::to_ecef`])
//! 2. SEZ offset → ECEF-aligned offset ([`sez::SezRotation`])
//! 3. sum ([`transform::compose`])
//!
//! ```
//! use geoframe_core::GeodeticPosition;
//! use geoframe_sez::{sez_to_ecef, SezDisplacement};
//!
//! let observer = GeodeticPosition::new(40.496, -80.246, 0.37);
//! let target = sez_to_ecef(&observer, &SezDisplacement::new(0.0, 1.0, 0.3));
//! assert_eq!(target.z, 4120.456750462098);
//! ```

pub mod error;
pub mod options;
pub mod output;
pub mod request;
pub mod sez;
pub mod transform;
pub mod validate;

pub use error::{Error, Result};
pub use options::{execute, TransformOptions};
pub use output::OutputFormat;
pub use request::{SezRequest, USAGE};
pub use sez::{ReferenceRotation, RotationConvention, SezDisplacement, SezRotation, TextbookRotation};
pub use transform::{compose, sez_to_ecef, SezToEcef};
pub use validate::ValidationMode;
