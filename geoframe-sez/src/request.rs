//! Decoding of the six positional arguments.
//!
//! ```text
//! sez_to_ecef o_lat_deg o_lon_deg o_hae_km s_km e_km z_km
//! ```
//!
//! A wrong count is [`Error::Usage`], which callers answer with [`USAGE`] and a clean exit.
//! A value that is not a float is [`Error::InvalidNumber`].

use geoframe_core::GeodeticPosition;

use crate::error::{Error, Result};
use crate::sez::SezDisplacement;

pub const USAGE: &str = "Usage: sez_to_ecef o_lat_deg o_lon_deg o_hae_km s_km e_km z_km";

/// Positional argument names, in order.
pub const ARGUMENT_NAMES: [&str; 6] = ["o_lat_deg", "o_lon_deg", "o_hae_km", "s_km", "e_km", "z_km"];

/// One observer and one SEZ offset to transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezRequest {
    pub observer: GeodeticPosition,
    pub displacement: SezDisplacement,
}

impl SezRequest {
    pub fn new(observer: GeodeticPosition, displacement: SezDisplacement) -> Self {
        Self {
            observer,
            displacement,
        }
    }

    /// Parses the positional arguments (program name excluded).
    ///
    /// ```
    /// use geoframe_sez::request::SezRequest;
    ///
    /// let req = SezRequest::from_args(&["40.496", "-80.246", "0.37", "0", "1", "0.3"])?;
    /// assert_eq!(req.observer.longitude_deg, -80.246);
    /// assert_eq!(req.displacement.z_km, 0.3);
    /// # Ok::<(), geoframe_sez::Error>(())
    /// ```
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() != ARGUMENT_NAMES.len() {
            return Err(Error::Usage { found: args.len() });
        }

        let mut values = [0.0; 6];
        for ((slot, name), arg) in values.iter_mut().zip(ARGUMENT_NAMES).zip(args) {
            *slot = parse_number(name, arg.as_ref())?;
        }
        let [lat, lon, hae, s, e, z] = values;

        Ok(Self::new(
            GeodeticPosition::new(lat, lon, hae),
            SezDisplacement::new(s, e, z),
        ))
    }

    pub fn is_finite(&self) -> bool {
        self.observer.is_finite() && self.displacement.is_finite()
    }
}

/// Parses one float. Surrounding whitespace is ignored; `nan` and `inf` are accepted.
fn parse_number(name: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber {
            name,
            value: text.to_string(),
        })
}
