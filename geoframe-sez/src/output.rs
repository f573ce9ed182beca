//! Rendering of the resulting ECEF vector.
//!
//! The plain format is three lines, x then y then z, with no labels. Each value is written as
//! the shortest decimal that round-trips to the same `f64`, in the same shape the published
//! regression output uses:
//!
//! | value | rendered |
//! |-------|----------|
//! | `823.9574278775165` | `823.9574278775165` |
//! | `6378.0` | `6378.0` |
//! | `0.00001` | `1e-05` |
//! | `1e16` | `1e+16` |
//! | NaN | `nan` |
//!
//! Fixed notation is used for decimal exponents in `[-4, 16)`, exponent notation otherwise.
//!
//! JSON has no NaN or infinity, so the JSON format refuses non-finite results with
//! [`Error::NonFiniteJson`] instead of writing `null`.

use std::io::Write;

use clap::ValueEnum;
use geoframe_core::Vector3;
use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Three lines: x, y, z
    #[default]
    Plain,
    /// One JSON object with x_km, y_km, z_km
    Json,
}

#[derive(Debug, Serialize)]
struct EcefJson {
    x_km: f64,
    y_km: f64,
    z_km: f64,
}

impl OutputFormat {
    /// Renders `ecef` without a trailing newline.
    pub fn render(self, ecef: &Vector3) -> Result<String> {
        match self {
            Self::Plain => Ok([ecef.x, ecef.y, ecef.z]
                .iter()
                .map(|v| format_component(*v))
                .collect::<Vec<_>>()
                .join("\n")),
            Self::Json => {
                for (axis, value) in [("x_km", ecef.x), ("y_km", ecef.y), ("z_km", ecef.z)] {
                    if !value.is_finite() {
                        return Err(Error::NonFiniteJson { axis, value });
                    }
                }
                Ok(serde_json::to_string(&EcefJson {
                    x_km: ecef.x,
                    y_km: ecef.y,
                    z_km: ecef.z,
                })?)
            }
        }
    }
}

/// Writes the rendered vector followed by a newline.
pub fn write_result<W: Write>(out: &mut W, format: OutputFormat, ecef: &Vector3) -> Result<()> {
    writeln!(out, "{}", format.render(ecef)?)?;
    out.flush()?;
    Ok(())
}

/// Formats one value as the shortest round-trip decimal.
///
/// ```
/// use geoframe_sez::output::format_component;
///
/// assert_eq!(format_component(-4787.242302467653), "-4787.242302467653");
/// assert_eq!(format_component(0.0), "0.0");
/// assert_eq!(format_component(3.918620504627517e-13), "3.918620504627517e-13");
/// ```
pub fn format_component(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-4.787242302467653e3".
    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        format!("{}{}", sign, fixed_notation(&digits, exponent))
    } else {
        format!("{}{}", sign, exponent_notation(&digits, exponent))
    }
}

fn fixed_notation(digits: &str, exponent: i32) -> String {
    let n = digits.len() as i32;
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("0.{}{}", zeros, digits)
    } else if exponent >= n - 1 {
        let zeros = "0".repeat((exponent - (n - 1)) as usize);
        format!("{}{}.0", digits, zeros)
    } else {
        let (int_part, frac_part) = digits.split_at((exponent + 1) as usize);
        format!("{}.{}", int_part, frac_part)
    }
}

fn exponent_notation(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let mantissa = if rest.is_empty() {
        lead.to_string()
    } else {
        format!("{}.{}", lead, rest)
    };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, exp_sign, exponent.abs())
}
