use geoframe_core::GeoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected 6 positional arguments, found {found}")]
    Usage { found: usize },

    #[error("invalid numeric argument {name}: '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("invalid input: {0}")]
    Geo(#[from] GeoError),

    #[error("cannot encode {axis} = {value} as JSON (use --format plain)")]
    NonFiniteJson { axis: &'static str, value: f64 },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
