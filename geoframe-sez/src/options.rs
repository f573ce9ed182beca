//! Run configuration.
//!
//! Everything that can vary between runs is carried in [`TransformOptions`]; there are no
//! configuration files or environment variables. The binary fills it from command-line flags.

use geoframe_core::{EllipsoidConstants, Vector3};
use tracing::info;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::request::SezRequest;
use crate::sez::RotationConvention;
use crate::transform::SezToEcef;
use crate::validate::ValidationMode;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformOptions {
    pub ellipsoid: EllipsoidConstants,
    pub rotation: RotationConvention,
    pub validation: ValidationMode,
    pub format: OutputFormat,
}

impl TransformOptions {
    pub fn transform(&self) -> SezToEcef<RotationConvention> {
        SezToEcef::new(self.ellipsoid, self.rotation)
    }
}

/// Validates `request` according to `options` and transforms it.
pub fn execute(request: &SezRequest, options: &TransformOptions) -> Result<Vector3> {
    options.validation.validate(request)?;

    info!(
        observer = ?request.observer,
        displacement = ?request.displacement,
        rotation = ?options.rotation,
        validation = ?options.validation,
        "transforming"
    );

    Ok(options
        .transform()
        .transform(&request.observer, &request.displacement))
}
