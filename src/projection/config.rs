use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Extent;
use crate::foundation::error::{TinyPlanetError, TinyPlanetResult};
use crate::geometry::rotation::EulerAngles;

/// Parameters for one projection run. Read once before sampling starts.
///
/// Angles are radians. Offsets are fractions of the output size and move the viewport window
/// across the projection plane (positive horizontal moves right, positive vertical moves down).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Output width in pixels (ignored when `match_source_size` is set).
    pub output_width: u32,
    /// Output height in pixels (ignored when `match_source_size` is set).
    pub output_height: u32,
    /// Force the output to the source image's dimensions.
    pub match_source_size: bool,
    /// Horizontal viewport offset, fraction of the output width.
    pub offset_horizontal: f64,
    /// Vertical viewport offset, fraction of the output height.
    pub offset_vertical: f64,
    /// Sphere size multiplier, must be > 0.
    pub scale: f64,
    /// Rotation about the x axis (alpha), radians.
    pub rotate_x: f64,
    /// Rotation about the y axis (beta), radians.
    pub rotate_y: f64,
    /// Rotation about the z axis (gamma), radians.
    pub rotate_z: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            output_width: 400,
            output_height: 300,
            match_source_size: false,
            offset_horizontal: 0.0,
            offset_vertical: 0.0,
            scale: 1.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate_z: 0.0,
        }
    }
}

impl ProjectionConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> TinyPlanetResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| TinyPlanetError::serde(format!("parse projection config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> TinyPlanetResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read projection config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> TinyPlanetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TinyPlanetError::serde(format!("serialize projection config: {e}")))
    }

    /// Rotation angles as a bundle.
    pub fn angles(&self) -> EulerAngles {
        EulerAngles::new(self.rotate_x, self.rotate_y, self.rotate_z)
    }

    /// Set the rotation angles.
    pub fn with_angles(mut self, angles: EulerAngles) -> Self {
        self.rotate_x = angles.x;
        self.rotate_y = angles.y;
        self.rotate_z = angles.z;
        self
    }

    /// Reject configurations the projection cannot run with.
    pub fn validate(&self) -> TinyPlanetResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TinyPlanetError::validation(format!(
                "scale must be finite and > 0, got {}",
                self.scale
            )));
        }
        if !self.match_source_size && (self.output_width == 0 || self.output_height == 0) {
            return Err(TinyPlanetError::validation(format!(
                "output size must be > 0, got {}x{}",
                self.output_width, self.output_height
            )));
        }
        if !self.offset_horizontal.is_finite() || !self.offset_vertical.is_finite() {
            return Err(TinyPlanetError::validation("offsets must be finite"));
        }
        if !self.angles().is_finite() {
            return Err(TinyPlanetError::validation("rotation angles must be finite"));
        }
        Ok(())
    }

    /// Output dimensions for a given source image.
    pub fn output_extent(&self, source: Extent) -> TinyPlanetResult<Extent> {
        if self.match_source_size {
            return Ok(source);
        }
        Extent::new(self.output_width, self.output_height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/config.rs"]
mod tests;
