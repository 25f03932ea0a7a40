use crate::foundation::error::{TinyPlanetError, TinyPlanetResult};

/// A point in 3-D space: on the viewport plane (`z == 0`), on the sphere, or a rotated sphere
/// point.
pub use glam::DVec3 as Point3;

/// Integer pixel location, `row` first.
///
/// Output-space and source-space coordinates share this type; they are only related through a
/// [`Projection`](crate::Projection).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelCoord {
    /// Zero-based row (vertical index).
    pub row: usize,
    /// Zero-based column (horizontal index).
    pub col: usize,
}

impl PixelCoord {
    /// Build a coordinate from `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Image dimensions in pixels. Both sides are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Extent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent {
    /// Validated constructor; rejects a zero side.
    pub fn new(width: u32, height: u32) -> TinyPlanetResult<Self> {
        if width == 0 || height == 0 {
            return Err(TinyPlanetError::validation(format!(
                "image dimensions must be > 0, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Length of the shorter side.
    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }

    /// Total number of pixels.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether `px` indexes a pixel inside this extent.
    pub fn contains(self, px: PixelCoord) -> bool {
        px.row < self.height as usize && px.col < self.width as usize
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
