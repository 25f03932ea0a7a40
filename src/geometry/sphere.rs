//! The projection sphere: plane-to-sphere intersection and the equirectangular lookup back into
//! the source image.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Extent, PixelCoord, Point3};
use crate::foundation::error::{TinyPlanetError, TinyPlanetResult};

/// Sphere centred on the origin, cut through its middle by the viewport plane `z = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Sphere with an explicit radius. The radius must be finite and positive.
    pub fn new(radius: f64) -> TinyPlanetResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TinyPlanetError::validation(format!(
                "sphere radius must be finite and > 0, got {radius}"
            )));
        }
        Ok(Self { radius })
    }

    /// Radius derived from the output size: `min(height, width) / 10 * scale`.
    ///
    /// A larger sphere shows less of the source image in the output.
    pub fn for_output(output: Extent, scale: f64) -> TinyPlanetResult<Self> {
        Self::new(f64::from(output.min_side()) / 10.0 * scale)
    }

    /// Sphere radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Intersect the sphere with the line from plane point `(x, y, 0)` to the projection pole
    /// `(0, 0, -r)`.
    ///
    /// `k = 2r^2 / (x^2 + y^2 + r^2)`, `P = (k x, k y, (k - 1) r)`. The plane origin maps to
    /// `(0, 0, r)`; far-away plane points approach `(0, 0, -r)`.
    #[inline]
    pub fn intersect_plane(&self, x: f64, y: f64) -> Point3 {
        let r = self.radius;
        let k = 2.0 * r * r / (x * x + y * y + r * r);
        Point3::new(k * x, k * y, (k - 1.0) * r)
    }

    /// Equirectangular lookup of a (rotated) sphere point in a `source`-sized image.
    ///
    /// Latitude `acos(z / r) / pi` selects the row (0 at `z = r`); longitude
    /// `atan2(y, x) / 2pi + 0.5` selects the column, so the centre column of the image sits on
    /// the `y = 0` half-plane at positive x. Indices wrap, so the result is always inside
    /// `source`.
    #[inline]
    pub fn to_source_pixel(&self, p: Point3, source: Extent) -> PixelCoord {
        let r = self.radius;
        // Rotation can push |z| a hair past r; acos is undefined there.
        let z = p.z.clamp(-r, r);

        let row_frac = (z / r).acos() / PI;
        let col_frac = p.y.atan2(p.x) / TAU + 0.5;

        PixelCoord {
            row: wrap_index(row_frac, source.height),
            col: wrap_index(col_frac, source.width),
        }
    }
}

/// `round(frac * len) mod len`, rounding exact halves to even.
#[inline]
fn wrap_index(frac: f64, len: u32) -> usize {
    let len = i64::from(len);
    let idx = (frac * len as f64).round_ties_even() as i64;
    idx.rem_euclid(len) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sphere.rs"]
mod tests;
