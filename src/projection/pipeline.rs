use crate::foundation::core::{Extent, PixelCoord, Point3};
use crate::foundation::error::TinyPlanetResult;
use crate::geometry::rotation::RotationMatrix;
use crate::geometry::sphere::Sphere;
use crate::projection::config::ProjectionConfig;

/// Everything a single output pixel needs, derived once from a [`ProjectionConfig`].
///
/// Pure and immutable: [`Projection::source_pixel`] can be called from any number of threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    source: Extent,
    output: Extent,
    sphere: Sphere,
    rotation: RotationMatrix,
    offset_horizontal: f64,
    offset_vertical: f64,
}

impl Projection {
    /// Validate `cfg`, resolve the output size against `source`, and precompute the sphere and
    /// rotation.
    pub fn new(cfg: &ProjectionConfig, source: Extent) -> TinyPlanetResult<Self> {
        cfg.validate()?;
        let output = cfg.output_extent(source)?;
        let sphere = Sphere::for_output(output, cfg.scale)?;
        let rotation = RotationMatrix::from_angles(cfg.angles());

        tracing::debug!(
            %source,
            %output,
            radius = sphere.radius(),
            "projection prepared"
        );

        Ok(Self {
            source,
            output,
            sphere,
            rotation,
            offset_horizontal: cfg.offset_horizontal,
            offset_vertical: cfg.offset_vertical,
        })
    }

    /// Source image dimensions.
    pub fn source(&self) -> Extent {
        self.source
    }

    /// Output image dimensions.
    pub fn output(&self) -> Extent {
        self.output
    }

    /// The projection sphere.
    pub fn sphere(&self) -> Sphere {
        self.sphere
    }

    /// The sphere orientation.
    pub fn rotation(&self) -> RotationMatrix {
        self.rotation
    }

    /// Place an output pixel on the viewport plane.
    ///
    /// Rows run along x and columns along y; the offsets shift the window so that, at zero
    /// offset, the output centre lands on the plane origin.
    #[inline]
    pub fn plane_point(&self, px: PixelCoord) -> Point3 {
        let h = f64::from(self.output.height);
        let w = f64::from(self.output.width);
        Point3::new(
            px.row as f64 + (self.offset_vertical - 0.5) * h,
            px.col as f64 + (self.offset_horizontal - 0.5) * w,
            0.0,
        )
    }

    /// Map an output pixel to the source pixel whose colour it takes.
    ///
    /// plane point -> sphere point -> rotated sphere point -> equirectangular source pixel.
    #[inline]
    pub fn source_pixel(&self, px: PixelCoord) -> PixelCoord {
        let q = self.plane_point(px);
        let p = self.sphere.intersect_plane(q.x, q.y);
        let p = self.rotation.rotate(p);
        self.sphere.to_source_pixel(p, self.source)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/pipeline.rs"]
mod tests;
