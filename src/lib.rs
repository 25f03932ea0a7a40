//! Tinyplanet re-projects an equirectangular image through a sphere to produce "tiny planet"
//! style stereographic views.
//!
//! # Pipeline overview
//!
//! For every output pixel:
//!
//! 1. **Plane**: the pixel is placed on the viewport plane `z = 0`, recentred by the configured
//!    offsets ([`Projection::plane_point`]).
//! 2. **Sphere**: the line from that plane point to the projection pole meets the sphere once
//!    ([`Sphere::intersect_plane`]).
//! 3. **Rotate**: the sphere point is reoriented by a fixed Euler rotation
//!    ([`RotationMatrix::rotate`]).
//! 4. **Lookup**: latitude and longitude of the rotated point select a source pixel
//!    ([`Sphere::to_source_pixel`]); indices wrap instead of going out of range.
//!
//! [`render_projection`] drives this over a whole output image, sequentially or on a rayon
//! pool. Decoding and encoding live in [`load_source`] and [`save_output`]; the math in between
//! is infallible.
//!
//! ```no_run
//! use tinyplanet::{
//!     NoProgress, Projection, ProjectionConfig, RenderThreading, load_source, render_projection,
//!     save_output,
//! };
//!
//! # fn main() -> tinyplanet::TinyPlanetResult<()> {
//! let source = load_source("pano.png")?;
//! let cfg = ProjectionConfig {
//!     match_source_size: true,
//!     scale: 1.5,
//!     ..ProjectionConfig::default()
//! };
//! let extent = tinyplanet::Extent::new(source.width(), source.height())?;
//! let projection = Projection::new(&cfg, extent)?;
//! let (out, _stats) =
//!     render_projection(&source, &projection, &RenderThreading::default(), &NoProgress)?;
//! save_output("planet.png", &out)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod encode;
mod foundation;
mod geometry;
mod projection;
mod render;

pub use crate::assets::decode::{decode_source, load_source};
pub use crate::encode::writer::{encode_png, ensure_parent_dir, save_output};
pub use crate::foundation::core::{Extent, PixelCoord, Point3};
pub use crate::foundation::error::{TinyPlanetError, TinyPlanetResult};
pub use crate::geometry::rotation::{EulerAngles, RotationMatrix};
pub use crate::geometry::sphere::Sphere;
pub use crate::projection::config::ProjectionConfig;
pub use crate::projection::pipeline::Projection;
pub use crate::render::progress::{CountingProgress, LogProgress, NoProgress, ProgressSink};
pub use crate::render::sampler::{RenderStats, RenderThreading, render_projection, sample_row};

pub use image::RgbImage;
