use std::path::Path;

use image::RgbImage;

use crate::foundation::error::{TinyPlanetError, TinyPlanetResult};

/// Decode encoded image bytes into an RGB8 buffer. Any alpha channel is dropped.
pub fn decode_source(bytes: &[u8]) -> TinyPlanetResult<RgbImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| TinyPlanetError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgb8())
}

/// Read and decode the source image at `path`. The format is guessed from the file contents.
pub fn load_source(path: impl AsRef<Path>) -> TinyPlanetResult<RgbImage> {
    let path = path.as_ref();
    let reader = image::ImageReader::open(path)
        .map_err(|e| TinyPlanetError::decode(format!("open '{}': {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| TinyPlanetError::decode(format!("read '{}': {e}", path.display())))?;
    let dyn_img = reader
        .decode()
        .map_err(|e| TinyPlanetError::decode(format!("decode '{}': {e}", path.display())))?;

    let rgb = dyn_img.to_rgb8();
    tracing::info!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "source image loaded"
    );
    Ok(rgb)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
