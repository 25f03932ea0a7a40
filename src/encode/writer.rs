use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;
use image::{ImageFormat, RgbImage};

use crate::foundation::error::{TinyPlanetError, TinyPlanetResult};

/// Parent directory of `path` is created if missing.
pub fn ensure_parent_dir(path: &Path) -> TinyPlanetResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `img` to `path`; the encoder is chosen from the file extension.
pub fn save_output(path: impl AsRef<Path>, img: &RgbImage) -> TinyPlanetResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).map_err(|e| {
        TinyPlanetError::encode(format!("unsupported output format '{}': {e}", path.display()))
    })?;

    ensure_parent_dir(path)?;
    img.save_with_format(path, format)
        .map_err(|e| TinyPlanetError::encode(format!("write '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), "output image saved");
    Ok(())
}

/// Encode `img` as PNG in memory.
pub fn encode_png(img: &RgbImage) -> TinyPlanetResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| TinyPlanetError::encode(format!("encode png: {e}")))?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/writer.rs"]
mod tests;
