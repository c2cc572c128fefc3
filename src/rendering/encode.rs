//! Lossless PNG encoding of rasters as self-contained `data:` URLs

use crate::rendering::Raster;
use crate::{Error, Result};
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fmt;
use std::io::Cursor;

/// Prefix of every [`EncodedImage`].
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A PNG wrapped in a base64 `data:` URL, ready to embed in a card preview.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Decode back into the raster this image was produced from.
    pub fn decode(&self) -> Result<Raster> {
        decode(&self.0)
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedImage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encode a raster as RGBA8 PNG bytes.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    if raster.is_degenerate() {
        return Err(Error::EncodingError(format!(
            "cannot encode a {}x{} raster",
            raster.width(),
            raster.height()
        )));
    }

    let img = RgbaImage::from_raw(raster.width(), raster.height(), raster.as_rgba_bytes().to_vec())
        .ok_or_else(|| Error::EncodingError("pixel buffer does not match dimensions".into()))?;

    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Encode a raster as a `data:image/png;base64,...` URL.
pub fn encode(raster: &Raster) -> Result<EncodedImage> {
    let png = encode_png(raster)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&png);
    Ok(EncodedImage(format!("{}{}", PNG_DATA_URL_PREFIX, b64)))
}

/// Decode PNG bytes into an RGBA raster.
pub fn decode_png(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| Error::DecodeError(format!("invalid PNG: {}", e)))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Raster::from_rgba_bytes(width, height, img.into_raw())
}

/// Decode a PNG `data:` URL (or bare base64 PNG) into a raster.
pub fn decode(encoded: &str) -> Result<Raster> {
    let trimmed = encoded.trim();
    let payload = if let Some(rest) = trimmed.strip_prefix("data:") {
        let (meta, data) = rest
            .split_once(',')
            .ok_or_else(|| Error::DecodeError("data URL without payload".into()))?;
        if !meta.ends_with(";base64") {
            return Err(Error::DecodeError(format!("unsupported data URL encoding: {}", meta)));
        }
        if !meta.starts_with("image/png") {
            return Err(Error::DecodeError(format!("unsupported media type: {}", meta)));
        }
        data
    } else {
        trimmed
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::DecodeError(format!("invalid base64: {}", e)))?;
    decode_png(&bytes)
}
