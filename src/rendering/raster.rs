//! RGBA pixel rasters

use crate::rendering::trim::BoundingBox;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A single pixel with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A pixel carries ink iff its alpha channel is non-zero.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// A W×H grid of pixels stored row-major as a flat RGBA buffer.
///
/// Rasters with a zero dimension are allowed to exist (they are
/// "degenerate") but cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a fully transparent raster.
    ///
    /// # Panics
    ///
    /// Panics if the buffer size overflows `usize`. Pads check the size
    /// up front through [`PadConfig::validate`](crate::PadConfig::validate).
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self { width, height, data: vec![0; len] }
    }

    /// Wrap an existing RGBA buffer. The buffer length must be exactly
    /// `width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| Error::RasterError(format!("{}x{} overflows", width, height)))?;
        if data.len() != expected {
            return Err(Error::RasterError(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_rgba_bytes(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize * self.width as usize + x as usize) * 4)
        } else {
            None
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.offset(x, y).map(|i| {
            Rgba::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
        })
    }

    /// Write a pixel. Returns `false` (and writes nothing) when `(x, y)`
    /// lies outside the raster.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|b| *b = 0);
    }

    /// True when no pixel carries ink.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Copy the region covered by `bounds` into a new raster whose origin is
    /// the box's top-left corner.
    pub fn crop(&self, bounds: &BoundingBox) -> Result<Raster> {
        if bounds.left > bounds.right
            || bounds.top > bounds.bottom
            || bounds.right >= self.width
            || bounds.bottom >= self.height
        {
            return Err(Error::RasterError(format!(
                "crop box {:?} outside {}x{} raster",
                bounds, self.width, self.height
            )));
        }

        let out_w = bounds.width();
        let out_h = bounds.height();
        let row_bytes = out_w as usize * 4;
        let mut data = Vec::with_capacity(row_bytes * out_h as usize);
        for y in bounds.top..=bounds.bottom {
            let start = (y as usize * self.width as usize + bounds.left as usize) * 4;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Raster::from_rgba_bytes(out_w, out_h, data)
    }

    /// Hex SHA-256 over the dimensions and pixel bytes. Stable across runs,
    /// used for golden comparisons.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(&self.data);
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raster_is_blank() {
        let r = Raster::new(128, 64);
        assert_eq!(r.dimensions(), (128, 64));
        assert!(r.is_blank());
        assert_eq!(r.as_rgba_bytes().len(), 128 * 64 * 4);
    }

    #[test]
    fn put_pixel_out_of_bounds_is_noop() {
        let mut r = Raster::new(4, 4);
        assert!(!r.put_pixel(4, 0, Rgba::BLACK));
        assert!(!r.put_pixel(0, 9, Rgba::BLACK));
        assert!(r.is_blank());
        assert!(r.put_pixel(3, 3, Rgba::BLACK));
        assert_eq!(r.pixel(3, 3), Some(Rgba::BLACK));
    }

    #[test]
    fn from_rgba_bytes_checks_length() {
        assert!(Raster::from_rgba_bytes(2, 2, vec![0; 15]).is_err());
        assert!(Raster::from_rgba_bytes(2, 2, vec![0; 16]).is_ok());
        assert!(Raster::from_rgba_bytes(0, 5, Vec::new()).unwrap().is_degenerate());
    }

    #[test]
    fn crop_copies_region() {
        let mut r = Raster::new(5, 5);
        r.put_pixel(1, 2, Rgba::new(10, 20, 30, 255));
        r.put_pixel(3, 3, Rgba::new(1, 2, 3, 4));
        let bb = BoundingBox { top: 2, left: 1, right: 3, bottom: 3 };
        let c = r.crop(&bb).unwrap();
        assert_eq!(c.dimensions(), (3, 2));
        assert_eq!(c.pixel(0, 0), Some(Rgba::new(10, 20, 30, 255)));
        assert_eq!(c.pixel(2, 1), Some(Rgba::new(1, 2, 3, 4)));
    }

    #[test]
    fn crop_rejects_box_outside_raster() {
        let r = Raster::new(3, 3);
        let bb = BoundingBox { top: 0, left: 0, right: 3, bottom: 0 };
        assert!(matches!(r.crop(&bb), Err(Error::RasterError(_))));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Raster::new(2, 2);
        let mut b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.put_pixel(0, 0, Rgba::BLACK);
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_ne!(Raster::new(1, 4).fingerprint(), Raster::new(4, 1).fingerprint());
    }
}
