//! sigcard
//!
//! Signature capture for greeting cards: a drawing surface that records
//! pointer strokes into an RGBA raster, a trimmer that crops transparent
//! margins away, and a lossless encoder producing a PNG `data:` URL ready to
//! embed in a card preview. The optional `gif` feature adds GIF lookup
//! against Giphy and Tenor with provider fallback.
//!
//! # Features
//!
//! - **gif** (default): Giphy/Tenor providers, fallback search and parallel
//!   gallery fetching
//! - **Adapter seam**: the save workflow runs over any [`DrawingSurface`],
//!   so a host toolkit can supply its own canvas
//! - **Best effort**: trimming never fails; an empty pad never saves
//!
//! # Example
//!
//! ```
//! use sigcard::{PadConfig, Point, PointerEvent, SaveOutcome};
//! use std::sync::{Arc, Mutex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pad = sigcard::new_pad(PadConfig::default())?;
//!
//! let saved = Arc::new(Mutex::new(None));
//! let slot = saved.clone();
//! pad.on_save(move |img| *slot.lock().unwrap() = Some(img.clone()));
//!
//! pad.handle_pointer(PointerEvent::Down(Point::new(10.0, 10.0)));
//! pad.handle_pointer(PointerEvent::Move(Point::new(40.0, 12.0)));
//! pad.handle_pointer(PointerEvent::Up);
//!
//! assert_eq!(pad.save(), SaveOutcome::Saved);
//! assert!(saved.lock().unwrap().is_some());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

// Rasters, stroke painting, trimming and PNG encoding
pub mod rendering;
pub use rendering::{BoundingBox, EncodedImage, Pen, Raster, Rgba};

// Pointer-driven drawing surfaces
pub mod surface;
pub use surface::{replay_events, DrawingSurface, PointerEvent, RasterSurface, Stroke};

// Save workflow state machine
pub mod pad;
pub use pad::{PadState, SaveOutcome, SignaturePad, EMPTY_SIGNATURE_NOTICE};

// Static e-card categories and filtering
pub mod catalog;

// GIF providers (Giphy, Tenor) with fallback
#[cfg(feature = "gif")]
pub mod gif;

/// A pointer sample in surface pixel coordinates.
///
/// Pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Configuration for a signature pad
///
/// The defaults mirror the card editor's signature dialog: a 600×200
/// canvas with a black pen.
///
/// # Examples
///
/// ```
/// let cfg = sigcard::PadConfig::default();
/// assert_eq!((cfg.width, cfg.height), (600, 200));
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Ink used for new strokes
    pub pen: Pen,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 200,
            pen: Pen::default(),
        }
    }
}

/// Largest canvas a pad will allocate, in pixels (256 MiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 64 * 1024 * 1024;

impl PadConfig {
    /// Reject canvases with no area or too many pixels, and pens that
    /// cannot draw.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::ConfigError(format!(
                "canvas must have a non-zero area, got {}x{}",
                self.width, self.height
            )));
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > MAX_CANVAS_PIXELS {
            return Err(Error::ConfigError(format!(
                "canvas {}x{} exceeds {} pixels",
                self.width, self.height, MAX_CANVAS_PIXELS
            )));
        }
        if !self.pen.width.is_finite() || self.pen.width <= 0.0 {
            return Err(Error::ConfigError(format!("invalid pen width {}", self.pen.width)));
        }
        Ok(())
    }
}

/// Create a signature pad backed by the in-memory [`RasterSurface`].
pub fn new_pad(config: PadConfig) -> Result<SignaturePad<RasterSurface>> {
    let surface = RasterSurface::new(config)?;
    Ok(SignaturePad::new(surface))
}
