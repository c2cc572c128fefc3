//! Bounding-box trimming of transparent margins

use crate::rendering::Raster;
use log::{debug, warn};

/// Inclusive pixel bounds of every non-transparent pixel in a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub top: u32,
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Running state of the alpha scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bounds {
    Empty,
    Found(BoundingBox),
}

impl Bounds {
    fn include(self, x: u32, y: u32) -> Self {
        match self {
            Bounds::Empty => Bounds::Found(BoundingBox { top: y, left: x, right: x, bottom: y }),
            Bounds::Found(b) => Bounds::Found(BoundingBox {
                top: b.top.min(y),
                left: b.left.min(x),
                right: b.right.max(x),
                bottom: b.bottom.max(y),
            }),
        }
    }

    fn into_box(self) -> Option<BoundingBox> {
        match self {
            Bounds::Empty => None,
            Bounds::Found(b) => Some(b),
        }
    }
}

/// Scan the alpha channel once and return the tightest box around all
/// pixels with alpha != 0, or `None` for a fully transparent raster.
pub fn bounding_box(raster: &Raster) -> Option<BoundingBox> {
    let width = raster.width() as usize;
    if width == 0 {
        return None;
    }

    raster
        .as_rgba_bytes()
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, px)| px[3] != 0)
        .fold(Bounds::Empty, |acc, (i, _)| {
            acc.include((i % width) as u32, (i / width) as u32)
        })
        .into_box()
}

/// Crop `raster` to its bounding box.
///
/// A raster without ink is returned unchanged, never as a zero-size raster.
/// Should the copy itself fail the untrimmed input is returned as well.
pub fn trim(raster: &Raster) -> Raster {
    trim_with_bounds(raster).0
}

/// Like [`trim`], also reporting the box that was used.
pub fn trim_with_bounds(raster: &Raster) -> (Raster, Option<BoundingBox>) {
    let Some(bounds) = bounding_box(raster) else {
        debug!("trim: no ink in {}x{} raster, returning it untrimmed", raster.width(), raster.height());
        return (raster.clone(), None);
    };

    match raster.crop(&bounds) {
        Ok(cropped) => {
            debug!(
                "trim: {}x{} -> {}x{} at ({}, {})",
                raster.width(),
                raster.height(),
                cropped.width(),
                cropped.height(),
                bounds.left,
                bounds.top
            );
            (cropped, Some(bounds))
        }
        Err(e) => {
            warn!("trim: crop failed, keeping untrimmed raster: {}", e);
            (raster.clone(), None)
        }
    }
}
