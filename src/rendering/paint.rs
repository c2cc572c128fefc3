//! Pen strokes painted into a raster

use crate::rendering::{Raster, Rgba};
use crate::Point;
use serde::{Deserialize, Serialize};

/// Ink colour and nominal stroke width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Rgba,
    pub width: f32,
}

impl Default for Pen {
    fn default() -> Self {
        Self { color: Rgba::BLACK, width: 2.0 }
    }
}

/// Drawing primitives emitted by a surface while a stroke is in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Dot { at: Point },
    Segment { from: Point, to: Point },
}

impl PaintCommand {
    pub fn apply(&self, raster: &mut Raster, pen: &Pen) {
        let radius = (pen.width / 2.0).max(0.5);
        match *self {
            PaintCommand::Dot { at } => stamp(raster, at, radius, pen.color),
            PaintCommand::Segment { from, to } => {
                let (dx, dy) = (to.x - from.x, to.y - from.y);
                let len = (dx * dx + dy * dy).sqrt();
                if !len.is_finite() {
                    return;
                }
                let spacing = (radius * 0.5).max(0.5);
                let steps = ((len / spacing).ceil() as u32).clamp(1, MAX_SEGMENT_STEPS);
                for i in 0..=steps {
                    let t = i as f32 / steps as f32;
                    stamp(raster, Point::new(from.x + dx * t, from.y + dy * t), radius, pen.color);
                }
            }
        }
    }
}

const MAX_SEGMENT_STEPS: u32 = 1 << 16;

// Fill every pixel whose centre lies within `radius` of `center`. The pixel
// under `center` is always inked so thin pens never vanish.
fn stamp(raster: &mut Raster, center: Point, radius: f32, color: Rgba) {
    if raster.is_degenerate() || !center.x.is_finite() || !center.y.is_finite() {
        return;
    }
    if center.x >= 0.0 && center.y >= 0.0 {
        raster.put_pixel(center.x as u32, center.y as u32, color);
    }

    let max_x = (raster.width() - 1) as f32;
    let max_y = (raster.height() - 1) as f32;
    let x0 = (center.x - radius).floor().max(0.0);
    let x1 = (center.x + radius).ceil().min(max_x);
    let y0 = (center.y - radius).floor().max(0.0);
    let y1 = (center.y + radius).ceil().min(max_y);
    if x0 > x1 || y0 > y1 {
        return;
    }

    let r2 = radius * radius;
    for y in y0 as u32..=y1 as u32 {
        let dy = y as f32 + 0.5 - center.y;
        for x in x0 as u32..=x1 as u32 {
            let dx = x as f32 + 0.5 - center.x;
            if dx * dx + dy * dy <= r2 {
                raster.put_pixel(x, y, color);
            }
        }
    }
}
