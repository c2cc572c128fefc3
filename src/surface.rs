//! Drawing surfaces that turn pointer input into ink.
//!
//! [`DrawingSurface`] is the seam a host toolkit implements when it owns the
//! canvas itself; [`RasterSurface`] is the in-memory implementation used by
//! default and in tests.

use crate::rendering::{PaintCommand, Pen, Raster};
use crate::{PadConfig, Point, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Pointer or touch input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pen touches the surface; begins a stroke
    Down(Point),
    /// Pen moves; extends the active stroke, ignored when none is active
    Move(Point),
    /// Pen lifts; ends the active stroke
    Up,
}

/// The samples of one pen-down .. pen-up gesture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// The pointer events that redraw `strokes`: a `Down` on each stroke's first
/// sample, a `Move` per later sample, then `Up`. Empty strokes are skipped.
pub fn replay_events(strokes: &[Stroke]) -> impl Iterator<Item = PointerEvent> + '_ {
    strokes
        .iter()
        .filter_map(|stroke| stroke.points.split_first())
        .flat_map(|(first, rest)| {
            std::iter::once(PointerEvent::Down(*first))
                .chain(rest.iter().map(|p| PointerEvent::Move(*p)))
                .chain(std::iter::once(PointerEvent::Up))
        })
}

/// A surface that records strokes into a raster.
pub trait DrawingSurface {
    /// Feed one pointer event. Returns `true` when the event changed the ink.
    fn handle_pointer(&mut self, event: PointerEvent) -> bool;

    /// True iff no stroke has been committed since creation or the last clear.
    fn is_empty(&self) -> bool;

    /// Reset to fully transparent. Idempotent.
    fn clear(&mut self);

    /// Snapshot of the current ink. Later strokes do not affect a snapshot
    /// already handed out. Host-backed surfaces may fail with
    /// [`Error::ContextUnavailable`](crate::Error::ContextUnavailable).
    fn export_raster(&self) -> Result<Raster>;

    /// Surface size in pixels.
    fn dimensions(&self) -> (u32, u32);
}

/// In-memory drawing surface.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    raster: Raster,
    pen: Pen,
    strokes: Vec<Stroke>,
    // true between Down and Up
    drawing: bool,
}

impl RasterSurface {
    pub fn new(config: PadConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            raster: Raster::new(config.width, config.height),
            pen: config.pen,
            strokes: Vec::new(),
            drawing: false,
        })
    }

    /// Rebuild a surface by replaying previously recorded strokes.
    pub fn from_strokes(config: PadConfig, strokes: &[Stroke]) -> Result<Self> {
        let mut surface = Self::new(config)?;
        for event in replay_events(strokes) {
            surface.handle_pointer(event);
        }
        Ok(surface)
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Change the pen for subsequent strokes.
    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    /// Strokes committed since creation or the last clear.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }
}

impl DrawingSurface for RasterSurface {
    fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(at) => {
                // A stroke counts as soon as its first sample lands.
                self.strokes.push(Stroke::new(vec![at]));
                self.drawing = true;
                PaintCommand::Dot { at }.apply(&mut self.raster, &self.pen);
                true
            }
            PointerEvent::Move(to) => {
                if !self.drawing {
                    return false;
                }
                let Some(stroke) = self.strokes.last_mut() else {
                    return false;
                };
                let from = stroke.points.last().copied().unwrap_or(to);
                stroke.points.push(to);
                PaintCommand::Segment { from, to }.apply(&mut self.raster, &self.pen);
                true
            }
            PointerEvent::Up => {
                if self.drawing {
                    debug!(
                        "stroke {} committed with {} samples",
                        self.strokes.len(),
                        self.strokes.last().map(|s| s.points.len()).unwrap_or(0)
                    );
                }
                self.drawing = false;
                false
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    fn clear(&mut self) {
        self.raster.clear();
        self.strokes.clear();
        self.drawing = false;
    }

    fn export_raster(&self) -> Result<Raster> {
        Ok(self.raster.clone())
    }

    fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }
}
