//! Signature pad: the save workflow around a drawing surface.
//!
//! ```text
//!   Idle --pointer down--> Drawing --save (ink present)--> Saved
//!     |                      |
//!     +------- close --------+-------------------------> Cancelled
//! ```
//!
//! Saving an empty pad is rejected with a notice and changes nothing.
//! `Saved` and `Cancelled` are terminal: later input is ignored.

use crate::rendering::{encode, trim_with_bounds, EncodedImage};
use crate::surface::{DrawingSurface, PointerEvent, RasterSurface};
use log::{debug, info, warn};
use std::sync::Arc;

/// Message shown when the user saves before drawing anything.
pub const EMPTY_SIGNATURE_NOTICE: &str = "Please draw your signature before saving.";

type OnSaveHandler = Arc<dyn Fn(&EncodedImage) + Send + Sync>;
type OnCloseHandler = Arc<dyn Fn() + Send + Sync>;
type OnNoticeHandler = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadState {
    Idle,
    Drawing,
    Saved,
    Cancelled,
}

impl PadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PadState::Saved | PadState::Cancelled)
    }
}

/// Result of [`SignaturePad::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Signature trimmed, encoded and handed to the save callback
    Saved,
    /// Nothing drawn; the user was notified
    Rejected,
    /// Ink present but no image could be produced; the signature is omitted
    Omitted,
    /// The pad was already saved or cancelled
    Ignored,
}

/// Save workflow over a [`DrawingSurface`].
pub struct SignaturePad<S: DrawingSurface = RasterSurface> {
    surface: S,
    state: PadState,
    on_save: Option<OnSaveHandler>,
    on_close: Option<OnCloseHandler>,
    on_notice: Option<OnNoticeHandler>,
}

impl<S: DrawingSurface> SignaturePad<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: PadState::Idle,
            on_save: None,
            on_close: None,
            on_notice: None,
        }
    }

    pub fn state(&self) -> PadState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Proxy for [`DrawingSurface::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }

    /// Register the callback that receives the encoded signature.
    pub fn on_save<F>(&mut self, cb: F)
    where
        F: Fn(&EncodedImage) + Send + Sync + 'static,
    {
        self.on_save = Some(Arc::new(cb));
    }

    pub fn clear_on_save(&mut self) {
        self.on_save = None;
    }

    /// Register the callback invoked once when the pad is closed without saving.
    pub fn on_close<F>(&mut self, cb: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(cb));
    }

    pub fn clear_on_close(&mut self) {
        self.on_close = None;
    }

    /// Register the callback for user-facing notices (e.g. empty save).
    pub fn on_notice<F>(&mut self, cb: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_notice = Some(Arc::new(cb));
    }

    pub fn clear_on_notice(&mut self) {
        self.on_notice = None;
    }

    /// Forward pointer input to the surface. The first pen-down moves the pad
    /// from `Idle` to `Drawing`.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if self.state.is_terminal() {
            debug!("pointer event ignored in {:?} state", self.state);
            return false;
        }
        if matches!(event, PointerEvent::Down(_)) && self.state == PadState::Idle {
            self.state = PadState::Drawing;
        }
        self.surface.handle_pointer(event)
    }

    /// Wipe the ink. The pad stays in its current state.
    pub fn clear(&mut self) {
        if self.state.is_terminal() {
            debug!("clear ignored in {:?} state", self.state);
            return;
        }
        self.surface.clear();
    }

    /// Trim, encode and deliver the signature.
    pub fn save(&mut self) -> SaveOutcome {
        if self.state.is_terminal() {
            debug!("save ignored in {:?} state", self.state);
            return SaveOutcome::Ignored;
        }

        if self.surface.is_empty() {
            warn!("save rejected: {}", EMPTY_SIGNATURE_NOTICE);
            if let Some(cb) = &self.on_notice {
                cb(EMPTY_SIGNATURE_NOTICE);
            }
            return SaveOutcome::Rejected;
        }

        let raster = match self.surface.export_raster() {
            Ok(r) => r,
            Err(e) => {
                warn!("signature omitted, surface export failed: {}", e);
                return SaveOutcome::Omitted;
            }
        };

        let (trimmed, bounds) = trim_with_bounds(&raster);
        if bounds.is_none() {
            warn!(
                "surface reported strokes but holds no visible ink; saving untrimmed {}x{}",
                raster.width(),
                raster.height()
            );
        }

        let image = match encode(&trimmed) {
            Ok(img) => img,
            Err(e) => {
                warn!("signature omitted: {}", e);
                return SaveOutcome::Omitted;
            }
        };

        info!(
            "signature saved: {}x{} ({} bytes encoded)",
            trimmed.width(),
            trimmed.height(),
            image.as_str().len()
        );
        self.state = PadState::Saved;
        if let Some(cb) = &self.on_save {
            cb(&image);
        }
        SaveOutcome::Saved
    }

    /// Close without saving. Has no effect once the pad is saved or cancelled.
    pub fn close(&mut self) {
        if self.state.is_terminal() {
            debug!("close ignored in {:?} state", self.state);
            return;
        }
        self.state = PadState::Cancelled;
        if let Some(cb) = &self.on_close {
            cb();
        }
    }
}
