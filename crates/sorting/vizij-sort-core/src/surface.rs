//! Rendering surface contract.
//!
//! The core only ever needs one primitive: draw an axis-aligned rectangle with a
//! fill and an outline. Hosts adapt their drawing API (canvas 2D context,
//! framebuffer, terminal) by implementing [`Surface`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color identifier used for "no paint".
pub const TRANSPARENT: &str = "transparent";

/// Outline thickness used for every bar.
pub const DEFAULT_LINE_THICKNESS: f64 = 1.0;

/// Axis-aligned rectangle. Coordinates may be fractional and `width` may be 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Failure reported by a host surface (e.g. the drawing context went away).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct SurfaceError {
    pub reason: String,
}

impl SurfaceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A 2D drawing target.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Draw `rect` filled with `fill` and stroked with `outline`.
    fn draw_rect(
        &mut self,
        rect: Rect,
        outline: &str,
        fill: &str,
        line_thickness: f64,
    ) -> Result<(), SurfaceError>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        outline: &str,
        fill: &str,
        line_thickness: f64,
    ) -> Result<(), SurfaceError> {
        (**self).draw_rect(rect, outline, fill, line_thickness)
    }
}

/// Fill the whole surface with `color` (transparent outline).
pub fn paint_background<S: Surface + ?Sized>(
    surface: &mut S,
    color: &str,
) -> Result<(), SurfaceError> {
    let rect = Rect::new(0.0, 0.0, surface.width(), surface.height());
    surface.draw_rect(rect, TRANSPARENT, color, DEFAULT_LINE_THICKNESS)
}

/// One recorded `draw_rect` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    pub rect: Rect,
    pub outline: String,
    pub fill: String,
    pub line_thickness: f64,
}

/// In-memory surface that records every draw call. Used by tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            fail_after: None,
        }
    }

    /// Accept `draws` calls, then fail every call after that.
    pub fn failing_after(mut self, draws: usize) -> Self {
        self.fail_after = Some(draws);
        self
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Calls whose rectangle starts at `x`, in draw order.
    pub fn calls_at_x(&self, x: f64) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(move |c| c.rect.x == x)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        outline: &str,
        fill: &str,
        line_thickness: f64,
    ) -> Result<(), SurfaceError> {
        if let Some(limit) = self.fail_after {
            if self.calls.len() >= limit {
                return Err(SurfaceError::new(format!(
                    "recording surface closed after {limit} draws"
                )));
            }
        }
        self.calls.push(DrawCall {
            rect,
            outline: outline.to_string(),
            fill: fill.to_string(),
            line_thickness,
        });
        Ok(())
    }
}
