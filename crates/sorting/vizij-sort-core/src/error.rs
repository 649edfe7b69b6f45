//! Error types for the sorting visualizer.

use thiserror::Error;

use crate::surface::SurfaceError;

/// Everything that can stop a visualization run from starting or finishing.
///
/// Layout and configuration errors are raised before anything is drawn.
/// Surface errors are fatal mid-run; there is no recovery path.
#[derive(Debug, Error)]
pub enum SortVizError {
    /// `padding * count` does not fit on the surface.
    #[error("padding*numberOfRectangles ({required}) > surface width ({surface_width}) will result in incorrect drawing of rectangles")]
    LayoutInfeasible { required: f64, surface_width: f64 },

    /// The computed slot width is below one pixel.
    #[error("slot width of {slot_width} will result in incorrect drawing of rectangles")]
    DegenerateSlotWidth { slot_width: f64 },

    /// `numberOfRectangles <= 0`. Never overridable.
    #[error("numberOfRectangles must be positive, got {count}")]
    InvalidCount { count: i64 },

    #[error("invalid setting {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("sequence has {actual} values but the layout expects {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("slot {slot} is out of range for a sequence of {len}")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error("unknown sort algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    #[error("drawing surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("settings json parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T, E = SortVizError> = std::result::Result<T, E>;
