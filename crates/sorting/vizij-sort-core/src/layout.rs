//! Slot geometry: where bar `i` sits and how wide it is.
//!
//! slot_width = floor((surface_width - padding * N) / N)
//! x_origin(i) = i * (slot_width + padding)

use log::warn;

use crate::config::LayoutOverrides;
use crate::error::{Result, SortVizError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Floor of the free width per slot. Negative when padding overflows.
    pub slot_width: f64,
    pub padding: f64,
    pub count: usize,
}

impl Layout {
    /// Geometry without feasibility checks. Used for per-step redraws.
    pub fn compute(surface_width: f64, padding: f64, count: usize) -> Self {
        let n = count as f64;
        Self {
            slot_width: ((surface_width - padding * n) / n).floor(),
            padding,
            count,
        }
    }

    /// Geometry with both feasibility checks applied, honoring `overrides`.
    pub fn validated(
        surface_width: f64,
        padding: f64,
        count: usize,
        overrides: LayoutOverrides,
    ) -> Result<Self> {
        if count == 0 {
            return Err(SortVizError::InvalidCount { count: 0 });
        }
        let layout = Self::compute(surface_width, padding, count);

        let required = padding * count as f64;
        if required > surface_width {
            if !overrides.ignore_padding_error {
                return Err(SortVizError::LayoutInfeasible {
                    required,
                    surface_width,
                });
            }
            warn!(
                "padding overflow ignored: padding*count={} exceeds surface width {}",
                required, surface_width
            );
        }
        if layout.slot_width < 1.0 {
            if !overrides.ignore_small_width_error {
                return Err(SortVizError::DegenerateSlotWidth {
                    slot_width: layout.slot_width,
                });
            }
            warn!("degenerate slot width {} ignored", layout.slot_width);
        }
        Ok(layout)
    }

    pub fn x_origin(&self, slot: usize) -> f64 {
        slot as f64 * (self.slot_width + self.padding)
    }

    /// Width handed to the surface; never negative.
    pub fn bar_width(&self) -> f64 {
        self.slot_width.max(0.0)
    }
}

/// Pixel height of a bar for a normalized `value`.
pub fn bar_height(value: f64, max_bar_height: f64) -> f64 {
    value * max_bar_height
}
