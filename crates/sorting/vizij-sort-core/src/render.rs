//! Bar rendering: one slot at a time, or the full initial row.

use crate::config::VisualizationConfig;
use crate::error::{Result, SortVizError};
use crate::layout::{bar_height, Layout};
use crate::surface::{Rect, Surface, SurfaceError, DEFAULT_LINE_THICKNESS};

/// Redraw the bar at `slot` with `value`.
///
/// The whole column is wiped with the background color first so a previously
/// taller bar leaves no residue. Only pixels inside that column are touched.
pub fn render_bar<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &VisualizationConfig,
    slot: usize,
    value: f64,
    fill: &str,
    outline: &str,
) -> Result<(), SurfaceError> {
    let layout = Layout::compute(surface.width(), cfg.padding, cfg.count);
    let x = layout.x_origin(slot);
    let width = layout.bar_width();
    let surface_height = surface.height();
    let height = bar_height(value, cfg.max_bar_height);
    let y = surface_height - height;

    let background = cfg.palette.background.as_str();
    surface.draw_rect(
        Rect::new(x, 0.0, width, surface_height),
        background,
        background,
        DEFAULT_LINE_THICKNESS,
    )?;
    surface.draw_rect(
        Rect::new(x, y, width, height),
        outline,
        fill,
        DEFAULT_LINE_THICKNESS,
    )
}

/// Check that `values` fills exactly `cfg.count` slots and that the layout
/// is feasible on `surface`.
pub fn check_batch<S: Surface + ?Sized>(
    surface: &S,
    cfg: &VisualizationConfig,
    values: &[f64],
) -> Result<Layout> {
    if values.len() != cfg.count {
        return Err(SortVizError::LengthMismatch {
            expected: cfg.count,
            actual: values.len(),
        });
    }
    Layout::validated(surface.width(), cfg.padding, cfg.count, cfg.overrides)
}

/// Validate the batch once, then draw every value in default colors.
///
/// Nothing is drawn when validation fails.
pub fn render_all<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &VisualizationConfig,
    values: &[f64],
) -> Result<Layout> {
    let layout = check_batch(surface, cfg, values)?;
    render_row(surface, cfg, values)?;
    Ok(layout)
}

fn render_row<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &VisualizationConfig,
    values: &[f64],
) -> Result<(), SurfaceError> {
    for (slot, value) in values.iter().enumerate() {
        render_bar(
            surface,
            cfg,
            slot,
            *value,
            &cfg.palette.fill,
            &cfg.palette.outline,
        )?;
    }
    Ok(())
}
