//! Configuration for a visualization run.
//!
//! [`Settings`] is the raw record hosts load (JSON, camelCase field names).
//! [`Settings::finalize`] validates it against a surface height and produces the
//! immutable [`VisualizationConfig`] every other component reads.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortVizError};

/// Raw settings record as stored on disk or passed from a host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Fraction of the surface height used by a bar of value 1.0.
    pub rectangle_max_height: f64,
    pub background_color: String,
    pub rectangle_outline_color: String,
    pub rectangle_fill_color: String,
    pub rectangle_compared_color: String,
    pub rectangle_wrong_spot_color: String,
    pub rectangle_correct_spot_color: String,
    pub compare_time: u64,
    pub wrong_spot_time: u64,
    pub correct_spot_time: u64,
    pub swap_time: u64,
    pub stopped_compare_time: u64,
    pub padding: u32,
    /// Signed so that zero and negative counts surface as `InvalidCount`.
    pub number_of_rectangles: i64,
    pub ignore_padding_error_on: bool,
    pub ignore_small_width_error_on: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rectangle_max_height: 0.9,
            background_color: "black".to_string(),
            rectangle_outline_color: "black".to_string(),
            rectangle_fill_color: "white".to_string(),
            rectangle_compared_color: "yellow".to_string(),
            rectangle_wrong_spot_color: "red".to_string(),
            rectangle_correct_spot_color: "lime".to_string(),
            compare_time: 5,
            wrong_spot_time: 5,
            correct_spot_time: 5,
            swap_time: 5,
            stopped_compare_time: 5,
            padding: 1,
            number_of_rectangles: 100,
            ignore_padding_error_on: false,
            ignore_small_width_error_on: false,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate and scale into pixels for a surface `surface_height` pixels tall.
    pub fn finalize(&self, surface_height: f64) -> Result<VisualizationConfig> {
        if self.number_of_rectangles <= 0 {
            return Err(SortVizError::InvalidCount {
                count: self.number_of_rectangles,
            });
        }
        let count =
            usize::try_from(self.number_of_rectangles).map_err(|_| SortVizError::InvalidSetting {
                field: "numberOfRectangles",
                reason: format!("{} does not fit in usize", self.number_of_rectangles),
            })?;
        if !self.rectangle_max_height.is_finite() || self.rectangle_max_height < 0.0 {
            return Err(SortVizError::InvalidSetting {
                field: "rectangleMaxHeight",
                reason: format!(
                    "expected a non-negative fraction, got {}",
                    self.rectangle_max_height
                ),
            });
        }
        if !surface_height.is_finite() || surface_height < 0.0 {
            return Err(SortVizError::InvalidSetting {
                field: "surfaceHeight",
                reason: format!("expected a non-negative height, got {surface_height}"),
            });
        }

        Ok(VisualizationConfig {
            max_bar_height: self.rectangle_max_height * surface_height,
            palette: Palette {
                background: self.background_color.clone(),
                outline: self.rectangle_outline_color.clone(),
                fill: self.rectangle_fill_color.clone(),
                compared: self.rectangle_compared_color.clone(),
                wrong_spot: self.rectangle_wrong_spot_color.clone(),
                correct_spot: self.rectangle_correct_spot_color.clone(),
            },
            delays: StepDelays {
                compare: self.compare_time,
                wrong_spot: self.wrong_spot_time,
                correct_spot: self.correct_spot_time,
                swap: self.swap_time,
                stopped_compare: self.stopped_compare_time,
            },
            padding: f64::from(self.padding),
            count,
            overrides: LayoutOverrides {
                ignore_padding_error: self.ignore_padding_error_on,
                ignore_small_width_error: self.ignore_small_width_error_on,
            },
        })
    }
}

/// Colors used by the bar row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: String,
    pub outline: String,
    pub fill: String,
    pub compared: String,
    pub wrong_spot: String,
    pub correct_spot: String,
}

/// Names of the per-step pauses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepDelay {
    Compare,
    WrongSpot,
    CorrectSpot,
    Swap,
    StoppedCompare,
}

/// Per-step pauses in milliseconds. Zero means "do not suspend".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDelays {
    pub compare: u64,
    pub wrong_spot: u64,
    pub correct_spot: u64,
    pub swap: u64,
    pub stopped_compare: u64,
}

impl StepDelays {
    pub fn get(&self, delay: StepDelay) -> u64 {
        match delay {
            StepDelay::Compare => self.compare,
            StepDelay::WrongSpot => self.wrong_spot,
            StepDelay::CorrectSpot => self.correct_spot,
            StepDelay::Swap => self.swap,
            StepDelay::StoppedCompare => self.stopped_compare,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Flags that waive layout feasibility failures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOverrides {
    pub ignore_padding_error: bool,
    pub ignore_small_width_error: bool,
}

/// Immutable configuration for one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualizationConfig {
    /// Height in pixels of a bar with value 1.0.
    pub max_bar_height: f64,
    pub palette: Palette,
    pub delays: StepDelays,
    /// Pixels between adjacent slots.
    pub padding: f64,
    /// Number of slots (N).
    pub count: usize,
    pub overrides: LayoutOverrides,
}

impl VisualizationConfig {
    pub fn delay_ms(&self, delay: StepDelay) -> u64 {
        self.delays.get(delay)
    }

    /// Copy of this config with every pause disabled.
    pub fn fast_forward(&self) -> Self {
        Self {
            delays: StepDelays::default(),
            ..self.clone()
        }
    }
}
