//! Vizij Sort Core (surface-agnostic)
//!
//! Animates comparison sorts as a row of bars. Algorithms mutate a sequence and
//! report discrete steps (compare, wrong spot, swap, settle); each step repaints
//! only the affected slots and is followed by a configurable pause.
//!
//! Hosts supply two collaborators: a [`Surface`] that can draw rectangles and a
//! [`Sleeper`] that can suspend for a duration. Everything else lives here.

pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod scheduler;
pub mod sequence;
pub mod sorts;
pub mod steps;
pub mod surface;
pub mod visualizer;

// Re-exports for consumers (adapters)
pub use config::{LayoutOverrides, Palette, Settings, StepDelay, StepDelays, VisualizationConfig};
pub use error::{Result, SortVizError};
pub use layout::{bar_height, Layout};
pub use render::{check_batch, render_all, render_bar};
#[cfg(feature = "tokio")]
pub use scheduler::TokioSleeper;
pub use scheduler::{Scheduler, Sleeper};
pub use sorts::{bubble_sort, selection_sort, SortAlgorithm};
pub use steps::{paint_step, Step, StepSink};
pub use surface::{paint_background, DrawCall, Rect, RecordingSurface, Surface, SurfaceError};
pub use visualizer::{RunOutcome, RunSummary, Visualizer};
