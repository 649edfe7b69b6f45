//! Visualizer: the context object tying config, surface and scheduler together.
//!
//! One visualizer drives one run at a time. The sequence and the surface are
//! exclusively owned for the duration of [`Visualizer::run`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{StepDelay, VisualizationConfig};
use crate::error::Result;
use crate::layout::Layout;
use crate::render::{check_batch, render_all};
use crate::scheduler::{Scheduler, Sleeper};
use crate::sorts::SortAlgorithm;
use crate::steps::{paint_step, Step, StepSink};
use crate::surface::{paint_background, Surface};

/// Counters for a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub algorithm: SortAlgorithm,
    /// Steps painted (a two-slot step counts once).
    pub steps: u64,
    /// Pauses that actually suspended (zero-delay pauses are not counted).
    pub pauses: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Final, sorted sequence.
    pub values: Vec<f64>,
    pub summary: RunSummary,
}

pub struct Visualizer<S, T> {
    config: VisualizationConfig,
    surface: S,
    scheduler: Scheduler<T>,
    steps: u64,
}

impl<S: Surface, T: Sleeper> Visualizer<S, T> {
    pub fn new(config: VisualizationConfig, surface: S, sleeper: T) -> Self {
        Self {
            config,
            surface,
            scheduler: Scheduler::new(sleeper),
            steps: 0,
        }
    }

    pub fn config(&self) -> &VisualizationConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn scheduler(&self) -> &Scheduler<T> {
        &self.scheduler
    }

    /// Initial paint: background plus the full bar row in default colors.
    ///
    /// Length and layout are checked before the first draw, so a failure here
    /// leaves the surface untouched.
    pub fn prepare(&mut self, values: &[f64]) -> Result<Layout> {
        check_batch(&self.surface, &self.config, values)?;
        paint_background(&mut self.surface, &self.config.palette.background)?;
        render_all(&mut self.surface, &self.config, values)
    }

    /// Paint the initial row, then animate `algorithm` until the sequence is sorted.
    pub async fn run(
        &mut self,
        mut values: Vec<f64>,
        algorithm: SortAlgorithm,
    ) -> Result<RunOutcome> {
        let layout = self.prepare(&values)?;
        debug!(
            "starting {} sort over {} bars (slot width {})",
            algorithm,
            values.len(),
            layout.slot_width
        );

        let steps_before = self.steps;
        let pauses_before = self.scheduler.pauses();
        algorithm.run(&mut values, &mut *self).await?;

        let summary = RunSummary {
            algorithm,
            steps: self.steps - steps_before,
            pauses: self.scheduler.pauses() - pauses_before,
        };
        debug!(
            "finished {} sort: {} steps, {} pauses",
            algorithm, summary.steps, summary.pauses
        );
        Ok(RunOutcome { values, summary })
    }
}

impl<S: Surface, T: Sleeper> StepSink for Visualizer<S, T> {
    fn paint(&mut self, values: &[f64], step: Step) -> Result<()> {
        self.steps += 1;
        paint_step(&mut self.surface, &self.config, values, step)
    }

    async fn pause(&mut self, delay: StepDelay) {
        let ms = self.config.delay_ms(delay);
        self.scheduler.pause(ms).await;
    }
}
