//! Step vocabulary: the visual events a sort algorithm may emit.
//!
//! A step is never stored. It is painted against the current sequence and the
//! caller then pauses for the delay associated with it.

use serde::{Deserialize, Serialize};

use crate::config::{StepDelay, VisualizationConfig};
use crate::error::{Result, SortVizError};
use crate::render::render_bar;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Both slots are about to be compared.
    Comparing(usize, usize),
    /// The slot holds a value known to be out of order.
    WrongSpot(usize),
    /// Emitted after the sequence values at both slots were exchanged.
    Swapped(usize, usize),
    /// The slot's value is final for the rest of the run.
    Settled(usize),
    /// Reverts a comparison highlight when no swap happened.
    StoppedCompare(usize),
}

impl Step {
    /// Slots repainted by this step, in paint order.
    pub fn slots(self) -> impl Iterator<Item = usize> {
        let (a, b) = match self {
            Step::Comparing(i, j) | Step::Swapped(i, j) => (i, Some(j)),
            Step::WrongSpot(k) | Step::Settled(k) | Step::StoppedCompare(k) => (k, None),
        };
        std::iter::once(a).chain(b)
    }

    /// Pause that normally follows this step.
    pub fn delay(self) -> StepDelay {
        match self {
            Step::Comparing(..) => StepDelay::Compare,
            Step::WrongSpot(_) => StepDelay::WrongSpot,
            Step::Swapped(..) => StepDelay::Swap,
            Step::Settled(_) => StepDelay::CorrectSpot,
            Step::StoppedCompare(_) => StepDelay::StoppedCompare,
        }
    }

    /// (fill, outline) used for the repainted bars.
    fn colors(self, cfg: &VisualizationConfig) -> (&str, &str) {
        let p = &cfg.palette;
        match self {
            Step::Comparing(..) => (&p.compared, &p.outline),
            Step::WrongSpot(_) => (&p.wrong_spot, &p.wrong_spot),
            Step::Settled(_) => (&p.correct_spot, &p.correct_spot),
            Step::Swapped(..) | Step::StoppedCompare(_) => (&p.fill, &p.outline),
        }
    }
}

/// Repaint every slot touched by `step` using the current `values`.
///
/// Every slot is resolved before the first draw, and all slots are painted
/// before returning, so a two-slot step never shows half-updated.
pub fn paint_step<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &VisualizationConfig,
    values: &[f64],
    step: Step,
) -> Result<()> {
    let bars = step
        .slots()
        .map(|slot| {
            values
                .get(slot)
                .map(|value| (slot, *value))
                .ok_or(SortVizError::SlotOutOfRange {
                    slot,
                    len: values.len(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let (fill, outline) = step.colors(cfg);
    for (slot, value) in bars {
        render_bar(surface, cfg, slot, value, fill, outline)?;
    }
    Ok(())
}

/// Receiver of the step protocol. Sort orchestrators only talk to this.
///
/// `paint` may be called several times before a single `pause`; the pause is
/// the only point where an orchestrator suspends.
#[allow(async_fn_in_trait)]
pub trait StepSink {
    fn paint(&mut self, values: &[f64], step: Step) -> Result<()>;

    async fn pause(&mut self, delay: StepDelay);

    /// Paint one step and take its usual pause.
    async fn emit(&mut self, values: &[f64], step: Step) -> Result<()> {
        self.paint(values, step)?;
        self.pause(step.delay()).await;
        Ok(())
    }
}
