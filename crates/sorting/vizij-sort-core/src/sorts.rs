//! Sort orchestrators.
//!
//! Each algorithm only mutates the sequence, paints steps and pauses through a
//! [`StepSink`]. They own no rendering state. Sequences shorter than two
//! elements produce no steps at all.

use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::StepDelay;
use crate::error::{Result, SortVizError};
use crate::steps::{Step, StepSink};

/// Bubble sort: after pass `i` the largest remaining value settles at `n-1-i`.
pub async fn bubble_sort<K: StepSink>(values: &mut [f64], sink: &mut K) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }
    for i in 0..n {
        trace!("bubble pass {i}/{n}");
        for j in 0..n - 1 - i {
            sink.emit(values, Step::Comparing(j, j + 1)).await?;

            if values[j] > values[j + 1] {
                sink.emit(values, Step::WrongSpot(j + 1)).await?;
                values.swap(j, j + 1);
                sink.emit(values, Step::Swapped(j, j + 1)).await?;
            } else {
                sink.paint(values, Step::StoppedCompare(j))?;
                sink.paint(values, Step::StoppedCompare(j + 1))?;
                sink.pause(StepDelay::StoppedCompare).await;
            }
        }
        sink.emit(values, Step::Settled(n - 1 - i)).await?;
    }
    Ok(())
}

/// Selection sort: pass `i` finds the minimum of `i..n` and swaps it into `i`.
///
/// The swap is emitted even when the minimum is already at `i`, which keeps
/// the visual cadence the same on every pass.
pub async fn selection_sort<K: StepSink>(values: &mut [f64], sink: &mut K) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }
    for i in 0..n - 1 {
        trace!("selection pass {i}/{n}");
        let mut min_idx = i;
        for j in i + 1..n {
            sink.emit(values, Step::Comparing(j, min_idx)).await?;
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            sink.emit(values, Step::WrongSpot(min_idx)).await?;
        }

        values.swap(min_idx, i);
        sink.emit(values, Step::Swapped(min_idx, i)).await?;

        sink.emit(values, Step::Settled(i)).await?;

        // Unread everything still unsorted, one pause for the whole batch.
        for v in i + 1..n {
            sink.paint(values, Step::StoppedCompare(v))?;
        }
        sink.pause(StepDelay::StoppedCompare).await;
    }
    sink.emit(values, Step::Settled(n - 1)).await
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Bubble, SortAlgorithm::Selection];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
        }
    }

    pub async fn run<K: StepSink>(self, values: &mut [f64], sink: &mut K) -> Result<()> {
        match self {
            SortAlgorithm::Bubble => bubble_sort(values, sink).await,
            SortAlgorithm::Selection => selection_sort(values, sink).await,
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortVizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubblesort" | "bubble_sort" => Ok(SortAlgorithm::Bubble),
            "selection" | "selectionsort" | "selection_sort" => Ok(SortAlgorithm::Selection),
            _ => Err(SortVizError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}
