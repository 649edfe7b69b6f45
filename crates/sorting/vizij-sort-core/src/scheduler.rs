//! Timed pauses between steps.
//!
//! The host supplies a [`Sleeper`]; the scheduler adds the zero-delay fast
//! path, which returns without ever awaiting the sleeper.

use std::future::Future;
use std::time::Duration;

/// Host suspension primitive. The returned future must yield control back to
/// the host while it waits.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Sleeper + ?Sized> Sleeper for &T {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}

#[derive(Debug, Default)]
pub struct Scheduler<S> {
    sleeper: S,
    pauses: u64,
}

impl<S: Sleeper> Scheduler<S> {
    pub fn new(sleeper: S) -> Self {
        Self { sleeper, pauses: 0 }
    }

    /// Suspend for `duration_ms`. Zero returns immediately without yielding.
    pub async fn pause(&mut self, duration_ms: u64) {
        if duration_ms == 0 {
            return;
        }
        self.pauses += 1;
        self.sleeper.sleep(Duration::from_millis(duration_ms)).await;
    }

    /// Number of pauses that actually suspended.
    pub fn pauses(&self) -> u64 {
        self.pauses
    }
}

/// Sleeper backed by the tokio timer.
#[cfg(feature = "tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

#[cfg(feature = "tokio")]
impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}
