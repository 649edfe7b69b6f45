//! Initial value providers.
//!
//! Both generators take the RNG from the caller so runs can be reproduced
//! with a seeded `StdRng`.

use rand::seq::SliceRandom;
use rand::Rng;

/// `count` independent uniform values in [0, 1).
pub fn uniform<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count).map(|_| rng.gen::<f64>()).collect()
}

/// Evenly spaced values `a + (b - a) / count * i` for `i` in `0..count`.
pub fn ramp(count: usize, a: f64, b: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let slope = (b - a) / count as f64;
    (0..count).map(|i| a + slope * i as f64).collect()
}

/// A [0, 1) ramp in random order: every height appears exactly once.
pub fn shuffled_ramp<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
    shuffled_ramp_between(count, 0.0, 1.0, rng)
}

pub fn shuffled_ramp_between<R: Rng + ?Sized>(
    count: usize,
    a: f64,
    b: f64,
    rng: &mut R,
) -> Vec<f64> {
    let mut values = ramp(count, a, b);
    values.shuffle(rng);
    values
}

/// True when every value lies strictly inside (0, 1).
pub fn in_open_unit_interval(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0 && *v < 1.0)
}
