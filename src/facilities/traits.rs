//! Traits for pluggable randomness.

use rand::Rng;

/// A source of uniform random draws.
///
/// Every simulated value in the crate is derived from `next_unit`, so
/// swapping the source makes fleets reproducible or fully scripted.
pub trait RandomSource: Send {
    /// Return a uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::RngCore + Send> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Deterministic source that replays a fixed sequence of draws, wrapping
/// around when it reaches the end.
///
/// Values are clamped into `[0, 1)`. An empty sequence always yields `0.0`.
#[derive(Debug, Clone)]
pub struct CycleRandom {
    values: Vec<f64>,
    position: usize,
}

impl CycleRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }

    /// A source that returns the same draw forever.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for CycleRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position = self.position.wrapping_add(1);
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
