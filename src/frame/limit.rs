//! Per-DoF bounds. Either bound may be infinite (§3).

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Substituted for an infinite bound when sampling random inputs (§4.E,
/// §9 "Infinite-limit sampling"). A magic number in the source this crate
/// is grounded on; preserved here as a named constant for parity.
pub const INFINITE_LIMIT_SAMPLE_BOUND: f64 = 999.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub min: f64,
    pub max: f64,
}

impl Limit {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Sample a uniformly random value within this limit, substituting
    /// [`INFINITE_LIMIT_SAMPLE_BOUND`] for either infinite bound.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        let min = if self.min.is_finite() { self.min } else { -INFINITE_LIMIT_SAMPLE_BOUND };
        let max = if self.max.is_finite() { self.max } else { INFINITE_LIMIT_SAMPLE_BOUND };
        if max <= min {
            min
        } else {
            rng.gen_range(min..=max)
        }
    }
}
