//! A value paired with the non-fatal out-of-bounds errors collected while
//! producing it.
//!
//! `transform`/`geometries` calls never fail outright on an out-of-range
//! input — the pose is still computed — so the result can't be a plain
//! `Result`. Collapsing to `Result` would make it impossible for an
//! exploratory planner to both see the error *and* keep the pose it asked
//! for. `Partial<T>` keeps the two concerns separate without losing either.

use crate::error::OobError;

#[derive(Debug, Clone, PartialEq)]
pub struct Partial<T> {
    pub value: T,
    pub oob_errors: Vec<OobError>,
}

impl<T> Partial<T> {
    pub fn ok(value: T) -> Self {
        Self {
            value,
            oob_errors: Vec::new(),
        }
    }

    pub fn with_errors(value: T, oob_errors: Vec<OobError>) -> Self {
        Self { value, oob_errors }
    }

    pub fn is_clean(&self) -> bool {
        self.oob_errors.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Partial<U> {
        Partial {
            value: f(self.value),
            oob_errors: self.oob_errors,
        }
    }

    /// Merge another partial's OOB errors into this one, keeping this
    /// partial's value. Used when composing several frame hops into one
    /// path transform (§4.D: "the union of all per-hop errors").
    pub fn merge_errors(mut self, other: &Partial<impl Sized>) -> Self {
        self.oob_errors.extend(other.oob_errors.iter().cloned());
        self
    }

    /// Discard the OOB errors and keep only the value, for callers that
    /// treat exploration of invalid configurations as acceptable.
    pub fn into_value(self) -> T {
        self.value
    }
}
