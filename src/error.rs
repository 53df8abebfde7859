//! The tagged error kinds surfaced at every public boundary of this crate.

use thiserror::Error;

/// Every fatal condition this crate can report, plus the `Config` variant
/// used at the serialisation boundary (`crate::config`).
///
/// Out-of-bounds input is deliberately *not* a variant here: it is non-fatal
/// and travels alongside a valid value via [`crate::partial::Partial`]
/// rather than through `Result`'s error channel. See `OobError` below.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrameError {
    #[error("input length mismatch for frame `{frame}`: expected {expected} inputs, got {actual}")]
    InputLengthMismatch {
        frame: String,
        expected: usize,
        actual: usize,
    },

    #[error("unknown frame `{0}`")]
    UnknownFrame(String),

    #[error("duplicate frame `{0}`")]
    DuplicateFrame(String),

    #[error("cycle detected: `{0}` is already an ancestor of `{1}`")]
    CycleDetected(String, String),

    #[error("missing intrinsics for frame `{0}`: {1}")]
    MissingIntrinsics(String, String),

    #[error("geometry collision unsupported between {0} and {1}")]
    GeometryCollisionUnsupported(String, String),

    #[error("config error: {0}")]
    Config(String),
}

/// Non-fatal: an input value fell outside its frame's declared `[min, max]`.
///
/// Carries the frame name, the supplied value, and the limit it violated so
/// that callers (and tests) can match on the `input out of bounds` substring
/// promised at the serialisation boundary.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("input out of bounds for frame `{frame}`: {value} not in [{min}, {max}]")]
pub struct OobError {
    pub frame: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}
