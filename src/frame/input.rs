//! The input map: frame name → the ordered DoF values it consumes (§3).

use std::collections::HashMap;

/// Maps a frame's name to the input vector supplied for its DoFs. Missing
/// entries for zero-DoF frames are tolerated; missing entries for
/// non-zero-DoF frames are a fatal [`crate::error::FrameError::MissingIntrinsics`]
/// at query time (§4.D).
pub type FrameSystemInputs = HashMap<String, Vec<f64>>;
