//! The frame abstraction: a closed family of single-purpose coordinate-frame
//! variants (§3, §4.C).

pub mod input;
pub mod limit;
pub mod variants;

pub use input::FrameSystemInputs;
pub use limit::{Limit, INFINITE_LIMIT_SAMPLE_BOUND};
pub use variants::{
    Frame, Mobile2DFrame, NamedFrame, NoGeometryFrame, RotationalFrame, StaticFrame, TailGeometryStaticFrame,
    TranslationalFrame,
};
