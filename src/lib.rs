//! Reference-frame kinematics core: a named tree of coordinate frames, the
//! rigid-body pose algebra it composes along that tree, and the geometry
//! primitives carried by individual frames.
//!
//! A configuration document (`config`) parses into `Frame`s (`frame`), which
//! are assembled into a `FrameSystem` (`frame_system`). At query time a
//! caller supplies a `FrameSystemInputs` map and a source/target pair; the
//! system walks the tree, composing each hop's pose via `algebra`, and
//! optionally resolves `geometry` along the way.

pub mod algebra;
pub mod config;
pub mod error;
pub mod frame;
pub mod frame_system;
pub mod geometry;
pub mod partial;
pub mod world_state;

pub use algebra::{Orientation, Pose, Quaternion, Vector};
pub use error::{FrameError, OobError};
pub use frame::{Frame, FrameSystemInputs, Limit, INFINITE_LIMIT_SAMPLE_BOUND};
pub use frame_system::{FrameSystem, SolverFrame, WORLD};
pub use geometry::{collides, Geometry, GeometriesInFrame, GeometryKind};
pub use partial::Partial;
pub use world_state::WorldState;
