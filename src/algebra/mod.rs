//! Spatial algebra: vectors, quaternions, the interconvertible orientation
//! representations, and rigid-body poses built from them (§4.A).

pub mod orientation;
pub mod pose;
pub mod quaternion;
pub mod vector;

pub use orientation::Orientation;
pub use pose::Pose;
pub use quaternion::Quaternion;
pub use vector::Vector;
