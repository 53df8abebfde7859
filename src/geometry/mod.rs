//! Geometry primitives and the pairwise collision predicates over them
//! (§4.B).

pub mod collision;
pub mod shapes;

pub use collision::collides;
pub use shapes::{Geometry, GeometryKind, Mesh, PointCloud};

use serde::{Deserialize, Serialize};

/// "These geometries are expressed in the coordinate system of frame
/// `frame`" (§3).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometriesInFrame {
    frame: String,
    geometries: Vec<Geometry>,
}

impl GeometriesInFrame {
    pub fn new(frame: impl Into<String>, geometries: Vec<Geometry>) -> Self {
        Self {
            frame: frame.into(),
            geometries,
        }
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn into_geometries(self) -> Vec<Geometry> {
        self.geometries
    }
}
