//! Geometry primitives: labelled, posed 3D shapes attached to frames.
//!
//! Grounded in the same data shape robotics/simulation crates in this corpus
//! use for their collision world (a pose plus shape-specific dimensions),
//! generalised here to the primitive set §3/§4.B name: box, sphere, capsule,
//! point, mesh, and point cloud.

use crate::algebra::{Pose, Vector};
use serde::{Deserialize, Serialize};

/// A triangle mesh, local-space vertices grouped into triangles by index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vector>,
    pub triangles: Vec<[usize; 3]>,
}

impl Mesh {
    pub fn triangle_vertices(&self, triangle: [usize; 3]) -> Option<[Vector; 3]> {
        Some([
            *self.vertices.get(triangle[0])?,
            *self.vertices.get(triangle[1])?,
            *self.vertices.get(triangle[2])?,
        ])
    }
}

/// A named external point-cloud resource; the crate does not own or decode
/// the point data itself, only the metadata needed to place and label it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<Vector>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GeometryKind {
    Box { half_extents: Vector },
    Sphere { radius: f64 },
    Capsule { radius: f64, length: f64 },
    Point,
    Mesh(Mesh),
    PointCloud(PointCloud),
}

/// A posed, labelled primitive. `pose` is the shape's placement relative to
/// whichever frame it is currently expressed in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    label: String,
    pose: Pose,
    kind: GeometryKind,
}

impl Geometry {
    pub fn new(label: impl Into<String>, pose: Pose, kind: GeometryKind) -> Self {
        Self {
            label: label.into(),
            pose,
            kind,
        }
    }

    pub fn new_box(label: impl Into<String>, pose: Pose, half_extents: Vector) -> Self {
        Self::new(label, pose, GeometryKind::Box { half_extents })
    }

    pub fn new_sphere(label: impl Into<String>, pose: Pose, radius: f64) -> Self {
        Self::new(label, pose, GeometryKind::Sphere { radius })
    }

    pub fn new_capsule(label: impl Into<String>, pose: Pose, radius: f64, length: f64) -> Self {
        Self::new(label, pose, GeometryKind::Capsule { radius, length })
    }

    pub fn new_point(label: impl Into<String>, pose: Pose) -> Self {
        Self::new(label, pose, GeometryKind::Point)
    }

    pub fn new_mesh(label: impl Into<String>, pose: Pose, mesh: Mesh) -> Self {
        Self::new(label, pose, GeometryKind::Mesh(mesh))
    }

    pub fn new_point_cloud(label: impl Into<String>, pose: Pose, cloud: PointCloud) -> Self {
        Self::new(label, pose, GeometryKind::PointCloud(cloud))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn kind(&self) -> &GeometryKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            GeometryKind::Box { .. } => "box",
            GeometryKind::Sphere { .. } => "sphere",
            GeometryKind::Capsule { .. } => "capsule",
            GeometryKind::Point => "point",
            GeometryKind::Mesh(_) => "mesh",
            GeometryKind::PointCloud(_) => "point_cloud",
        }
    }

    /// Geometries are value-semantic (§4.B): this returns a new geometry
    /// placed at `pose ∘ self.pose`, preserving the label.
    pub fn transform(&self, pose: Pose) -> Self {
        Self {
            label: self.label.clone(),
            pose: pose.combine(self.pose),
            kind: self.kind.clone(),
        }
    }
}
