//! The closed family of frame variants (§3, §4.C).
//!
//! `Frame` is a tagged sum, not an open trait hierarchy: a reader who needs
//! to tag a subtree reaches for the [`Frame::Named`] or [`Frame::NoGeometry`]
//! wrapper rather than adding a new variant (§4.C "Frame polymorphism is
//! closed").

use crate::algebra::{Orientation, Pose, Vector};
use crate::error::{FrameError, OobError};
use crate::frame::limit::Limit;
use crate::geometry::{Geometry, GeometriesInFrame};
use crate::partial::Partial;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticFrame {
    name: String,
    pose: Pose,
    geometry: Option<Geometry>,
}

impl StaticFrame {
    pub fn new(name: impl Into<String>, pose: Pose, geometry: Option<Geometry>) -> Self {
        Self {
            name: name.into(),
            pose,
            geometry,
        }
    }
}

/// Like [`StaticFrame`] but its geometry sits at the frame's *endpoint*
/// (the pose already applied) rather than at the origin (§3).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TailGeometryStaticFrame {
    name: String,
    pose: Pose,
    geometry: Option<Geometry>,
}

impl TailGeometryStaticFrame {
    pub fn new(name: impl Into<String>, pose: Pose, geometry: Option<Geometry>) -> Self {
        Self {
            name: name.into(),
            pose,
            geometry,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationalFrame {
    name: String,
    axis: Vector,
    limit: Limit,
    geometry: Option<Geometry>,
}

impl TranslationalFrame {
    /// `axis` is normalised; `None` if it is too close to zero (§4.C
    /// "degenerate constructions are rejected up front").
    pub fn new(name: impl Into<String>, axis: Vector, limit: Limit, geometry: Option<Geometry>) -> Option<Self> {
        let name = name.into();
        let axis = match axis.normalized_checked() {
            Some(axis) => axis,
            None => {
                warn!(frame = %name, "zero-length axis rejected");
                return None;
            }
        };
        Some(Self {
            name,
            axis,
            limit,
            geometry,
        })
    }

    pub fn axis(&self) -> Vector {
        self.axis
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }
}

/// One DoF about a unit axis. Never carries geometry — "a design choice for
/// simplicity" (§3).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationalFrame {
    name: String,
    axis: Vector,
    limit: Limit,
}

impl RotationalFrame {
    pub fn new(name: impl Into<String>, axis: Vector, limit: Limit) -> Option<Self> {
        let name = name.into();
        let axis = match axis.normalized_checked() {
            Some(axis) => axis,
            None => {
                warn!(frame = %name, "zero-length axis rejected");
                return None;
            }
        };
        Some(Self { name, axis, limit })
    }

    pub fn axis(&self) -> Vector {
        self.axis
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }
}

/// Two DoF (x, y) in a plane at z = 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mobile2DFrame {
    name: String,
    limits: [Limit; 2],
    geometry: Option<Geometry>,
}

impl Mobile2DFrame {
    pub fn new(name: impl Into<String>, limits: [Limit; 2], geometry: Option<Geometry>) -> Self {
        Self {
            name: name.into(),
            limits,
            geometry,
        }
    }

    pub fn limits(&self) -> [Limit; 2] {
        self.limits
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedFrame {
    name: String,
    inner: Box<Frame>,
}

impl NamedFrame {
    pub fn new(name: impl Into<String>, inner: Frame) -> Self {
        Self {
            name: name.into(),
            inner: Box::new(inner),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoGeometryFrame {
    inner: Box<Frame>,
}

impl NoGeometryFrame {
    pub fn new(inner: Frame) -> Self {
        Self { inner: Box::new(inner) }
    }
}

/// The closed frame sum type (§3, §4.C).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Frame {
    Static(StaticFrame),
    TailGeometryStatic(TailGeometryStaticFrame),
    Translational(TranslationalFrame),
    Rotational(RotationalFrame),
    Mobile2D(Mobile2DFrame),
    Named(NamedFrame),
    NoGeometry(NoGeometryFrame),
}

impl Frame {
    pub fn name(&self) -> &str {
        match self {
            Frame::Static(f) => &f.name,
            Frame::TailGeometryStatic(f) => &f.name,
            Frame::Translational(f) => &f.name,
            Frame::Rotational(f) => &f.name,
            Frame::Mobile2D(f) => &f.name,
            Frame::Named(f) => &f.name,
            Frame::NoGeometry(f) => f.inner.name(),
        }
    }

    pub fn dof(&self) -> usize {
        match self {
            Frame::Static(_) | Frame::TailGeometryStatic(_) => 0,
            Frame::Translational(_) | Frame::Rotational(_) => 1,
            Frame::Mobile2D(_) => 2,
            Frame::Named(f) => f.inner.dof(),
            Frame::NoGeometry(f) => f.inner.dof(),
        }
    }

    pub fn limits(&self) -> Vec<Limit> {
        match self {
            Frame::Static(_) | Frame::TailGeometryStatic(_) => Vec::new(),
            Frame::Translational(f) => vec![f.limit],
            Frame::Rotational(f) => vec![f.limit],
            Frame::Mobile2D(f) => f.limits.to_vec(),
            Frame::Named(f) => f.inner.limits(),
            Frame::NoGeometry(f) => f.inner.limits(),
        }
    }

    fn check_length(&self, inputs: &[f64]) -> Result<(), FrameError> {
        if inputs.len() != self.dof() {
            return Err(FrameError::InputLengthMismatch {
                frame: self.name().to_string(),
                expected: self.dof(),
                actual: inputs.len(),
            });
        }
        Ok(())
    }

    fn oob_errors(&self, inputs: &[f64]) -> Vec<OobError> {
        self.limits()
            .iter()
            .zip(inputs.iter())
            .filter(|(limit, value)| !limit.contains(**value))
            .map(|(limit, value)| OobError {
                frame: self.name().to_string(),
                value: *value,
                min: limit.min,
                max: limit.max,
            })
            .collect()
    }

    /// Relative-to-parent pose for the given inputs (§4.C). Length mismatch
    /// is fatal; out-of-bounds inputs are non-fatal and travel alongside the
    /// (still valid) computed pose via [`Partial`].
    pub fn transform(&self, inputs: &[f64]) -> Result<Partial<Pose>, FrameError> {
        self.check_length(inputs)?;
        let oob = self.oob_errors(inputs);
        let pose = match self {
            Frame::Static(f) => f.pose,
            Frame::TailGeometryStatic(f) => f.pose,
            Frame::Translational(f) => Pose::new(f.axis * inputs[0], Orientation::identity()),
            Frame::Rotational(f) => Pose::new(
                Vector::zero(),
                Orientation::from_axis_angle(crate::algebra::orientation::AxisAngle {
                    angle: inputs[0],
                    axis: f.axis,
                })
                .expect("rotational frame axis is normalised at construction"),
            ),
            Frame::Mobile2D(_) => Pose::new(Vector::new(inputs[0], inputs[1], 0.0), Orientation::identity()),
            Frame::Named(f) => return f.inner.transform(inputs),
            Frame::NoGeometry(f) => return f.inner.transform(inputs),
        };
        Ok(Partial::with_errors(pose, oob))
    }

    /// Geometries placed by this frame's current inputs, in this frame's own
    /// local coordinate system (§4.C).
    pub fn geometries(&self, inputs: &[f64]) -> Result<Partial<GeometriesInFrame>, FrameError> {
        self.check_length(inputs)?;
        let oob = self.oob_errors(inputs);
        let placed = match self {
            Frame::Static(f) => f.geometry.as_ref().map(|g| vec![g.clone()]).unwrap_or_default(),
            Frame::TailGeometryStatic(f) => f
                .geometry
                .as_ref()
                .map(|g| vec![g.transform(f.pose)])
                .unwrap_or_default(),
            Frame::Translational(f) => {
                let translation = Pose::new(f.axis * inputs[0], Orientation::identity());
                f.geometry.as_ref().map(|g| vec![g.transform(translation)]).unwrap_or_default()
            }
            Frame::Rotational(_) => Vec::new(),
            Frame::Mobile2D(f) => {
                let translation = Pose::new(Vector::new(inputs[0], inputs[1], 0.0), Orientation::identity());
                f.geometry.as_ref().map(|g| vec![g.transform(translation)]).unwrap_or_default()
            }
            Frame::Named(f) => f.inner.geometries(inputs)?.map(GeometriesInFrame::into_geometries).value,
            Frame::NoGeometry(_) => Vec::new(),
        };
        Ok(Partial::with_errors(GeometriesInFrame::new(self.name(), placed), oob))
    }

    /// True iff `other` is the same concrete variant and every field is
    /// within `epsilon` (§4.C). Compares against its own variant even for
    /// `Mobile2D` — the upstream's copy-paste bug (comparing mobile-2D
    /// against rotational) is not reproduced here (§9 Open Question).
    pub fn almost_equals(&self, other: &Frame, epsilon: f64) -> bool {
        match (self, other) {
            (Frame::Static(a), Frame::Static(b)) => {
                a.name == b.name && a.pose.almost_equals(b.pose, epsilon) && geometry_eq(&a.geometry, &b.geometry, epsilon)
            }
            (Frame::TailGeometryStatic(a), Frame::TailGeometryStatic(b)) => {
                a.name == b.name && a.pose.almost_equals(b.pose, epsilon) && geometry_eq(&a.geometry, &b.geometry, epsilon)
            }
            (Frame::Translational(a), Frame::Translational(b)) => {
                a.name == b.name
                    && a.axis.almost_equals(b.axis, epsilon)
                    && limit_eq(a.limit, b.limit, epsilon)
                    && geometry_eq(&a.geometry, &b.geometry, epsilon)
            }
            (Frame::Rotational(a), Frame::Rotational(b)) => {
                a.name == b.name && a.axis.almost_equals(b.axis, epsilon) && limit_eq(a.limit, b.limit, epsilon)
            }
            (Frame::Mobile2D(a), Frame::Mobile2D(b)) => {
                a.name == b.name
                    && limit_eq(a.limits[0], b.limits[0], epsilon)
                    && limit_eq(a.limits[1], b.limits[1], epsilon)
                    && geometry_eq(&a.geometry, &b.geometry, epsilon)
            }
            (Frame::Named(a), Frame::Named(b)) => a.name == b.name && a.inner.almost_equals(&b.inner, epsilon),
            (Frame::NoGeometry(a), Frame::NoGeometry(b)) => a.inner.almost_equals(&b.inner, epsilon),
            _ => false,
        }
    }
}

fn limit_eq(a: Limit, b: Limit, epsilon: f64) -> bool {
    (a.min - b.min).abs() < epsilon && (a.max - b.max).abs() < epsilon
}

fn geometry_eq(a: &Option<Geometry>, b: &Option<Geometry>, epsilon: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.label() == b.label() && a.pose().almost_equals(b.pose(), epsilon) && a.kind_name() == b.kind_name()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_frame_has_zero_dof() {
        let f = Frame::Static(StaticFrame::new("a", Pose::identity(), None));
        assert_eq!(f.dof(), 0);
        assert!(f.transform(&[]).unwrap().is_clean());
    }

    #[test]
    fn translational_frame_rejects_zero_axis() {
        assert!(TranslationalFrame::new("t", Vector::zero(), Limit::unbounded(), None).is_none());
    }

    #[test]
    fn rotational_frame_never_reports_geometry() {
        let f = Frame::Rotational(RotationalFrame::new("j", Vector::unit_z(), Limit::unbounded()).unwrap());
        let geoms = f.geometries(&[0.3]).unwrap();
        assert!(geoms.value.geometries().is_empty());
    }

    #[test]
    fn input_length_mismatch_is_fatal() {
        let f = Frame::Rotational(RotationalFrame::new("j", Vector::unit_z(), Limit::unbounded()).unwrap());
        let err = f.transform(&[0.1, 0.2]).unwrap_err();
        assert!(matches!(err, FrameError::InputLengthMismatch { .. }));
    }

    #[test]
    fn out_of_bounds_is_non_fatal_and_pose_is_still_computed() {
        let f = Frame::Translational(TranslationalFrame::new("t", Vector::unit_x(), Limit::new(0.0, 10.0), None).unwrap());
        let result = f.transform(&[15.0]).unwrap();
        assert_eq!(result.value.translation(), Vector::new(15.0, 0.0, 0.0));
        assert_eq!(result.oob_errors.len(), 1);
    }

    #[test]
    fn no_geometry_wrapper_always_reports_empty() {
        let inner = Frame::Static(StaticFrame::new(
            "s",
            Pose::identity(),
            Some(Geometry::new_sphere("s", Pose::identity(), 1.0)),
        ));
        let wrapped = Frame::NoGeometry(NoGeometryFrame::new(inner));
        let geoms = wrapped.geometries(&[]).unwrap();
        assert!(geoms.value.geometries().is_empty());
    }

    #[test]
    fn named_wrapper_overrides_name_but_delegates_transform() {
        let inner = Frame::Static(StaticFrame::new("inner", Pose::identity(), None));
        let wrapped = Frame::Named(NamedFrame::new("outer", inner));
        assert_eq!(wrapped.name(), "outer");
        assert!(wrapped.transform(&[]).unwrap().is_clean());
    }

    #[test]
    fn mobile_2d_compares_only_against_its_own_variant() {
        let a = Frame::Mobile2D(Mobile2DFrame::new(
            "m",
            [Limit::new(-5.0, 5.0), Limit::new(-5.0, 5.0)],
            None,
        ));
        let rotational = Frame::Rotational(RotationalFrame::new("m", Vector::unit_z(), Limit::unbounded()).unwrap());
        assert!(!a.almost_equals(&rotational, 1e-6));
    }
}
