//! Rigid-body transform: translation (millimetres) plus orientation.
//!
//! Poses form a group under [`Pose::combine`] with [`Pose::identity`] and
//! [`Pose::inverse`] (§3). Adapted from the vector-quaternion pair in
//! `spatial::pose`, generalised from a generic scalar/rotation pair to the
//! concrete `f64` + [`Orientation`] this crate standardises on.

use crate::algebra::orientation::Orientation;
use crate::algebra::vector::Vector;
use core::ops::Mul;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    translation: Vector,
    orientation: Orientation,
}

impl Pose {
    pub fn new(translation: Vector, orientation: Orientation) -> Self {
        Self {
            translation,
            orientation,
        }
    }

    pub fn identity() -> Self {
        Self {
            translation: Vector::zero(),
            orientation: Orientation::identity(),
        }
    }

    pub fn translation(&self) -> Vector {
        self.translation
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `self ∘ other`: apply `other` first (in its own local frame), then
    /// `self`. Equivalent to expressing `other` in `self`'s parent frame.
    /// ```
    /// # use frame_kinematics::algebra::{Pose, Orientation, Vector};
    /// # use frame_kinematics::algebra::orientation::AxisAngle;
    /// # use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    /// let first = Pose::new(
    ///     Vector::new(0.0, 0.0, 2.0),
    ///     Orientation::from_axis_angle(AxisAngle { angle: FRAC_PI_2, axis: Vector::unit_z() }).unwrap(),
    /// );
    /// let second = Pose::new(
    ///     Vector::new(1.0, 0.0, 0.0),
    ///     Orientation::from_axis_angle(AxisAngle { angle: FRAC_PI_4, axis: Vector::unit_x() }).unwrap(),
    /// );
    /// let result = first.combine(second);
    /// assert!((result.translation() - Vector::new(0.0, 1.0, 2.0)).norm() < 1e-9);
    /// ```
    pub fn combine(self, other: Self) -> Self {
        let translation = self.translation + self.orientation.quaternion().rotate(other.translation);
        let orientation = Orientation::from_quaternion(self.orientation.quaternion() * other.orientation.quaternion());
        Self {
            translation,
            orientation,
        }
    }

    pub fn apply_to(self, point: Vector) -> Vector {
        self.translation + self.orientation.quaternion().rotate(point)
    }

    /// `a * a.inverse() == Pose::identity()`.
    pub fn inverse(self) -> Self {
        let inverse_orientation = Orientation::from_quaternion(self.orientation.quaternion().inverse());
        Self {
            translation: inverse_orientation.quaternion().rotate(-self.translation),
            orientation: inverse_orientation,
        }
    }

    pub fn interpolate(self, other: Self, progress: f64) -> Self {
        Self {
            translation: self.translation.interpolate(other.translation, progress),
            orientation: Orientation::from_quaternion(
                self.orientation.quaternion().slerp(other.orientation.quaternion(), progress),
            ),
        }
    }

    /// ε = 1e-8 for the translation by default per §3; orientation equality
    /// uses a slightly looser bound since angular error accumulates faster
    /// through composition.
    pub fn almost_equals(self, other: Self, epsilon: f64) -> bool {
        self.translation.almost_equals(other.translation, epsilon)
            && self.orientation.almost_equals(other.orientation, epsilon * 10.0)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Pose {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl Mul<Vector> for Pose {
    type Output = Vector;
    fn mul(self, other: Vector) -> Vector {
        self.apply_to(other)
    }
}
