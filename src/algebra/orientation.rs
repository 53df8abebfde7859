//! Orientation: one logical rotation, several interconvertible
//! representations. The canonical internal form is always a unit
//! [`Quaternion`]; every other representation is a view constructed from it.

use crate::algebra::quaternion::Quaternion;
use crate::algebra::vector::Vector;
use serde::{Deserialize, Serialize};

/// Angle (radians) plus a unit axis. "R4AA" in the serialised vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    pub angle: f64,
    pub axis: Vector,
}

/// Intrinsic ZYX Euler angles, radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

/// Row-major 3x3 rotation matrix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix(pub [[f64; 3]; 3]);

/// Image of +Z under the rotation, plus the remaining roll about that axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientationVector {
    pub direction: Vector,
    pub theta: f64,
}

/// One orientation, stored canonically as a unit quaternion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orientation(Quaternion);

impl Orientation {
    pub fn identity() -> Self {
        Self(Quaternion::identity())
    }

    pub fn from_quaternion(q: Quaternion) -> Self {
        Self(q)
    }

    pub fn quaternion(&self) -> Quaternion {
        self.0
    }

    /// `None` if `axis` is too close to zero to carry a direction.
    pub fn from_axis_angle(aa: AxisAngle) -> Option<Self> {
        Quaternion::from_angle_axis(aa.angle, aa.axis).map(Self)
    }

    pub fn to_axis_angle(self) -> AxisAngle {
        let (angle, axis) = self.0.into_angle_axis();
        AxisAngle { angle, axis }
    }

    pub fn from_rotation_matrix(m: RotationMatrix) -> Self {
        Self(Quaternion::from_rotation_matrix(m.0))
    }

    pub fn to_rotation_matrix(self) -> RotationMatrix {
        RotationMatrix(self.0.to_rotation_matrix())
    }

    /// ZYX intrinsic convention: yaw about Z, then pitch about the new Y,
    /// then roll about the new X.
    pub fn from_euler(e: EulerAngles) -> Self {
        let cr = (e.roll / 2.0).cos();
        let sr = (e.roll / 2.0).sin();
        let cp = (e.pitch / 2.0).cos();
        let sp = (e.pitch / 2.0).sin();
        let cy = (e.yaw / 2.0).cos();
        let sy = (e.yaw / 2.0).sin();

        let w = cr * cp * cy + sr * sp * sy;
        let i = sr * cp * cy - cr * sp * sy;
        let j = cr * sp * cy + sr * cp * sy;
        let k = cr * cp * sy - sr * sp * cy;
        Self(Quaternion::new(w, i, j, k))
    }

    pub fn to_euler(self) -> EulerAngles {
        let q = self.0;
        let (w, i, j, k) = (q.w(), q.i(), q.j(), q.k());

        let sinr_cosp = 2.0 * (w * i + j * k);
        let cosr_cosp = 1.0 - 2.0 * (i * i + j * j);
        let roll = sinr_cosp.atan2(cosr_cosp);

        let sinp = 2.0 * (w * j - k * i);
        let pitch = if sinp.abs() >= 1.0 {
            core::f64::consts::FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        let siny_cosp = 2.0 * (w * k + i * j);
        let cosy_cosp = 1.0 - 2.0 * (j * j + k * k);
        let yaw = siny_cosp.atan2(cosy_cosp);

        EulerAngles { roll, pitch, yaw }
    }

    pub fn from_orientation_vector(ov: OrientationVector) -> Option<Self> {
        let direction = ov.direction.normalized_checked()?;
        // Rotation taking +Z to `direction`, then an extra roll of `theta`
        // about `direction` itself.
        let z = Vector::unit_z();
        let align = if direction.almost_equals(z, 1e-12) {
            Quaternion::identity()
        } else if direction.almost_equals(-z, 1e-12) {
            // 180 degree flip: any axis perpendicular to z works.
            Quaternion::from_angle_axis(core::f64::consts::PI, Vector::unit_x())
                .unwrap_or_else(Quaternion::identity)
        } else {
            let axis = z.cross(direction);
            let angle = z.dot(direction).clamp(-1.0, 1.0).acos();
            Quaternion::from_angle_axis(angle, axis).unwrap_or_else(Quaternion::identity)
        };
        let roll = Quaternion::from_angle_axis(ov.theta, direction).unwrap_or_else(Quaternion::identity);
        Some(Self(roll * align))
    }

    pub fn to_orientation_vector(self) -> OrientationVector {
        let direction = self.0.rotate(Vector::unit_z());
        // Recover theta: the component of the rotation that remains once
        // the "align +Z with direction" part is divided out.
        let z = Vector::unit_z();
        let align = if direction.almost_equals(z, 1e-12) {
            Quaternion::identity()
        } else if direction.almost_equals(-z, 1e-12) {
            Quaternion::from_angle_axis(core::f64::consts::PI, Vector::unit_x())
                .unwrap_or_else(Quaternion::identity)
        } else {
            let axis = z.cross(direction);
            let angle = z.dot(direction).clamp(-1.0, 1.0).acos();
            Quaternion::from_angle_axis(angle, axis).unwrap_or_else(Quaternion::identity)
        };
        let roll_quat = self.0 * align.inverse();
        let (theta, axis) = roll_quat.into_angle_axis();
        let theta = if axis.norm() > f64::EPSILON && axis.dot(direction) < 0.0 {
            -theta
        } else {
            theta
        };
        OrientationVector { direction, theta }
    }

    pub fn angular_distance(self, other: Self) -> f64 {
        self.0.angular_distance(other.0)
    }

    /// Orientations compared by converting both to canonical quaternion and
    /// measuring angular distance (§4.A).
    pub fn almost_equals(self, other: Self, epsilon: f64) -> bool {
        self.angular_distance(other) < epsilon
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn axis_angle_roundtrip() {
        let o = Orientation::from_axis_angle(AxisAngle {
            angle: FRAC_PI_2,
            axis: Vector::unit_y(),
        })
        .unwrap();
        let aa = o.to_axis_angle();
        assert!((aa.angle - FRAC_PI_2).abs() < 1e-9);
        assert!(aa.axis.almost_equals(Vector::unit_y(), 1e-9));
    }

    #[test]
    fn euler_roundtrip() {
        let e = EulerAngles {
            roll: 0.3,
            pitch: -0.2,
            yaw: 0.7,
        };
        let o = Orientation::from_euler(e);
        let back = o.to_euler();
        assert!((back.roll - e.roll).abs() < 1e-9);
        assert!((back.pitch - e.pitch).abs() < 1e-9);
        assert!((back.yaw - e.yaw).abs() < 1e-9);
    }

    #[test]
    fn rotation_matrix_roundtrip() {
        let o = Orientation::from_axis_angle(AxisAngle {
            angle: 1.1,
            axis: Vector::new(1.0, 0.5, 0.2),
        })
        .unwrap();
        let m = o.to_rotation_matrix();
        let back = Orientation::from_rotation_matrix(m);
        assert!(o.almost_equals(back, 1e-9));
    }

    #[test]
    fn orientation_vector_of_identity_points_up_z() {
        let o = Orientation::identity();
        let ov = o.to_orientation_vector();
        assert!(ov.direction.almost_equals(Vector::unit_z(), 1e-9));
    }

    #[test]
    fn orientation_vector_roundtrip() {
        let o = Orientation::from_axis_angle(AxisAngle {
            angle: 0.6,
            axis: Vector::new(0.3, 1.0, 0.4),
        })
        .unwrap();
        let ov = o.to_orientation_vector();
        let back = Orientation::from_orientation_vector(ov).unwrap();
        assert!(o.almost_equals(back, 1e-6));
    }

    #[test]
    fn zero_direction_orientation_vector_is_rejected() {
        assert!(Orientation::from_orientation_vector(OrientationVector {
            direction: Vector::zero(),
            theta: 0.0,
        })
        .is_none());
    }
}
