//! Unit quaternion: the canonical internal orientation representation.
//!
//! All other representations in [`crate::algebra::orientation`] convert
//! through this type.

use crate::algebra::vector::Vector;
use core::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    w: f64,
    i: f64,
    j: f64,
    k: f64,
}

impl Quaternion {
    pub const fn new(w: f64, i: f64, j: f64, k: f64) -> Self {
        Self { w, i, j, k }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn i(&self) -> f64 {
        self.i
    }

    pub fn j(&self) -> f64 {
        self.j
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// Construct the rotation of `angle` radians about `axis`. `axis` need
    /// not be normalised. Returns `None` if `axis` is too close to zero to
    /// carry a direction — callers surface this as a constructor error,
    /// never a silent identity.
    pub fn from_angle_axis(angle: f64, axis: Vector) -> Option<Self> {
        let normalized = axis.normalized_checked()?;
        let half = angle / 2.0;
        let (sin, cos) = half.sin_cos();
        Some(Self::hemisphere_normal(Self {
            w: cos,
            i: normalized.x() * sin,
            j: normalized.y() * sin,
            k: normalized.z() * sin,
        }))
    }

    /// Inverse of [`Self::from_angle_axis`]. Returns `(0.0, Vector::zero())`
    /// for the identity quaternion (no defined axis).
    pub fn into_angle_axis(self) -> (f64, Vector) {
        let half_angle = self.w.clamp(-1.0, 1.0).acos();
        if half_angle < f64::EPSILON {
            (0.0, Vector::zero())
        } else {
            let sin = half_angle.sin();
            let axis = Vector::new(self.i, self.j, self.k) / sin;
            (half_angle * 2.0, axis)
        }
    }

    /// Build from a 3x3 rotation matrix, row-major.
    pub fn from_rotation_matrix(m: [[f64; 3]; 3]) -> Self {
        let trace = m[0][0] + m[1][1] + m[2][2];
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self {
                w: 0.25 * s,
                i: (m[2][1] - m[1][2]) / s,
                j: (m[0][2] - m[2][0]) / s,
                k: (m[1][0] - m[0][1]) / s,
            }
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = (1.0 + m[0][0] - m[1][1] - m[2][2]).sqrt() * 2.0;
            Self {
                w: (m[2][1] - m[1][2]) / s,
                i: 0.25 * s,
                j: (m[0][1] + m[1][0]) / s,
                k: (m[0][2] + m[2][0]) / s,
            }
        } else if m[1][1] > m[2][2] {
            let s = (1.0 + m[1][1] - m[0][0] - m[2][2]).sqrt() * 2.0;
            Self {
                w: (m[0][2] - m[2][0]) / s,
                i: (m[0][1] + m[1][0]) / s,
                j: 0.25 * s,
                k: (m[1][2] + m[2][1]) / s,
            }
        } else {
            let s = (1.0 + m[2][2] - m[0][0] - m[1][1]).sqrt() * 2.0;
            Self {
                w: (m[1][0] - m[0][1]) / s,
                i: (m[0][2] + m[2][0]) / s,
                j: (m[1][2] + m[2][1]) / s,
                k: 0.25 * s,
            }
        };
        Self::hemisphere_normal(q)
    }

    pub fn to_rotation_matrix(self) -> [[f64; 3]; 3] {
        let (w, i, j, k) = (self.w, self.i, self.j, self.k);
        [
            [
                1.0 - 2.0 * (j * j + k * k),
                2.0 * (i * j - k * w),
                2.0 * (i * k + j * w),
            ],
            [
                2.0 * (i * j + k * w),
                1.0 - 2.0 * (i * i + k * k),
                2.0 * (j * k - i * w),
            ],
            [
                2.0 * (i * k - j * w),
                2.0 * (j * k + i * w),
                1.0 - 2.0 * (i * i + j * j),
            ],
        ]
    }

    pub fn multiply(self, other: Self) -> Self {
        Self {
            w: self.w * other.w - self.i * other.i - self.j * other.j - self.k * other.k,
            i: self.w * other.i + self.i * other.w + self.j * other.k - self.k * other.j,
            j: self.w * other.j - self.i * other.k + self.j * other.w + self.k * other.i,
            k: self.w * other.k + self.i * other.j - self.j * other.i + self.k * other.w,
        }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.w * other.w + self.i * other.i + self.j * other.j + self.k * other.k
    }

    pub fn inverse(self) -> Self {
        // Unit quaternions: conjugate is the inverse.
        Self {
            w: self.w,
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }

    pub fn rotate(self, v: Vector) -> Vector {
        let (w, i, j, k) = (self.w, self.i, self.j, self.k);
        let (x, y, z) = (v.x(), v.y(), v.z());
        let prep_x = i * j * y + i * k * z + j * w * z - k * w * y;
        let rx = prep_x + prep_x + (i * i - j * j - k * k + w * w) * x;
        let prep_y = i * j * x - i * w * z + j * k * z + k * w * x;
        let ry = prep_y + prep_y + (j * j - i * i - k * k + w * w) * y;
        let prep_z = i * k * x + i * w * y + j * k * y - j * w * x;
        let rz = prep_z + prep_z + (w * w - i * i - j * j + k * k) * z;
        Vector::new(rx, ry, rz)
    }

    pub fn slerp(self, other: Self, progress: f64) -> Self {
        let dot = self.dot(other);
        let (other, dot) = if dot < 0.0 { (-other, -dot) } else { (other, dot) };
        if dot >= 1.0 {
            return self;
        }
        let dot = dot.min(1.0);
        let omega = dot.acos();
        let sin_omega = omega.sin();
        let a = ((1.0 - progress) * omega).sin() / sin_omega;
        let b = (progress * omega).sin() / sin_omega;
        self * a + other * b
    }

    /// Angular distance between two orientations, in radians, used by the
    /// crate's approximate-equality predicates for orientations.
    pub fn angular_distance(self, other: Self) -> f64 {
        let dot = self.dot(other).abs().clamp(0.0, 1.0);
        2.0 * dot.acos()
    }

    /// Pick the hemisphere with non-negative `w` so that equivalent
    /// rotations (q and -q) always normalise to the same representative
    /// (§4.A: "guard against sign-flip degeneracies").
    fn hemisphere_normal(self) -> Self {
        if self.w < 0.0 {
            -self
        } else {
            self
        }
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            w: self.w + other.w,
            i: self.i + other.i,
            j: self.j + other.j,
            k: self.k + other.k,
        }
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            w: -self.w,
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }
}

impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            w: self.w * scalar,
            i: self.i * scalar,
            j: self.j * scalar,
            k: self.k * scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn angle_axis_roundtrip() {
        let q = Quaternion::from_angle_axis(FRAC_PI_2, Vector::unit_z()).unwrap();
        let (angle, axis) = q.into_angle_axis();
        assert!((angle - FRAC_PI_2).abs() < 1e-9);
        assert!(axis.almost_equals(Vector::unit_z(), 1e-9));
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert!(Quaternion::from_angle_axis(FRAC_PI_2, Vector::zero()).is_none());
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let q = Quaternion::from_angle_axis(FRAC_PI_2, Vector::unit_z()).unwrap();
        let rotated = q.rotate(Vector::unit_x());
        assert!(rotated.almost_equals(Vector::unit_y(), 1e-9));
    }

    #[test]
    fn double_half_angle_equals_full_angle() {
        let half = Quaternion::from_angle_axis(FRAC_PI_4, Vector::unit_z()).unwrap();
        let full = Quaternion::from_angle_axis(FRAC_PI_2, Vector::unit_z()).unwrap();
        let twice = half * half;
        assert!(twice.angular_distance(full) < 1e-9);
    }

    #[test]
    fn rotation_matrix_roundtrip() {
        let q = Quaternion::from_angle_axis(FRAC_PI_4, Vector::new(1.0, 1.0, 0.0)).unwrap();
        let m = q.to_rotation_matrix();
        let back = Quaternion::from_rotation_matrix(m);
        assert!(q.angular_distance(back) < 1e-9);
    }

    #[test]
    fn hemisphere_is_normalized_to_nonnegative_w() {
        let q = Quaternion::from_angle_axis(-FRAC_PI_2, Vector::unit_z()).unwrap();
        assert!(q.w() >= 0.0);
    }

    #[test]
    fn slerp_endpoint_matches_start_and_end() {
        let a = Quaternion::identity();
        let b = Quaternion::from_angle_axis(FRAC_PI_2, Vector::unit_z()).unwrap();
        let start = a.slerp(b, 0.0);
        let end = a.slerp(b, 1.0);
        assert!(start.angular_distance(a) < 1e-9);
        assert!(end.angular_distance(b) < 1e-9);
    }
}
