//! Pairwise collision predicates over [`Geometry`].
//!
//! Every ordered pair of kinds is either implemented here or explicitly
//! rejected with [`FrameError::GeometryCollisionUnsupported`] — an
//! unimplemented pair is never silently reported as "no collision" (§4.B).

use crate::algebra::Vector;
use crate::error::FrameError;
use crate::geometry::shapes::{Geometry, GeometryKind, Mesh};

/// The 15 candidate separating axes for oriented box-box SAT: each box's 3
/// face normals, plus the 9 pairwise cross products between them.
fn box_axes(rot_a: [[f64; 3]; 3], rot_b: [[f64; 3]; 3]) -> Vec<Vector> {
    let cols = |m: [[f64; 3]; 3]| {
        [
            Vector::new(m[0][0], m[1][0], m[2][0]),
            Vector::new(m[0][1], m[1][1], m[2][1]),
            Vector::new(m[0][2], m[1][2], m[2][2]),
        ]
    };
    let a = cols(rot_a);
    let b = cols(rot_b);
    let mut axes = Vec::with_capacity(15);
    axes.extend_from_slice(&a);
    axes.extend_from_slice(&b);
    for &ai in &a {
        for &bi in &b {
            axes.push(ai.cross(bi));
        }
    }
    axes
}

/// Project a box (given by its world-space centre, axes, and half-extents)
/// onto `axis` and return the half-width of that projection.
fn box_projection_radius(axes: [Vector; 3], half_extents: Vector, axis: Vector) -> f64 {
    half_extents.x() * axes[0].dot(axis).abs()
        + half_extents.y() * axes[1].dot(axis).abs()
        + half_extents.z() * axes[2].dot(axis).abs()
}

fn box_world_axes(rotation: [[f64; 3]; 3]) -> [Vector; 3] {
    [
        Vector::new(rotation[0][0], rotation[1][0], rotation[2][0]),
        Vector::new(rotation[0][1], rotation[1][1], rotation[2][1]),
        Vector::new(rotation[0][2], rotation[1][2], rotation[2][2]),
    ]
}

pub(crate) fn box_vs_box(
    center_a: Vector,
    rot_a: [[f64; 3]; 3],
    half_a: Vector,
    center_b: Vector,
    rot_b: [[f64; 3]; 3],
    half_b: Vector,
) -> bool {
    let axes_a = box_world_axes(rot_a);
    let axes_b = box_world_axes(rot_b);
    let d = center_b - center_a;
    for axis in box_axes(rot_a, rot_b) {
        if axis.norm() < 1e-12 {
            continue; // parallel edges: cross product degenerate, skip
        }
        let axis = axis * (1.0 / axis.norm());
        let dist = d.dot(axis).abs();
        let ra = box_projection_radius(axes_a, half_a, axis);
        let rb = box_projection_radius(axes_b, half_b, axis);
        if dist > ra + rb {
            return false; // a separating axis exists
        }
    }
    true
}

/// Closest point to `point` within an axis-aligned box of `half_extents`
/// centred at the origin, both expressed in the box's local frame.
fn clamp_to_box_local(point: Vector, half_extents: Vector) -> Vector {
    Vector::new(
        point.x().clamp(-half_extents.x(), half_extents.x()),
        point.y().clamp(-half_extents.y(), half_extents.y()),
        point.z().clamp(-half_extents.z(), half_extents.z()),
    )
}

/// Rotate `v` by the transpose (= inverse, for a pure rotation matrix) of
/// `rotation`.
fn rotate_by_transpose(rotation: [[f64; 3]; 3], v: Vector) -> Vector {
    Vector::new(
        rotation[0][0] * v.x() + rotation[1][0] * v.y() + rotation[2][0] * v.z(),
        rotation[0][1] * v.x() + rotation[1][1] * v.y() + rotation[2][1] * v.z(),
        rotation[0][2] * v.x() + rotation[1][2] * v.y() + rotation[2][2] * v.z(),
    )
}

fn rotate(rotation: [[f64; 3]; 3], v: Vector) -> Vector {
    Vector::new(
        rotation[0][0] * v.x() + rotation[0][1] * v.y() + rotation[0][2] * v.z(),
        rotation[1][0] * v.x() + rotation[1][1] * v.y() + rotation[1][2] * v.z(),
        rotation[2][0] * v.x() + rotation[2][1] * v.y() + rotation[2][2] * v.z(),
    )
}

/// Closest point on an oriented box to a world-space point.
fn closest_point_on_box(point: Vector, center: Vector, rotation: [[f64; 3]; 3], half_extents: Vector) -> Vector {
    let local = rotate_by_transpose(rotation, point - center);
    let clamped = clamp_to_box_local(local, half_extents);
    center + rotate(rotation, clamped)
}

pub(crate) fn sphere_vs_sphere(center_a: Vector, r_a: f64, center_b: Vector, r_b: f64) -> bool {
    (center_a - center_b).norm() <= r_a + r_b
}

pub(crate) fn sphere_vs_box(
    sphere_center: Vector,
    radius: f64,
    box_center: Vector,
    box_rotation: [[f64; 3]; 3],
    half_extents: Vector,
) -> bool {
    let closest = closest_point_on_box(sphere_center, box_center, box_rotation, half_extents);
    (sphere_center - closest).norm() <= radius
}

pub(crate) fn point_vs_sphere(point: Vector, sphere_center: Vector, radius: f64) -> bool {
    (point - sphere_center).norm() <= radius
}

pub(crate) fn point_vs_box(
    point: Vector,
    box_center: Vector,
    box_rotation: [[f64; 3]; 3],
    half_extents: Vector,
) -> bool {
    let closest = closest_point_on_box(point, box_center, box_rotation, half_extents);
    (point - closest).norm() < 1e-9
}

pub(crate) fn point_vs_point(a: Vector, b: Vector) -> bool {
    (a - b).norm() < 1e-9
}

/// Closest point on segment `[a, b]` to `point`.
fn closest_point_on_segment(a: Vector, b: Vector, point: Vector) -> Vector {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq < 1e-18 {
        return a;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Closest points between segments `[p1, q1]` and `[p2, q2]`.
/// Standard approach (Ericson, *Real-Time Collision Detection* §5.1.9).
fn closest_points_segment_segment(p1: Vector, q1: Vector, p2: Vector, q2: Vector) -> (Vector, Vector) {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.dot(d1);
    let e = d2.dot(d2);
    let f = d2.dot(r);

    let (mut s, mut t);
    if a < 1e-18 && e < 1e-18 {
        return (p1, p2);
    }
    if a < 1e-18 {
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = d1.dot(r);
        if e < 1e-18 {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;
            s = if denom.abs() > 1e-18 {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            t = (b * s + f) / e;
            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
        }
    }
    (p1 + d1 * s, p2 + d2 * t)
}

pub(crate) fn capsule_vs_capsule(
    seg_a: (Vector, Vector),
    r_a: f64,
    seg_b: (Vector, Vector),
    r_b: f64,
) -> bool {
    let (pa, pb) = closest_points_segment_segment(seg_a.0, seg_a.1, seg_b.0, seg_b.1);
    (pa - pb).norm() <= r_a + r_b
}

pub(crate) fn capsule_vs_sphere(seg: (Vector, Vector), r_capsule: f64, sphere_center: Vector, r_sphere: f64) -> bool {
    let closest = closest_point_on_segment(seg.0, seg.1, sphere_center);
    (closest - sphere_center).norm() <= r_capsule + r_sphere
}

pub(crate) fn capsule_vs_point(seg: (Vector, Vector), radius: f64, point: Vector) -> bool {
    let closest = closest_point_on_segment(seg.0, seg.1, point);
    (closest - point).norm() <= radius
}

/// Minimise `|p(t) - closest_point_on_box(p(t))|` over `t in [0, 1]` by
/// ternary search. Distance-to-a-convex-set is convex, and an affine
/// reparameterisation of a convex function stays convex, so the minimum
/// along the segment is unique and ternary search converges.
fn segment_box_distance(
    seg: (Vector, Vector),
    box_center: Vector,
    box_rotation: [[f64; 3]; 3],
    half_extents: Vector,
) -> f64 {
    let eval = |t: f64| -> f64 {
        let p = seg.0.interpolate(seg.1, t);
        let closest = closest_point_on_box(p, box_center, box_rotation, half_extents);
        (p - closest).norm()
    };
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    for _ in 0..60 {
        let m1 = lo + (hi - lo) / 3.0;
        let m2 = hi - (hi - lo) / 3.0;
        if eval(m1) < eval(m2) {
            hi = m2;
        } else {
            lo = m1;
        }
    }
    eval((lo + hi) / 2.0)
}

pub(crate) fn capsule_vs_box(
    seg: (Vector, Vector),
    radius: f64,
    box_center: Vector,
    box_rotation: [[f64; 3]; 3],
    half_extents: Vector,
) -> bool {
    segment_box_distance(seg, box_center, box_rotation, half_extents) <= radius
}

/// Closest point on triangle `(a, b, c)` to `p`.
/// (Ericson, *Real-Time Collision Detection* §5.1.5.)
fn closest_point_on_triangle(a: Vector, b: Vector, c: Vector, p: Vector) -> Vector {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;
    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    let bp = p - b;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return a + ab * v;
    }

    let cp = p - c;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return a + ac * w;
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

fn mesh_triangles_world(mesh: &Mesh, mesh_pose_translation: Vector, mesh_rotation: [[f64; 3]; 3]) -> Vec<[Vector; 3]> {
    mesh.triangles
        .iter()
        .filter_map(|tri| mesh.triangle_vertices(*tri))
        .map(|verts| verts.map(|v| mesh_pose_translation + rotate(mesh_rotation, v)))
        .collect()
}

pub(crate) fn sphere_vs_mesh(
    sphere_center: Vector,
    radius: f64,
    mesh: &Mesh,
    mesh_translation: Vector,
    mesh_rotation: [[f64; 3]; 3],
) -> bool {
    mesh_triangles_world(mesh, mesh_translation, mesh_rotation)
        .into_iter()
        .any(|[a, b, c]| (closest_point_on_triangle(a, b, c, sphere_center) - sphere_center).norm() <= radius)
}

pub(crate) fn capsule_vs_mesh(
    seg: (Vector, Vector),
    radius: f64,
    mesh: &Mesh,
    mesh_translation: Vector,
    mesh_rotation: [[f64; 3]; 3],
) -> bool {
    mesh_triangles_world(mesh, mesh_translation, mesh_rotation)
        .into_iter()
        .any(|[a, b, c]| {
            let eval = |t: f64| -> f64 {
                let p = seg.0.interpolate(seg.1, t);
                (closest_point_on_triangle(a, b, c, p) - p).norm()
            };
            let mut lo = 0.0_f64;
            let mut hi = 1.0_f64;
            for _ in 0..60 {
                let m1 = lo + (hi - lo) / 3.0;
                let m2 = hi - (hi - lo) / 3.0;
                if eval(m1) < eval(m2) {
                    hi = m2;
                } else {
                    lo = m1;
                }
            }
            eval((lo + hi) / 2.0) <= radius
        })
}

/// Akenine-Möller triangle/box overlap test, run in the box's local
/// (axis-aligned) space.
pub(crate) fn box_vs_mesh(
    box_center: Vector,
    box_rotation: [[f64; 3]; 3],
    half_extents: Vector,
    mesh: &Mesh,
    mesh_translation: Vector,
    mesh_rotation: [[f64; 3]; 3],
) -> bool {
    mesh_triangles_world(mesh, mesh_translation, mesh_rotation)
        .into_iter()
        .any(|[wa, wb, wc]| {
            let a = rotate_by_transpose(box_rotation, wa - box_center);
            let b = rotate_by_transpose(box_rotation, wb - box_center);
            let c = rotate_by_transpose(box_rotation, wc - box_center);
            triangle_vs_aabb(a, b, c, half_extents)
        })
}

fn triangle_vs_aabb(a: Vector, b: Vector, c: Vector, half_extents: Vector) -> bool {
    // Triangle edge vectors, tested against the 3 box face normals and the
    // 9 cross products of box edges with triangle edges.
    let edges = [b - a, c - b, a - c];
    let box_axes = [Vector::unit_x(), Vector::unit_y(), Vector::unit_z()];

    for axis in box_axes {
        let (min, max) = project_triangle(a, b, c, axis);
        let r = box_projection_radius(box_axes, half_extents, axis);
        if min > r || max < -r {
            return false;
        }
    }

    let normal = edges[0].cross(edges[1]);
    if normal.norm() > 1e-12 {
        // Triangle's own plane is also a candidate separating axis; all
        // three vertices project to the same value along it.
        let (min, max) = project_triangle(a, b, c, normal);
        let r = box_projection_radius(box_axes, half_extents, normal);
        if min > r || max < -r {
            return false;
        }
    }

    for edge in edges {
        for box_axis in box_axes {
            let axis = edge.cross(box_axis);
            if axis.norm() < 1e-12 {
                continue;
            }
            let (min, max) = project_triangle(a, b, c, axis);
            let r = box_projection_radius(box_axes, half_extents, axis);
            if min > r || max < -r {
                return false;
            }
        }
    }

    true
}

fn project_triangle(a: Vector, b: Vector, c: Vector, axis: Vector) -> (f64, f64) {
    let pa = a.dot(axis);
    let pb = b.dot(axis);
    let pc = c.dot(axis);
    (pa.min(pb).min(pc), pa.max(pb).max(pc))
}

/// Axis/extent of a capsule's medial segment in world space, from its
/// (local +Z aligned) pose and length.
fn capsule_segment(center: Vector, rotation: [[f64; 3]; 3], length: f64) -> (Vector, Vector) {
    let axis = rotate(rotation, Vector::unit_z()) * (length / 2.0);
    (center - axis, center + axis)
}

/// Top-level dispatcher: test `a` against `b` for collision, in the frame
/// both are currently expressed in. Unimplemented kind pairs are a hard
/// error (§4.B), never a silent `false`.
pub fn collides(a: &Geometry, b: &Geometry) -> Result<bool, FrameError> {
    let unsupported = || FrameError::GeometryCollisionUnsupported(a.kind_name().to_string(), b.kind_name().to_string());

    use GeometryKind::*;
    let (rot_a, rot_b) = (a.pose().orientation().to_rotation_matrix().0, b.pose().orientation().to_rotation_matrix().0);
    let (ca, cb) = (a.pose().translation(), b.pose().translation());

    Ok(match (a.kind(), b.kind()) {
        (Box { half_extents: ha }, Box { half_extents: hb }) => box_vs_box(ca, rot_a, *ha, cb, rot_b, *hb),
        (Sphere { radius: ra }, Sphere { radius: rb }) => sphere_vs_sphere(ca, *ra, cb, *rb),
        (Sphere { radius }, Box { half_extents }) => sphere_vs_box(ca, *radius, cb, rot_b, *half_extents),
        (Box { half_extents }, Sphere { radius }) => sphere_vs_box(cb, *radius, ca, rot_a, *half_extents),
        (Point, Point) => point_vs_point(ca, cb),
        (Point, Sphere { radius }) => point_vs_sphere(ca, cb, *radius),
        (Sphere { radius }, Point) => point_vs_sphere(cb, ca, *radius),
        (Point, Box { half_extents }) => point_vs_box(ca, cb, rot_b, *half_extents),
        (Box { half_extents }, Point) => point_vs_box(cb, ca, rot_a, *half_extents),
        (Capsule { radius: ra, length: la }, Capsule { radius: rb, length: lb }) => {
            capsule_vs_capsule(capsule_segment(ca, rot_a, *la), *ra, capsule_segment(cb, rot_b, *lb), *rb)
        }
        (Capsule { radius, length }, Sphere { radius: sr }) => {
            capsule_vs_sphere(capsule_segment(ca, rot_a, *length), *radius, cb, *sr)
        }
        (Sphere { radius: sr }, Capsule { radius, length }) => {
            capsule_vs_sphere(capsule_segment(cb, rot_b, *length), *radius, ca, *sr)
        }
        (Capsule { radius, length }, Point) => capsule_vs_point(capsule_segment(ca, rot_a, *length), *radius, cb),
        (Point, Capsule { radius, length }) => capsule_vs_point(capsule_segment(cb, rot_b, *length), *radius, ca),
        (Capsule { radius, length }, Box { half_extents }) => {
            capsule_vs_box(capsule_segment(ca, rot_a, *length), *radius, cb, rot_b, *half_extents)
        }
        (Box { half_extents }, Capsule { radius, length }) => {
            capsule_vs_box(capsule_segment(cb, rot_b, *length), *radius, ca, rot_a, *half_extents)
        }
        (Sphere { radius }, Mesh(mesh)) => sphere_vs_mesh(ca, *radius, mesh, cb, rot_b),
        (Mesh(mesh), Sphere { radius }) => sphere_vs_mesh(cb, *radius, mesh, ca, rot_a),
        (Box { half_extents }, Mesh(mesh)) => box_vs_mesh(ca, rot_a, *half_extents, mesh, cb, rot_b),
        (Mesh(mesh), Box { half_extents }) => box_vs_mesh(cb, rot_b, *half_extents, mesh, ca, rot_a),
        (Capsule { radius, length }, Mesh(mesh)) => {
            capsule_vs_mesh(capsule_segment(ca, rot_a, *length), *radius, mesh, cb, rot_b)
        }
        (Mesh(mesh), Capsule { radius, length }) => {
            capsule_vs_mesh(capsule_segment(cb, rot_b, *length), *radius, mesh, ca, rot_a)
        }
        (PointCloud(cloud), other) => point_cloud_vs(cloud.points.iter().map(|p| ca + rotate(rot_a, *p)), b, other, cb, rot_b)?,
        (other, PointCloud(cloud)) => point_cloud_vs(cloud.points.iter().map(|p| cb + rotate(rot_b, *p)), a, other, ca, rot_a)?,
        _ => return Err(unsupported()),
    })
}

/// Every point in a point cloud reduces to a zero-radius sphere test
/// against the other geometry (§4.B).
fn point_cloud_vs(
    points: impl Iterator<Item = Vector>,
    other_geometry: &Geometry,
    other_kind: &GeometryKind,
    other_center: Vector,
    other_rotation: [[f64; 3]; 3],
) -> Result<bool, FrameError> {
    use GeometryKind::*;
    for p in points {
        let hit = match other_kind {
            Sphere { radius } => point_vs_sphere(p, other_center, *radius),
            Box { half_extents } => point_vs_box(p, other_center, other_rotation, *half_extents),
            Point => point_vs_point(p, other_center),
            Capsule { radius, length } => {
                capsule_vs_point(capsule_segment(other_center, other_rotation, *length), *radius, p)
            }
            Mesh(mesh) => sphere_vs_mesh(p, 0.0, mesh, other_center, other_rotation),
            PointCloud(cloud) => cloud.points.iter().any(|q| point_vs_point(p, other_center + rotate(other_rotation, *q))),
        };
        if hit {
            return Ok(true);
        }
    }
    let _ = other_geometry;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Orientation, Pose};

    fn at(x: f64, y: f64, z: f64) -> Pose {
        Pose::new(Vector::new(x, y, z), Orientation::identity())
    }

    #[test]
    fn s6_long_box_collides_with_nearby_box_not_far_one() {
        let long_box = Geometry::new_box("long", at(0.0, 0.0, 0.0), Vector::new(0.5, 10.0, 0.5));
        let near = Geometry::new_box("near", at(0.4, 0.0, 0.0), Vector::new(0.5, 0.5, 0.5));
        let far = Geometry::new_box("far", at(5.0, 0.0, 0.0), Vector::new(0.5, 0.5, 0.5));
        assert!(collides(&long_box, &near).unwrap());
        assert!(!collides(&long_box, &far).unwrap());
    }

    #[test]
    fn sphere_sphere_overlap() {
        let a = Geometry::new_sphere("a", at(0.0, 0.0, 0.0), 1.0);
        let b = Geometry::new_sphere("b", at(1.5, 0.0, 0.0), 1.0);
        let c = Geometry::new_sphere("c", at(3.0, 0.0, 0.0), 1.0);
        assert!(collides(&a, &b).unwrap());
        assert!(!collides(&a, &c).unwrap());
    }

    #[test]
    fn sphere_vs_box_clamped_distance() {
        let sphere = Geometry::new_sphere("s", at(2.0, 0.0, 0.0), 0.6);
        let cube = Geometry::new_box("c", at(0.0, 0.0, 0.0), Vector::new(1.0, 1.0, 1.0));
        assert!(collides(&sphere, &cube).unwrap());
        let far_sphere = Geometry::new_sphere("s2", at(3.0, 0.0, 0.0), 0.6);
        assert!(!collides(&far_sphere, &cube).unwrap());
    }

    #[test]
    fn capsule_vs_point() {
        let capsule = Geometry::new_capsule("cap", at(0.0, 0.0, 0.0), 0.2, 2.0);
        let inside = Geometry::new_point("p", at(0.1, 0.0, 0.5));
        let outside = Geometry::new_point("p2", at(5.0, 0.0, 0.0));
        assert!(collides(&capsule, &inside).unwrap());
        assert!(!collides(&capsule, &outside).unwrap());
    }

    #[test]
    fn point_cloud_hits_if_any_point_inside() {
        let cloud = Geometry::new_point_cloud(
            "cloud",
            at(0.0, 0.0, 0.0),
            crate::geometry::shapes::PointCloud {
                points: vec![Vector::new(10.0, 10.0, 10.0), Vector::new(0.0, 0.0, 0.0)],
            },
        );
        let box_at_origin = Geometry::new_box("box", at(0.0, 0.0, 0.0), Vector::new(1.0, 1.0, 1.0));
        assert!(collides(&cloud, &box_at_origin).unwrap());
    }

    #[test]
    fn mesh_vs_mesh_is_explicitly_unsupported() {
        let mesh = Mesh {
            vertices: vec![Vector::new(0.0, 0.0, 0.0), Vector::new(1.0, 0.0, 0.0), Vector::new(0.0, 1.0, 0.0)],
            triangles: vec![[0, 1, 2]],
        };
        let a = Geometry::new_mesh("a", at(0.0, 0.0, 0.0), mesh.clone());
        let b = Geometry::new_mesh("b", at(0.0, 0.0, 0.0), mesh);
        let err = collides(&a, &b).unwrap_err();
        assert!(matches!(err, FrameError::GeometryCollisionUnsupported(_, _)));
    }

    #[test]
    fn sphere_vs_mesh_touches_triangle() {
        let mesh = Mesh {
            vertices: vec![
                Vector::new(-1.0, -1.0, 0.0),
                Vector::new(1.0, -1.0, 0.0),
                Vector::new(0.0, 1.0, 0.0),
            ],
            triangles: vec![[0, 1, 2]],
        };
        let mesh_geom = Geometry::new_mesh("tri", at(0.0, 0.0, 0.0), mesh);
        let close_sphere = Geometry::new_sphere("s", at(0.0, 0.0, 0.3), 0.5);
        let far_sphere = Geometry::new_sphere("s2", at(0.0, 0.0, 5.0), 0.5);
        assert!(collides(&mesh_geom, &close_sphere).unwrap());
        assert!(!collides(&mesh_geom, &far_sphere).unwrap());
    }
}
