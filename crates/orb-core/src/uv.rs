//! Texture-coordinate rotation about an axis other than the sphere's pole.
//!
//! UVs map to the unit sphere with longitude `θ = 2πu` and colatitude `φ = πv`:
//! `p = (sinφ·cosθ, cosφ, sinφ·sinθ)`. Rotating content about a tilted axis
//! re-expresses `p` with that axis as the pole, then spins the longitude.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::constants::{BASIS_EPSILON, POLE_EPSILON};

/// Reference used when the rotation axis is parallel to world up.
///
/// `-X` keeps the untilted case an exact longitude shift.
const FALLBACK_REFERENCE: Vec3 = Vec3::NEG_X;

#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn uv_to_sphere(uv: Vec2) -> Vec3 {
    let theta = uv.x * TAU;
    let phi = uv.y * PI;
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta)
}

/// Inverse of [`uv_to_sphere`] for a point on the unit sphere.
#[inline]
pub fn sphere_to_uv(p: Vec3) -> Vec2 {
    let v = p.y.clamp(-1.0, 1.0).acos() / PI;
    let u = fract(p.z.atan2(p.x) / TAU);
    Vec2::new(u, v)
}

/// Rotation axis for a tilt about world Z: `(sin b, cos b, 0)`.
///
/// With `b` the negated clip Z tilt this is the clip normal's direction in the
/// XY plane, so latitude circles about the axis run parallel to the clip edge.
#[inline]
pub fn rotation_axis(axis_tilt_z: f32) -> Vec3 {
    let (s, c) = axis_tilt_z.sin_cos();
    Vec3::new(s, c, 0.0)
}

fn project_onto_plane(reference: Vec3, normal: Vec3) -> Option<Vec3> {
    let projected = reference - normal * reference.dot(normal);
    let len = projected.length();
    (len >= BASIS_EPSILON).then(|| projected / len)
}

/// Orthonormal `(t1, t2)` spanning the plane perpendicular to `axis`.
///
/// `t1` is world up projected into the plane. When `axis` is (anti)parallel to
/// up the projection vanishes and [`FALLBACK_REFERENCE`] is projected instead.
pub fn tangent_basis(axis: Vec3) -> (Vec3, Vec3) {
    let t1 = project_onto_plane(Vec3::Y, axis)
        .or_else(|| project_onto_plane(FALLBACK_REFERENCE, axis))
        .unwrap_or(Vec3::Z);
    let t2 = axis.cross(t1);
    (t1, t2)
}

/// Re-express `uv` with `axis` as the pole and spin it by `angle` radians.
///
/// The result stays in tilted-pole space; callers sample the source with it
/// directly. Points on the axis itself return `(0, v)`.
pub fn rotate_uv(uv: Vec2, axis: Vec3, angle: f32) -> Vec2 {
    let p = uv_to_sphere(uv);
    let tilted_v = p.dot(axis).clamp(-1.0, 1.0).acos() / PI;

    let (t1, t2) = tangent_basis(axis);
    let u1 = p.dot(t1);
    let u2 = p.dot(t2);
    if u1 * u1 + u2 * u2 < POLE_EPSILON * POLE_EPSILON {
        return Vec2::new(0.0, tilted_v);
    }

    // negated so positive angles keep spinning the same way as the untilted case
    let tilted_u = -u2.atan2(u1) / TAU + 0.5;
    Vec2::new(fract(tilted_u + angle / TAU), tilted_v)
}
