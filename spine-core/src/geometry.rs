//! Planar helpers shared by the solvers. Angles are in degrees throughout.

use glam::Vec2;

/// Z component of the cross product of `u` and `v` embedded in the z=0 plane.
#[inline]
pub fn cross_z(u: Vec2, v: Vec2) -> f32 {
    u.x * v.y - u.y * v.x
}

/// Unsigned angle between `u` and `v` in degrees, in [0, 180].
///
/// Returns 0 when either vector has zero length.
pub fn unsigned_angle(u: Vec2, v: Vec2) -> f32 {
    let denom = (u.length_squared() * v.length_squared()).sqrt();
    if denom <= f32::EPSILON * f32::EPSILON {
        return 0.0;
    }
    let cos = (u.dot(v) / denom).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Signed angle from `u` to `v` in degrees, positive when `v` is
/// counter-clockwise from `u`. Magnitude comes from the dot product, sign
/// from the cross product, so exactly opposite vectors yield +180.
pub fn signed_angle(u: Vec2, v: Vec2) -> f32 {
    let a = unsigned_angle(u, v);
    if cross_z(u, v) < 0.0 { -a } else { a }
}

/// Rotate `point` about `pivot` by `angle_deg` (counter-clockwise positive).
pub fn rotate_around(point: Vec2, pivot: Vec2, angle_deg: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let d = point - pivot;
    Vec2::new(cos * d.x - sin * d.y, sin * d.x + cos * d.y) + pivot
}
