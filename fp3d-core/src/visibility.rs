/// Back-face culling
use crate::geometry::{Triangle, Vec3};

/// Whether a face with the given normal can be seen from `eye`.
///
/// In the y-down world frame a face is towards the viewer when its computed
/// normal points away from the eye, i.e. `dot(normal, v0 - eye) > 0`. Edge-on
/// faces (exactly zero) and non-finite normals are rejected. Only orientation
/// is tested; faces hidden behind other geometry are not removed here.
pub fn is_front_facing(triangle: &Triangle, normal: Vec3, eye: Vec3) -> bool {
    if !normal.iter().all(|c| c.is_finite()) {
        return false;
    }
    let view = triangle.vertices[0] - eye;
    normal.dot(&view) > 0.0
}

/// Compute the normal and keep the triangle only if it faces the eye.
pub fn visible_normal(triangle: &Triangle, eye: Vec3) -> Option<Vec3> {
    let normal = triangle.calculate_normal();
    is_front_facing(triangle, normal, eye).then_some(normal)
}
