/// Painter's-algorithm ordering
use crate::geometry::Vec3;

/// Sum of the three camera-space z values.
///
/// A per-triangle heuristic: interpenetrating or overlapping long triangles
/// can still come out in the wrong order.
pub fn depth_key(vertices: &[Vec3; 3]) -> f32 {
    vertices[0].z + vertices[1].z + vertices[2].z
}

/// Sort so that the largest key (farthest) comes first.
///
/// The sort is stable, so equal keys keep their incoming order.
pub fn sort_back_to_front<T>(items: &mut [T], key: impl Fn(&T) -> f32) {
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
}
