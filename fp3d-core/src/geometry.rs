/// Geometry primitives for 3D rendering
use nalgebra::{Vector2, Vector3};

use crate::transform::{self, Axis};

/// World-space or camera-space vector
pub type Vec3 = Vector3<f32>;

/// Projected or screen-space point
pub type Point2 = Vector2<f32>;

/// A triangle face defined by three vertices.
///
/// The vertex order is the winding and decides which side counts as the
/// front face; see [`crate::visibility`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's vertices.
    ///
    /// Degenerate (zero-area) triangles produce a non-finite normal.
    pub fn calculate_normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }

    /// Apply `f` to each vertex, keeping the winding.
    pub fn map(&self, f: impl Fn(Vec3) -> Vec3) -> Self {
        let [v0, v1, v2] = self.vertices;
        Self::new(f(v0), f(v1), f(v2))
    }
}

/// A 3D mesh composed of triangles.
///
/// Triangles are only ever changed as a whole through the affine operations
/// below; individual vertices are not exposed mutably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn translate(&mut self, offset: Vec3) {
        for triangle in &mut self.triangles {
            *triangle = triangle.map(|v| v + offset);
        }
    }

    /// Rotate every vertex about the world origin.
    pub fn rotate(&mut self, axis: Axis, angle: f32) {
        for triangle in &mut self.triangles {
            *triangle = triangle.map(|v| transform::rotate(axis, angle, v));
        }
    }

    pub fn rotate_around_point(&mut self, axis: Axis, angle: f32, pivot: Vec3) {
        for triangle in &mut self.triangles {
            *triangle =
                triangle.map(|v| transform::rotate_around_point(axis, angle, v, pivot));
        }
    }

    /// Create a cube mesh centred on the origin.
    ///
    /// Faces are wound so that the computed normal points into the cube,
    /// which is what the culling stage treats as a front face in the
    /// y-down world frame.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let v = Vec3::new;

        // Corners listed around each face, split along the p0-p2 diagonal.
        let quads = [
            // Front (z = +h)
            [v(-h, -h, h), v(-h, h, h), v(h, h, h), v(h, -h, h)],
            // Back (z = -h)
            [v(-h, -h, -h), v(h, -h, -h), v(h, h, -h), v(-h, h, -h)],
            // Floor (y = +h)
            [v(-h, h, -h), v(h, h, -h), v(h, h, h), v(-h, h, h)],
            // Ceiling (y = -h)
            [v(-h, -h, -h), v(-h, -h, h), v(h, -h, h), v(h, -h, -h)],
            // Right (x = +h)
            [v(h, -h, -h), v(h, -h, h), v(h, h, h), v(h, h, -h)],
            // Left (x = -h)
            [v(-h, -h, -h), v(-h, h, -h), v(-h, h, h), v(-h, -h, h)],
        ];

        let triangles = quads
            .iter()
            .flat_map(|&[p0, p1, p2, p3]| [Triangle::new(p0, p1, p2), Triangle::new(p0, p2, p3)])
            .collect();

        Self { triangles }
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
