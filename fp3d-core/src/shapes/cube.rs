use crate::camera::Camera;
use crate::drawable::Render;
use crate::geometry::{Point2, Vec3};
use crate::pipeline::FrameContext;
use crate::primitive::{Color, LineSegment, Primitive};

/// Unit-cube corner offsets: the y = +0.5 ring, then the y = -0.5 ring.
const CORNERS: [[f32; 3]; 8] = [
    [-0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, -0.5, 0.5],
    [-0.5, -0.5, 0.5],
];

/// Walks the lower ring, steps up, then walks the upper ring.
const PATH: [usize; 10] = [0, 1, 2, 3, 0, 4, 5, 6, 7, 4];

/// The ring-to-ring edges the path does not cover.
const VERTICALS: [(usize, usize); 3] = [(1, 5), (2, 6), (3, 7)];

fn edge_indices() -> impl Iterator<Item = (usize, usize)> {
    PATH.windows(2).map(|pair| (pair[0], pair[1])).chain(VERTICALS)
}

/// Axis-aligned wireframe cube. Drawn as lines, never culled or shaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    center: Vec3,
    scale: f32,
    color: Color,
}

impl Cube {
    pub fn new(center: Vec3, scale: f32, color: Color) -> Self {
        Self { center, scale, color }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn move_by(&mut self, delta: Vec3) {
        self.center += delta;
    }

    pub fn corners(&self) -> [Vec3; 8] {
        CORNERS.map(|[x, y, z]| self.center + Vec3::new(x, y, z) * self.scale)
    }

    /// The 12 edges as pairs of world-space points.
    pub fn edges(&self) -> Vec<(Vec3, Vec3)> {
        let corners = self.corners();
        edge_indices().map(|(a, b)| (corners[a], corners[b])).collect()
    }
}

impl Render for Cube {
    fn render(&self, camera: &Camera, frame: &FrameContext) -> Vec<Primitive> {
        let screen: Vec<Point2> = self
            .corners()
            .iter()
            .map(|&corner| frame.screen.project_to_screen(camera.to_camera_space(corner)))
            .collect();

        let segments = edge_indices()
            .map(|(a, b)| LineSegment::new(screen[a], screen[b]))
            .collect();

        vec![Primitive::Lines {
            segments,
            color: self.color,
        }]
    }
}
