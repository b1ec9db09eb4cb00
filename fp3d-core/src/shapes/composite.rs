use crate::camera::Camera;
use crate::drawable::Render;
use crate::geometry::{Mesh, Vec3};
use crate::pipeline::FrameContext;
use crate::primitive::Primitive;
use crate::transform::Axis;

/// A movable object that owns a mesh.
///
/// The mesh stays in world coordinates; moving or turning the object applies
/// the same change to the mesh, so drawing is just drawing the mesh.
#[derive(Debug, Clone)]
pub struct CompositeObject {
    mesh: Mesh,
    position: Vec3,
    heading: f32,
}

impl CompositeObject {
    /// Wrap a mesh modelled around the origin and place it at `position`.
    pub fn new(mut mesh: Mesh, position: Vec3) -> Self {
        mesh.translate(position);
        Self {
            mesh,
            position,
            heading: 0.0,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation about the vertical axis, in radians.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Unit vector the object faces on the horizontal plane.
    pub fn facing(&self) -> Vec3 {
        let (sin, cos) = self.heading.sin_cos();
        Vec3::new(sin, 0.0, cos)
    }

    pub fn move_by(&mut self, delta: Vec3) {
        self.position += delta;
        self.mesh.translate(delta);
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.move_by(self.facing() * distance);
    }

    pub fn place_at(&mut self, position: Vec3) {
        self.move_by(position - self.position);
    }

    /// Turn in place about the vertical axis through the object's position.
    pub fn turn(&mut self, angle: f32) {
        self.heading += angle;
        self.mesh.rotate_around_point(Axis::Y, angle, self.position);
    }
}

impl Render for CompositeObject {
    fn render(&self, camera: &Camera, frame: &FrameContext) -> Vec<Primitive> {
        self.mesh.render(camera, frame)
    }
}
