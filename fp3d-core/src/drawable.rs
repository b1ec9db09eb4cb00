/// Renderable entities: the closed shape set and its on/off wrapper
use crate::camera::Camera;
use crate::geometry::Mesh;
use crate::pipeline::{self, FrameContext};
use crate::primitive::Primitive;
use crate::shapes::{AxesIndicator, CompositeObject, Cube};

/// Produce screen-space primitives for the current camera.
pub trait Render {
    fn render(&self, camera: &Camera, frame: &FrameContext) -> Vec<Primitive>;
}

impl Render for Mesh {
    fn render(&self, camera: &Camera, frame: &FrameContext) -> Vec<Primitive> {
        let triangles = pipeline::render_triangles(self.triangles(), camera, frame);
        if triangles.is_empty() {
            Vec::new()
        } else {
            vec![Primitive::Triangles(triangles)]
        }
    }
}

#[derive(Debug, Clone)]
pub enum Shape {
    Cube(Cube),
    Mesh(Mesh),
    Axes(AxesIndicator),
    Composite(CompositeObject),
}

impl Render for Shape {
    fn render(&self, camera: &Camera, frame: &FrameContext) -> Vec<Primitive> {
        match self {
            Shape::Cube(cube) => cube.render(camera, frame),
            Shape::Mesh(mesh) => mesh.render(camera, frame),
            Shape::Axes(axes) => axes.render(camera, frame),
            Shape::Composite(object) => object.render(camera, frame),
        }
    }
}

/// A shape plus its active flag. Inactive drawables render nothing.
#[derive(Debug, Clone)]
pub struct Drawable {
    active: bool,
    shape: Shape,
}

impl Drawable {
    pub fn new(shape: Shape) -> Self {
        Self { active: true, shape }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn draw(&self, camera: &Camera, frame: &FrameContext) -> Vec<Primitive> {
        if !self.active {
            return Vec::new();
        }
        self.shape.render(camera, frame)
    }
}

impl From<Shape> for Drawable {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

impl From<Cube> for Drawable {
    fn from(cube: Cube) -> Self {
        Self::new(Shape::Cube(cube))
    }
}

impl From<Mesh> for Drawable {
    fn from(mesh: Mesh) -> Self {
        Self::new(Shape::Mesh(mesh))
    }
}

impl From<AxesIndicator> for Drawable {
    fn from(axes: AxesIndicator) -> Self {
        Self::new(Shape::Axes(axes))
    }
}

impl From<CompositeObject> for Drawable {
    fn from(object: CompositeObject) -> Self {
        Self::new(Shape::Composite(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::geometry::Vec3;
    use crate::primitive::Color;

    fn frame() -> FrameContext {
        FrameContext::new(640, 480, &RenderConfig::default())
    }

    #[test]
    fn test_inactive_renders_nothing() {
        let cube = Cube::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Color::WHITE);
        let mut drawable = Drawable::from(cube);
        assert!(!drawable.draw(&Camera::default(), &frame()).is_empty());

        assert!(!drawable.toggle());
        assert!(drawable.draw(&Camera::default(), &frame()).is_empty());

        drawable.activate();
        assert!(drawable.is_active());
        drawable.deactivate();
        assert!(!drawable.is_active());
    }

    #[test]
    fn test_empty_mesh_renders_nothing() {
        let drawable = Drawable::from(Mesh::new());
        assert!(drawable.draw(&Camera::default(), &frame()).is_empty());
    }

    #[test]
    fn test_mesh_emits_triangles() {
        let mut mesh = Mesh::cube(1.0);
        mesh.translate(Vec3::new(0.0, 0.0, 4.0));
        let out = Drawable::from(mesh).draw(&Camera::default(), &frame());

        assert_eq!(out.len(), 1);
        assert!(matches!(&out[0], Primitive::Triangles(t) if t.len() == 2));
    }
}
