/// Ordered collection of drawables rendered once per frame
use crate::camera::Camera;
use crate::drawable::{Drawable, Shape};
use crate::pipeline::FrameContext;
use crate::primitive::Primitive;

/// Index of a drawable within its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(usize);

#[derive(Debug, Clone, Default)]
pub struct Scene {
    drawables: Vec<Drawable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, drawable: impl Into<Drawable>) -> DrawableId {
        self.drawables.push(drawable.into());
        DrawableId(self.drawables.len() - 1)
    }

    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(id.0)
    }

    pub fn get_mut(&mut self, id: DrawableId) -> Option<&mut Drawable> {
        self.drawables.get_mut(id.0)
    }

    pub fn shape_mut(&mut self, id: DrawableId) -> Option<&mut Shape> {
        self.get_mut(id).map(Drawable::shape_mut)
    }

    /// Toggle a drawable; returns its new state.
    pub fn toggle(&mut self, id: DrawableId) -> Option<bool> {
        self.get_mut(id).map(Drawable::toggle)
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Primitives of every active drawable, in list order.
    pub fn render(&self, camera: &Camera, frame: &FrameContext) -> Vec<Primitive> {
        self.drawables
            .iter()
            .flat_map(|drawable| drawable.draw(camera, frame))
            .collect()
    }
}
