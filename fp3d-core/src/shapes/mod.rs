// Meshes render through the pipeline directly; these are the wireframe and
// overlay shapes plus the movable mesh wrapper.
mod axes;
mod composite;
mod cube;

pub use axes::{ArrowHead, AxesIndicator};
pub use composite::CompositeObject;
pub use cube::Cube;
