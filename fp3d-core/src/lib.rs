//! FP3D Core Library - Software 3D-to-2D rendering pipeline
//!
//! Takes world-space geometry and a first-person camera and produces ordered
//! screen-space lines and flat-shaded triangles for an external rasterizer:
//! camera transform, perspective projection, back-face culling, painter's
//! ordering and flat shading.

pub mod camera;
pub mod config;
pub mod depth;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod input;
pub mod obj;
pub mod pipeline;
pub mod primitive;
pub mod projection;
pub mod scene;
pub mod shading;
pub mod shapes;
pub mod transform;
pub mod visibility;

// Re-export commonly used types
pub use camera::Camera;
pub use config::RenderConfig;
pub use drawable::{Drawable, Render, Shape};
pub use error::{ConfigError, GeometryError};
pub use geometry::{Mesh, Point2, Triangle, Vec3};
pub use input::{Action, FrameInput};
pub use pipeline::FrameContext;
pub use primitive::{Color, LineSegment, Primitive, RenderBackend, ScreenTriangle};
pub use projection::ScreenContext;
pub use scene::{DrawableId, Scene};
pub use shading::Light;
pub use shapes::{AxesIndicator, CompositeObject, Cube};
pub use transform::Axis;
