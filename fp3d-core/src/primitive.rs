/// Screen-space primitives and the backend that draws them
use crate::geometry::Point2;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const RED: Color = Color::rgba(255, 64, 64, 255);
    pub const GREEN: Color = Color::rgba(64, 255, 64, 255);
    pub const BLUE: Color = Color::rgba(64, 128, 255, 255);
    pub const YELLOW: Color = Color::rgba(255, 255, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Average of the color channels, ignoring alpha.
    pub fn luminance(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

/// A filled triangle in pixels with a color per vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub vertices: [Point2; 3],
    pub colors: [Color; 3],
}

impl ScreenTriangle {
    /// All three vertices share one color.
    pub fn flat(vertices: [Point2; 3], color: Color) -> Self {
        Self {
            vertices,
            colors: [color; 3],
        }
    }
}

/// One draw call's worth of output, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Lines {
        segments: Vec<LineSegment>,
        color: Color,
    },
    Triangles(Vec<ScreenTriangle>),
}

/// The external rasterizer.
pub trait RenderBackend {
    fn draw_lines(&mut self, segments: &[LineSegment], color: Color);
    fn draw_triangles(&mut self, triangles: &[ScreenTriangle]);
}

/// Hand primitives to the backend in order.
pub fn submit<B: RenderBackend + ?Sized>(primitives: &[Primitive], backend: &mut B) {
    for primitive in primitives {
        match primitive {
            Primitive::Lines { segments, color } => backend.draw_lines(segments, *color),
            Primitive::Triangles(triangles) => backend.draw_triangles(triangles),
        }
    }
}
