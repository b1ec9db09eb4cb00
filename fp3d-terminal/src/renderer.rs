/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use fp3d_core::{Color, LineSegment, Point2, RenderBackend, ScreenTriangle};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Terminal cells are about twice as tall as they are wide. The pipeline
/// sees square logical pixels; each cell covers this many logical rows.
pub const CELL_ASPECT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub character: char,
    pub color: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        character: ' ',
        color: Color::BLACK,
    };
}

/// Character-cell backend. Primitives are painted in submission order with
/// no depth test, so later primitives overwrite earlier ones.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::BLANK; width * height];
    }

    /// Size in logical pixels, as handed to the projection stage.
    pub fn logical_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32 * CELL_ASPECT)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Plot at a logical pixel position; off-screen points are dropped.
    fn plot(&mut self, x: f32, y: f32, character: char, color: Color) {
        let cx = x.floor();
        let cy = (y / CELL_ASPECT as f32).floor();
        if cx < 0.0 || cy < 0.0 || cx >= self.width as f32 || cy >= self.height as f32 {
            return;
        }
        self.cells[cy as usize * self.width + cx as usize] = Cell { character, color };
    }

    fn rasterize_line(&mut self, segment: &LineSegment, color: Color) {
        let delta = segment.end - segment.start;
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            return;
        }

        let character = line_char(delta);
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let p = segment.start + delta * (i as f32 / steps as f32);
            self.plot(p.x, p.y, character, color);
        }
    }

    fn rasterize_triangle(&mut self, triangle: &ScreenTriangle) {
        let [v0, v1, v2] = triangle.vertices;

        // Bounding box in cells
        let min_x = v0.x.min(v1.x).min(v2.x).floor() as i32;
        let max_x = v0.x.max(v1.x).max(v2.x).ceil() as i32;
        let min_y = (v0.y.min(v1.y).min(v2.y) / CELL_ASPECT as f32).floor() as i32;
        let max_y = (v0.y.max(v1.y).max(v2.y) / CELL_ASPECT as f32).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at the cell centre in logical pixels
                let px = x as f32 + 0.5;
                let py = (y as f32 + 0.5) * CELL_ASPECT as f32;

                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, Point2::new(px, py)) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        let color = blend(triangle.colors, [w0, w1, w2]);
                        let character = ramp_char(color.luminance());
                        self.cells[y as usize * self.width + x as usize] =
                            Cell { character, color };
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                let Color { r, g, b, .. } = cell.color;
                writer.queue(SetForegroundColor(style::Color::Rgb { r, g, b }))?;
                writer.queue(Print(cell.character))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl RenderBackend for AsciiRenderer {
    fn draw_lines(&mut self, segments: &[LineSegment], color: Color) {
        for segment in segments {
            self.rasterize_line(segment, color);
        }
    }

    fn draw_triangles(&mut self, triangles: &[ScreenTriangle]) {
        for triangle in triangles {
            self.rasterize_triangle(triangle);
        }
    }
}

fn ramp_char(luminance: u8) -> char {
    let index = luminance as usize * (LUMINOSITY_RAMP.len() - 1) / 255;
    LUMINOSITY_RAMP[index]
}

/// Pick a stroke character for a line direction (y grows downward).
fn line_char(delta: Point2) -> char {
    let (ax, ay) = (delta.x.abs(), delta.y.abs() / CELL_ASPECT as f32);
    if ay < ax * 0.5 {
        '-'
    } else if ax < ay * 0.5 {
        '|'
    } else if (delta.x > 0.0) == (delta.y > 0.0) {
        '\\'
    } else {
        '/'
    }
}

fn blend(colors: [Color; 3], weights: [f32; 3]) -> Color {
    let channel = |f: fn(&Color) -> u8| {
        let v: f32 = colors
            .iter()
            .zip(weights)
            .map(|(c, w)| f(c) as f32 * w)
            .sum();
        v.round().clamp(0.0, 255.0) as u8
    };
    Color::rgba(
        channel(|c| c.r),
        channel(|c| c.g),
        channel(|c| c.b),
        channel(|c| c.a),
    )
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(v0: Point2, v1: Point2, v2: Point2, p: Point2) -> Option<(f32, f32, f32)> {
    let denom = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.y - v2.y) * (p.x - v2.x) + (v2.x - v1.x) * (p.y - v2.y)) / denom;
    let w1 = ((v2.y - v0.y) * (p.x - v2.x) + (v0.x - v2.x) * (p.y - v2.y)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_size_doubles_rows() {
        let renderer = AsciiRenderer::new(80, 24);
        assert_eq!(renderer.logical_size(), (80, 48));
    }

    #[test]
    fn test_horizontal_line() {
        let mut renderer = AsciiRenderer::new(10, 5);
        renderer.draw_lines(
            &[LineSegment::new(Point2::new(1.0, 4.0), Point2::new(8.0, 4.0))],
            Color::RED,
        );

        for x in 1..=8 {
            assert_eq!(renderer.cell(x, 2), Some(Cell { character: '-', color: Color::RED }));
        }
        assert_eq!(renderer.cell(0, 2).map(|c| c.character), Some(' '));
    }

    #[test]
    fn test_line_outside_screen_is_dropped() {
        let mut renderer = AsciiRenderer::new(10, 5);
        renderer.draw_lines(
            &[LineSegment::new(Point2::new(-1000.0, -50.0), Point2::new(1010.0, -50.0))],
            Color::WHITE,
        );
        assert!(renderer.cells.iter().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn test_later_triangle_paints_over() {
        let mut renderer = AsciiRenderer::new(10, 5);
        let big = [Point2::new(0.0, 0.0), Point2::new(20.0, 0.0), Point2::new(0.0, 20.0)];
        renderer.draw_triangles(&[
            ScreenTriangle::flat(big, Color::rgba(40, 40, 40, 255)),
            ScreenTriangle::flat(big, Color::WHITE),
        ]);

        assert_eq!(renderer.cell(1, 1).map(|c| c.character), Some('@'));
        assert_eq!(renderer.cell(1, 1).map(|c| c.color), Some(Color::WHITE));
    }

    #[test]
    fn test_winding_does_not_matter_for_fill() {
        let mut renderer = AsciiRenderer::new(10, 5);
        let tri = [Point2::new(0.0, 0.0), Point2::new(0.0, 10.0), Point2::new(10.0, 0.0)];
        renderer.draw_triangles(&[ScreenTriangle::flat(tri, Color::WHITE)]);
        assert_eq!(renderer.cell(1, 1).map(|c| c.character), Some('@'));
    }

    #[test]
    fn test_ramp_ends() {
        assert_eq!(ramp_char(0), ' ');
        assert_eq!(ramp_char(255), '@');
    }

    #[test]
    fn test_draw_writes_every_cell() {
        let renderer = AsciiRenderer::new(3, 2);
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches(' ').count(), 6);
    }
}
