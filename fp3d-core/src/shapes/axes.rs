use crate::camera::Camera;
use crate::drawable::Render;
use crate::geometry::{Point2, Vec3};
use crate::pipeline::FrameContext;
use crate::primitive::{Color, LineSegment, Primitive};

/// End-of-axis marker, one per axis so they can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHead {
    /// Two open barbs
    Barbs,
    /// Barbs joined by a base line
    Closed,
    /// Diamond centred on the tip
    Diamond,
}

impl ArrowHead {
    /// Glyph segments for an arrow ending at `tip` travelling along `direction`.
    pub fn segments(self, tip: Point2, direction: Point2, size: f32) -> Vec<LineSegment> {
        let d = direction
            .try_normalize(1e-6)
            .unwrap_or_else(|| Point2::new(0.0, -1.0));
        let n = Point2::new(-d.y, d.x);

        match self {
            ArrowHead::Barbs | ArrowHead::Closed => {
                let left = tip - d * size + n * (size * 0.5);
                let right = tip - d * size - n * (size * 0.5);
                let mut segments = vec![LineSegment::new(tip, left), LineSegment::new(tip, right)];
                if self == ArrowHead::Closed {
                    segments.push(LineSegment::new(left, right));
                }
                segments
            }
            ArrowHead::Diamond => {
                let half = size * 0.5;
                let corners = [tip + d * half, tip + n * half, tip - d * half, tip - n * half];
                (0..4)
                    .map(|i| LineSegment::new(corners[i], corners[(i + 1) % 4]))
                    .collect()
            }
        }
    }
}

/// Orientation gizmo: the world axes as seen from the current view, drawn in
/// a fixed panel near the bottom-right corner of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesIndicator {
    /// How far ahead of the camera the axes are anchored, in world units.
    pub distance: f32,
    /// Axis length in world units.
    pub length: f32,
    /// Panel centre offset from the right and bottom edges, in pixels.
    pub margin: f32,
    /// Arrow head size in pixels.
    pub head_size: f32,
}

impl Default for AxesIndicator {
    fn default() -> Self {
        Self {
            distance: 3.0,
            length: 0.75,
            margin: 60.0,
            head_size: 6.0,
        }
    }
}

impl AxesIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel_center(&self, frame: &FrameContext) -> Point2 {
        Point2::new(
            frame.screen.width - self.margin,
            frame.screen.height - self.margin,
        )
    }

    /// The three axes with their colors and glyphs.
    pub fn axes() -> [(Vec3, Color, ArrowHead); 3] {
        [
            (Vec3::x(), Color::RED, ArrowHead::Barbs),
            (Vec3::y(), Color::GREEN, ArrowHead::Closed),
            (Vec3::z(), Color::BLUE, ArrowHead::Diamond),
        ]
    }
}

impl Render for AxesIndicator {
    fn render(&self, camera: &Camera, frame: &FrameContext) -> Vec<Primitive> {
        let anchor = camera.point_in_front(self.distance);
        let panel = self.panel_center(frame);
        let scale = frame.gizmo_scale * frame.screen.width;

        let place = |p: Vec3| panel + frame.screen.project(camera.to_camera_space(p)) * scale;
        let base = place(anchor);

        Self::axes()
            .into_iter()
            .map(|(axis, color, head)| {
                let tip = place(anchor + axis * self.length);
                let mut segments = vec![LineSegment::new(base, tip)];
                segments.extend(head.segments(tip, tip - base, self.head_size));
                Primitive::Lines { segments, color }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;

    fn frame() -> FrameContext {
        FrameContext::new(800, 600, &RenderConfig::default())
    }

    fn lines(p: &Primitive) -> (&Vec<LineSegment>, Color) {
        match p {
            Primitive::Lines { segments, color } => (segments, *color),
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_three_distinct_axes() {
        let gizmo = AxesIndicator::new();
        let out = gizmo.render(&Camera::new(Vec3::zeros(), 0.4, 0.2), &frame());
        assert_eq!(out.len(), 3);

        let counts: Vec<usize> = out.iter().map(|p| lines(p).0.len()).collect();
        // shaft + barbs, shaft + closed head, shaft + diamond
        assert_eq!(counts, vec![3, 4, 5]);

        let colors: Vec<Color> = out.iter().map(|p| lines(p).1).collect();
        assert_eq!(colors, vec![Color::RED, Color::GREEN, Color::BLUE]);
    }

    #[test]
    fn test_anchored_in_panel_regardless_of_position() {
        let gizmo = AxesIndicator::new();
        let frame = frame();
        let panel = gizmo.panel_center(&frame);

        for camera in [
            Camera::default(),
            Camera::new(Vec3::new(100.0, -40.0, 7.0), 2.0, -0.7),
        ] {
            for p in gizmo.render(&camera, &frame) {
                let start = lines(&p).0[0].start;
                assert!((start - panel).norm() < 1e-3);
            }
        }
    }

    #[test]
    fn test_x_axis_points_right_when_facing_forward() {
        let gizmo = AxesIndicator::new();
        let out = gizmo.render(&Camera::default(), &frame());
        let shaft = lines(&out[0]).0[0];
        assert!(shaft.end.x > shaft.start.x);
        assert!((shaft.end.y - shaft.start.y).abs() < 1e-3);
    }

    #[test]
    fn test_head_for_degenerate_direction() {
        let segments = ArrowHead::Diamond.segments(Point2::new(5.0, 5.0), Point2::zeros(), 4.0);
        assert_eq!(segments.len(), 4);
        assert!(segments
            .iter()
            .all(|s| s.start.x.is_finite() && s.end.y.is_finite()));
    }
}
