/// Per-frame mesh pipeline: transform, cull, sort, shade, project
use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::depth::{depth_key, sort_back_to_front};
use crate::geometry::{Triangle, Vec3};
use crate::primitive::ScreenTriangle;
use crate::projection::ScreenContext;
use crate::shading::Light;
use crate::visibility::visible_normal;

/// Everything a drawable needs besides the camera, fixed for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub screen: ScreenContext,
    pub light: Light,
    pub gizmo_scale: f32,
}

impl FrameContext {
    pub fn new(width: u32, height: u32, config: &RenderConfig) -> Self {
        Self {
            screen: ScreenContext::new(width, height, config),
            light: Light::new(config.light_direction),
            gizmo_scale: config.gizmo_scale,
        }
    }
}

/// A surviving triangle on its way to the screen.
struct Visible {
    camera_space: [Vec3; 3],
    normal: Vec3,
}

/// Run world-space triangles through the full pipeline.
///
/// Output is in paint order: farther triangles first. Per-frame copies are
/// rebuilt on every call.
pub fn render_triangles(
    triangles: &[Triangle],
    camera: &Camera,
    frame: &FrameContext,
) -> Vec<ScreenTriangle> {
    let mut visible: Vec<Visible> = triangles
        .iter()
        .filter_map(|triangle| {
            let normal = visible_normal(triangle, camera.position)?;
            let [v0, v1, v2] = triangle.vertices;
            Some(Visible {
                camera_space: [
                    camera.to_camera_space(v0),
                    camera.to_camera_space(v1),
                    camera.to_camera_space(v2),
                ],
                normal,
            })
        })
        .collect();

    sort_back_to_front(&mut visible, |v| depth_key(&v.camera_space));

    visible
        .iter()
        .map(|v| {
            let [a, b, c] = v.camera_space;
            ScreenTriangle::flat(
                [
                    frame.screen.project_to_screen(a),
                    frame.screen.project_to_screen(b),
                    frame.screen.project_to_screen(c),
                ],
                frame.light.shade(v.normal),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Mesh;

    fn frame() -> FrameContext {
        FrameContext::new(800, 600, &RenderConfig::default())
    }

    fn facing_triangle(z: f32, x: f32) -> Triangle {
        // Wound so the normal points to +z, away from a camera at the origin.
        Triangle::new(
            Vec3::new(x, 0.0, z),
            Vec3::new(x + 1.0, 0.0, z),
            Vec3::new(x, 1.0, z),
        )
    }

    #[test]
    fn test_far_triangle_painted_first() {
        let near = facing_triangle(2.0, 0.5);
        let far = facing_triangle(10.0, -0.5);
        let camera = Camera::default();

        let out = render_triangles(&[near, far], &camera, &frame());
        assert_eq!(out.len(), 2);

        let screen = frame().screen;
        let far_first = screen.project_to_screen(far.vertices[0]);
        assert!((out[0].vertices[0] - far_first).norm() < 1e-4);
    }

    #[test]
    fn test_back_faces_dropped() {
        let t = facing_triangle(5.0, 0.0);
        let flipped = Triangle::new(t.vertices[0], t.vertices[2], t.vertices[1]);

        let out = render_triangles(&[flipped], &Camera::default(), &frame());
        assert!(out.is_empty());
    }

    #[test]
    fn test_cube_from_outside_shows_one_face() {
        let mut cube = Mesh::cube(2.0);
        cube.translate(Vec3::new(0.0, 0.0, 6.0));

        let out = render_triangles(cube.triangles(), &Camera::default(), &frame());
        assert_eq!(out.len(), 2);
        for tri in &out {
            assert!(tri.vertices.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
            assert_eq!(tri.colors[0], tri.colors[1]);
            assert_eq!(tri.colors[1], tri.colors[2]);
        }
    }

    #[test]
    fn test_shade_comes_from_face_normal() {
        let config = RenderConfig {
            light_direction: Vec3::new(0.0, 0.0, -1.0),
            ..Default::default()
        };
        let frame = FrameContext::new(800, 600, &config);
        let out = render_triangles(&[facing_triangle(4.0, 0.0)], &Camera::default(), &frame);
        assert_eq!(out[0].colors[0].r, 255);
    }

    #[test]
    fn test_triangle_behind_camera_stays_finite() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), 0.0, 0.0);
        let tri = Triangle::new(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 4.0),
            Vec3::new(0.0, 1.0, 4.0),
        );
        for out in render_triangles(&[tri], &camera, &frame()) {
            assert!(out.vertices.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}
