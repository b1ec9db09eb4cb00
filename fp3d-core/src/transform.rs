/// Rotations and the world-to-camera transform
use crate::geometry::Vec3;

/// Principal axis for a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotate about the horizontal (x) axis.
pub fn rotate_x(angle: f32, p: Vec3) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotate about the vertical (y) axis.
pub fn rotate_y(angle: f32, p: Vec3) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Rotate about the depth (z) axis.
pub fn rotate_z(angle: f32, p: Vec3) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

pub fn rotate(axis: Axis, angle: f32, p: Vec3) -> Vec3 {
    match axis {
        Axis::X => rotate_x(angle, p),
        Axis::Y => rotate_y(angle, p),
        Axis::Z => rotate_z(angle, p),
    }
}

/// Rotate `point` about an axis passing through `origin`.
pub fn rotate_around_point(axis: Axis, angle: f32, point: Vec3, origin: Vec3) -> Vec3 {
    rotate(axis, angle, point - origin) + origin
}

/// Express a world-space point relative to a camera at `position`.
///
/// Yaw is undone before pitch. Swapping the two introduces roll.
pub fn world_to_camera(point: Vec3, position: Vec3, yaw: f32, pitch: f32) -> Vec3 {
    rotate_x(pitch, rotate_y(-yaw, point - position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < EPS
    }

    fn sample_points() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.25, 7.0),
            Vec3::new(10.0, -10.0, -0.5),
        ]
    }

    #[test]
    fn test_rotation_round_trip() {
        for p in sample_points() {
            for theta in [0.0, 0.3, -1.2, PI, 5.0] {
                assert!(approx_eq(rotate_y(-theta, rotate_y(theta, p)), p));
                assert!(approx_eq(rotate_x(-theta, rotate_x(theta, p)), p));
                assert!(approx_eq(rotate_z(-theta, rotate_z(theta, p)), p));
            }
        }
    }

    #[test]
    fn test_pivot_does_not_move() {
        let origin = Vec3::new(3.0, -1.0, 8.0);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for theta in [0.0, 0.7, PI, -2.4] {
                assert!(approx_eq(rotate_around_point(axis, theta, origin, origin), origin));
            }
        }
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        // +z swings onto +x
        let p = rotate_y(FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0));
        assert!(approx_eq(p, Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let p = rotate_x(FRAC_PI_2, Vec3::new(0.0, 1.0, 0.0));
        assert!(approx_eq(p, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rotate_around_point_orbits() {
        let origin = Vec3::new(1.0, 0.0, 1.0);
        let p = rotate_around_point(Axis::Y, PI, Vec3::new(2.0, 5.0, 1.0), origin);
        assert!(approx_eq(p, Vec3::new(0.0, 5.0, 1.0)));
    }

    #[test]
    fn test_world_to_camera_translation_only() {
        let cam = Vec3::new(1.0, 2.0, 3.0);
        let p = world_to_camera(Vec3::new(1.0, 2.0, 10.0), cam, 0.0, 0.0);
        assert!(approx_eq(p, Vec3::new(0.0, 0.0, 7.0)));
    }

    #[test]
    fn test_yaw_before_pitch() {
        let point = Vec3::new(1.0, 1.0, 1.0);
        let (yaw, pitch) = (0.9, 0.4);

        let expected = rotate_x(pitch, rotate_y(-yaw, point));
        let swapped = rotate_y(-yaw, rotate_x(pitch, point));

        let actual = world_to_camera(point, Vec3::zeros(), yaw, pitch);
        assert!(approx_eq(actual, expected));
        assert!(!approx_eq(actual, swapped));
    }
}
