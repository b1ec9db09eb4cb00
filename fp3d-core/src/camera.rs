/// First-person camera state
use std::f32::consts::FRAC_PI_2;

use crate::config::RenderConfig;
use crate::geometry::Vec3;
use crate::input::FrameInput;
use crate::transform;

/// The viewpoint: a position plus yaw and pitch in radians.
///
/// Pitch is kept within `[-π/2, π/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Heading on the horizontal plane, ignoring pitch.
    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.yaw.sin_cos();
        Vec3::new(sin, 0.0, cos)
    }

    pub fn right(&self) -> Vec3 {
        let (sin, cos) = self.yaw.sin_cos();
        Vec3::new(cos, 0.0, -sin)
    }

    /// Unit vector along the view axis in world space.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// World-space point `distance` units straight ahead.
    pub fn point_in_front(&self, distance: f32) -> Vec3 {
        self.position + self.look_direction() * distance
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    pub fn strafe(&mut self, distance: f32) {
        self.position += self.right() * distance;
    }

    /// Positive values move up, which is towards -y.
    pub fn move_vertical(&mut self, distance: f32) {
        self.position.y -= distance;
    }

    /// Turn by the given angles, clamping pitch.
    pub fn look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Apply one frame of movement and pointer input.
    pub fn apply_input(&mut self, input: &FrameInput, config: &RenderConfig) {
        self.move_forward(input.forward * config.move_speed);
        self.strafe(input.strafe * config.move_speed);
        self.move_vertical(input.vertical * config.move_speed);
        self.look(
            input.pointer_dx / config.pointer_divisor,
            input.pointer_dy / config.pointer_divisor,
        );
    }

    pub fn to_camera_space(&self, point: Vec3) -> Vec3 {
        transform::world_to_camera(point, self.position, self.yaw, self.pitch)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::zeros(), 0.0, 0.0)
    }
}
