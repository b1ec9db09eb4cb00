/// Perspective projection and screen placement
use crate::config::RenderConfig;
use crate::geometry::{Point2, Vec3};

/// Screen state for one frame.
///
/// Width and height follow the display surface; the field-of-view constant
/// is fixed at startup. Rebuilt once per frame and passed by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenContext {
    pub width: f32,
    pub height: f32,
    /// `tan(fov / 2)`
    pub tan_half_fov: f32,
    pub near_clamp: f32,
    pub slack: f32,
}

impl ScreenContext {
    pub fn new(width: u32, height: u32, config: &RenderConfig) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            tan_half_fov: (config.fov_radians() * 0.5).tan(),
            near_clamp: config.near_clamp,
            slack: config.screen_slack,
        }
    }

    /// Same projection constants with a new surface size.
    pub fn resized(self, width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            ..self
        }
    }

    /// Perspective divide onto the projection plane.
    ///
    /// Depths below the near clamp (including zero, negative and NaN) are
    /// replaced by the clamp. Points at or behind the camera come out
    /// distorted but finite.
    pub fn project(&self, camera_space: Vec3) -> Point2 {
        let z = camera_space.z.max(self.near_clamp);
        let scale = z * self.tan_half_fov;
        Point2::new(camera_space.x / scale, camera_space.y / scale)
    }

    /// Place a projected point in pixels.
    ///
    /// Both axes scale by the width. Coordinates are clamped to the screen
    /// grown by `slack` on every side rather than clipped, so very long
    /// off-screen lines can come out bent.
    pub fn to_screen(&self, projected: Point2) -> Point2 {
        Point2::new(
            (projected.x * self.width + self.width * 0.5)
                .clamp(-self.slack, self.width + self.slack),
            (projected.y * self.width + self.height * 0.5)
                .clamp(-self.slack, self.height + self.slack),
        )
    }

    pub fn project_to_screen(&self, camera_space: Vec3) -> Point2 {
        self.to_screen(self.project(camera_space))
    }
}
