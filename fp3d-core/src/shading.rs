/// Flat single-light shading
use crate::geometry::Vec3;
use crate::primitive::Color;

/// A directional light fixed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    direction: Vec3,
}

impl Light {
    /// `direction` is normalized here; a zero vector yields a light that
    /// shades everything black.
    pub fn new(direction: Vec3) -> Self {
        Self {
            direction: direction.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros),
        }
    }

    /// Diffuse intensity in `0..=255` for a face normal. No ambient term.
    pub fn intensity(&self, normal: Vec3) -> u8 {
        let lambert = -self.direction.dot(&normal);
        if !lambert.is_finite() {
            return 0;
        }
        (lambert.clamp(0.0, 1.0) * 255.0) as u8
    }

    /// Grey level for a face, fully opaque.
    pub fn shade(&self, normal: Vec3) -> Color {
        let i = self.intensity(normal);
        Color::rgba(i, i, i, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_light_is_white() {
        let light = Light::new(Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, 1.0)), 255);
        assert_eq!(light.shade(Vec3::new(0.0, 0.0, 1.0)), Color::rgba(255, 255, 255, 255));
    }

    #[test]
    fn test_facing_away_is_black() {
        let light = Light::new(Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 0);
        assert_eq!(light.intensity(Vec3::new(1.0, 0.0, 0.0)), 0);
    }

    #[test]
    fn test_oblique_is_cosine() {
        let light = Light::new(Vec3::new(0.0, 0.0, -1.0));
        let normal = Vec3::new(0.0, 1.0, 1.0).normalize();
        let expected = (std::f32::consts::FRAC_1_SQRT_2 * 255.0) as u8;
        assert_eq!(light.intensity(normal), expected);
    }

    #[test]
    fn test_non_finite_normal_is_black() {
        let light = Light::new(Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(light.intensity(Vec3::new(f32::NAN, 0.0, 0.0)), 0);
    }
}
