/// Startup configuration shared by the projection and shading stages
use crate::error::ConfigError;
use crate::geometry::Vec3;

/// Values resolved once at startup and passed into every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Horizontal field of view in degrees.
    pub fov_degrees: f32,
    /// Smallest camera-space depth used by the perspective divide.
    pub near_clamp: f32,
    /// How far past the screen edges projected points may land, in pixels.
    pub screen_slack: f32,
    /// Direction from a lit surface towards the light. Normalized by [`crate::Light::new`].
    pub light_direction: Vec3,
    /// Pointer motion is divided by this to get radians.
    pub pointer_divisor: f32,
    /// World units per unit of movement input.
    pub move_speed: f32,
    /// Size of the axes gizmo as a fraction of the screen width.
    pub gizmo_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 120.0,
            near_clamp: 0.05,
            screen_slack: 1000.0,
            light_direction: Vec3::new(0.3, -0.8, -0.5),
            pointer_divisor: 500.0,
            move_speed: 0.5,
            gizmo_scale: 0.25,
        }
    }
}

impl RenderConfig {
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::InvalidFov(self.fov_degrees));
        }
        if !(self.near_clamp > 0.0 && self.near_clamp.is_finite()) {
            return Err(ConfigError::InvalidNearClamp(self.near_clamp));
        }
        if !(self.pointer_divisor > 0.0 && self.pointer_divisor.is_finite()) {
            return Err(ConfigError::InvalidDivisor(self.pointer_divisor));
        }
        let light_len = self.light_direction.norm();
        if !(light_len > 0.0 && light_len.is_finite()) {
            return Err(ConfigError::InvalidLight);
        }
        Ok(())
    }

    /// Apply `FP3D_*` overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from any key/value source, then validate.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&'static str, &mut f32); 4] = [
            ("FP3D_FOV", &mut self.fov_degrees),
            ("FP3D_NEAR_CLAMP", &mut self.near_clamp),
            ("FP3D_POINTER_DIVISOR", &mut self.pointer_divisor),
            ("FP3D_MOVE_SPEED", &mut self.move_speed),
        ];

        for (key, field) in fields {
            if let Some(value) = lookup(key) {
                *field = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue { key, value: value.clone() })?;
                log::debug!("config override {key}={value}");
            }
        }

        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.fov_radians() - 120f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_overrides_are_applied() {
        let vars: HashMap<&str, &str> = [("FP3D_FOV", "90"), ("FP3D_MOVE_SPEED", " 2.5 ")].into();
        let mut config = RenderConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.fov_degrees, 90.0);
        assert_eq!(config.move_speed, 2.5);
        assert_eq!(config.near_clamp, RenderConfig::default().near_clamp);
    }

    #[test]
    fn test_unparsable_override() {
        let mut config = RenderConfig::default();
        let err = config
            .apply_overrides(|key| (key == "FP3D_NEAR_CLAMP").then(|| "close".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: "FP3D_NEAR_CLAMP", value: "close".to_string() }
        );
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let mut config = RenderConfig::default();
        config.fov_degrees = 180.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidFov(180.0)));

        let mut config = RenderConfig::default();
        config.near_clamp = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidNearClamp(0.0)));

        let mut config = RenderConfig::default();
        config.pointer_divisor = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDivisor(-1.0)));

        let mut config = RenderConfig::default();
        config.light_direction = Vec3::zeros();
        assert_eq!(config.validate(), Err(ConfigError::InvalidLight));
    }
}
