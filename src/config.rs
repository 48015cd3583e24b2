use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::CatchSettings;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub distance_step: f32,
    /// Radians per key press
    pub angle_step: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            distance_step: 0.1,
            angle_step: 5f32.to_radians(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeFlyConfig {
    pub movement_speed: f32,
    /// Degrees per key press
    pub rotation_speed: f32,
}

impl Default for FreeFlyConfig {
    fn default() -> Self {
        Self {
            movement_speed: 0.1,
            rotation_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceTurnConfig {
    /// Radians per second
    pub angular_speed: f32,
}

impl Default for FaceTurnConfig {
    fn default() -> Self {
        Self {
            angular_speed: std::f32::consts::FRAC_PI_2,
        }
    }
}

/// Tunables read from an optional JSON file. Every field has a default,
/// so `{}` is a valid file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub orbit: OrbitConfig,
    pub free_fly: FreeFlyConfig,
    pub face_turn: FaceTurnConfig,
    pub catch: CatchSettings,
}

impl DemoConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Invalid demo configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the catch game cannot run with
    pub fn validate(&self) -> Result<()> {
        let catch = &self.catch;
        ensure!(
            catch.spawn_range > 0.0,
            "catch.spawn_range must be positive, got {}",
            catch.spawn_range
        );
        ensure!(
            catch.spawn_interval > 0.0,
            "catch.spawn_interval must be positive, got {}",
            catch.spawn_interval
        );
        ensure!(
            catch.catch_half_width > 0.0,
            "catch.catch_half_width must be positive, got {}",
            catch.catch_half_width
        );
        ensure!(catch.max_misses > 0, "catch.max_misses must be at least 1");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn nested_fields_merge_with_defaults() {
        let config = DemoConfig::from_json(
            r#"{ "catch": { "max_misses": 3 }, "window": { "width": 640 } }"#,
        )
        .unwrap();
        assert_eq!(config.catch.max_misses, 3);
        assert_eq!(config.catch.spawn_interval, 4.0);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 768);
    }

    #[test]
    fn non_positive_catch_values_are_rejected() {
        for field in ["spawn_range", "spawn_interval", "catch_half_width", "max_misses"] {
            let text = format!(r#"{{ "catch": {{ "{field}": 0 }} }}"#);
            let err = DemoConfig::from_json(&text).unwrap_err();
            assert!(format!("{err:#}").contains(field), "{field}: {err:#}");
        }
        assert!(DemoConfig::from_json(r#"{ "catch": { "spawn_range": -2.0 } }"#).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DemoConfig::from_json("{ window: ").is_err());
    }
}
