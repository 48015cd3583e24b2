use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Phong light and material parameters, edited live from the UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightParams {
    pub color: Vec3,
    pub position: Vec3,
    pub shininess: f32,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

pub const SHININESS_RANGE: std::ops::RangeInclusive<f32> = 5.0..=100.0;

impl LightParams {
    /// Lit cube: light just above the centre cube
    pub fn lit_cube() -> Self {
        Self {
            position: Vec3::new(0.0, 1.2, 0.0),
            shininess: 50.0,
            ..Self::default()
        }
    }

    pub fn rubik() -> Self {
        Self {
            position: Vec3::new(2.0, 2.0, 2.0),
            shininess: 32.0,
            ..Self::default()
        }
    }

    pub fn catch() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 0.0),
            shininess: 50.0,
            ..Self::default()
        }
    }
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            position: Vec3::new(0.0, 5.0, 0.0),
            shininess: 32.0,
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.3),
            specular: Vec3::splat(0.6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_keep_strengths_in_unit_range() {
        for light in [LightParams::lit_cube(), LightParams::rubik(), LightParams::catch()] {
            for strength in [light.ambient, light.diffuse, light.specular] {
                assert!(strength.cmpge(Vec3::ZERO).all() && strength.cmple(Vec3::ONE).all());
            }
            assert!(SHININESS_RANGE.contains(&light.shininess));
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let light: LightParams = serde_json::from_str(r#"{ "shininess": 80.0 }"#).unwrap();
        assert_eq!(light.shininess, 80.0);
        assert_eq!(light.color, Vec3::ONE);
    }
}
