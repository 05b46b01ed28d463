//! TOML scene descriptions.

use anyhow::{Context, Result};
use raymarch_engine::{Camera, Circle, RenderSettings};
use raymarch_math::Point2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Camera placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: [f64; 2],
    pub look_at: [f64; 2],
}

/// A circular obstacle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleConfig {
    pub center: [f64; 2],
    pub radius: f64,
}

/// Everything needed to render one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    pub camera: CameraConfig,
    #[serde(default)]
    pub circles: Vec<CircleConfig>,
    #[serde(default)]
    pub render: RenderSettings,
}

impl Default for SceneConfig {
    /// The built-in demo scene.
    fn default() -> Self {
        let circles = [
            ([50.0, 50.0], 10.0),
            ([155.0, 255.0], 20.0),
            ([45.0, 45.0], 15.0),
            ([30.0, 80.0], 5.0),
            ([450.0, 140.0], 50.0),
        ]
        .into_iter()
        .map(|(center, radius)| CircleConfig { center, radius })
        .collect();

        Self {
            width: 640,
            height: 480,
            camera: CameraConfig {
                position: [1.0, 1.0],
                look_at: [50.0, 50.0],
            },
            circles,
            render: RenderSettings::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a scene description from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse scene description")
    }

    /// Load a scene description from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Build the camera described by this config.
    pub fn camera(&self) -> Result<Camera> {
        let [px, py] = self.camera.position;
        let [lx, ly] = self.camera.look_at;
        Ok(Camera::new(Point2::new(px, py), Point2::new(lx, ly))?)
    }

    /// Build the obstacles, in file order.
    pub fn circles(&self) -> Result<Vec<Circle>> {
        self.circles
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Circle::new(Point2::new(c.center[0], c.center[1]), c.radius)
                    .with_context(|| format!("Invalid circle #{i}"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene() {
        let text = r#"
            width = 32
            height = 16

            [camera]
            position = [0.0, 0.0]
            look_at = [9.0, 9.0]

            [[circles]]
            center = [5.0, 5.0]
            radius = 1.0

            [render]
            ray_count = 50
            parallel = true
        "#;
        let config = SceneConfig::from_toml_str(text).unwrap();
        assert_eq!((config.width, config.height), (32, 16));
        assert_eq!(config.circles().unwrap().len(), 1);
        assert_eq!(config.render.ray_count, 50);
        assert_eq!(config.render.march_steps, 640);
        assert!(config.render.parallel);
    }

    #[test]
    fn test_render_section_optional() {
        let text = r#"
            width = 8
            height = 8
            camera = { position = [1.0, 1.0], look_at = [2.0, 2.0] }
        "#;
        let config = SceneConfig::from_toml_str(text).unwrap();
        assert!(config.circles.is_empty());
        assert_eq!(config.render, RenderSettings::default());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let mut config = SceneConfig::default();
        config.circles[1].radius = -2.0;
        let err = config.circles().unwrap_err();
        assert!(format!("{err:#}").contains("#1"));
    }

    #[test]
    fn test_default_is_demo_scene() {
        let config = SceneConfig::default();
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.circles.len(), 5);
        assert!(config.camera().is_ok());
    }
}
