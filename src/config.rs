//! Settings for drawing reflection lines.
//!
//! Every field has a default, so a configuration file only needs to name
//! what it changes:
//!
//! ```json
//! { "line_width": 3.0, "faces": ["positive-y", "negative-y"] }
//! ```

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::colors::{Color, BLACK};
use crate::cubemap::CubeFace;
use crate::error::{Error, Result};
use crate::render::rasterizer::RasterizerType;

/// Largest accepted `surface_size`. One face at this size is already 1 GiB
/// of `Color`s.
pub const MAX_SURFACE_SIZE: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Edge length of the square surface, in pixels.
    pub surface_size: u32,
    /// Line width in pixels.
    pub line_width: f32,
    /// Degrees the dial moves per rotate step.
    pub rotation_step: f32,
    /// Dial position at startup, in degrees.
    pub initial_angle: f32,
    /// Cube faces the line is drawn on.
    pub faces: Vec<CubeFace>,
    pub rasterizer: RasterizerType,
    /// Color a face is wiped to before each redraw.
    pub background: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            surface_size: 256,
            line_width: 5.0,
            rotation_step: 1.0,
            initial_angle: 0.0,
            faces: vec![CubeFace::PositiveY],
            rasterizer: RasterizerType::default(),
            background: BLACK,
        }
    }
}

impl Config {
    /// Read a JSON configuration file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        debug!("configuration: {config:?}");
        Ok(config)
    }

    /// Reject settings the engine cannot draw with.
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_SURFACE_SIZE).contains(&self.surface_size) {
            return Err(Error::InvalidConfig(format!(
                "surface_size must be between 2 and {MAX_SURFACE_SIZE}, got {}",
                self.surface_size
            )));
        }
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "line_width must be a finite, non-negative number, got {}",
                self.line_width
            )));
        }
        if !self.rotation_step.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "rotation_step must be finite, got {}",
                self.rotation_step
            )));
        }
        if !self.initial_angle.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "initial_angle must be finite, got {}",
                self.initial_angle
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.line_width, 5.0);
        assert_eq!(config.rotation_step, 1.0);
        assert_eq!(config.faces, vec![CubeFace::PositiveY]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            Config::from_json(r#"{ "line_width": 3.0, "faces": ["negative-z", "positive-x"] }"#)
                .unwrap();
        assert_eq!(config.line_width, 3.0);
        assert_eq!(config.faces, vec![CubeFace::NegativeZ, CubeFace::PositiveX]);
        assert_eq!(config.surface_size, 256);
        assert_eq!(config.rasterizer, RasterizerType::ThickAntiAliased);
    }

    #[test]
    fn rasterizer_and_background_parse() {
        let config = Config::from_json(
            r#"{ "rasterizer": "bresenham", "background": { "r": 0.5, "g": 0.5, "b": 0.5, "a": 1.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.rasterizer, RasterizerType::Bresenham);
        assert_eq!(config.background, Color::gray(0.5));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            Config::from_json("{ line_width: }"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = Config {
            line_width: -1.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        config.line_width = 1.0;
        config.surface_size = 1;
        assert!(config.validate().is_err());

        config.surface_size = 16;
        config.rotation_step = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_surfaces_are_rejected() {
        let mut config = Config {
            surface_size: 65_536,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        config.surface_size = MAX_SURFACE_SIZE + 1;
        assert!(config.validate().is_err());

        config.surface_size = MAX_SURFACE_SIZE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reads_files() {
        let path = std::env::temp_dir().join(format!("reflines-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "surface_size": 64 }"#).unwrap();
        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.surface_size, 64);
    }
}
