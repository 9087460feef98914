//! Configuration loading for the pado terminal app.
//!
//! Reads an optional `pado.toml` from the platform config directory. The
//! effects are decorative, so configuration problems are never fatal: a
//! missing or unparsable file silently falls back to the defaults.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use pado_core::{AnimationSpeed, MotionPreference, ParticleConfig};

/// Wave effect settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WaveSettings {
    /// Whether the wave effect is enabled at all.
    pub enable: bool,
    /// Optional palette override, one `#rrggbb` string per wave.
    pub colors: Vec<String>,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            enable: true,
            colors: Vec::new(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the environment-detected reduced-motion preference.
    pub reduced_motion: Option<bool>,
    /// Animation cadence.
    pub speed: AnimationSpeed,
    /// Particle field configuration.
    pub particles: ParticleConfig,
    /// Wave effect settings.
    pub waves: WaveSettings,
}

impl Config {
    /// Load the configuration from the platform config directory, falling
    /// back to the defaults when the file is absent or malformed.
    pub fn load() -> Self {
        match config_path() {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(contents) => Self::parse(&contents),
                Err(_) => Self::default(),
            },
            None => Self::default(),
        }
    }

    /// Parse a TOML document, falling back to the defaults on error.
    pub fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_default()
    }

    /// The motion preference after combining the environment with the
    /// configuration override.
    pub fn effective_motion(&self) -> MotionPreference {
        MotionPreference::detect().with_override(self.reduced_motion)
    }
}

/// Path of the configuration file, when a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pado").map(|dirs| dirs.config_dir().join("pado.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::parse("");
        assert_eq!(config.reduced_motion, None);
        assert_eq!(config.speed, AnimationSpeed::Medium);
        assert!(config.particles.enable);
        assert!(config.waves.enable);
        assert_eq!(config.particles.number.value, 50);
    }

    #[test]
    fn test_parse_overrides() {
        let config = Config::parse(
            r##"
reduced_motion = true
speed = "fast"

[particles.number]
value = 80

[particles.line_linked]
distance = 120.0

[waves]
enable = false
colors = ["#ff0000", "#00ff00", "#0000ff"]
"##,
        );
        assert_eq!(config.reduced_motion, Some(true));
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert_eq!(config.particles.number.value, 80);
        assert_eq!(config.particles.line_linked.distance, 120.0);
        assert!(!config.waves.enable);
        assert_eq!(config.waves.colors.len(), 3);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let config = Config::parse("speed = [not toml");
        assert_eq!(config.speed, AnimationSpeed::Medium);
        assert_eq!(config.particles.number.value, 50);
    }

    #[test]
    fn test_move_section_uses_library_name() {
        let config = Config::parse(
            r#"
[particles.move]
speed = 2.5
direction = "none"
"#,
        );
        assert_eq!(config.particles.movement.speed, 2.5);
    }
}
