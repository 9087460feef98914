//! Declarative particle field configuration.
//!
//! Mirrors the nested shape of classic particle-background configuration
//! objects so a TOML file can override individual knobs. The struct is
//! handed to the engine once at initialization and never mutated afterward.

use serde::Deserialize;

/// Full particle field configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Whether the particle effect is enabled at all.
    pub enable: bool,
    /// Particle count and density scaling.
    pub number: NumberConfig,
    /// Palette of particle colors as `#rrggbb` strings.
    pub colors: Vec<String>,
    /// Opacity base value and oscillation.
    pub opacity: PulseConfig,
    /// Size base value (virtual px radius) and oscillation.
    pub size: PulseConfig,
    /// Link lines between nearby particles.
    pub line_linked: LinkConfig,
    /// Drift velocity.
    #[serde(rename = "move")]
    pub movement: MoveConfig,
    /// Draw at sub-cell (braille) resolution when the terminal allows it.
    pub retina_detect: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enable: true,
            number: NumberConfig::default(),
            colors: vec![
                "#ffffff".to_string(),
                "#64ffda".to_string(),
                "#8892b0".to_string(),
            ],
            opacity: PulseConfig {
                value: 0.5,
                animate: true,
                min: 0.1,
                anim_speed: 1.0,
            },
            size: PulseConfig {
                value: 3.0,
                animate: true,
                min: 0.5,
                anim_speed: 2.0,
            },
            line_linked: LinkConfig::default(),
            movement: MoveConfig::default(),
            retina_detect: true,
        }
    }
}

/// Particle count configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NumberConfig {
    /// Base particle count.
    pub value: u32,
    /// Area-based count scaling.
    pub density: DensityConfig,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            value: 50,
            density: DensityConfig::default(),
        }
    }
}

/// Density scaling: the base count is taken to describe a reference area,
/// and the actual count scales with the surface area.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    pub enable: bool,
    /// Reference area (in units of 1000 virtual px²) covered by `value` particles.
    pub value_area: f64,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            enable: true,
            value_area: 800.0,
        }
    }
}

/// A value that optionally oscillates between `min` and `value`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub value: f64,
    pub animate: bool,
    pub min: f64,
    pub anim_speed: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            value: 1.0,
            animate: false,
            min: 0.0,
            anim_speed: 1.0,
        }
    }
}

/// Link lines drawn between particles closer than `distance`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub enable: bool,
    /// Maximum link distance in virtual pixels.
    pub distance: f64,
    /// Link color as a `#rrggbb` string.
    pub color: String,
    /// Opacity of a zero-length link; fades linearly to zero at `distance`.
    pub opacity: f64,
    pub width: f64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            enable: true,
            distance: 200.0,
            color: "#8892b0".to_string(),
            opacity: 0.4,
            width: 1.0,
        }
    }
}

/// Base drift direction for all particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    None,
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// Unit base vector in surface coordinates (y grows upward).
    pub fn base_vector(&self) -> (f64, f64) {
        match self {
            Self::None => (0.0, 0.0),
            Self::Top => (0.0, 1.0),
            Self::Bottom => (0.0, -1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// Drift configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoveConfig {
    /// Speed in virtual px per frame for a full-speed particle.
    pub speed: f64,
    pub direction: Direction,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            direction: Direction::Top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let cfg = ParticleConfig::default();
        assert_eq!(cfg.number.value, 50);
        assert!(cfg.number.density.enable);
        assert_eq!(cfg.colors.len(), 3);
        assert!(cfg.line_linked.enable);
        assert_eq!(cfg.line_linked.distance, 200.0);
        assert_eq!(cfg.movement.direction, Direction::Top);
        assert!(cfg.retina_detect);
    }

    #[test]
    fn test_direction_vectors() {
        assert_eq!(Direction::Top.base_vector(), (0.0, 1.0));
        assert_eq!(Direction::None.base_vector(), (0.0, 0.0));
    }
}
