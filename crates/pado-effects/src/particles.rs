//! Drifting particle field with link lines.

use pado_core::{ParticleConfig, PulseConfig, Viewport};
use ratatui::style::Color;

use crate::color::parse_hex_or;

/// Extra virtual pixels a particle may travel past an edge before wrapping.
const WRAP_MARGIN: f64 = 2.0;

/// Phase advance per frame for a pulse with `anim_speed` 1.0.
const PULSE_STEP: f64 = 0.05;

/// A single drifting particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    vx: f64,
    vy: f64,
    opacity_phase: f64,
    size_phase: f64,
}

impl Particle {
    /// Current opacity under the given pulse configuration.
    pub fn opacity(&self, pulse: &PulseConfig) -> f64 {
        pulse_value(pulse, self.opacity_phase)
    }

    /// Current radius in virtual pixels under the given pulse configuration.
    pub fn radius(&self, pulse: &PulseConfig) -> f64 {
        pulse_value(pulse, self.size_phase)
    }
}

/// A link line between two particles within linking distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// Fades linearly from the configured opacity to zero at the distance limit.
    pub opacity: f64,
}

/// The particle simulation engine.
///
/// Spawned once with an immutable configuration; the only external inputs
/// after construction are frame steps and resizes.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn the field at hash-mixed pseudo-random positions.
    ///
    /// A zero-area viewport spawns zero particles rather than failing; the
    /// effect degrades to an empty surface.
    pub fn new(config: ParticleConfig, viewport: Viewport, seed: u64) -> Self {
        let palette: Vec<Color> = config
            .colors
            .iter()
            .map(|c| parse_hex_or(c, Color::White))
            .collect();
        let count = effective_count(&config, &viewport);
        let particles = (0..count)
            .map(|i| spawn(i as u64, seed, &config, &viewport, &palette))
            .collect();
        Self {
            config,
            viewport,
            particles,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one frame: drift every particle and wrap the ones that left
    /// the surface back in from the opposite edge.
    pub fn step(&mut self) {
        let w = self.viewport.width;
        let h = self.viewport.height;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x > w + WRAP_MARGIN {
                p.x = -WRAP_MARGIN;
            } else if p.x < -WRAP_MARGIN {
                p.x = w + WRAP_MARGIN;
            }
            if p.y > h + WRAP_MARGIN {
                p.y = -WRAP_MARGIN;
            } else if p.y < -WRAP_MARGIN {
                p.y = h + WRAP_MARGIN;
            }
            if self.config.opacity.animate {
                p.opacity_phase += self.config.opacity.anim_speed * PULSE_STEP;
            }
            if self.config.size.animate {
                p.size_phase += self.config.size.anim_speed * PULSE_STEP;
            }
        }
    }

    /// Every pair of particles closer than the configured link distance.
    pub fn links(&self) -> Vec<Link> {
        let link = &self.config.line_linked;
        if !link.enable {
            return Vec::new();
        }
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < link.distance {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity: link.opacity * (1.0 - dist / link.distance),
                    });
                }
            }
        }
        links
    }

    /// React to a surface resize: keep the existing particles, clamped into
    /// the new bounds. No respawn.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, viewport.width);
            p.y = p.y.clamp(0.0, viewport.height);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Particle count after density scaling: the base count describes
/// `value_area` thousands of px², and the actual count scales with the
/// surface area.
fn effective_count(config: &ParticleConfig, viewport: &Viewport) -> usize {
    let base = config.number.value as f64;
    let density = &config.number.density;
    let count = if density.enable {
        (viewport.area() / 1000.0) * base / density.value_area
    } else {
        base
    };
    count.round().max(0.0) as usize
}

/// Deterministic pseudo-random unit value, in the prime-mix style used for
/// column staggering elsewhere in this workspace.
fn unit(mixed: u64, salt: u64) -> f64 {
    (mixed.wrapping_mul(salt) % 10_000) as f64 / 10_000.0
}

fn spawn(
    index: u64,
    seed: u64,
    config: &ParticleConfig,
    viewport: &Viewport,
    palette: &[Color],
) -> Particle {
    use std::f64::consts::TAU;

    // Mix particle index with the time-based seed for better randomness.
    let mixed = index.wrapping_mul(31).wrapping_add(seed);
    let (bx, by) = config.movement.direction.base_vector();
    let pace = 0.5 + unit(mixed, 41) * 0.5;
    let jitter_x = (unit(mixed, 29) - 0.5) * 0.5;
    let jitter_y = (unit(mixed, 37) - 0.5) * 0.5;
    let color = if palette.is_empty() {
        Color::White
    } else {
        palette[(mixed.wrapping_mul(13) % palette.len() as u64) as usize]
    };
    Particle {
        x: unit(mixed, 17) * viewport.width,
        y: unit(mixed, 23) * viewport.height,
        color,
        vx: (bx * pace + jitter_x) * config.movement.speed,
        vy: (by * pace + jitter_y) * config.movement.speed,
        opacity_phase: unit(mixed, 43) * TAU,
        size_phase: unit(mixed, 47) * TAU,
    }
}

/// Evaluate a pulse at the given phase: oscillates between `min` and
/// `value` when animated, otherwise holds `value`.
fn pulse_value(pulse: &PulseConfig, phase: f64) -> f64 {
    if pulse.animate {
        let t = (phase.sin() + 1.0) / 2.0;
        pulse.min + (pulse.value - pulse.min) * t
    } else {
        pulse.value
    }
}
