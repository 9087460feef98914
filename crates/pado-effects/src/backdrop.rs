//! Backdrop controller: motion-aware, deferred effect initialization.
//!
//! Owns the startup gate and both renderers. When the user prefers reduced
//! motion the controller never constructs either effect — no engine, no
//! clock, no per-frame work — and the application degrades to a static
//! screen. The reduced-motion policy is applied uniformly to both effects.

use pado_core::{MotionPreference, ParticleConfig, Viewport};

use crate::particles::ParticleField;
use crate::startup::StartupGate;
use crate::waves::{Trace, WaveRenderer};

/// Controls when (and whether) the background effects come alive.
#[derive(Debug)]
pub struct Backdrop {
    motion: MotionPreference,
    gate: StartupGate,
    particle_config: ParticleConfig,
    waves_enabled: bool,
    seed: u64,
    field: Option<ParticleField>,
    waves: Option<WaveRenderer>,
    initializations: u32,
}

impl Backdrop {
    /// Create a dormant backdrop. Nothing is constructed until the load
    /// signal and the two-frame deferral have both passed.
    pub fn new(particle_config: ParticleConfig, waves_enabled: bool, motion: MotionPreference) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Capture system time as seed for randomness.
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(particle_config, waves_enabled, motion, seed)
    }

    /// Create a dormant backdrop with a fixed seed.
    pub fn with_seed(
        particle_config: ParticleConfig,
        waves_enabled: bool,
        motion: MotionPreference,
        seed: u64,
    ) -> Self {
        Self {
            motion,
            gate: StartupGate::new(),
            particle_config,
            waves_enabled,
            seed,
            field: None,
            waves: None,
            initializations: 0,
        }
    }

    /// True when the motion preference forbids decorative animation.
    /// Pure query, no side effects.
    pub fn should_skip(&self) -> bool {
        self.motion.is_reduced()
    }

    /// Record the load signal (at most once; extra signals are ignored).
    pub fn on_load(&mut self) {
        self.gate.on_load();
    }

    /// Record a frame tick. Initializes the effects on the tick that
    /// releases the gate, sized to the given viewport. Returns `true` on
    /// that tick.
    pub fn on_frame(&mut self, viewport: Viewport) -> bool {
        if self.gate.on_frame() {
            self.initialize(viewport);
            return true;
        }
        false
    }

    /// Construct the effects, honoring the motion preference: a deliberate
    /// no-op when motion is reduced.
    fn initialize(&mut self, viewport: Viewport) {
        if self.should_skip() {
            return;
        }
        self.initializations += 1;
        if self.particle_config.enable {
            self.field = Some(ParticleField::new(
                self.particle_config.clone(),
                viewport,
                self.seed,
            ));
        }
        if self.waves_enabled {
            self.waves = Some(WaveRenderer::new(viewport));
        }
    }

    /// Advance both effects by one frame and collect the wave traces.
    pub fn step(&mut self) -> Vec<Trace> {
        if let Some(field) = &mut self.field {
            field.step();
        }
        match &mut self.waves {
            Some(waves) => waves.tick(),
            None => Vec::new(),
        }
    }

    /// Propagate a surface resize to whichever effects are running.
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(field) = &mut self.field {
            field.resize(viewport);
        }
        if let Some(waves) = &mut self.waves {
            waves.resize(viewport);
        }
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn waves(&self) -> Option<&WaveRenderer> {
        self.waves.as_ref()
    }

    pub fn waves_mut(&mut self) -> Option<&mut WaveRenderer> {
        self.waves.as_mut()
    }

    /// Toggle the particle field on or off after startup.
    pub fn toggle_particles(&mut self, viewport: Viewport) {
        if self.should_skip() || !self.gate.is_ready() {
            return;
        }
        if self.field.take().is_none() {
            self.field = Some(ParticleField::new(
                self.particle_config.clone(),
                viewport,
                self.seed,
            ));
        }
    }

    /// Toggle the wave renderer between dormant and running.
    pub fn toggle_waves(&mut self) {
        if let Some(waves) = &mut self.waves {
            if waves.is_running() {
                waves.stop();
            } else {
                waves.start();
            }
        }
    }

    /// How many times the particle/wave initialization has run. Stays at
    /// zero indefinitely under reduced motion.
    pub fn initializations(&self) -> u32 {
        self.initializations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd() -> Viewport {
        Viewport::new(1920.0, 1080.0)
    }

    fn backdrop(motion: MotionPreference) -> Backdrop {
        Backdrop::with_seed(ParticleConfig::default(), true, motion, 7)
    }

    #[test]
    fn test_initializes_once_after_two_frames() {
        let mut b = backdrop(MotionPreference::NoPreference);
        b.on_load();
        assert!(b.field().is_none());
        assert!(!b.on_frame(full_hd()));
        assert!(b.on_frame(full_hd()));
        assert_eq!(b.initializations(), 1);
        assert!(b.field().is_some());
        assert!(b.waves().is_some());
        for _ in 0..10 {
            b.on_frame(full_hd());
        }
        assert_eq!(b.initializations(), 1);
    }

    #[test]
    fn test_initialized_with_documented_defaults() {
        let mut b = backdrop(MotionPreference::NoPreference);
        b.on_load();
        b.on_frame(full_hd());
        b.on_frame(full_hd());
        let field = b.field().unwrap();
        assert_eq!(field.config().number.value, 50);
        assert_eq!(field.config().colors.len(), 3);
        assert_eq!(field.config().line_linked.distance, 200.0);
    }

    #[test]
    fn test_reduced_motion_has_zero_side_effects() {
        let mut b = backdrop(MotionPreference::Reduce);
        assert!(b.should_skip());
        for _ in 0..3 {
            b.on_load(); // repeated load events
            for _ in 0..5 {
                b.on_frame(full_hd());
            }
        }
        assert_eq!(b.initializations(), 0);
        assert!(b.field().is_none());
        assert!(b.waves().is_none());
    }

    #[test]
    fn test_clock_progression_at_full_hd() {
        let mut b = backdrop(MotionPreference::NoPreference);
        b.on_load();
        b.on_frame(full_hd());
        b.on_frame(full_hd());
        let traces = b.step();
        assert_eq!(traces.len(), 6);
        assert!((b.waves().unwrap().time() - 0.02).abs() < 1e-12);
        b.step();
        assert!((b.waves().unwrap().time() - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_step_before_initialization_is_noop() {
        let mut b = backdrop(MotionPreference::NoPreference);
        assert!(b.step().is_empty());
    }

    #[test]
    fn test_toggle_waves_between_dormant_and_running() {
        let mut b = backdrop(MotionPreference::NoPreference);
        b.on_load();
        b.on_frame(full_hd());
        b.on_frame(full_hd());
        b.toggle_waves();
        assert!(b.step().is_empty());
        b.toggle_waves();
        assert_eq!(b.step().len(), 6);
    }

    #[test]
    fn test_toggle_particles_requires_open_gate() {
        let mut b = backdrop(MotionPreference::NoPreference);
        b.toggle_particles(full_hd());
        assert!(b.field().is_none());
        b.on_load();
        b.on_frame(full_hd());
        b.on_frame(full_hd());
        b.toggle_particles(full_hd());
        assert!(b.field().is_none());
        b.toggle_particles(full_hd());
        assert!(b.field().is_some());
    }
}
