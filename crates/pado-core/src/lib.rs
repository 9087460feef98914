//! Core types shared across the pado crates.
//!
//! This crate holds the plain vocabulary of the application: the virtual
//! pixel surface the effects draw on, the user's motion preference, the
//! animation cadence, and the declarative particle configuration consumed
//! by the particle field engine.

mod motion;
mod particle_config;
mod speed;
mod viewport;

pub use motion::MotionPreference;
pub use particle_config::{
    DensityConfig, Direction, LinkConfig, MoveConfig, NumberConfig, ParticleConfig, PulseConfig,
};
pub use speed::AnimationSpeed;
pub use viewport::{Viewport, BRAILLE_DOTS, SINGLE_DOT};
