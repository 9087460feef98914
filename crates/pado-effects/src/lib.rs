//! Ambient background effects for the pado terminal app.
//!
//! This crate provides the two decorative renderers — a drifting particle
//! field with link lines and a set of sinusoidal wave traces — together
//! with the deferred startup gate that delays initialization until the
//! surface dimensions are stable.

mod backdrop;
mod color;
mod particles;
mod startup;
mod waves;

pub use backdrop::Backdrop;
pub use color::{fade, parse_hex, parse_hex_or};
pub use particles::{Link, Particle, ParticleField};
pub use startup::StartupGate;
pub use waves::{Trace, TraceKind, WaveDescriptor, WaveRenderer, TIME_STEP};
