//! Sinusoidal wave traces.

use pado_core::Viewport;
use ratatui::style::Color;

/// Clock advance per rendered frame.
pub const TIME_STEP: f64 = 0.02;

/// Sampling step along x for horizontal traces, in virtual pixels.
const HORIZONTAL_STEP: f64 = 4.0;

/// Sampling step along y for vertical traces, in virtual pixels.
const VERTICAL_STEP: f64 = 8.0;

/// Horizontal anchor of vertical traces, as a fraction of the width.
const VERTICAL_ANCHOR: f64 = 0.2;

/// Fixed parameter set defining one sinusoidal trace. Immutable after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveDescriptor {
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    pub phase_offset: f64,
    pub color: Color,
}

/// Which pass of the frame a trace belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Horizontal,
    Vertical,
}

/// One sampled polyline, ready to be painted.
#[derive(Debug, Clone)]
pub struct Trace {
    pub kind: TraceKind,
    pub color: Color,
    pub points: Vec<(f64, f64)>,
}

/// Continuously redraws a set of animated sinusoidal traces.
///
/// Owns its animation clock exclusively; independent instances never
/// interfere. The clock advances by exactly [`TIME_STEP`] per frame and
/// never resets during a session.
#[derive(Debug, Clone)]
pub struct WaveRenderer {
    viewport: Viewport,
    waves: Vec<WaveDescriptor>,
    time: f64,
    running: bool,
}

impl WaveRenderer {
    /// Create a renderer sized to the given viewport, with the fixed set of
    /// three wave descriptors.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_waves(viewport, default_waves())
    }

    /// Create a renderer with a custom wave set.
    pub fn with_waves(viewport: Viewport, waves: Vec<WaveDescriptor>) -> Self {
        Self {
            viewport,
            waves,
            time: 0.0,
            running: true,
        }
    }

    /// Set the surface dimensions to the given viewport exactly.
    /// Idempotent: resizing to the current viewport changes nothing.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current surface dimensions.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current clock reading.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Stop producing frames. The clock freezes until [`start`](Self::start).
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resume producing frames.
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Recolor the waves in order from a palette. Extra entries are ignored;
    /// waves without a palette entry keep their color.
    pub fn set_palette(&mut self, palette: &[Color]) {
        for (wave, color) in self.waves.iter_mut().zip(palette) {
            wave.color = *color;
        }
    }

    /// Produce one frame's traces and advance the clock.
    ///
    /// All horizontal traces come before any vertical trace, so painting the
    /// returned list in order keeps the horizontal layer underneath. Returns
    /// an empty frame without touching the clock while stopped.
    pub fn tick(&mut self) -> Vec<Trace> {
        if !self.running {
            return Vec::new();
        }
        let mut traces = Vec::with_capacity(self.waves.len() * 2);
        for wave in &self.waves {
            traces.push(Trace {
                kind: TraceKind::Horizontal,
                color: wave.color,
                points: self.horizontal_trace(wave),
            });
        }
        for wave in &self.waves {
            traces.push(Trace {
                kind: TraceKind::Vertical,
                color: wave.color,
                points: self.vertical_trace(wave),
            });
        }
        self.time += TIME_STEP;
        traces
    }

    /// Sample one horizontal ribbon: the midline offset by a primary sine
    /// term plus a half-amplitude, half-frequency harmonic.
    pub fn horizontal_trace(&self, wave: &WaveDescriptor) -> Vec<(f64, f64)> {
        let mid = self.viewport.height / 2.0;
        let mut points = Vec::new();
        let mut x = 0.0;
        while x <= self.viewport.width {
            let primary = (x * wave.frequency + self.time * wave.speed + wave.phase_offset).sin()
                * wave.amplitude;
            let harmonic =
                (x * wave.frequency / 2.0 + self.time * wave.speed).sin() * wave.amplitude / 2.0;
            points.push((x, mid + primary + harmonic));
            x += HORIZONTAL_STEP;
        }
        points
    }

    /// Sample one vertical trace, anchored at 20% of the width, with a
    /// single sine term at 1.5× the wave's frequency and 1.2× its speed.
    pub fn vertical_trace(&self, wave: &WaveDescriptor) -> Vec<(f64, f64)> {
        let anchor = self.viewport.width * VERTICAL_ANCHOR;
        let mut points = Vec::new();
        let mut y = 0.0;
        while y <= self.viewport.height {
            let offset = (y * wave.frequency * 1.5
                + self.time * wave.speed * 1.2
                + wave.phase_offset)
                .sin()
                * wave.amplitude;
            points.push((anchor + offset, y));
            y += VERTICAL_STEP;
        }
        points
    }
}

/// The fixed set of three wave descriptors built at startup.
fn default_waves() -> Vec<WaveDescriptor> {
    use std::f64::consts::PI;
    vec![
        WaveDescriptor {
            amplitude: 40.0,
            frequency: 0.012,
            speed: 1.0,
            phase_offset: 0.0,
            color: Color::Rgb(100, 255, 218),
        },
        WaveDescriptor {
            amplitude: 26.0,
            frequency: 0.018,
            speed: 0.8,
            phase_offset: PI / 2.0,
            color: Color::Rgb(136, 146, 176),
        },
        WaveDescriptor {
            amplitude: 16.0,
            frequency: 0.026,
            speed: 1.3,
            phase_offset: PI,
            color: Color::Rgb(82, 109, 230),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd() -> Viewport {
        Viewport::new(1920.0, 1080.0)
    }

    #[test]
    fn test_resize_sets_exact_dimensions() {
        let mut renderer = WaveRenderer::new(Viewport::new(100.0, 50.0));
        renderer.resize(full_hd());
        assert_eq!(renderer.viewport().width, 1920.0);
        assert_eq!(renderer.viewport().height, 1080.0);
    }

    #[test]
    fn test_resize_idempotent() {
        let mut renderer = WaveRenderer::new(full_hd());
        renderer.resize(full_hd());
        renderer.resize(full_hd());
        assert_eq!(renderer.viewport(), full_hd());
    }

    #[test]
    fn test_clock_advances_by_fixed_step() {
        let mut renderer = WaveRenderer::new(full_hd());
        assert_eq!(renderer.time(), 0.0);
        renderer.tick();
        assert!((renderer.time() - 0.02).abs() < 1e-12);
        renderer.tick();
        assert!((renderer.time() - 0.04).abs() < 1e-12);
        for _ in 0..500 {
            let before = renderer.time();
            renderer.tick();
            assert!(renderer.time() > before);
        }
    }

    #[test]
    fn test_resize_does_not_touch_clock() {
        let mut renderer = WaveRenderer::new(full_hd());
        renderer.tick();
        let t = renderer.time();
        renderer.resize(Viewport::new(640.0, 480.0));
        assert_eq!(renderer.time(), t);
    }

    #[test]
    fn test_frame_has_three_horizontal_then_three_vertical() {
        let mut renderer = WaveRenderer::new(full_hd());
        let traces = renderer.tick();
        assert_eq!(traces.len(), 6);
        assert!(traces[..3].iter().all(|t| t.kind == TraceKind::Horizontal));
        assert!(traces[3..].iter().all(|t| t.kind == TraceKind::Vertical));
    }

    #[test]
    fn test_horizontal_trace_spans_width_in_fixed_steps() {
        let renderer = WaveRenderer::new(full_hd());
        let wave = default_waves()[0];
        let points = renderer.horizontal_trace(&wave);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[1].0, 4.0);
        assert!(points.last().unwrap().0 <= 1920.0);
        // Every y stays within midline ± 1.5 × amplitude.
        let mid = 540.0;
        let bound = wave.amplitude * 1.5 + 1e-9;
        assert!(points.iter().all(|&(_, y)| (y - mid).abs() <= bound));
    }

    #[test]
    fn test_vertical_trace_anchored_at_fifth_of_width() {
        let renderer = WaveRenderer::new(full_hd());
        let wave = default_waves()[0];
        let points = renderer.vertical_trace(&wave);
        assert_eq!(points[0].1, 0.0);
        assert_eq!(points[1].1, 8.0);
        let anchor = 1920.0 * 0.2;
        let bound = wave.amplitude + 1e-9;
        assert!(points.iter().all(|&(x, _)| (x - anchor).abs() <= bound));
    }

    #[test]
    fn test_stopped_renderer_is_dormant() {
        let mut renderer = WaveRenderer::new(full_hd());
        renderer.tick();
        let t = renderer.time();
        renderer.stop();
        assert!(renderer.tick().is_empty());
        assert_eq!(renderer.time(), t);
        renderer.start();
        assert_eq!(renderer.tick().len(), 6);
    }

    #[test]
    fn test_set_palette_recolors_in_order() {
        let mut renderer = WaveRenderer::new(full_hd());
        renderer.set_palette(&[Color::Red, Color::Green]);
        let traces = renderer.tick();
        assert_eq!(traces[0].color, Color::Red);
        assert_eq!(traces[1].color, Color::Green);
        assert_eq!(traces[2].color, default_waves()[2].color);
    }

    #[test]
    fn test_independent_instances_do_not_interfere() {
        let mut a = WaveRenderer::new(full_hd());
        let mut b = WaveRenderer::new(full_hd());
        a.tick();
        a.tick();
        b.tick();
        assert!((a.time() - 0.04).abs() < 1e-12);
        assert!((b.time() - 0.02).abs() < 1e-12);
    }
}
