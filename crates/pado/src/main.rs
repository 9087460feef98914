use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points},
};

use pado_config::Config;
use pado_core::{AnimationSpeed, Viewport, BRAILLE_DOTS, SINGLE_DOT};
use pado_effects::{fade, parse_hex_or, Backdrop};

/// Particles at least this large are drawn as circles instead of dots.
const CIRCLE_RADIUS_THRESHOLD: f64 = 1.5;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current animation cadence.
    speed: AnimationSpeed,
    /// Canvas marker (braille is the high-density surface).
    marker: Marker,
    /// Wave palette override from the config file.
    wave_palette: Vec<String>,
    /// The effect controller.
    backdrop: Backdrop,
    /// Surface dimensions of the last rendered frame.
    viewport: Viewport,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded configuration.
    pub fn new(config: Config) -> Self {
        let motion = config.effective_motion();
        let marker = if config.particles.retina_detect {
            Marker::Braille
        } else {
            Marker::Dot
        };
        Self {
            running: false,
            speed: config.speed,
            marker,
            wave_palette: config.waves.colors.clone(),
            backdrop: Backdrop::new(config.particles.clone(), config.waves.enable, motion),
            viewport: Viewport::new(0.0, 0.0),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        // The terminal is already set up at this point, so the load signal
        // fires immediately.
        self.backdrop.on_load();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Dot resolution per terminal cell for the active marker.
    fn dots_per_cell(&self) -> (u16, u16) {
        match self.marker {
            Marker::Braille => BRAILLE_DOTS,
            _ => SINGLE_DOT,
        }
    }

    /// Viewport for the canvas portion of the given terminal area.
    fn viewport_for(&self, area: Rect) -> Viewport {
        Viewport::from_cells(area.width, area.height, self.dots_per_cell())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Effect canvas
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let canvas_area = chunks[0];
        self.viewport = self.viewport_for(canvas_area);

        // Feed the startup gate; the effects size themselves from the
        // viewport measured on the releasing frame.
        if self.backdrop.on_frame(self.viewport) && !self.wave_palette.is_empty() {
            let palette: Vec<Color> = self
                .wave_palette
                .iter()
                .map(|c| parse_hex_or(c, Color::White))
                .collect();
            if let Some(waves) = self.backdrop.waves_mut() {
                waves.set_palette(&palette);
            }
        }

        let traces = self.backdrop.step();
        let (links, dots, link_color) = match self.backdrop.field() {
            Some(field) => {
                let link_color = parse_hex_or(
                    &field.config().line_linked.color,
                    Color::Rgb(136, 146, 176),
                );
                let dots: Vec<(f64, f64, f64, Color)> = field
                    .particles()
                    .iter()
                    .map(|p| {
                        let opacity = p.opacity(&field.config().opacity);
                        (p.x, p.y, p.radius(&field.config().size), fade(p.color, opacity))
                    })
                    .collect();
                (field.links(), dots, link_color)
            }
            None => (Vec::new(), Vec::new(), Color::Reset),
        };

        let viewport = self.viewport;
        let canvas = Canvas::default()
            .marker(self.marker)
            .x_bounds([0.0, viewport.width.max(1.0)])
            .y_bounds([0.0, viewport.height.max(1.0)])
            .paint(|ctx| {
                // Wave layer first so the particle field sits on top.
                for trace in &traces {
                    for pair in trace.points.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: pair[0].0,
                            y1: pair[0].1,
                            x2: pair[1].0,
                            y2: pair[1].1,
                            color: trace.color,
                        });
                    }
                }
                ctx.layer();
                for link in &links {
                    ctx.draw(&CanvasLine {
                        x1: link.from.0,
                        y1: link.from.1,
                        x2: link.to.0,
                        y2: link.to.1,
                        color: fade(link_color, link.opacity),
                    });
                }
                for &(x, y, radius, color) in &dots {
                    if radius >= CIRCLE_RADIUS_THRESHOLD {
                        ctx.draw(&Circle { x, y, radius, color });
                    } else {
                        let coords = [(x, y)];
                        ctx.draw(&Points {
                            coords: &coords,
                            color,
                        });
                    }
                }
            });
        frame.render_widget(canvas, canvas_area);

        frame.render_widget(self.help_line(), chunks[1]);
    }

    /// The key-hint line at the bottom of the screen.
    fn help_line(&self) -> Line<'static> {
        if self.backdrop.should_skip() {
            return Line::from("animations off (reduced motion)  q quit".dark_gray()).centered();
        }
        let accent = Color::Cyan;
        Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "p".bold().fg(accent),
            " particles  ".dark_gray(),
            "w".bold().fg(accent),
            " waves  ".dark_gray(),
            "s".bold().fg(accent),
            format!(" speed: {}", self.speed.label()).dark_gray(),
        ])
        .centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with the frame budget as timeout so the animation
    /// advances at the configured cadence.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(self.speed.frame_budget_ms()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.backdrop.toggle_particles(self.viewport),
            (_, KeyCode::Char('w')) => self.backdrop.toggle_waves(),
            (_, KeyCode::Char('s')) => self.speed = self.speed.next(),
            _ => {}
        }
    }

    /// Re-measure the surface on terminal resize (the bottom row stays
    /// reserved for the help line).
    fn on_resize(&mut self, cols: u16, rows: u16) {
        let area = Rect::new(0, 0, cols, rows.saturating_sub(1));
        self.viewport = self.viewport_for(area);
        self.backdrop.resize(self.viewport);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
