use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::tty::IsTty;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::DefaultTerminal;
use sonagi_config::Config;
use sonagi_core::resolve_matrix_color;
use sonagi_rain::Rain;

mod style;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Without a terminal to paint on there is nothing to do.
    if !stdout().is_tty() {
        return Ok(());
    }
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Frame period.
    tick: Duration,
    /// Configured base color; the environment can override it per frame.
    base_color: Option<String>,
    /// The rain simulation.
    rain: Rain,
    /// Glyph picks and column restarts.
    rng: SmallRng,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    ///
    /// The rain starts with an empty surface; the first resize in
    /// [`App::run`] grows it to the terminal size.
    pub fn new(config: &Config) -> Self {
        Self {
            running: false,
            tick: config.tick(),
            base_color: config.color.clone(),
            rain: Rain::new(config.rain_params(), 0, 0),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.on_resize(size.width, size.height);
        self.running = true;
        let mut last_tick = Instant::now();
        while self.running {
            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            self.handle_crossterm_events(timeout)?;
            if last_tick.elapsed() >= self.tick {
                self.advance_frame();
                terminal.draw(|frame| self.rain.render(frame))?;
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// Advance the simulation by one frame.
    ///
    /// The color is resolved anew every frame, so a changed environment
    /// variable tints new stamps while old trails keep the color they were
    /// painted with.
    fn advance_frame(&mut self) {
        let color =
            resolve_matrix_color(style::live_value().as_deref(), self.base_color.as_deref());
        self.rain.tick(&mut self.rng, color);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a timeout to keep the frame cadence.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(columns, rows) => self.on_resize(columns, rows),
                Event::Mouse(_) => {}
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
            _ => {}
        }
    }

    /// Rebuild the rain for a new terminal size.
    ///
    /// One terminal cell holds one glyph, so the pixel surface is the cell
    /// grid scaled up by the font size.
    fn on_resize(&mut self, columns: u16, rows: u16) {
        let font_size = u32::from(self.rain.params().font_size);
        self.rain
            .resize(u32::from(columns) * font_size, u32::from(rows) * font_size);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
