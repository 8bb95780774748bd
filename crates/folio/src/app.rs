use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_background::BackgroundState;
use folio_config::Config;
use folio_core::{Bounds, LayoutMode, Mounted, TaskError};
use folio_fonts::{FontCycler, NameLayout};
use folio_motion::{HeroMotion, frame_period};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Stylize},
    text::Line,
};
use tracing::info;

use crate::hero;

const KEY_COLOR: Color = Color::Rgb(200, 200, 210);

/// Font cycling, either running on its own task or paused.
#[derive(Debug)]
enum FontTask {
    Running(Mounted<FontCycler>),
    Paused(FontCycler),
}

impl FontTask {
    fn layout(&self, mode: LayoutMode) -> NameLayout {
        match self {
            FontTask::Running(cycler) => cycler.read(|c| c.layout(mode)),
            FontTask::Paused(cycler) => cycler.layout(mode),
        }
    }

    fn reinitialize(&mut self) {
        match self {
            FontTask::Running(cycler) => cycler.write(|c| {
                let text = c.text().to_string();
                c.initialize(&text);
            }),
            FontTask::Paused(cycler) => {
                let text = cycler.text().to_string();
                cycler.initialize(&text);
            }
        }
    }

    fn is_paused(&self) -> bool {
        matches!(self, FontTask::Paused(_))
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Current name layout.
    layout: LayoutMode,
    /// Pointer tracking, entrance and drag springs on the frame loop.
    hero: Mounted<HeroMotion>,
    fonts: FontTask,
    background: BackgroundState,
    /// Where the hero was last drawn; pointer events are measured against it.
    hero_area: Rect,
    /// Cell under the mouse while it is over the hero.
    pointer: Option<Position>,
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] and start its tasks.
    pub fn new(config: Config) -> Result<Self, TaskError> {
        let hero = HeroMotion::new(config.tracker_config()).mount(config.fps)?;
        let fonts = FontCycler::new(&config.name, config.palette()).mount(config.font_interval())?;
        info!(name = %config.name, layout = %config.layout, fps = config.fps, "hero started");
        Ok(Self {
            running: false,
            layout: config.layout,
            hero,
            fonts: FontTask::Running(fonts),
            background: BackgroundState::new(config.background.clone()),
            hero_area: Rect::default(),
            pointer: None,
            started: Instant::now(),
            config,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let frame = frame_period(self.config.fps);
        while self.running {
            terminal.draw(|f| self.render(f))?;
            self.handle_crossterm_events(frame)?;
        }
        self.shutdown();
        Ok(())
    }

    /// Stop both tasks.
    fn shutdown(self) {
        self.hero.unmount();
        if let FontTask::Running(cycler) = self.fonts {
            cycler.unmount();
        }
        info!("hero stopped");
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn name_layout(&self) -> NameLayout {
        self.fonts.layout(self.layout)
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Hero
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());
        self.hero_area = chunks[0];

        let motion = self.hero.read(HeroMotion::clone);
        let name = self.name_layout();
        hero::render(
            frame,
            chunks[0],
            &motion,
            &name,
            &self.background,
            self.elapsed_ms(),
            self.pointer,
        );

        let paused = self.fonts.is_paused();
        let help = Line::from(vec![
            "q".bold().fg(KEY_COLOR),
            " quit  ".dark_gray(),
            "l".bold().fg(KEY_COLOR),
            format!(" layout ({})  ", self.layout).dark_gray(),
            "p".bold().fg(KEY_COLOR),
            (if paused { " resume fonts  " } else { " pause fonts  " }).dark_gray(),
            "r".bold().fg(KEY_COLOR),
            " reroll".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls for at most one frame so the animation keeps redrawing.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) -> Result<(), TaskError> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('l')) => self.toggle_layout(),
            (_, KeyCode::Char('p')) => self.toggle_fonts()?,
            (_, KeyCode::Char('r')) => self.reroll_fonts(),
            _ => {}
        }
        Ok(())
    }

    /// Feed pointer events to the frame loop state.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        // Measure from the middle of the cell.
        let (column, row) = (mouse.column as f32 + 0.5, mouse.row as f32 + 0.5);
        let bounds = Bounds::from(self.hero_area);
        self.pointer =
            Some(Position::new(mouse.column, mouse.row)).filter(|p| self.hero_area.contains(*p));
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hero.write(|h| h.tracker.on_pointer_move(column, row, bounds));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let name = self.name_layout();
                let area = self.hero_area;
                self.hero.write(|h| {
                    h.tracker.on_pointer_move(column, row, bounds);
                    if hero::name_contains(area, &name, h, mouse.column, mouse.row) {
                        h.drag.grab(column, row);
                    }
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => self.hero.write(|h| {
                h.tracker.on_pointer_drag(column, row, bounds);
                h.drag.drag_to(column, row);
            }),
            MouseEventKind::Up(MouseButton::Left) => self.hero.write(|h| {
                h.drag.release();
                h.tracker.on_pointer_move(column, row, bounds);
            }),
            _ => {}
        }
    }

    /// Switch between normal and split layout and replay the entrance.
    fn toggle_layout(&mut self) {
        self.layout = self.layout.toggle();
        self.hero.write(|h| h.name.restart());
        info!(layout = %self.layout, "layout changed");
    }

    /// Pause or resume font cycling by unmounting or remounting its task.
    fn toggle_fonts(&mut self) -> Result<(), TaskError> {
        let fresh = || FontCycler::new(&self.config.name, self.config.palette());
        self.fonts = match std::mem::replace(&mut self.fonts, FontTask::Paused(fresh())) {
            FontTask::Running(cycler) => FontTask::Paused(cycler.unmount().unwrap_or_else(fresh)),
            FontTask::Paused(cycler) => {
                FontTask::Running(cycler.mount(self.config.font_interval())?)
            }
        };
        Ok(())
    }

    /// Draw a fresh font for every glyph.
    fn reroll_fonts(&mut self) {
        self.fonts.reinitialize();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
