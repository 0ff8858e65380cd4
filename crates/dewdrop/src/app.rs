use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use dewdrop_config::Config;
use dewdrop_core::{DropSize, Theme, Viewport};
use dewdrop_particles::{ParticleField, Surface};
use dewdrop_physics::{DropPhase, DropSimulator};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::overlay::DropView;
use crate::pointer::pointer_event;

/// Rows reserved below the scene for the status line.
const STATUS_ROWS: u16 = 1;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    theme: Theme,
    drop_size: DropSize,
    /// Present while the drop overlay is visible.
    drop: Option<DropSimulator>,
    exclusive_capture: bool,
    field: ParticleField,
    surface: Surface,
    viewport: Viewport,
    show_help: bool,
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `cols` x `rows`.
    pub fn new(config: Config, cols: u16, rows: u16) -> Self {
        let theme = config.theme;
        let mut surface = Surface::new(
            cols,
            rows.saturating_sub(STATUS_ROWS),
            config.cell_width,
            config.cell_height,
        );
        surface.set_backdrop(theme.backdrop(), config.paint_backdrop);
        let viewport = surface.viewport();
        let mut app = Self {
            running: false,
            theme,
            drop_size: config.drop_size,
            drop: None,
            exclusive_capture: true,
            field: ParticleField::new(theme, viewport),
            surface,
            viewport,
            show_help: false,
            started: Instant::now(),
            config,
        };
        if app.config.show_drop {
            app.toggle_drop();
        }
        app
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let frame_budget = self.config.frame_duration();
        let mut last_frame = Instant::now();
        self.running = true;
        while self.running {
            let now = Instant::now();
            self.tick(now - last_frame);
            last_frame = now;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(now + frame_budget)?;
        }
        Ok(())
    }

    /// Advance the simulations by one frame.
    fn tick(&mut self, dt: Duration) {
        self.field.step();
        if let Some(drop) = &mut self.drop {
            drop.step(dt);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let [scene, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(STATUS_ROWS)])
                .areas(frame.area());

        let time_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.field.draw(&mut self.surface, time_ms);
        frame.render_widget(Paragraph::new(self.surface.lines()), scene);

        if let Some(drop) = &self.drop {
            let view = DropView::new(
                drop,
                self.config.cell_width,
                self.config.cell_height,
                self.theme.backdrop(),
            );
            frame.render_widget(view, scene);
        }

        frame.render_widget(self.status_line(), status);
    }

    fn status_line(&self) -> Line<'static> {
        let accent = self.theme.accent().color();
        let mut spans: Vec<Span<'static>> =
            vec![format!(" {} ", self.theme.label()).bold().fg(accent)];
        match &self.drop {
            Some(drop) => spans.push(
                format!(" drop {} {}px ", phase_label(drop.phase()), self.drop_size.get()).into(),
            ),
            None => spans.push(" drop hidden ".dark_gray()),
        }
        if self.show_help {
            for (key, action) in [
                ("q", " quit  "),
                ("t", " theme  "),
                ("1-5", " pick theme  "),
                ("d", " drop  "),
                ("+/-", " size  "),
                ("?", " hide help"),
            ] {
                spans.push(key.bold().fg(accent));
                spans.push(action.dark_gray());
            }
        } else {
            spans.push(" ? help".dark_gray());
        }
        Line::from(spans)
    }

    /// Reads crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.resize(cols, rows),
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
            (_, KeyCode::Char('t')) => self.set_theme(self.theme.next()),
            (_, KeyCode::Char(c @ '1'..='5')) => {
                self.set_theme(Theme::ALL[usize::from(c as u8 - b'1')]);
            }
            (_, KeyCode::Char('d')) => self.toggle_drop(),
            (_, KeyCode::Char('+' | '=')) => self.set_drop_size(self.drop_size.grow()),
            (_, KeyCode::Char('-' | '_')) => self.set_drop_size(self.drop_size.shrink()),
            (_, KeyCode::Char('?')) => self.show_help = !self.show_help,
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(drop) = &mut self.drop else {
            return;
        };
        if let Some(event) = pointer_event(&mouse, self.config.cell_width, self.config.cell_height)
        {
            drop.handle(&event);
        }
    }

    /// Adopt a new terminal size.
    fn resize(&mut self, cols: u16, rows: u16) {
        self.surface.resize(cols, rows.saturating_sub(STATUS_ROWS));
        self.viewport = self.surface.viewport();
        self.field.resize(self.viewport);
        if let Some(drop) = &mut self.drop {
            drop.set_viewport(self.viewport);
        }
        tracing::debug!(
            cols = self.surface.cols(),
            rows = self.surface.rows(),
            "terminal resized"
        );
    }

    /// Whether pointer events can be captured exclusively by one pointer.
    pub fn set_exclusive_capture(&mut self, exclusive: bool) {
        self.exclusive_capture = exclusive;
        if let Some(drop) = &mut self.drop {
            drop.set_exclusive_capture(exclusive);
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.surface
            .set_backdrop(theme.backdrop(), self.config.paint_backdrop);
        if self.field.set_theme(theme) {
            tracing::info!(theme = %theme, "theme changed");
        }
    }

    /// Show a fresh drop, or tear down the visible one.
    fn toggle_drop(&mut self) {
        match self.drop.take() {
            Some(_) => tracing::debug!("drop hidden"),
            None => {
                let mut drop = DropSimulator::new(self.drop_size, self.viewport);
                drop.set_exclusive_capture(self.exclusive_capture);
                self.drop = Some(drop);
                tracing::debug!(size = self.drop_size.get(), "drop shown");
            }
        }
    }

    fn set_drop_size(&mut self, size: DropSize) {
        self.drop_size = size;
        if let Some(drop) = &mut self.drop {
            drop.set_size(size);
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn phase_label(phase: DropPhase) -> &'static str {
    match phase {
        DropPhase::Idle => "idle",
        DropPhase::Dragging => "dragging",
        DropPhase::Settled => "settled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEventKind};
    use dewdrop_core::Vec2;

    // 100 x 30 scene cells of 8 x 16 pixels, plus the status row.
    const COLS: u16 = 100;
    const ROWS: u16 = 31;

    fn app() -> App {
        App::new(Config::default(), COLS, ROWS)
    }

    fn press(app: &mut App, c: char) {
        app.on_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.on_mouse_event(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_scene_excludes_status_row() {
        let app = app();
        assert_eq!((app.surface.cols(), app.surface.rows()), (100, 30));
        assert_eq!(app.viewport, Viewport::new(800.0, 480.0));
        assert_eq!(app.field.viewport(), app.viewport);
        assert!(app.drop.is_none());
    }

    #[test]
    fn test_show_drop_from_config() {
        let config = Config {
            show_drop: true,
            drop_size: DropSize::new(200),
            ..Config::default()
        };
        let app = App::new(config, COLS, ROWS);
        let drop = app.drop.as_ref().expect("drop shown");
        assert_eq!(drop.offset(), Vec2::new(300.0, 100.0));
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            app.running = true;
            app.on_key_event(key);
            assert!(!app.running, "{key:?}");
        }
    }

    #[test]
    fn test_theme_keys() {
        let mut app = app();
        press(&mut app, 't');
        assert_eq!(app.theme, Theme::Summer);
        assert_eq!(app.field.theme(), Theme::Summer);
        press(&mut app, '4');
        assert_eq!(app.field.theme(), Theme::Winter);
        press(&mut app, '5');
        assert_eq!(app.theme, Theme::Dark);
        press(&mut app, '1');
        assert_eq!(app.theme, Theme::Spring);
    }

    #[test]
    fn test_drag_with_mouse() {
        let mut app = app();
        press(&mut app, 'd');
        // Drop covers pixels 350..450 x 100..200; cell (50, 9) is inside.
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 9);
        let drop = app.drop.as_ref().expect("drop shown");
        assert_eq!(drop.phase(), DropPhase::Dragging);

        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 60, 9);
        assert_eq!(app.drop.as_ref().map(|d| d.target()), Some(Vec2::new(430.0, 100.0)));

        // Another button cannot steal or release the drag.
        mouse(&mut app, MouseEventKind::Up(MouseButton::Right), 60, 9);
        assert!(app.drop.as_ref().is_some_and(|d| d.is_dragging()));
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 60, 9);
        assert!(app.drop.as_ref().is_some_and(|d| !d.is_dragging()));
    }

    #[test]
    fn test_toggle_resets_drop() {
        let mut app = app();
        press(&mut app, 'd');
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 9);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 10, 25);
        for _ in 0..30 {
            app.tick(Duration::from_millis(16));
        }
        assert_ne!(app.drop.as_ref().map(|d| d.offset()), Some(Vec2::new(350.0, 100.0)));

        press(&mut app, 'd');
        assert!(app.drop.is_none());
        press(&mut app, 'd');
        let drop = app.drop.as_ref().expect("drop shown");
        assert_eq!(drop.offset(), Vec2::new(350.0, 100.0));
        assert_eq!(drop.velocity(), Vec2::ZERO);
        assert!(!drop.is_dragging());
    }

    #[test]
    fn test_size_keys_apply_live() {
        let mut app = app();
        press(&mut app, 'd');
        press(&mut app, '+');
        press(&mut app, '+');
        assert_eq!(app.drop_size.get(), 120);
        assert_eq!(app.drop.as_ref().map(|d| d.size().get()), Some(120));
        for _ in 0..10 {
            press(&mut app, '-');
        }
        assert_eq!(app.drop_size.get(), DropSize::MIN);
    }

    #[test]
    fn test_resize_reaches_drop_and_field() {
        let mut app = app();
        press(&mut app, 'd');
        app.resize(40, 11);
        let small = Viewport::new(320.0, 160.0);
        assert_eq!(app.field.viewport(), small);
        assert_eq!(app.drop.as_ref().map(|d| d.viewport()), Some(small));
        assert_eq!(app.surface.rows(), 10);
    }

    #[test]
    fn test_shared_capture_reaches_new_drops() {
        let mut app = app();
        app.set_exclusive_capture(false);
        press(&mut app, 'd');
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 9);
        // Without exclusive capture any pointer may release.
        mouse(&mut app, MouseEventKind::Up(MouseButton::Right), 50, 9);
        assert!(app.drop.as_ref().is_some_and(|d| !d.is_dragging()));
    }

    #[test]
    fn test_status_line() {
        let mut app = app();
        press(&mut app, '5');
        let text = app.status_line().to_string();
        assert!(text.contains("Dark Mode"));
        assert!(text.contains("drop hidden"));

        press(&mut app, 'd');
        press(&mut app, '?');
        let text = app.status_line().to_string();
        assert!(text.contains("drop idle 100px"));
        assert!(text.contains("quit"));
    }
}
