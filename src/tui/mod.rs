// =============================================================================
// Terminal Front End
// =============================================================================
//
// ratatui + crossterm host for the game loop. The playfield is drawn on a
// braille canvas, the mouse places towers and a keyboard cursor does the
// same for terminals without mouse support.
//
// =============================================================================

pub mod render;
pub mod theme;

pub use render::{Hud, Screen, cell_to_world};
pub use theme::Theme;

use std::io;
use std::time::Instant;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use glam::Vec2;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::GameConfig;
use crate::frontend::InputEvent;
use crate::game_loop::GameLoop;

/// What a key press means to the terminal host
#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Game(InputEvent),
    MoveCursor(Vec2),
    PlaceAtCursor,
    ToggleTheme,
    Quit,
}

fn map_key(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('w') | KeyCode::Char('s') => Command::Game(InputEvent::StartWave),
        KeyCode::Char('r') => Command::Game(InputEvent::Restart),
        KeyCode::Char('t') => Command::ToggleTheme,
        KeyCode::Char(' ') | KeyCode::Enter => Command::PlaceAtCursor,
        KeyCode::Left => Command::MoveCursor(Vec2::NEG_X),
        KeyCode::Right => Command::MoveCursor(Vec2::X),
        KeyCode::Up => Command::MoveCursor(Vec2::NEG_Y),
        KeyCode::Down => Command::MoveCursor(Vec2::Y),
        _ => return None,
    };
    Some(command)
}

struct App {
    game: GameLoop,
    screen: Screen,
    /// Keyboard placement cursor, in world coordinates
    cursor: Vec2,
    cursor_step: f32,
}

impl App {
    fn apply(&mut self, input: InputEvent) {
        let changes_state = !matches!(
            input,
            InputEvent::PointerMove(_) | InputEvent::PointerLeave
        );

        match self.game.handle_input(input, &mut self.screen) {
            Ok(()) if changes_state => self.screen.hud.notice = None,
            Ok(()) => {}
            Err(reason) => self.screen.hud.notice = Some(reason),
        }
    }

    /// Returns false when the player asked to quit.
    fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Game(input) => self.apply(input),
            Command::ToggleTheme => {
                self.screen.theme = self.screen.theme.toggled();
                log::debug!("Theme switched to {}", self.screen.theme.name);
            }
            Command::MoveCursor(direction) => {
                let playfield = self.game.world().playfield;
                let moved = self.cursor + direction * self.cursor_step;
                self.cursor = moved.clamp(
                    Vec2::ZERO,
                    Vec2::new(playfield.width, playfield.height),
                );
                self.apply(InputEvent::PointerMove(self.cursor));
            }
            Command::PlaceAtCursor => self.apply(InputEvent::PointerClick(self.cursor)),
        }
        true
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let playfield = self.game.world().playfield;
        let position = self.screen.to_world(mouse.column, mouse.row, &playfield);

        match (mouse.kind, position) {
            (MouseEventKind::Moved | MouseEventKind::Drag(_), Some(position)) => {
                self.cursor = position;
                self.apply(InputEvent::PointerMove(position));
            }
            (MouseEventKind::Moved, None) => self.apply(InputEvent::PointerLeave),
            (MouseEventKind::Down(MouseButton::Left), Some(position)) => {
                self.cursor = position;
                self.apply(InputEvent::PointerClick(position));
            }
            _ => {}
        }
    }

    /// Returns false when the player asked to quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                Some(command) => self.handle_command(command),
                None => true,
            },
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                true
            }
            _ => true,
        }
    }
}

pub fn run_tui(config: GameConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let game = GameLoop::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let tower_cost = game.world().config.economy.tower_cost;
    let cursor = game.world().playfield.center();
    let cursor_step = game.world().config.playfield.tile_size / 2.0;

    let mut app = App {
        game,
        screen: Screen::new(terminal, tower_cost),
        cursor,
        cursor_step,
    };
    app.game.sync_ui(&mut app.screen);

    let res = run_app(&mut app);

    disable_raw_mode()?;
    let terminal = app.screen.terminal_mut();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Terminal error: {err}");
        return Err(err.into());
    }

    log::info!(
        "Session ended at wave {} with {} lives",
        app.game.world().wave.current_wave,
        app.game.world().game.lives
    );
    Ok(())
}

fn run_app(app: &mut App) -> io::Result<()> {
    let frame = app.game.frame_duration();
    let mut next_frame = Instant::now();

    loop {
        // Drain input until the next frame is due
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            if !app.handle_event(event::read()?) {
                return Ok(());
            }
        }

        app.game.step(&mut app.screen)?;
        next_frame += frame;

        // Don't try to catch up after a stall
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }
    }
}
