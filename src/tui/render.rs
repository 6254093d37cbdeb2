use std::io::{self, Stdout};

use glam::Vec2;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points, Rectangle},
    },
};

use crate::frontend::{Preview, Renderer, UiPanel};
use crate::map::{Path, Playfield};
use crate::state::World;
use crate::tui::theme::Theme;

/// HUD values pushed by the game loop
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub lives: u32,
    pub money: u32,
    pub wave: u32,
    pub tower_cost: u32,
    pub start_wave_enabled: bool,
    /// Wave the game ended on, if it has
    pub game_over: Option<u32>,
    /// Last rejected action, shown until the next successful one
    pub notice: Option<String>,
}

pub struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub hud: Hud,
    pub theme: Theme,
    /// Inner area of the playfield widget from the last draw
    canvas_area: Rect,
}

impl Screen {
    pub fn new(terminal: Terminal<CrosstermBackend<Stdout>>, tower_cost: u32) -> Self {
        Self {
            terminal,
            hud: Hud {
                tower_cost,
                ..Hud::default()
            },
            theme: Theme::default(),
            canvas_area: Rect::default(),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Map a terminal cell to world coordinates (cell centers).
    pub fn to_world(&self, column: u16, row: u16, playfield: &Playfield) -> Option<Vec2> {
        cell_to_world(self.canvas_area, column, row, playfield)
    }
}

pub fn cell_to_world(area: Rect, column: u16, row: u16, playfield: &Playfield) -> Option<Vec2> {
    if area.width == 0
        || area.height == 0
        || column < area.x
        || row < area.y
        || column >= area.x + area.width
        || row >= area.y + area.height
    {
        return None;
    }

    let x = (f32::from(column - area.x) + 0.5) * playfield.width / f32::from(area.width);
    let y = (f32::from(row - area.y) + 0.5) * playfield.height / f32::from(area.height);
    Some(Vec2::new(x, y))
}

impl UiPanel for Screen {
    fn set_lives(&mut self, lives: u32) {
        self.hud.lives = lives;
    }

    fn set_money(&mut self, money: u32) {
        self.hud.money = money;
    }

    fn set_wave(&mut self, wave: u32) {
        self.hud.wave = wave;
    }

    fn set_start_wave_enabled(&mut self, enabled: bool) {
        self.hud.start_wave_enabled = enabled;
    }

    fn show_game_over(&mut self, wave: u32) {
        self.hud.game_over = Some(wave);
    }

    fn hide_game_over(&mut self) {
        self.hud.game_over = None;
        self.hud.notice = None;
    }
}

impl Renderer for Screen {
    type Error = io::Error;

    fn draw(&mut self, world: &World, preview: Option<&Preview>) -> io::Result<()> {
        let Self {
            terminal,
            hud,
            theme,
            canvas_area,
        } = self;

        terminal.draw(|f| {
            *canvas_area = ui(f, world, preview, hud, theme);
        })?;
        Ok(())
    }
}

/// Draw one frame. Returns the inner playfield area for pointer mapping.
fn ui(f: &mut Frame, world: &World, preview: Option<&Preview>, hud: &Hud, theme: &Theme) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(28)])
        .split(f.area());

    let canvas_area = render_playfield(f, world, preview, theme, chunks[0]);
    render_panel(f, world, hud, theme, chunks[1]);

    if let Some(wave) = hud.game_over {
        render_game_over(f, wave, world, theme, canvas_area);
    }

    canvas_area
}

fn render_playfield(
    f: &mut Frame,
    world: &World,
    preview: Option<&Preview>,
    theme: &Theme,
    area: Rect,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Balloon Defense")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);

    let width = f64::from(world.playfield.width);
    let height = f64::from(world.playfield.height);
    // Canvas y grows upward, world y grows downward
    let flip = |p: Vec2| (f64::from(p.x), height - f64::from(p.y));

    let projectile_points: Vec<(f64, f64)> =
        world.projectiles.iter().map(|p| flip(p.position)).collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(theme.background)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            draw_path(
                ctx,
                &world.path,
                world.config.playfield.tile_size * 0.4,
                theme.path,
                &flip,
            );
            ctx.layer();

            for tower in &world.towers {
                let (x, y) = flip(tower.position);
                let r = f64::from(tower.radius);
                ctx.draw(&Rectangle {
                    x: x - r,
                    y: y - r,
                    width: r * 2.0,
                    height: r * 2.0,
                    color: theme.tower,
                });
            }

            for balloon in world.balloons.iter().filter(|b| b.is_active()) {
                let (x, y) = flip(balloon.position);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: f64::from(balloon.radius),
                    color: theme.balloon_color(balloon.tier()),
                });
            }

            ctx.draw(&Points {
                coords: &projectile_points,
                color: theme.projectile,
            });

            if let Some(preview) = preview {
                ctx.layer();
                let (x, y) = flip(preview.position);
                let color = theme.indicator(preview.valid);
                let r = f64::from(preview.radius);
                ctx.draw(&Rectangle {
                    x: x - r,
                    y: y - r,
                    width: r * 2.0,
                    height: r * 2.0,
                    color,
                });
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: f64::from(preview.range),
                    color,
                });
            }
        });

    f.render_widget(canvas, area);
    inner
}

/// Centerline plus both edges of the road.
fn draw_path(
    ctx: &mut Context<'_>,
    path: &Path,
    half_width: f32,
    color: Color,
    flip: &impl Fn(Vec2) -> (f64, f64),
) {
    for (a, b) in path.segments() {
        let normal = (b - a).perp().normalize_or_zero() * half_width;
        for offset in [Vec2::ZERO, normal, -normal] {
            let (x1, y1) = flip(a + offset);
            let (x2, y2) = flip(b + offset);
            ctx.draw(&CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color,
            });
        }
    }
}

fn render_panel(f: &mut Frame, world: &World, hud: &Hud, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    let label = Style::default().fg(theme.muted);
    let value = Style::default()
        .fg(theme.text)
        .add_modifier(Modifier::BOLD);
    let stat = |name: &'static str, v: String| {
        Line::from(vec![Span::styled(format!("{name:<12}"), label), Span::styled(v, value)])
    };

    let stats = vec![
        stat("Lives", hud.lives.to_string()),
        stat("Money", hud.money.to_string()),
        stat("Wave", hud.wave.to_string()),
        stat("Tower cost", hud.tower_cost.to_string()),
        stat("Balloons", world.balloons.iter().filter(|b| b.is_active()).count().to_string()),
        stat("Towers", world.towers.len().to_string()),
        stat("Popped", world.game.balloons_popped.to_string()),
        stat("Leaked", world.game.balloons_leaked.to_string()),
    ];
    f.render_widget(
        Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title("Status")),
        chunks[0],
    );

    let start_style = if hud.start_wave_enabled {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
    };
    let controls = vec![
        Line::from(Span::styled("[w] Start wave", start_style)),
        Line::from("[click] Place tower"),
        Line::from("[arrows] Move cursor"),
        Line::from("[space] Place at cursor"),
        Line::from("[t] Theme  [r] Restart"),
        Line::from("[q] Quit"),
    ];
    f.render_widget(
        Paragraph::new(controls).block(Block::default().borders(Borders::ALL).title("Controls")),
        chunks[1],
    );

    let notice = hud.notice.clone().unwrap_or_default();
    f.render_widget(
        Paragraph::new(notice)
            .style(Style::default().fg(theme.indicator_invalid))
            .block(Block::default().borders(Borders::ALL).title("Notice")),
        chunks[2],
    );
}

fn render_game_over(f: &mut Frame, wave: u32, world: &World, theme: &Theme, area: Rect) {
    let width = 30.min(area.width);
    let height = 6.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let text = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default()
                .fg(theme.indicator_invalid)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Reached wave {wave}")),
        Line::from(format!("Popped {} balloons", world.game.balloons_popped)),
        Line::from("[r] Restart  [q] Quit"),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
        popup,
    );
}
