//! Frame driver shared by every front end.
//!
//! Owns the world, applies player input between ticks, runs one tick per
//! frame and then tells the UI what changed and asks the renderer to draw.
//! Once the game is over it stops ticking and only redraws.

use std::time::Duration;

use glam::Vec2;

use crate::actions::{place_tower, start_wave};
use crate::agents::{tick, TickStatus};
use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::frontend::{InputEvent, Preview, Renderer, UiPanel};
use crate::helpers::validation::validate_tower_placement;
use crate::state::World;

pub struct GameLoop {
    config: GameConfig,
    world: World,
    /// Last known pointer position inside the playfield
    pointer: Option<Vec2>,
    halted: bool,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Result<Self, String> {
        let world = World::new(config.clone())?;
        Ok(Self {
            config,
            world,
            pointer: None,
            halted: false,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// True once the game is over; `step` no longer advances the world.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Wall-clock time between ticks
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.config.playfield.tick_rate))
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Push every HUD value, e.g. after a restart
    pub fn sync_ui(&self, ui: &mut impl UiPanel) {
        ui.set_lives(self.world.game.lives);
        ui.set_money(self.world.game.money);
        ui.set_wave(self.world.wave.current_wave);
        ui.set_start_wave_enabled(!self.world.wave.wave_active && !self.world.is_over());
    }

    /// Apply one input event. Rejected actions change nothing; the reason
    /// is logged and returned.
    pub fn handle_input(&mut self, input: InputEvent, ui: &mut impl UiPanel) -> Result<(), String> {
        let result = match input {
            InputEvent::PointerMove(position) => {
                self.pointer = self.world.playfield.contains(position).then_some(position);
                Ok(())
            }
            InputEvent::PointerLeave => {
                self.pointer = None;
                Ok(())
            }
            InputEvent::PointerClick(position) => {
                self.pointer = self.world.playfield.contains(position).then_some(position);
                place_tower(&mut self.world, position.x, position.y).map(|_| ())
            }
            InputEvent::StartWave => start_wave(&mut self.world).map(|_| ()),
            InputEvent::Restart => self.restart(&mut *ui),
        };

        if let Err(reason) = &result {
            log::debug!("Ignored {:?}: {}", input, reason);
        }

        self.forward_events(ui);
        result
    }

    /// Placement preview for the current pointer position
    pub fn preview(&self) -> Option<Preview> {
        let position = self.pointer?;
        Some(Preview {
            position,
            radius: self.config.tower.radius,
            range: self.config.tower.range,
            valid: validate_tower_placement(&self.world, position).is_ok(),
        })
    }

    /// Run one frame: tick (unless halted), notify the UI, draw.
    pub fn step<F>(&mut self, frontend: &mut F) -> Result<TickStatus, F::Error>
    where
        F: Renderer + UiPanel,
    {
        let status = if self.halted {
            TickStatus::GameOver
        } else {
            let status = tick(&mut self.world);
            self.forward_events(&mut *frontend);
            if status == TickStatus::GameOver {
                self.halted = true;
            }
            status
        };

        let preview = self.preview();
        frontend.draw(&self.world, preview.as_ref())?;
        Ok(status)
    }

    fn restart(&mut self, ui: &mut impl UiPanel) -> Result<(), String> {
        self.world = World::new(self.config.clone())?;
        self.halted = false;
        ui.hide_game_over();
        self.sync_ui(ui);
        log::info!("Session restarted");
        Ok(())
    }

    fn forward_events(&mut self, ui: &mut impl UiPanel) {
        let over = self.world.is_over();

        for event in self.world.drain_events() {
            match event {
                GameEvent::LivesChanged { lives } => ui.set_lives(lives),
                GameEvent::MoneyChanged { money } => ui.set_money(money),
                GameEvent::WaveStarted { wave, .. } => {
                    ui.set_wave(wave);
                    ui.set_start_wave_enabled(false);
                }
                GameEvent::WaveCompleted { .. } => ui.set_start_wave_enabled(!over),
                GameEvent::GameOver { wave } => {
                    ui.set_start_wave_enabled(false);
                    ui.show_game_over(wave);
                }
                GameEvent::BalloonSpawned { .. }
                | GameEvent::BalloonPopped { .. }
                | GameEvent::BalloonLeaked { .. }
                | GameEvent::TowerPlaced { .. }
                | GameEvent::ProjectileFired { .. } => {}
            }
        }
    }
}
