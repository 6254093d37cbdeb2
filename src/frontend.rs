// =============================================================================
// Front End Seams
// =============================================================================
//
// The simulation never draws or reads input itself. A front end implements
// `Renderer` and `UiPanel` and feeds `InputEvent`s to the game loop.
//
// =============================================================================

use glam::Vec2;

use crate::state::World;

/// Input delivered by the host, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; drives the placement preview
    PointerMove(Vec2),
    /// Pointer clicked; tries to place a tower
    PointerClick(Vec2),
    /// Pointer left the playfield; hides the preview
    PointerLeave,
    StartWave,
    /// Throw the current session away and start over
    Restart,
}

/// Where a tower would go if the player clicked now
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview {
    pub position: Vec2,
    pub radius: f32,
    pub range: f32,
    pub valid: bool,
}

/// Draws the world after each tick
pub trait Renderer {
    type Error;

    fn draw(&mut self, world: &World, preview: Option<&Preview>) -> Result<(), Self::Error>;
}

/// HUD counters and controls
pub trait UiPanel {
    fn set_lives(&mut self, lives: u32);
    fn set_money(&mut self, money: u32);
    fn set_wave(&mut self, wave: u32);
    fn set_start_wave_enabled(&mut self, enabled: bool);
    fn show_game_over(&mut self, wave: u32);

    /// Cleared when a new session starts
    fn hide_game_over(&mut self) {}
}
