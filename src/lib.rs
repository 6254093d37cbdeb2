// =============================================================================
// Balloon Defense - Simulation Core
// =============================================================================
//
// Deterministic tower-defense simulation. The crate is organized into the
// following modules:
//
// - state/     : Plain game data (world, entities, economy, waves)
// - actions/   : Player-triggered actions (place tower, start wave)
// - agents/    : Per-tick game logic (spawning, movement, combat, cleanup)
// - helpers/   : Shared utility functions (geometry, placement validation)
//
// The terminal front end lives behind the `tui` feature and only talks to
// the core through `game_loop` and the `frontend` traits.
//
// =============================================================================

pub mod actions;
pub mod agents;
pub mod config;
pub mod constants;
pub mod events;
pub mod frontend;
pub mod game_loop;
pub mod helpers;
pub mod map;
pub mod state;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for front ends and tests
pub use agents::{tick, TickStatus};
pub use config::GameConfig;
pub use events::GameEvent;
pub use game_loop::GameLoop;
pub use map::Path;
pub use state::{EntityId, GameStatus, World};

pub use glam::Vec2;
