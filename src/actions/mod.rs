// =============================================================================
// Actions (Player-Triggered)
// =============================================================================
//
// Actions are the only way player input changes the world. They run between
// ticks, validate first, and either apply every change or none of them.
// A rejected action returns `Err` with a readable reason and leaves the
// world untouched.
//
// Organization:
// - tower_actions.rs : Place tower
// - wave_actions.rs  : Start wave
//
// =============================================================================

pub mod tower_actions;
pub mod wave_actions;

pub use tower_actions::*;
pub use wave_actions::*;
