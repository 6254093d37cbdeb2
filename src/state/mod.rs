// =============================================================================
// Game State
// =============================================================================
//
// All simulation data lives here, owned by a single `World`.
// Each concern has its own file for clarity.
//
// - game_entity.rs : Entity ids and type tags
// - components.rs  : Balloon, Tower and Projectile data + per-entity rules
// - wave.rs        : Wave state and roster tables
// - game_state.rs  : Economy (lives, money) and session status
// - world.rs       : The world that owns everything above
//
// =============================================================================

pub mod components;
pub mod game_entity;
pub mod game_state;
pub mod wave;
pub mod world;

pub use components::*;
pub use game_entity::*;
pub use game_state::*;
pub use wave::*;
pub use world::*;
