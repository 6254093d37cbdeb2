// =============================================================================
// Agents (Per-Tick Game Logic)
// =============================================================================
//
// Each agent owns one step of the simulation. `tick` runs them in a fixed
// order, once per frame:
//
// 1. wave_spawner_agent.rs    : Spawns the next balloon during active waves
// 2. enemy_movement_agent.rs  : Moves balloons along the path, charges leaks
//    cleanup_agent.rs         : Drops balloons that leaked or popped
// 3. tower_attack_agent.rs    : Towers cool down, pick a target and fire
// 4. projectile_agent.rs      : Moves projectiles, resolves hits
// 5. cleanup_agent.rs         : Checks for wave completion
//
// Rendering happens after `tick` returns, never in between.
//
// =============================================================================

pub mod cleanup_agent;
pub mod enemy_movement_agent;
pub mod projectile_agent;
pub mod tower_attack_agent;
pub mod wave_spawner_agent;

use crate::state::World;

/// Whether the world can keep advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    /// Lives ran out; further ticks do nothing
    GameOver,
}

/// Advance the world by one tick.
pub fn tick(world: &mut World) -> TickStatus {
    if world.is_over() {
        return TickStatus::GameOver;
    }

    wave_spawner_agent::run(world);

    enemy_movement_agent::run(world);
    cleanup_agent::remove_inactive_balloons(world);

    tower_attack_agent::run(world);
    projectile_agent::run(world);

    cleanup_agent::check_wave_completion(world);

    world.tick_count += 1;

    if world.is_over() {
        TickStatus::GameOver
    } else {
        TickStatus::Running
    }
}
