// =============================================================================
// Cleanup Agent
// =============================================================================
//
// Removes balloons that are done (leaked or popped) and checks for wave
// completion.
//
// =============================================================================

use crate::events::GameEvent;
use crate::state::{GameStatus, World};

pub fn remove_inactive_balloons(world: &mut World) {
    let before = world.balloons.len();
    world.balloons.retain(|b| b.is_active());

    let removed = before - world.balloons.len();
    if removed > 0 {
        log::trace!("Cleaned up {} balloons", removed);
    }
}

/// A wave is complete once its whole roster has spawned and nothing is
/// left in the active set.
pub fn check_wave_completion(world: &mut World) {
    if !world.wave.wave_active {
        return;
    }

    if !world.wave.all_spawned() || world.balloon_count() > 0 {
        return;
    }

    world.wave.wave_active = false;
    world.game.waves_completed += 1;
    if !world.is_over() {
        world.game.status = GameStatus::PreWave;
    }

    let wave = world.wave.current_wave;
    world.emit(GameEvent::WaveCompleted { wave });

    log::info!(
        "Wave {} complete! {} lives, {} money",
        wave, world.game.lives, world.game.money
    );
}
