// =============================================================================
// Wave Spawner Agent
// =============================================================================
//
// Handles spawning balloons during active waves. The countdown is checked
// before it is decremented, so the first balloon of a wave appears on the
// first tick and the rest follow `spawn_interval` ticks apart.
//
// =============================================================================

use crate::events::GameEvent;
use crate::state::{Balloon, EntityType, World};

pub fn run(world: &mut World) {
    if !world.wave.wave_active {
        return;
    }

    if world.wave.spawn_countdown == 0 && !world.wave.all_spawned() {
        spawn_next_balloon(world);
    }

    world.wave.spawn_countdown = world.wave.spawn_countdown.saturating_sub(1);
}

fn spawn_next_balloon(world: &mut World) {
    let Some(spec) = world.wave.next_spec() else {
        return;
    };

    let id = world.next_id(EntityType::Balloon);
    let balloon = Balloon::spawn(id, &spec, &world.path, world.config.balloon.radius);
    let position = balloon.position;
    world.balloons.push(balloon);

    world.wave.spawned += 1;
    world.wave.spawn_countdown = world.wave.spawn_interval;
    world.emit(GameEvent::BalloonSpawned { id });

    log::debug!(
        "Spawned balloon {} ({} hp, speed {:.2}) at ({:.0}, {:.0}), {} left in wave {}",
        id,
        spec.health,
        spec.speed,
        position.x,
        position.y,
        world.wave.remaining(),
        world.wave.current_wave
    );
}
