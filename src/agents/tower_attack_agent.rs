// =============================================================================
// Tower Attack Agent
// =============================================================================
//
// Handles tower targeting and attacks. Every tower cools down, then picks
// the in-range balloon furthest along the path and fires a projectile at it
// if its cooldown has run out.
//
// =============================================================================

use crate::events::GameEvent;
use crate::state::{EntityType, World};

pub fn run(world: &mut World) {
    let munition = world.munition();
    let (towers, balloons, projectiles, ids, events) = world.attack_parts();

    for tower in towers.iter_mut() {
        tower.tick_cooldown();
        if tower.cooldown > 0 {
            continue;
        }

        let Some(target) = tower.select_target(balloons) else {
            continue;
        };

        let projectile_id = ids.next_id(EntityType::Projectile);
        if let Some(projectile) = tower.fire(Some(target), projectile_id, munition) {
            log::trace!(
                "Tower {} fired projectile {} at balloon {}",
                tower.id,
                projectile.id,
                target.id
            );
            events.push(GameEvent::ProjectileFired {
                tower: tower.id,
                target: target.id,
            });
            projectiles.push(projectile);
        }
    }
}
