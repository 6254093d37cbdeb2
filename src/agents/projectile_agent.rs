// =============================================================================
// Projectile Agent
// =============================================================================
//
// Handles projectile movement and collision detection. A projectile is
// removed after its one hit or once it leaves the playfield, whichever
// comes first. If its target was removed or already popped it just keeps
// flying until it leaves.
//
// =============================================================================

use crate::events::GameEvent;
use crate::state::{find_balloon, DamageOutcome, World};

pub fn run(world: &mut World) {
    let (balloons, projectiles, game, events, playfield) = world.combat_parts();

    projectiles.retain_mut(|projectile| {
        projectile.advance();

        let target_index = find_balloon(balloons, projectile.target_id);
        let hit = projectile.resolve_hit(target_index.map(|i| &balloons[i]));

        if hit {
            if let Some(index) = target_index {
                let balloon = &mut balloons[index];
                match balloon.apply_damage(projectile.damage) {
                    DamageOutcome::Popped { bounty } => {
                        game.earn(bounty);
                        game.balloons_popped += 1;
                        events.push(GameEvent::BalloonPopped {
                            id: balloon.id,
                            bounty,
                        });
                        events.push(GameEvent::MoneyChanged { money: game.money });
                        log::debug!(
                            "Projectile {} popped balloon {} (+{} money)",
                            projectile.id,
                            balloon.id,
                            bounty
                        );
                    }
                    DamageOutcome::Damaged { remaining } => {
                        log::trace!(
                            "Projectile {} hit balloon {}, {} hp left",
                            projectile.id,
                            balloon.id,
                            remaining
                        );
                    }
                    DamageOutcome::Ignored => {}
                }
            }
            return false;
        }

        !projectile.is_out_of_playfield(playfield)
    });
}
