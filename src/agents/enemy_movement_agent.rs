// =============================================================================
// Enemy Movement Agent
// =============================================================================
//
// Moves balloons along the path and charges a life for every balloon that
// makes it to the end.
//
// =============================================================================

use crate::events::GameEvent;
use crate::state::{BalloonStep, World};

pub fn run(world: &mut World) {
    let wave = world.wave.current_wave;
    let (balloons, path, game, events) = world.movement_parts();

    for balloon in balloons.iter_mut() {
        match balloon.advance(path) {
            BalloonStep::Leaked => {
                let ended = game.lose_life();
                events.push(GameEvent::BalloonLeaked { id: balloon.id });
                events.push(GameEvent::LivesChanged { lives: game.lives });

                log::debug!("Balloon {} leaked, {} lives left", balloon.id, game.lives);

                if ended {
                    events.push(GameEvent::GameOver { wave });
                    log::info!("Game over on wave {}! Out of lives.", wave);
                }
            }
            BalloonStep::ReachedPoint(index) => {
                log::trace!("Balloon {} reached path point {}", balloon.id, index);
            }
            BalloonStep::Moved | BalloonStep::Idle => {}
        }
    }
}
