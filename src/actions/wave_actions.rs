// =============================================================================
// Wave Actions
// =============================================================================

use crate::events::GameEvent;
use crate::state::{wave_bonus, GameStatus, World};

/// Start the next wave. Only allowed between waves.
pub fn start_wave(world: &mut World) -> Result<u32, String> {
    if world.is_over() {
        return Err("Game is over".to_string());
    }

    if world.wave.wave_active {
        return Err(format!("Wave {} already active", world.wave.current_wave));
    }

    let wave = world.wave.current_wave + 1;
    let bonus = wave_bonus(world.config.economy.wave_start_money, wave);
    let base_speed = world.config.balloon.base_speed;

    world.game.earn(bonus);
    world.wave.begin(wave, base_speed);
    world.game.status = GameStatus::WaveActive;

    let balloons = world.wave.roster.len();
    let money = world.game.money;
    world.emit(GameEvent::MoneyChanged { money });
    world.emit(GameEvent::WaveStarted {
        wave,
        balloons,
        bonus,
    });

    log::info!(
        "Wave {} started with {} balloons, spawning every {} ticks (+{} money)",
        wave, balloons, world.wave.spawn_interval, bonus
    );

    Ok(wave)
}
