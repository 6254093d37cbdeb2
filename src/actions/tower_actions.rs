// =============================================================================
// Tower Actions
// =============================================================================

use glam::Vec2;

use crate::events::GameEvent;
use crate::helpers::validation::validate_tower_placement;
use crate::state::{EntityId, EntityType, Tower, World};

/// Place a new tower at the specified position
pub fn place_tower(world: &mut World, x: f32, y: f32) -> Result<EntityId, String> {
    let position = Vec2::new(x, y);
    validate_tower_placement(world, position)?;

    let cost = world.config.economy.tower_cost;
    world.game.spend(cost)?;

    let id = world.next_id(EntityType::Tower);
    let settings = &world.config.tower;
    let tower = Tower {
        id,
        position,
        radius: settings.radius,
        range: settings.range,
        fire_rate: settings.fire_rate,
        cooldown: 0,
        damage: settings.damage,
    };
    world.towers.push(tower);
    world.game.towers_built += 1;

    let money = world.game.money;
    world.emit(GameEvent::MoneyChanged { money });
    world.emit(GameEvent::TowerPlaced { id, position });

    log::info!(
        "Placed tower {} at ({:.0}, {:.0}) - {} money remaining",
        id, x, y, money
    );

    Ok(id)
}
