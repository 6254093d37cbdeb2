// =============================================================================
// Placement Validation
// =============================================================================

use glam::Vec2;

use crate::helpers::geometry::{distance_to_segment, segment_contains_in_box};
use crate::map::Path;
use crate::state::World;

/// True if `point` is within `margin` of any path segment (inclusive).
pub fn is_position_on_path(path: &Path, point: Vec2, margin: f32) -> bool {
    path.segments().any(|(a, b)| {
        segment_contains_in_box(point, a, b, margin) && distance_to_segment(point, a, b) <= margin
    })
}

/// Checks everything about a tower position except money.
pub fn validate_tower_position(world: &World, point: Vec2) -> Result<(), String> {
    if !world.playfield.contains(point) {
        return Err(format!(
            "Position ({:.0}, {:.0}) is outside the playfield",
            point.x, point.y
        ));
    }

    let margin = world.path_margin();
    if is_position_on_path(&world.path, point, margin) {
        return Err(format!(
            "Position ({:.0}, {:.0}) is too close to the path ({:.1} away, needs more than {:.0})",
            point.x,
            point.y,
            world.path.distance_to(point),
            margin
        ));
    }

    let footprint = world.config.tower.radius * 2.0;
    if let Some(tower) = world.tower_at(point, footprint) {
        return Err(format!("Position overlaps tower {}", tower.id));
    }

    Ok(())
}

/// Full placement check: session, funds and position.
pub fn validate_tower_placement(world: &World, point: Vec2) -> Result<(), String> {
    if world.is_over() {
        return Err("Game is over".to_string());
    }

    let cost = world.config.economy.tower_cost;
    if world.game.money < cost {
        return Err(format!(
            "Not enough money. Need {}, have {}",
            cost, world.game.money
        ));
    }

    validate_tower_position(world, point)
}
