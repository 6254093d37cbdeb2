// =============================================================================
// Entity Components - Type-Specific Data
// =============================================================================
//
// Balloons, towers and projectiles, plus the rules that only touch a single
// entity. Anything that needs the rest of the world (lives, money, other
// collections) is done by the agents, which act on the outcomes returned
// here.
//
// =============================================================================

use glam::Vec2;

use crate::helpers::geometry::circles_overlap;
use crate::map::{Path, Playfield};
use crate::state::game_entity::EntityId;
use crate::state::wave::BalloonSpec;

// =============================================================================
// Balloon
// =============================================================================

/// Lifecycle of a balloon. Transitions only go forward:
/// `Active -> Leaked | Popped`, and removal from the world is the final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalloonState {
    #[default]
    Active,
    /// Reached the end of the path and cost a life
    Leaked,
    /// Hit points ran out
    Popped,
}

/// Color band used by renderers, picked from current hit points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalloonTier {
    Red,
    Blue,
    Green,
    Yellow,
}

/// Result of one movement step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalloonStep {
    /// Not active, nothing happened
    Idle,
    /// Moved along the current segment
    Moved,
    /// Snapped onto the next path point
    ReachedPoint(usize),
    /// Was already at the final path point
    Leaked,
}

/// Result of applying damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Balloon was no longer active
    Ignored,
    Damaged { remaining: i32 },
    Popped { bounty: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    pub id: EntityId,
    pub position: Vec2,
    pub radius: f32,
    pub health: i32,
    pub max_health: i32,
    /// World units per tick
    pub speed: f32,
    /// Index of the path point the balloon last passed
    pub segment: usize,
    /// Cumulative distance covered along the path
    pub distance_traveled: f32,
    /// Money awarded when popped
    pub bounty: u32,
    pub state: BalloonState,
}

impl Balloon {
    /// New balloon just off the start of the path.
    pub fn spawn(id: EntityId, spec: &BalloonSpec, path: &Path, radius: f32) -> Self {
        Self {
            id,
            position: path.start() - Vec2::new(radius, 0.0),
            radius,
            health: spec.health,
            max_health: spec.health,
            speed: spec.speed,
            segment: 0,
            distance_traveled: 0.0,
            bounty: spec.bounty,
            state: BalloonState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == BalloonState::Active
    }

    pub fn tier(&self) -> BalloonTier {
        match self.health {
            h if h > 3 => BalloonTier::Yellow,
            h if h > 2 => BalloonTier::Green,
            h if h > 1 => BalloonTier::Blue,
            _ => BalloonTier::Red,
        }
    }

    /// Move one tick along the path.
    ///
    /// A balloon sitting on the final point leaks on its next step; the
    /// caller is responsible for charging the life.
    pub fn advance(&mut self, path: &Path) -> BalloonStep {
        if !self.is_active() {
            return BalloonStep::Idle;
        }

        if self.segment >= path.last_index() {
            self.state = BalloonState::Leaked;
            self.health = 0;
            return BalloonStep::Leaked;
        }

        let Some(target) = path.point(self.segment + 1) else {
            return BalloonStep::Idle;
        };

        let to_target = target - self.position;
        let distance = to_target.length();

        if distance < self.speed {
            self.position = target;
            self.segment += 1;
            self.distance_traveled += distance;
            BalloonStep::ReachedPoint(self.segment)
        } else {
            self.position += to_target / distance * self.speed;
            self.distance_traveled += self.speed;
            BalloonStep::Moved
        }
    }

    /// Subtract hit points. Pops at zero or below, at most once.
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        if !self.is_active() {
            return DamageOutcome::Ignored;
        }

        self.health -= amount;
        if self.health <= 0 {
            self.state = BalloonState::Popped;
            DamageOutcome::Popped {
                bounty: self.bounty,
            }
        } else {
            DamageOutcome::Damaged {
                remaining: self.health,
            }
        }
    }
}

// =============================================================================
// Tower
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub id: EntityId,
    pub position: Vec2,
    pub radius: f32,
    /// Attack range in world units
    pub range: f32,
    /// Ticks between shots
    pub fire_rate: u32,
    /// Ticks until the next shot is allowed
    pub cooldown: u32,
    /// Damage per projectile
    pub damage: i32,
}

/// Projectile parameters a tower needs when it fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Munition {
    pub speed: f32,
    pub radius: f32,
}

impl Tower {
    /// Best balloon in range: the one furthest along the path.
    ///
    /// Equal distances keep the first balloon in scan order, which is spawn
    /// order since balloons are stored by ascending id.
    pub fn select_target<'a>(&self, balloons: &'a [Balloon]) -> Option<&'a Balloon> {
        let mut best: Option<&Balloon> = None;

        for balloon in balloons.iter().filter(|b| b.is_active()) {
            if balloon.position.distance(self.position) > self.range {
                continue;
            }

            match best {
                Some(current) if balloon.distance_traveled <= current.distance_traveled => {}
                _ => best = Some(balloon),
            }
        }

        best
    }

    /// Fire at `target` if the cooldown allows it.
    pub fn fire(
        &mut self,
        target: Option<&Balloon>,
        projectile_id: EntityId,
        munition: Munition,
    ) -> Option<Projectile> {
        if self.cooldown > 0 {
            return None;
        }
        let target = target?;

        self.cooldown = self.fire_rate;
        Some(Projectile::aimed_at(
            projectile_id,
            self.position,
            target,
            self.damage,
            munition,
        ))
    }

    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

// =============================================================================
// Projectile
// =============================================================================

/// Straight-flying shot. The velocity is fixed when fired, so a balloon
/// that turns a corner can be missed.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec2,
    /// World units per tick
    pub velocity: Vec2,
    pub damage: i32,
    pub radius: f32,
    /// Balloon this shot was fired at. May no longer exist.
    pub target_id: EntityId,
}

impl Projectile {
    pub fn aimed_at(
        id: EntityId,
        origin: Vec2,
        target: &Balloon,
        damage: i32,
        munition: Munition,
    ) -> Self {
        let direction = (target.position - origin).normalize_or_zero();
        Self {
            id,
            position: origin,
            velocity: direction * munition.speed,
            damage,
            radius: munition.radius,
            target_id: target.id,
        }
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// `target` is whatever the world currently holds under `target_id`.
    pub fn resolve_hit(&self, target: Option<&Balloon>) -> bool {
        match target {
            Some(balloon) if balloon.is_active() && balloon.id == self.target_id => {
                circles_overlap(self.position, self.radius, balloon.position, balloon.radius)
            }
            _ => false,
        }
    }

    pub fn is_out_of_playfield(&self, playfield: &Playfield) -> bool {
        !playfield.contains(self.position)
    }
}
