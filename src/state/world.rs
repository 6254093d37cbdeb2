// =============================================================================
// World
// =============================================================================
//
// Owns every piece of simulation state. Agents and actions take
// `&mut World`; front ends only ever read it.
//
// Balloons are kept in ascending id order (new ones are pushed, removals
// preserve order), so lookups by id are a binary search.
//
// =============================================================================

use glam::Vec2;

use crate::config::GameConfig;
use crate::events::GameEvent;
use crate::map::{Path, Playfield};
use crate::state::components::{Balloon, Munition, Projectile, Tower};
use crate::state::game_entity::{EntityId, EntityType, IdAllocator};
use crate::state::game_state::{GameState, GameStatus};
use crate::state::wave::WaveState;

#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub playfield: Playfield,
    pub path: Path,

    pub game: GameState,
    pub wave: WaveState,

    pub balloons: Vec<Balloon>,
    pub towers: Vec<Tower>,
    pub projectiles: Vec<Projectile>,

    /// Ticks simulated so far
    pub tick_count: u64,

    ids: IdAllocator,
    events: Vec<GameEvent>,
}

impl World {
    pub fn new(config: GameConfig) -> Result<Self, String> {
        config.validate()?;
        let playfield = config.playfield();
        let path = config.resolve_path()?;
        log::debug!(
            "World created: {}x{} playfield, path of {} points ({:.0} long)",
            playfield.width,
            playfield.height,
            path.len(),
            path.total_length()
        );

        Ok(Self {
            game: GameState::new(&config.economy),
            wave: WaveState::default(),
            playfield,
            path,
            balloons: Vec::new(),
            towers: Vec::new(),
            projectiles: Vec::new(),
            tick_count: 0,
            ids: IdAllocator::default(),
            events: Vec::new(),
            config,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.game.status
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    pub fn next_id(&mut self, entity_type: EntityType) -> EntityId {
        self.ids.next_id(entity_type)
    }

    /// Distance from the path within which towers may not be placed
    pub fn path_margin(&self) -> f32 {
        self.config.playfield.tile_size * self.config.playfield.path_margin_factor
    }

    pub fn munition(&self) -> Munition {
        Munition {
            speed: self.config.projectile.speed,
            radius: self.config.projectile.radius,
        }
    }

    pub fn balloon(&self, id: EntityId) -> Option<&Balloon> {
        find_balloon(&self.balloons, id).map(|i| &self.balloons[i])
    }

    pub fn balloon_mut(&mut self, id: EntityId) -> Option<&mut Balloon> {
        find_balloon(&self.balloons, id).map(move |i| &mut self.balloons[i])
    }

    pub fn tower_at(&self, position: Vec2, within: f32) -> Option<&Tower> {
        self.towers
            .iter()
            .find(|t| t.position.distance(position) < within)
    }

    /// Balloons still in the active set, including ones that popped this
    /// tick and have not been removed yet
    pub fn balloon_count(&self) -> usize {
        self.balloons.len()
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Split borrow used by agents that walk one collection while
    /// updating the economy and the event queue.
    pub(crate) fn combat_parts(
        &mut self,
    ) -> (
        &mut Vec<Balloon>,
        &mut Vec<Projectile>,
        &mut GameState,
        &mut Vec<GameEvent>,
        &Playfield,
    ) {
        (
            &mut self.balloons,
            &mut self.projectiles,
            &mut self.game,
            &mut self.events,
            &self.playfield,
        )
    }

    pub(crate) fn movement_parts(
        &mut self,
    ) -> (&mut Vec<Balloon>, &Path, &mut GameState, &mut Vec<GameEvent>) {
        (
            &mut self.balloons,
            &self.path,
            &mut self.game,
            &mut self.events,
        )
    }

    pub(crate) fn attack_parts(
        &mut self,
    ) -> (
        &mut Vec<Tower>,
        &Vec<Balloon>,
        &mut Vec<Projectile>,
        &mut IdAllocator,
        &mut Vec<GameEvent>,
    ) {
        (
            &mut self.towers,
            &self.balloons,
            &mut self.projectiles,
            &mut self.ids,
            &mut self.events,
        )
    }
}

/// Index of the balloon with `id`, if it is still in the active set
pub fn find_balloon(balloons: &[Balloon], id: EntityId) -> Option<usize> {
    balloons.binary_search_by_key(&id, |b| b.id).ok()
}
