use glam::Vec2;

use crate::state::EntityId;

/// Something the UI may want to know about.
///
/// Agents and actions queue these on the world while they mutate it; the
/// game loop drains the queue once the state transition is complete.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    LivesChanged { lives: u32 },
    MoneyChanged { money: u32 },
    WaveStarted { wave: u32, balloons: usize, bonus: u32 },
    WaveCompleted { wave: u32 },
    BalloonSpawned { id: EntityId },
    /// A balloon ran out of hit points
    BalloonPopped { id: EntityId, bounty: u32 },
    /// A balloon reached the end of the path
    BalloonLeaked { id: EntityId },
    TowerPlaced { id: EntityId, position: Vec2 },
    ProjectileFired { tower: EntityId, target: EntityId },
    GameOver { wave: u32 },
}
