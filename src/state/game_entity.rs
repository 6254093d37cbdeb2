// =============================================================================
// Game Entity - Ids and Type Tags
// =============================================================================
//
// Every balloon, tower and projectile gets an `EntityId` when it is created.
// Ids are handed out in increasing order and never reused within a session,
// so a projectile holding the id of a removed balloon can never hit a
// different balloon by accident.
//
// =============================================================================

use std::fmt;

/// Stable handle to an entity in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Entity type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Tower,
    Balloon,
    Projectile,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityType::Tower => "tower",
            EntityType::Balloon => "balloon",
            EntityType::Projectile => "projectile",
        };
        f.write_str(name)
    }
}

/// Monotonic id source, one per world
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn next_id(&mut self, entity_type: EntityType) -> EntityId {
        self.next += 1;
        let id = EntityId(self.next);
        log::trace!("Allocated {} {}", entity_type, id);
        id
    }
}
