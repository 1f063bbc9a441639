/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Hands out entity ids, starting from 1. Id 0 is never issued.
#[derive(Debug, Clone)]
pub struct IdAlloc {
    next: u32,
}

impl IdAlloc {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next unique entity id.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdAlloc {
    fn default() -> Self {
        Self::new()
    }
}

/// Which maneuver the boss has begun. Carried on `SimEvent::BossActionStarted`
/// so the shell can key sounds and camera shakes off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossActionKind {
    Telegraph,
    Sprint,
    Retreat,
    Backstep,
    Slam,
}

/// Events emitted by the simulation during one `World::advance` call.
/// The shell drains these each frame to drive sounds and overlays;
/// the simulation never reacts to its own events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// The player took damage; carries the remaining energy.
    PlayerHurt { energy: i32 },
    /// The player's energy reached zero.
    PlayerDefeated,
    /// An enemy was killed by a stomp.
    EnemyStomped { id: EntityId },
    /// A carried bottle was thrown.
    BottleThrown,
    /// A thrown bottle broke, at this world position.
    BottleShattered { x: f32, y: f32 },
    /// A coin was picked up; carries the new total.
    CoinCollected { total: u32 },
    /// A ground bottle was picked up; carries the new carried count.
    BottleCollected { total: u32 },
    /// The boss crossed an energy threshold into a new phase.
    BossPhaseChanged { phase: u8 },
    /// The boss started a scripted maneuver.
    BossActionStarted { kind: BossActionKind },
    /// The boss's energy reached zero.
    BossDefeated,
}
