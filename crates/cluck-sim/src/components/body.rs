use glam::Vec2;

/// Vertical motion state for entities the gravity pass integrates:
/// the player and thrown bottles. Walkers and the boss manage their
/// own height (the boss arcs are scripted by its action state).
///
/// Speeds are in world units per gravity tick, positive upward.
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    pub speed_y: f32,
    pub acceleration: f32,
    /// Rest line for the entity's top edge. The entity is airborne while
    /// its y is above (less than) this line.
    pub ground_y: f32,
    /// Whether landing clamps the entity back onto `ground_y`. Thrown
    /// bottles keep falling until the contact pass shatters them.
    pub rests_on_ground: bool,
    /// When the last landing happened, for the landing-frame hold.
    pub landed_at: Option<f64>,
}

impl PhysicsBody {
    pub fn new(acceleration: f32, ground_y: f32) -> Self {
        Self {
            speed_y: 0.0,
            acceleration,
            ground_y,
            rests_on_ground: true,
            landed_at: None,
        }
    }

    /// A body that never clamps to the ground line (thrown bottles).
    pub fn free_falling(acceleration: f32, speed_y: f32) -> Self {
        Self {
            speed_y,
            acceleration,
            ground_y: f32::INFINITY,
            rests_on_ground: false,
            landed_at: None,
        }
    }

    /// Above the rest line, or still on the way up.
    pub fn airborne(&self, pos: Vec2) -> bool {
        pos.y < self.ground_y || self.speed_y > 0.0
    }

    /// Moving downward. Distinct from airborne: an entity at the top of
    /// its arc is airborne but not yet falling.
    pub fn falling(&self) -> bool {
        self.speed_y < 0.0
    }

    /// Whether the landing-frame hold is still showing at `now`.
    pub fn just_landed(&self, now: f64, hold: f64) -> bool {
        matches!(self.landed_at, Some(t) if now - t < hold)
    }
}
