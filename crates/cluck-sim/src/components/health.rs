/// How long the hurt flash lasts after a hit, in seconds. For guarded
/// entities (the player) this window also suppresses repeat damage.
pub const HURT_WINDOW: f64 = 1.0;

/// Energy bookkeeping for a damageable entity.
///
/// `guard_window` decides whether the hurt window doubles as an
/// invulnerability window: true for the player, false for enemies,
/// whose window only drives the hurt flash.
#[derive(Debug, Clone)]
pub struct Health {
    energy: i32,
    /// Start of the most recent hurt window, in simulated seconds.
    pub last_hit: f64,
    guard_window: bool,
}

impl Health {
    pub fn new(energy: i32, guard_window: bool) -> Self {
        Self {
            energy: energy.max(0),
            last_hit: f64::NEG_INFINITY,
            guard_window,
        }
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn is_dead(&self) -> bool {
        self.energy == 0
    }

    /// Whether the hurt flash is showing at `now`.
    pub fn is_hurt(&self, now: f64) -> bool {
        !self.is_dead() && now - self.last_hit < HURT_WINDOW
    }

    /// Apply damage through the generic path. For guarded entities the
    /// hit is suppressed while a hurt window is open. Dead entities take
    /// no damage. Returns whether the hit applied.
    pub fn hit(&mut self, amount: i32, now: f64) -> bool {
        if self.is_dead() {
            return false;
        }
        if self.guard_window && now - self.last_hit < HURT_WINDOW {
            return false;
        }
        self.apply(amount, now);
        true
    }

    /// Apply damage ignoring any open hurt window. The caller is expected
    /// to bring its own rate limit (the boss's contact cooldown is shorter
    /// than the hurt window and would otherwise never fire twice).
    /// Returns whether the hit applied.
    pub fn force_hit(&mut self, amount: i32, now: f64) -> bool {
        if self.is_dead() {
            return false;
        }
        self.apply(amount, now);
        true
    }

    /// Kill outright, bypassing damage accounting. Used by stomps.
    /// Records the time so corpse cleanup can measure the linger.
    pub fn kill(&mut self, now: f64) {
        self.energy = 0;
        self.last_hit = now;
    }

    fn apply(&mut self, amount: i32, now: f64) {
        self.energy = (self.energy - amount).max(0);
        self.last_hit = now;
    }
}
