use crate::api::types::BossActionKind;

/// Boss energy at or below this is phase 3.
pub const PHASE_3_ENERGY: i32 = 18;
/// Boss energy at or below this (and above the phase 3 line) is phase 2.
pub const PHASE_2_ENERGY: i32 = 35;

/// Aggression tier derived purely from remaining energy. Monotonic with
/// energy by construction: thresholds, not timers.
pub fn phase(energy: i32) -> u8 {
    if energy <= PHASE_3_ENERGY {
        3
    } else if energy <= PHASE_2_ENERGY {
        2
    } else {
        1
    }
}

/// A scripted boss maneuver, mutually exclusive with normal decisioning.
/// One variant per maneuver, each carrying only what it needs; `dir` is
/// -1.0 (left) or 1.0 (right), `until` and `since` are simulated seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossAction {
    /// Wind-up before a sprint. The boss faces the player and freezes.
    Telegraph { until: f64, dir: f32 },
    /// Dash at a phase-scaled multiple of base speed.
    Sprint { until: f64, dir: f32, speed_mult: f32 },
    /// Short backward dash out of close range.
    Retreat { until: f64, dir: f32 },
    /// Hop back off a deflected stomp, with a small arc.
    Backstep { since: f64, until: f64, dir: f32, base_y: f32, hop: f32 },
    /// Jump toward the player; landing applies area damage.
    Slam { since: f64, until: f64, dir: f32, base_y: f32, hop: f32 },
}

impl BossAction {
    pub fn kind(&self) -> BossActionKind {
        match self {
            Self::Telegraph { .. } => BossActionKind::Telegraph,
            Self::Sprint { .. } => BossActionKind::Sprint,
            Self::Retreat { .. } => BossActionKind::Retreat,
            Self::Backstep { .. } => BossActionKind::Backstep,
            Self::Slam { .. } => BossActionKind::Slam,
        }
    }

    pub fn until(&self) -> f64 {
        match *self {
            Self::Telegraph { until, .. }
            | Self::Sprint { until, .. }
            | Self::Retreat { until, .. }
            | Self::Backstep { until, .. }
            | Self::Slam { until, .. } => until,
        }
    }
}

/// Behavior bookkeeping for the boss: the running action plus the
/// cooldowns and flags the decision ladder reads.
#[derive(Debug, Clone)]
pub struct BossState {
    pub action: Option<BossAction>,
    /// When contact damage last applied (its own cooldown, shorter than
    /// the player's hurt window).
    pub last_contact: f64,
    /// When the last slam started, for the phase-scaled slam cooldown.
    pub last_slam: f64,
    /// Set once the player first comes into sight; gates the alert show.
    pub engaged: bool,
    /// End of the one-time alert display.
    pub alert_until: f64,
    /// Player directly ahead this tick; drives the attack frames.
    pub attacking: bool,
    /// Set by contact resolution when a stomp bounced off the boss;
    /// consumed by the decision ladder to trigger a backstep.
    pub stomp_deflect: bool,
}

impl BossState {
    pub fn new() -> Self {
        Self {
            action: None,
            last_contact: f64::NEG_INFINITY,
            last_slam: f64::NEG_INFINITY,
            engaged: false,
            alert_until: f64::NEG_INFINITY,
            attacking: false,
            stomp_deflect: false,
        }
    }
}

impl Default for BossState {
    fn default() -> Self {
        Self::new()
    }
}
