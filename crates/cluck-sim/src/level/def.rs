use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a level definition was rejected.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("invalid level JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level end must be positive, got {0}")]
    BadLevelEnd(f32),
    #[error("{what} at x={x} lies outside the level (end is {end})")]
    OutOfBounds { what: &'static str, x: f32, end: f32 },
    #[error("enemy at x={x} has negative walk speed {speed}")]
    NegativeSpeed { x: f32, speed: f32 },
}

/// Which walker an enemy spawn produces. The boss is placed separately
/// via `boss_x`; there is at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKindDef {
    Chicken,
    SmallChicken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub kind: EnemyKindDef,
    pub x: f32,
    /// Roam speed in units per movement tick; a per-kind default applies
    /// when omitted.
    #[serde(default)]
    pub walk_speed: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinSpawn {
    pub x: f32,
    pub y: f32,
}

/// A level: ordered spawn lists plus the x coordinate bounding player
/// and boss movement. Spawn order is draw order within a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub level_end_x: f32,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    #[serde(default)]
    pub clouds: Vec<f32>,
    #[serde(default)]
    pub coins: Vec<CoinSpawn>,
    /// Ground bottle pickups, by x position.
    #[serde(default)]
    pub bottles: Vec<f32>,
    /// Full-height background tiles, by x position. Parallax treatment
    /// belongs to the shell.
    #[serde(default)]
    pub backdrops: Vec<f32>,
    /// Where the boss stands, if the level has one.
    #[serde(default)]
    pub boss_x: Option<f32>,
}

impl LevelDef {
    /// Parse and validate a level from JSON.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let def: LevelDef = serde_json::from_str(json)?;
        def.validate()?;
        Ok(def)
    }

    /// Check bounds and speeds. A level without enemies or without a
    /// boss is valid; the simulation degrades those paths to no-ops.
    pub fn validate(&self) -> Result<(), LevelError> {
        let end = self.level_end_x;
        if !(end > 0.0) {
            return Err(LevelError::BadLevelEnd(end));
        }
        for e in &self.enemies {
            if e.x < 0.0 || e.x > end {
                return Err(LevelError::OutOfBounds { what: "enemy", x: e.x, end });
            }
            if let Some(speed) = e.walk_speed {
                if speed < 0.0 {
                    return Err(LevelError::NegativeSpeed { x: e.x, speed });
                }
            }
        }
        for c in &self.coins {
            if c.x < 0.0 || c.x > end || c.y < 0.0 {
                return Err(LevelError::OutOfBounds { what: "coin", x: c.x, end });
            }
        }
        for &x in &self.bottles {
            if x < 0.0 || x > end {
                return Err(LevelError::OutOfBounds { what: "bottle", x, end });
            }
        }
        if let Some(x) = self.boss_x {
            if x < 0.0 || x > end {
                return Err(LevelError::OutOfBounds { what: "boss", x, end });
            }
        }
        Ok(())
    }

    /// The stock arena: a long run of chickens and pickups ending at the
    /// boss. Seeded jitter keeps runs varied but reproducible.
    pub fn classic_run(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let level_end_x = 2200.0;

        let backdrops = (0..4).map(|i| i as f32 * 719.0).collect();
        let clouds = (0..5)
            .map(|i| i as f32 * 450.0 + rng.range_f32(0.0, 200.0))
            .collect();

        let coins = (0..8)
            .map(|i| CoinSpawn {
                x: 500.0 + i as f32 * 150.0 + rng.range_f32(-30.0, 30.0),
                y: rng.range_f32(260.0, 300.0),
            })
            .collect();

        let bottles = (0..6)
            .map(|i| 420.0 + i as f32 * 180.0 + rng.range_f32(-40.0, 40.0))
            .collect();

        let mut enemies = Vec::new();
        for i in 0..4 {
            enemies.push(EnemySpawn {
                kind: EnemyKindDef::Chicken,
                x: 500.0 + i as f32 * 320.0 + rng.range_f32(0.0, 120.0),
                walk_speed: Some(rng.range_f32(0.15, 0.4)),
            });
        }
        for i in 0..3 {
            enemies.push(EnemySpawn {
                kind: EnemyKindDef::SmallChicken,
                x: 650.0 + i as f32 * 380.0 + rng.range_f32(0.0, 120.0),
                walk_speed: Some(rng.range_f32(0.3, 0.55)),
            });
        }

        Self {
            level_end_x,
            enemies,
            clouds,
            coins,
            bottles,
            backdrops,
            boss_x: Some(1950.0),
        }
    }
}

/// Small deterministic xorshift generator for spawn jitter. Not for
/// anything cryptographic.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // Xorshift must never hold a zero state.
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in [lo, hi).
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}
