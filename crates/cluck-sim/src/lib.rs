pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod level;
pub mod snapshot;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{ArenaBounds, SimConfig};
pub use api::types::{BossActionKind, EntityId, IdAlloc, SimEvent};
pub use api::world::World;
pub use components::animation::{AnimClip, AnimState, Animator};
pub use components::body::PhysicsBody;
pub use components::boss::{BossAction, BossState};
pub use components::entity::{Entity, EntityKind};
pub use components::health::Health;
pub use components::hitbox::{Hitbox, Rect};
pub use components::layer::RenderLayer;
// `crate::` disambiguates our core module from the built-in crate.
pub use crate::core::clock::{FixedTimestep, Interval, SimClock};
pub use crate::core::physics::{FLOOR_Y, GRAVITY_ACCEL};
pub use crate::core::scene::Scene;
pub use input::keys::{InputEvent, KeyState};
pub use level::def::{CoinSpawn, EnemyKindDef, EnemySpawn, LevelDef, LevelError};
pub use snapshot::frame::{RenderSprite, SnapshotBuffer, SPRITE_FLAG_MIRROR};
pub use systems::combat::Inventory;
