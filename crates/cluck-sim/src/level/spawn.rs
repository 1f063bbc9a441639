//! Entity factories. All geometry lives here so the systems can reason
//! about boxes without per-kind magic numbers scattered around.

use glam::Vec2;

use crate::api::types::{EntityId, IdAlloc};
use crate::components::animation::{AnimState, Animator};
use crate::components::body::PhysicsBody;
use crate::components::boss::BossState;
use crate::components::entity::{Entity, EntityKind};
use crate::components::health::Health;
use crate::components::hitbox::Hitbox;
use crate::components::layer::RenderLayer;
use crate::core::physics::{GRAVITY_ACCEL, PLAYER_REST_Y};
use crate::level::def::{EnemyKindDef, LevelDef};

pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_SIZE: Vec2 = Vec2::new(120.0, 240.0);
/// Trimmed collision box inside the padded player sprite.
pub const PLAYER_HITBOX_OFFSET: Vec2 = Vec2::new(20.0, 100.0);
pub const PLAYER_HITBOX_SIZE: Vec2 = Vec2::new(80.0, 130.0);
pub const PLAYER_ENERGY: i32 = 600;
pub const PLAYER_WALK_SPEED: f32 = 10.0;
pub const PLAYER_JUMP_SPEED: f32 = 30.0;

pub const CHICKEN_SIZE: Vec2 = Vec2::new(70.0, 70.0);
pub const SMALL_CHICKEN_SIZE: Vec2 = Vec2::new(50.0, 50.0);
pub const CHICKEN_ENERGY: i32 = 5;
const CHICKEN_WALK_DEFAULT: f32 = 0.25;
const SMALL_CHICKEN_WALK_DEFAULT: f32 = 0.4;

pub const BOSS_SIZE: Vec2 = Vec2::new(250.0, 230.0);
pub const BOSS_ENERGY: i32 = 100;

pub const BOTTLE_PICKUP_SIZE: Vec2 = Vec2::new(50.0, 60.0);
pub const THROWN_BOTTLE_SIZE: Vec2 = Vec2::new(30.0, 30.0);
/// Initial upward speed of a thrown bottle; horizontal speed is the
/// entity's walk speed.
pub const THROWN_BOTTLE_RISE: f32 = 15.0;
pub const THROWN_BOTTLE_SPEED_X: f32 = 8.0;

pub const COIN_SIZE: Vec2 = Vec2::new(40.0, 40.0);
pub const CLOUD_SIZE: Vec2 = Vec2::new(500.0, 250.0);
const CLOUD_Y: f32 = 20.0;
const CLOUD_DRIFT: f32 = 0.25;
pub const BACKDROP_SIZE: Vec2 = Vec2::new(720.0, 480.0);

/// Ground dwellers sit with their visual bottom on the floor line.
fn ground_y(size: Vec2) -> f32 {
    crate::core::physics::FLOOR_Y - size.y
}

pub fn player(id: EntityId) -> Entity {
    Entity::new(id, EntityKind::Player)
        .with_pos(Vec2::new(PLAYER_START_X, PLAYER_REST_Y))
        .with_size(PLAYER_SIZE)
        .with_layer(RenderLayer::Player)
        .with_walk_speed(PLAYER_WALK_SPEED)
        .with_health(Health::new(PLAYER_ENERGY, true))
        .with_body(PhysicsBody::new(GRAVITY_ACCEL, PLAYER_REST_Y))
        .with_hitbox(Hitbox::new(PLAYER_HITBOX_OFFSET, PLAYER_HITBOX_SIZE))
        .with_animator(Animator::new(AnimState::JumpLanding, 0.0))
}

pub fn chicken(id: EntityId, x: f32, walk_speed: Option<f32>) -> Entity {
    Entity::new(id, EntityKind::Chicken)
        .with_pos(Vec2::new(x, ground_y(CHICKEN_SIZE)))
        .with_size(CHICKEN_SIZE)
        .with_layer(RenderLayer::Enemies)
        .with_walk_speed(walk_speed.unwrap_or(CHICKEN_WALK_DEFAULT))
        .with_facing_left(true)
        .with_health(Health::new(CHICKEN_ENERGY, false))
        .with_animator(Animator::new(AnimState::Walking, 0.0))
}

pub fn small_chicken(id: EntityId, x: f32, walk_speed: Option<f32>) -> Entity {
    Entity::new(id, EntityKind::SmallChicken)
        .with_pos(Vec2::new(x, ground_y(SMALL_CHICKEN_SIZE)))
        .with_size(SMALL_CHICKEN_SIZE)
        .with_layer(RenderLayer::Enemies)
        .with_walk_speed(walk_speed.unwrap_or(SMALL_CHICKEN_WALK_DEFAULT))
        .with_facing_left(true)
        .with_health(Health::new(CHICKEN_ENERGY, false))
        .with_animator(Animator::new(AnimState::Walking, 0.0))
}

pub fn boss(id: EntityId, x: f32) -> Entity {
    Entity::new(id, EntityKind::Boss)
        .with_pos(Vec2::new(x, ground_y(BOSS_SIZE)))
        .with_size(BOSS_SIZE)
        .with_layer(RenderLayer::Enemies)
        .with_facing_left(true)
        .with_health(Health::new(BOSS_ENERGY, false))
        .with_animator(Animator::new(AnimState::Walking, 0.0))
        .with_boss_state(BossState::new())
}

pub fn bottle_pickup(id: EntityId, x: f32) -> Entity {
    Entity::new(id, EntityKind::Bottle)
        .with_pos(Vec2::new(x, ground_y(BOTTLE_PICKUP_SIZE)))
        .with_size(BOTTLE_PICKUP_SIZE)
        .with_layer(RenderLayer::Pickups)
        .with_collectible(true)
        .with_animator(Animator::new(AnimState::Idle, 0.0))
}

/// A bottle in flight. Free-falling so it can drop below the floor
/// line and shatter there.
pub fn thrown_bottle(id: EntityId, pos: Vec2, facing_left: bool, now: f64) -> Entity {
    Entity::new(id, EntityKind::Bottle)
        .with_pos(pos)
        .with_size(THROWN_BOTTLE_SIZE)
        .with_layer(RenderLayer::Projectiles)
        .with_walk_speed(THROWN_BOTTLE_SPEED_X)
        .with_facing_left(facing_left)
        .with_body(PhysicsBody::free_falling(GRAVITY_ACCEL, THROWN_BOTTLE_RISE))
        .with_animator(Animator::new(AnimState::Spin, now))
}

pub fn coin(id: EntityId, x: f32, y: f32) -> Entity {
    Entity::new(id, EntityKind::Coin)
        .with_pos(Vec2::new(x, y))
        .with_size(COIN_SIZE)
        .with_layer(RenderLayer::Pickups)
        .with_collectible(true)
        .with_animator(Animator::new(AnimState::Idle, 0.0))
}

pub fn cloud(id: EntityId, x: f32) -> Entity {
    Entity::new(id, EntityKind::Cloud)
        .with_pos(Vec2::new(x, CLOUD_Y))
        .with_size(CLOUD_SIZE)
        .with_layer(RenderLayer::Clouds)
        .with_walk_speed(CLOUD_DRIFT)
        .with_facing_left(true)
}

pub fn backdrop(id: EntityId, x: f32) -> Entity {
    Entity::new(id, EntityKind::Backdrop)
        .with_pos(Vec2::new(x, 0.0))
        .with_size(BACKDROP_SIZE)
        .with_layer(RenderLayer::Backdrop)
}

/// Build the scene a level definition describes. Spawn order fixes
/// draw order within each layer, and the player is always last so
/// `Scene::despawn` churn elsewhere never reorders it relative to
/// same-layer sprites.
pub fn populate(def: &LevelDef, scene: &mut crate::core::scene::Scene, ids: &mut IdAlloc) {
    for &x in &def.backdrops {
        scene.spawn(backdrop(ids.alloc(), x));
    }
    for &x in &def.clouds {
        scene.spawn(cloud(ids.alloc(), x));
    }
    for c in &def.coins {
        scene.spawn(coin(ids.alloc(), c.x, c.y));
    }
    for &x in &def.bottles {
        scene.spawn(bottle_pickup(ids.alloc(), x));
    }
    for e in &def.enemies {
        let spawned = match e.kind {
            EnemyKindDef::Chicken => chicken(ids.alloc(), e.x, e.walk_speed),
            EnemyKindDef::SmallChicken => small_chicken(ids.alloc(), e.x, e.walk_speed),
        };
        scene.spawn(spawned);
    }
    if let Some(x) = def.boss_x {
        scene.spawn(boss(ids.alloc(), x));
    }
    scene.spawn(player(ids.alloc()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::physics::FLOOR_Y;
    use crate::core::scene::Scene;

    #[test]
    fn ground_dwellers_stand_on_the_floor_line() {
        let mut ids = IdAlloc::default();
        for e in [
            chicken(ids.alloc(), 300.0, None),
            small_chicken(ids.alloc(), 300.0, None),
            boss(ids.alloc(), 1800.0),
            bottle_pickup(ids.alloc(), 300.0),
        ] {
            assert_eq!(e.rect().bottom(), FLOOR_Y, "{:?}", e.kind);
        }
        let p = player(ids.alloc());
        assert_eq!(p.rect().bottom(), FLOOR_Y);
        assert_eq!(p.pos.y, PLAYER_REST_Y);
    }

    #[test]
    fn player_collision_box_is_narrower_than_sprite() {
        let p = player(EntityId(1));
        let hit = p.collision_rect();
        let vis = p.rect();
        assert!(hit.left() > vis.left() && hit.right() < vis.right());
        assert!(hit.top() > vis.top());
        assert_eq!(hit.w, 80.0);
        assert_eq!(hit.h, 130.0);
    }

    #[test]
    fn thrown_bottle_flies_and_is_not_collectible() {
        let b = thrown_bottle(EntityId(9), Vec2::new(200.0, 260.0), false, 1.5);
        assert!(!b.collectible);
        let body = b.body.unwrap();
        assert_eq!(body.speed_y, THROWN_BOTTLE_RISE);
        assert!(!body.rests_on_ground);
        assert_eq!(b.layer, RenderLayer::Projectiles);
    }

    #[test]
    fn populate_spawns_everything_with_player_last() {
        let def = LevelDef::classic_run(3);
        let mut scene = Scene::new();
        let mut ids = IdAlloc::default();
        populate(&def, &mut scene, &mut ids);

        let expected = def.backdrops.len()
            + def.clouds.len()
            + def.coins.len()
            + def.bottles.len()
            + def.enemies.len()
            + 1 // boss
            + 1; // player
        assert_eq!(scene.len(), expected);
        assert_eq!(scene.iter().last().unwrap().kind, EntityKind::Player);
        assert!(scene.boss().is_some());

        let mut seen = std::collections::HashSet::new();
        assert!(
            scene.iter().all(|e| seen.insert(e.id)),
            "ids must be unique"
        );
    }

    #[test]
    fn bossless_level_populates_without_boss() {
        let def = LevelDef {
            boss_x: None,
            ..LevelDef::classic_run(3)
        };
        let mut scene = Scene::new();
        let mut ids = IdAlloc::default();
        populate(&def, &mut scene, &mut ids);
        assert!(scene.boss().is_none());
        assert!(scene.player().is_some());
    }
}
