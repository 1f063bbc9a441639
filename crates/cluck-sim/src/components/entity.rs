use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::animation::Animator;
use crate::components::body::PhysicsBody;
use crate::components::boss::BossState;
use crate::components::health::Health;
use crate::components::hitbox::{Hitbox, Rect};
use crate::components::layer::RenderLayer;

/// What an entity is. A flat tag instead of a type hierarchy; systems
/// branch on it where behavior genuinely differs per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EntityKind {
    Player = 0,
    Chicken = 1,
    SmallChicken = 2,
    Boss = 3,
    Bottle = 4,
    Coin = 5,
    Cloud = 6,
    Backdrop = 7,
}

impl EntityKind {
    /// Kinds that can be stomped, side-hit, or struck by bottles.
    pub fn is_enemy(self) -> bool {
        matches!(self, Self::Chicken | Self::SmallChicken | Self::Boss)
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert from a u8 value. Returns None if out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Player),
            1 => Some(Self::Chicken),
            2 => Some(Self::SmallChicken),
            3 => Some(Self::Boss),
            4 => Some(Self::Bottle),
            5 => Some(Self::Coin),
            6 => Some(Self::Cloud),
            7 => Some(Self::Backdrop),
            _ => None,
        }
    }
}

/// Fat entity — one struct with optional capability components instead
/// of a class tree. Decorations carry almost none of them; the player
/// and boss carry most.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left corner in world units, Y-down.
    pub pos: Vec2,
    /// Visual box size; also the default collision box.
    pub size: Vec2,
    /// Mirrors rendering and feeds the rear-contact rule.
    pub facing_left: bool,
    pub layer: RenderLayer,
    /// Roam speed in units per movement tick (walkers and clouds).
    pub walk_speed: f32,
    /// True for ground bottles waiting to be picked up; thrown bottles
    /// have it false.
    pub collectible: bool,
    pub health: Option<Health>,
    pub body: Option<PhysicsBody>,
    pub hitbox: Option<Hitbox>,
    pub animator: Option<Animator>,
    pub boss: Option<BossState>,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            facing_left: false,
            layer: RenderLayer::default(),
            walk_speed: 0.0,
            collectible: false,
            health: None,
            body: None,
            hitbox: None,
            animator: None,
            boss: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_walk_speed(mut self, speed: f32) -> Self {
        self.walk_speed = speed;
        self
    }

    pub fn with_facing_left(mut self, facing_left: bool) -> Self {
        self.facing_left = facing_left;
        self
    }

    pub fn with_collectible(mut self, collectible: bool) -> Self {
        self.collectible = collectible;
        self
    }

    pub fn with_health(mut self, health: Health) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_hitbox(mut self, hitbox: Hitbox) -> Self {
        self.hitbox = Some(hitbox);
        self
    }

    pub fn with_animator(mut self, animator: Animator) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn with_boss_state(mut self, boss: BossState) -> Self {
        self.boss = Some(boss);
        self
    }

    // -- Box queries --

    /// The visual box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// The collision box: the hitbox override when present, else the
    /// visual box.
    pub fn collision_rect(&self) -> Rect {
        match &self.hitbox {
            Some(hb) => hb.resolve(self.pos),
            None => self.rect(),
        }
    }

    /// Horizontal center of the collision box.
    pub fn center_x(&self) -> f32 {
        self.collision_rect().center_x()
    }

    /// Dead iff energy reached zero. Entities without health never die.
    pub fn is_dead(&self) -> bool {
        self.health.as_ref().is_some_and(|h| h.is_dead())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::AnimState;

    #[test]
    fn builders_set_components() {
        let e = Entity::new(EntityId(1), EntityKind::Player)
            .with_pos(Vec2::new(100.0, 180.0))
            .with_size(Vec2::new(120.0, 240.0))
            .with_health(Health::new(600, true))
            .with_body(PhysicsBody::new(2.5, 180.0))
            .with_animator(Animator::new(AnimState::JumpLanding, 0.0));
        assert_eq!(e.pos, Vec2::new(100.0, 180.0));
        assert!(e.health.is_some());
        assert!(e.body.is_some());
        assert!(e.animator.is_some());
        assert!(e.boss.is_none());
    }

    #[test]
    fn collision_rect_prefers_hitbox_override() {
        let plain = Entity::new(EntityId(1), EntityKind::Chicken)
            .with_pos(Vec2::new(10.0, 20.0))
            .with_size(Vec2::new(70.0, 70.0));
        assert_eq!(plain.collision_rect(), plain.rect());

        let padded = plain.with_hitbox(Hitbox::new(Vec2::new(5.0, 8.0), Vec2::new(60.0, 55.0)));
        let r = padded.collision_rect();
        assert_eq!(r, Rect::new(15.0, 28.0, 60.0, 55.0));
        assert_ne!(r, padded.rect());
    }

    #[test]
    fn enemy_kinds() {
        assert!(EntityKind::Chicken.is_enemy());
        assert!(EntityKind::SmallChicken.is_enemy());
        assert!(EntityKind::Boss.is_enemy());
        assert!(!EntityKind::Player.is_enemy());
        assert!(!EntityKind::Coin.is_enemy());
    }

    #[test]
    fn kind_round_trip_u8() {
        for v in 0..8u8 {
            assert_eq!(EntityKind::from_u8(v).unwrap().as_u8(), v);
        }
        assert!(EntityKind::from_u8(8).is_none());
    }

    #[test]
    fn dead_only_with_zero_energy() {
        let mut e = Entity::new(EntityId(1), EntityKind::Chicken).with_health(Health::new(5, false));
        assert!(!e.is_dead());
        e.health.as_mut().unwrap().kill(1.0);
        assert!(e.is_dead());

        let decoration = Entity::new(EntityId(2), EntityKind::Cloud);
        assert!(!decoration.is_dead(), "decorations never report dead");
    }
}
