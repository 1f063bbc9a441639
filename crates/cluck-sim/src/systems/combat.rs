//! Contact system — stomp and touch classification, bottle impacts,
//! pickups, throws and corpse cleanup. Runs on the contact cadence,
//! not every step; the boss's own contact damage lives with the boss
//! behavior so it can use a tighter cooldown.

use glam::Vec2;

use crate::api::config::ArenaBounds;
use crate::api::types::{EntityId, IdAlloc, SimEvent};
use crate::components::boss::{self, BossAction};
use crate::components::entity::EntityKind;
use crate::components::hitbox::Rect;
use crate::core::physics::FLOOR_Y;
use crate::core::scene::Scene;
use crate::input::keys::KeyState;
use crate::level::spawn;

/// Upward speed granted by a successful stomp.
pub const STOMP_BOUNCE: f32 = 15.0;
/// How deep the player's feet may sink past an enemy's top edge and
/// still count as landing on it.
const STOMP_MAX_PENETRATION: f32 = 30.0;
const STOMP_MIN_OVERLAP: f32 = 15.0;
/// The player's center may be this far outside the enemy's span.
const STOMP_CENTER_SLACK: f32 = 10.0;
/// Falling this close over an enemy's top never counts as touched.
const TOP_GRACE: f32 = 15.0;
const MIN_SIDE_OVERLAP_Y: f32 = 5.0;
/// Near-touch allowance toward the side the player faces.
const FRONT_TOUCH_GAP: f32 = 2.0;
/// Behind the player the sprites pad wide, so contact reaches further.
const REAR_TOUCH_GAP: f32 = 55.0;

pub const CHICKEN_TOUCH_DAMAGE: i32 = 5;
pub const BOTTLE_DAMAGE: i32 = 10;
pub const BOTTLE_CARRY_CAP: u32 = 5;
pub const THROW_COOLDOWN: f64 = 0.5;
/// How long a dead chicken stays on the ground before it is removed.
const CORPSE_LINGER: f64 = 1.0;

const PICKUP_INSET: f32 = 8.0;
const FEET_BOX: Vec2 = Vec2::new(70.0, 40.0);
const MIN_PICKUP_OVERLAP: f32 = 10.0;
/// Thrown bottles this far outside the arena just vanish.
const OFFSCREEN_MARGIN: f32 = 100.0;

/// What the player is carrying, plus the throw cooldown clock.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub bottles: u32,
    pub coins: u32,
    pub last_throw: f64,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            bottles: 0,
            coins: 0,
            last_throw: f64::NEG_INFINITY,
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

/// The player facts every contact rule reads, captured once up front so
/// the enemy loop can mutate freely.
struct PlayerFacts {
    pos: Vec2,
    hitbox: Rect,
    center_x: f32,
    falling: bool,
    facing_left: bool,
}

enum Contact {
    None,
    Stomp,
    Side,
}

/// Resolve one contact pass: thrown bottles, player-versus-enemy
/// classification, pickups, throws, then pruning.
pub fn resolve_contacts(
    scene: &mut Scene,
    inv: &mut Inventory,
    keys: &KeyState,
    ids: &mut IdAlloc,
    bounds: ArenaBounds,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    let mut removed: Vec<EntityId> = Vec::new();

    resolve_bottles(scene, bounds, now, events, &mut removed);

    let player = scene.player().filter(|p| !p.is_dead()).map(|p| {
        let hitbox = p.collision_rect();
        PlayerFacts {
            pos: p.pos,
            center_x: hitbox.center_x(),
            hitbox,
            falling: p.body.as_ref().is_some_and(|b| b.falling()),
            facing_left: p.facing_left,
        }
    });

    if let Some(p) = &player {
        resolve_enemy_contacts(scene, p, now, events);
        resolve_pickups(scene, p, inv, events, &mut removed);
        resolve_throw(scene, p, inv, keys, ids, now, events);
    }

    scene.retain(|e| {
        if removed.contains(&e.id) {
            return false;
        }
        match (e.kind, &e.health) {
            (EntityKind::Chicken | EntityKind::SmallChicken, Some(h)) => {
                !(h.is_dead() && now - h.last_hit >= CORPSE_LINGER)
            }
            _ => true,
        }
    });
}

/// The box an enemy is actually touched on. Sprite padding differs per
/// kind, so each gets its own trim.
pub fn enemy_profile(kind: EntityKind, rect: Rect) -> Rect {
    match kind {
        EntityKind::Chicken => rect.inset_sides(10.0, 6.0),
        EntityKind::SmallChicken => rect.inset_sides(8.0, 5.0),
        EntityKind::Boss => rect.inset(30.0, 20.0),
        _ => rect,
    }
}

fn resolve_bottles(
    scene: &mut Scene,
    bounds: ArenaBounds,
    now: f64,
    events: &mut Vec<SimEvent>,
    removed: &mut Vec<EntityId>,
) {
    let bottles: Vec<(EntityId, Rect)> = scene
        .iter()
        .filter(|e| e.kind == EntityKind::Bottle && !e.collectible)
        .map(|e| (e.id, e.rect()))
        .collect();
    if bottles.is_empty() {
        return;
    }
    let targets: Vec<(EntityId, Rect)> = scene
        .iter()
        .filter(|e| e.kind.is_enemy() && !e.is_dead())
        .map(|e| (e.id, enemy_profile(e.kind, e.rect())))
        .collect();

    for (bottle_id, rect) in bottles {
        if bounds.outside(rect.x, OFFSCREEN_MARGIN) {
            removed.push(bottle_id);
            continue;
        }
        let struck = targets.iter().find(|(_, t)| rect.overlaps(t)).map(|&(id, _)| id);
        if let Some(target_id) = struck {
            strike(scene, target_id, now, events);
        } else if rect.bottom() < FLOOR_Y {
            continue;
        }
        events.push(SimEvent::BottleShattered {
            x: rect.center_x(),
            y: rect.y + rect.h * 0.5,
        });
        removed.push(bottle_id);
    }
}

/// Apply one bottle impact to an enemy.
fn strike(scene: &mut Scene, target: EntityId, now: f64, events: &mut Vec<SimEvent>) {
    let Some(e) = scene.get_mut(target) else { return };
    let kind = e.kind;
    let Some(health) = e.health.as_mut() else { return };
    let before = health.energy();
    if !health.hit(BOTTLE_DAMAGE, now) {
        return;
    }
    let after = health.energy();

    if kind == EntityKind::Boss {
        if let Some(state) = e.boss.as_mut() {
            // A hit breaks the wind-up, but never a committed dash or jump.
            if matches!(state.action, Some(BossAction::Telegraph { .. })) {
                state.action = None;
            }
        }
        if after == 0 {
            log::info!("boss defeated");
            events.push(SimEvent::BossDefeated);
        } else if boss::phase(after) != boss::phase(before) {
            log::debug!("boss enters phase {} at {} energy", boss::phase(after), after);
            events.push(SimEvent::BossPhaseChanged { phase: boss::phase(after) });
        }
    } else if after == 0 {
        log::debug!("{:?} downed by a bottle", kind);
    }
}

fn resolve_enemy_contacts(
    scene: &mut Scene,
    p: &PlayerFacts,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    let enemy_ids: Vec<EntityId> = scene
        .iter()
        .filter(|e| e.kind.is_enemy() && !e.is_dead())
        .map(|e| e.id)
        .collect();

    let mut bounce = false;
    for id in enemy_ids {
        let Some(e) = scene.get(id) else { continue };
        let kind = e.kind;
        let profile = enemy_profile(kind, e.rect());

        match classify(p, &profile) {
            Contact::Stomp => {
                bounce = true;
                if kind == EntityKind::Boss {
                    // The boss shrugs a stomp off; the deflection is
                    // consumed by its behavior pass.
                    if let Some(state) = scene.get_mut(id).and_then(|e| e.boss.as_mut()) {
                        state.stomp_deflect = true;
                    }
                } else {
                    if let Some(h) = scene.get_mut(id).and_then(|e| e.health.as_mut()) {
                        h.kill(now);
                    }
                    log::debug!("{:?} stomped", kind);
                    events.push(SimEvent::EnemyStomped { id });
                }
            }
            Contact::Side => {
                // Boss touch damage has its own cadence in the boss pass.
                if kind != EntityKind::Boss {
                    hurt_player(scene, CHICKEN_TOUCH_DAMAGE, now, events);
                }
            }
            Contact::None => {}
        }
    }

    if bounce {
        if let Some(body) = scene.player_mut().and_then(|e| e.body.as_mut()) {
            body.speed_y = STOMP_BOUNCE;
        }
    }
}

/// Decide what a player-versus-enemy pairing amounts to this pass.
fn classify(p: &PlayerFacts, profile: &Rect) -> Contact {
    let pb = &p.hitbox;

    if p.falling && pb.overlaps(profile) {
        let penetration = pb.bottom() - profile.top();
        let min_overlap = STOMP_MIN_OVERLAP.min(profile.w * 0.25);
        if penetration <= STOMP_MAX_PENETRATION
            && pb.overlap_x(profile) >= min_overlap
            && p.center_x >= profile.left() - STOMP_CENTER_SLACK
            && p.center_x <= profile.right() + STOMP_CENTER_SLACK
        {
            return Contact::Stomp;
        }
    }
    if p.falling {
        let penetration = pb.bottom() - profile.top();
        if penetration > 0.0 && penetration <= TOP_GRACE {
            // Descending over the rim: about to stomp or miss, either
            // way not a touch.
            return Contact::None;
        }
    }

    if pb.overlap_y(profile) < MIN_SIDE_OVERLAP_Y {
        return Contact::None;
    }
    let gap = if profile.left() > pb.right() {
        profile.left() - pb.right()
    } else if pb.left() > profile.right() {
        pb.left() - profile.right()
    } else {
        0.0
    };
    let enemy_behind = if p.facing_left {
        profile.center_x() > p.center_x
    } else {
        profile.center_x() < p.center_x
    };
    let allowed = if enemy_behind { REAR_TOUCH_GAP } else { FRONT_TOUCH_GAP };
    if gap <= allowed {
        Contact::Side
    } else {
        Contact::None
    }
}

pub(crate) fn hurt_player(scene: &mut Scene, amount: i32, now: f64, events: &mut Vec<SimEvent>) {
    let Some(h) = scene.player_mut().and_then(|e| e.health.as_mut()) else {
        return;
    };
    if h.hit(amount, now) {
        events.push(SimEvent::PlayerHurt { energy: h.energy() });
        if h.is_dead() {
            log::info!("player defeated");
            events.push(SimEvent::PlayerDefeated);
        }
    }
}

fn resolve_pickups(
    scene: &Scene,
    p: &PlayerFacts,
    inv: &mut Inventory,
    events: &mut Vec<SimEvent>,
    removed: &mut Vec<EntityId>,
) {
    let feet = Rect::new(
        p.center_x - FEET_BOX.x * 0.5,
        p.hitbox.bottom() - FEET_BOX.y,
        FEET_BOX.x,
        FEET_BOX.y,
    );

    for e in scene.iter().filter(|e| e.collectible) {
        let item = e.rect().inset(PICKUP_INSET, PICKUP_INSET);
        if feet.overlap_x(&item) < MIN_PICKUP_OVERLAP || feet.overlap_y(&item) < MIN_PICKUP_OVERLAP
        {
            continue;
        }
        match e.kind {
            EntityKind::Coin => {
                inv.coins += 1;
                events.push(SimEvent::CoinCollected { total: inv.coins });
                removed.push(e.id);
            }
            EntityKind::Bottle => {
                // At the carry cap the bottle stays where it is.
                if inv.bottles < BOTTLE_CARRY_CAP {
                    inv.bottles += 1;
                    events.push(SimEvent::BottleCollected { total: inv.bottles });
                    removed.push(e.id);
                }
            }
            _ => {}
        }
    }
}

fn resolve_throw(
    scene: &mut Scene,
    p: &PlayerFacts,
    inv: &mut Inventory,
    keys: &KeyState,
    ids: &mut IdAlloc,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    if !keys.throw || inv.bottles == 0 || now - inv.last_throw < THROW_COOLDOWN {
        return;
    }
    let hand = Vec2::new(
        if p.facing_left {
            p.pos.x + 10.0
        } else {
            p.pos.x + spawn::PLAYER_SIZE.x - 40.0
        },
        p.pos.y + 130.0,
    );
    scene.spawn(spawn::thrown_bottle(ids.alloc(), hand, p.facing_left, now));
    inv.bottles -= 1;
    inv.last_throw = now;
    events.push(SimEvent::BottleThrown);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: ArenaBounds = ArenaBounds { min_x: 0.0, max_x: 2200.0 };

    struct Rig {
        scene: Scene,
        inv: Inventory,
        ids: IdAlloc,
        events: Vec<SimEvent>,
    }

    impl Rig {
        fn new() -> Self {
            let mut ids = IdAlloc::new();
            let mut scene = Scene::new();
            scene.spawn(spawn::player(ids.alloc()));
            Self {
                scene,
                inv: Inventory::new(),
                ids,
                events: Vec::new(),
            }
        }

        fn resolve(&mut self, keys: &KeyState, now: f64) {
            resolve_contacts(
                &mut self.scene,
                &mut self.inv,
                keys,
                &mut self.ids,
                BOUNDS,
                now,
                &mut self.events,
            );
        }

        fn player_energy(&self) -> i32 {
            self.scene.player().unwrap().health.as_ref().unwrap().energy()
        }

        /// Put the player falling onto the point `(x, top)` so that its
        /// collision box bottom sits `penetration` below `top`.
        fn drop_player_onto(&mut self, center_x: f32, top: f32, penetration: f32) {
            let p = self.scene.player_mut().unwrap();
            p.pos.x = center_x - 60.0; // collision box center is pos.x + 60
            p.pos.y = top + penetration - 230.0; // box bottom is pos.y + 230
            p.body.as_mut().unwrap().speed_y = -5.0;
        }
    }

    #[test]
    fn stomp_kills_chicken_and_bounces_player() {
        let mut rig = Rig::new();
        let chicken_id = rig.ids.alloc();
        rig.scene.spawn(spawn::chicken(chicken_id, 500.0, None));
        // Chicken box top is 350; profile spans x 510..564.
        rig.drop_player_onto(537.0, 350.0, 10.0);

        rig.resolve(&KeyState::default(), 1.0);

        assert!(rig.scene.get(chicken_id).unwrap().is_dead());
        assert!(rig.events.contains(&SimEvent::EnemyStomped { id: chicken_id }));
        let body = rig.scene.player().unwrap().body.as_ref().unwrap();
        assert_eq!(body.speed_y, STOMP_BOUNCE);
        assert_eq!(rig.player_energy(), spawn::PLAYER_ENERGY, "stomps are free");
    }

    #[test]
    fn rising_through_an_enemy_is_a_touch_not_a_stomp() {
        let mut rig = Rig::new();
        let chicken_id = rig.ids.alloc();
        rig.scene.spawn(spawn::chicken(chicken_id, 500.0, None));
        rig.drop_player_onto(537.0, 350.0, 10.0);
        rig.scene.player_mut().unwrap().body.as_mut().unwrap().speed_y = 5.0;

        rig.resolve(&KeyState::default(), 1.0);

        assert!(!rig.scene.get(chicken_id).unwrap().is_dead());
        assert_eq!(rig.player_energy(), spawn::PLAYER_ENERGY - CHICKEN_TOUCH_DAMAGE);
    }

    #[test]
    fn off_center_landing_gets_grace_instead_of_damage() {
        let mut rig = Rig::new();
        let chicken_id = rig.ids.alloc();
        rig.scene.spawn(spawn::chicken(chicken_id, 500.0, None));
        // Center 580 is past the profile right edge (564) plus slack.
        rig.drop_player_onto(580.0, 350.0, 10.0);

        rig.resolve(&KeyState::default(), 1.0);

        assert!(!rig.scene.get(chicken_id).unwrap().is_dead());
        assert_eq!(rig.player_energy(), spawn::PLAYER_ENERGY, "rim grace blocks the touch");
        assert!(rig.events.is_empty());
    }

    #[test]
    fn side_touch_damages_once_per_hurt_window() {
        let mut rig = Rig::new();
        rig.scene.spawn(spawn::chicken(rig.ids.alloc(), 545.0, None));
        rig.scene.player_mut().unwrap().pos.x = 460.0;

        rig.resolve(&KeyState::default(), 1.0);
        assert_eq!(rig.player_energy(), 595);
        assert!(rig.events.contains(&SimEvent::PlayerHurt { energy: 595 }));

        rig.resolve(&KeyState::default(), 1.2);
        assert_eq!(rig.player_energy(), 595, "hurt window suppresses the repeat");

        rig.resolve(&KeyState::default(), 2.1);
        assert_eq!(rig.player_energy(), 590, "window expired, touch lands again");
    }

    #[test]
    fn rear_gap_reaches_further_than_front_gap() {
        let mut rig = Rig::new();
        let chicken_id = rig.ids.alloc();
        // Player box spans 620..700; chicken profile ends at 566: gap 54.
        rig.scene.spawn(spawn::chicken(chicken_id, 502.0, None));
        rig.scene.player_mut().unwrap().pos.x = 600.0;

        rig.scene.player_mut().unwrap().facing_left = false;
        rig.resolve(&KeyState::default(), 1.0);
        assert_eq!(rig.player_energy(), 595, "rear gap of 54 still touches");

        // Facing the chicken, the same gap is out of reach.
        let mut rig = Rig::new();
        rig.scene.spawn(spawn::chicken(rig.ids.alloc(), 502.0, None));
        {
            let p = rig.scene.player_mut().unwrap();
            p.pos.x = 600.0;
            p.facing_left = true;
        }
        rig.resolve(&KeyState::default(), 1.0);
        assert_eq!(rig.player_energy(), 600);
    }

    #[test]
    fn bottle_shatters_on_a_chicken_and_kills_it() {
        let mut rig = Rig::new();
        let chicken_id = rig.ids.alloc();
        rig.scene.spawn(spawn::chicken(chicken_id, 500.0, None));
        let bottle_id = rig.ids.alloc();
        rig.scene.spawn(spawn::thrown_bottle(
            bottle_id,
            Vec2::new(530.0, 370.0),
            false,
            0.0,
        ));

        rig.resolve(&KeyState::default(), 1.0);

        assert!(rig.scene.get(bottle_id).is_none(), "bottle is gone");
        assert!(rig.scene.get(chicken_id).unwrap().is_dead());
        assert!(rig
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::BottleShattered { .. })));
    }

    #[test]
    fn bottle_shatters_on_the_floor() {
        let mut rig = Rig::new();
        let bottle_id = rig.ids.alloc();
        let mut b = spawn::thrown_bottle(bottle_id, Vec2::new(900.0, 395.0), false, 0.0);
        b.pos.y = 395.0; // bottom at 425, past the floor line
        rig.scene.spawn(b);

        rig.resolve(&KeyState::default(), 1.0);

        assert!(rig.scene.get(bottle_id).is_none());
        assert!(rig
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::BottleShattered { .. })));
    }

    #[test]
    fn airborne_bottle_flies_on_untouched() {
        let mut rig = Rig::new();
        let bottle_id = rig.ids.alloc();
        rig.scene.spawn(spawn::thrown_bottle(
            bottle_id,
            Vec2::new(900.0, 250.0),
            false,
            0.0,
        ));
        rig.resolve(&KeyState::default(), 1.0);
        assert!(rig.scene.get(bottle_id).is_some());
        assert!(rig.events.is_empty());
    }

    #[test]
    fn bottle_on_boss_breaks_telegraph_and_reports_the_phase() {
        let mut rig = Rig::new();
        let boss_id = rig.ids.alloc();
        let mut b = spawn::boss(boss_id, 1800.0);
        // Down to 40 energy: one more bottle crosses into phase 2.
        b.health.as_mut().unwrap().force_hit(60, 0.0);
        b.boss.as_mut().unwrap().action = Some(BossAction::Telegraph { until: 9.0, dir: -1.0 });
        rig.scene.spawn(b);
        let bottle_id = rig.ids.alloc();
        rig.scene.spawn(spawn::thrown_bottle(
            bottle_id,
            Vec2::new(1900.0, 300.0),
            true,
            0.0,
        ));

        rig.resolve(&KeyState::default(), 5.0);

        let boss = rig.scene.get(boss_id).unwrap();
        assert_eq!(boss.health.as_ref().unwrap().energy(), 30);
        assert!(boss.boss.as_ref().unwrap().action.is_none(), "wind-up was broken");
        assert!(rig.events.contains(&SimEvent::BossPhaseChanged { phase: 2 }));
    }

    #[test]
    fn stomping_the_boss_deflects_without_damage() {
        let mut rig = Rig::new();
        let boss_id = rig.ids.alloc();
        rig.scene.spawn(spawn::boss(boss_id, 1800.0));
        // Boss profile top is 210, spanning x 1830..2020.
        rig.drop_player_onto(1920.0, 210.0, 10.0);

        rig.resolve(&KeyState::default(), 1.0);

        let boss = rig.scene.get(boss_id).unwrap();
        assert_eq!(boss.health.as_ref().unwrap().energy(), spawn::BOSS_ENERGY);
        assert!(boss.boss.as_ref().unwrap().stomp_deflect);
        assert!(!rig.events.iter().any(|e| matches!(e, SimEvent::EnemyStomped { .. })));
        let body = rig.scene.player().unwrap().body.as_ref().unwrap();
        assert_eq!(body.speed_y, STOMP_BOUNCE);
    }

    #[test]
    fn walking_over_pickups_collects_them() {
        let mut rig = Rig::new();
        let bottle_id = rig.ids.alloc();
        rig.scene.spawn(spawn::bottle_pickup(bottle_id, 500.0));
        let coin_id = rig.ids.alloc();
        rig.scene.spawn(spawn::coin(coin_id, 500.0, 370.0));
        rig.scene.player_mut().unwrap().pos.x = 460.0;

        rig.resolve(&KeyState::default(), 1.0);

        assert_eq!(rig.inv.bottles, 1);
        assert_eq!(rig.inv.coins, 1);
        assert!(rig.scene.get(bottle_id).is_none());
        assert!(rig.scene.get(coin_id).is_none());
        assert!(rig.events.contains(&SimEvent::BottleCollected { total: 1 }));
        assert!(rig.events.contains(&SimEvent::CoinCollected { total: 1 }));
    }

    #[test]
    fn carry_cap_leaves_the_bottle_on_the_ground() {
        let mut rig = Rig::new();
        let bottle_id = rig.ids.alloc();
        rig.scene.spawn(spawn::bottle_pickup(bottle_id, 500.0));
        rig.scene.player_mut().unwrap().pos.x = 460.0;
        rig.inv.bottles = BOTTLE_CARRY_CAP;

        rig.resolve(&KeyState::default(), 1.0);

        assert_eq!(rig.inv.bottles, BOTTLE_CARRY_CAP);
        assert!(rig.scene.get(bottle_id).is_some(), "bottle stays for later");
        assert!(!rig.events.iter().any(|e| matches!(e, SimEvent::BottleCollected { .. })));
    }

    #[test]
    fn throw_spawns_a_bottle_and_respects_the_cooldown() {
        let mut rig = Rig::new();
        rig.inv.bottles = 2;
        let keys = KeyState { throw: true, ..KeyState::default() };

        rig.resolve(&keys, 1.0);
        assert_eq!(rig.inv.bottles, 1);
        assert!(rig.events.contains(&SimEvent::BottleThrown));
        let thrown: Vec<_> = rig
            .scene
            .iter()
            .filter(|e| e.kind == EntityKind::Bottle && !e.collectible)
            .collect();
        assert_eq!(thrown.len(), 1);
        assert!(!thrown[0].facing_left, "bottle flies the way the player faces");

        // Held through the next pass: cooldown still running.
        rig.resolve(&keys, 1.2);
        assert_eq!(rig.inv.bottles, 1);

        rig.resolve(&keys, 1.6);
        assert_eq!(rig.inv.bottles, 0);
    }

    #[test]
    fn empty_handed_throw_does_nothing() {
        let mut rig = Rig::new();
        let keys = KeyState { throw: true, ..KeyState::default() };
        rig.resolve(&keys, 1.0);
        assert!(rig.events.is_empty());
        assert_eq!(rig.scene.len(), 1, "only the player remains");
    }

    #[test]
    fn chicken_corpse_lingers_then_clears() {
        let mut rig = Rig::new();
        let chicken_id = rig.ids.alloc();
        rig.scene.spawn(spawn::chicken(chicken_id, 500.0, None));
        rig.drop_player_onto(537.0, 350.0, 10.0);
        rig.resolve(&KeyState::default(), 1.0);
        assert!(rig.scene.get(chicken_id).unwrap().is_dead());

        rig.resolve(&KeyState::default(), 1.5);
        assert!(rig.scene.get(chicken_id).is_some(), "corpse lingers");

        rig.resolve(&KeyState::default(), 2.2);
        assert!(rig.scene.get(chicken_id).is_none(), "corpse cleared after a second");
    }

    #[test]
    fn defeated_player_stops_interacting() {
        let mut rig = Rig::new();
        rig.scene.spawn(spawn::chicken(rig.ids.alloc(), 545.0, None));
        rig.scene.spawn(spawn::coin(rig.ids.alloc(), 500.0, 370.0));
        rig.inv.bottles = 3;
        {
            let p = rig.scene.player_mut().unwrap();
            p.pos.x = 460.0;
            p.health.as_mut().unwrap().kill(0.5);
        }
        let keys = KeyState { throw: true, ..KeyState::default() };

        rig.resolve(&keys, 1.0);

        assert_eq!(rig.inv.coins, 0);
        assert_eq!(rig.inv.bottles, 3);
        assert!(rig.events.is_empty());
    }

    #[test]
    fn dead_chicken_is_not_a_bottle_target() {
        let mut rig = Rig::new();
        let chicken_id = rig.ids.alloc();
        let mut c = spawn::chicken(chicken_id, 500.0, None);
        c.health.as_mut().unwrap().kill(0.9);
        rig.scene.spawn(c);
        let bottle_id = rig.ids.alloc();
        rig.scene.spawn(spawn::thrown_bottle(
            bottle_id,
            Vec2::new(530.0, 370.0),
            false,
            0.0,
        ));

        rig.resolve(&KeyState::default(), 1.0);

        assert!(rig.scene.get(bottle_id).is_some(), "bottle passes through the corpse");
    }
}
