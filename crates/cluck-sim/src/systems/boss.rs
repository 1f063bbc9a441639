//! Boss behavior — the decision ladder and maneuver stepping. Runs
//! every step so dashes and arcs stay smooth; only the contact system
//! runs on the slower cadence.

use crate::api::config::ArenaBounds;
use crate::api::types::{BossActionKind, SimEvent};
use crate::components::boss::{phase, BossAction};
use crate::components::entity::{Entity, EntityKind};
use crate::components::hitbox::Rect;
use crate::core::scene::Scene;
use crate::systems::combat::enemy_profile;

/// Walk speed in units per step while chasing. Maneuvers scale it.
pub const BOSS_BASE_SPEED: f32 = 2.0;
/// Within this range of the player the boss shows its attack frames.
pub const ATTACK_RANGE: f32 = 120.0;
/// First sight of the player inside this range engages the boss.
pub const ALERT_RANGE: f32 = 500.0;
const ALERT_DURATION: f64 = 1.0;

const TELEGRAPH_DURATION: f64 = 0.3;
const TELEGRAPH_MIN_RANGE: f32 = 250.0;
const TELEGRAPH_MAX_RANGE: f32 = 650.0;
const SPRINT_DURATION: f64 = 0.6;

const RETREAT_DURATION: f64 = 0.3;
const RETREAT_MULT: f32 = 2.4;
const RETREAT_RANGE: f32 = 180.0;

const BACKSTEP_DURATION: f64 = 0.32;
const BACKSTEP_MULT: f32 = 2.2;
const BACKSTEP_HOP: f32 = 45.0;

const SLAM_DURATION: f64 = 0.7;
const SLAM_MULT: f32 = 2.6;
const SLAM_HOP: f32 = 80.0;
const SLAM_RANGE: f32 = 650.0;
const SLAM_COOLDOWN_P2: f64 = 2.4;
const SLAM_COOLDOWN_P3: f64 = 1.8;

pub const BOSS_CONTACT_DAMAGE: i32 = 20;
/// Contact damage cadence. Shorter than the player's hurt window, so
/// the damage goes through the forced path.
const CONTACT_COOLDOWN: f64 = 0.9;
pub const SLAM_DIRECT_DAMAGE: i32 = 300;
pub const SLAM_SHOCK_DAMAGE: i32 = 100;
/// Shock wave reach, center to center. Grounded players only; jumping
/// the landing is the intended counter.
const SLAM_SHOCK_RANGE: f32 = 520.0;

/// Sprint speed multiplier by phase.
fn sprint_mult(phase: u8) -> f32 {
    match phase {
        3 => 3.8,
        2 => 3.4,
        _ => 3.0,
    }
}

fn slam_cooldown(phase: u8) -> f64 {
    if phase >= 3 { SLAM_COOLDOWN_P3 } else { SLAM_COOLDOWN_P2 }
}

struct PlayerFacts {
    center_x: f32,
    rect: Rect,
    grounded: bool,
    alive: bool,
}

/// One behavior step. Reads the player, mutates the boss, and applies
/// any boss-inflicted damage afterwards.
pub fn update_boss(scene: &mut Scene, bounds: ArenaBounds, now: f64, events: &mut Vec<SimEvent>) {
    let Some(p) = scene.player().map(|pl| PlayerFacts {
        center_x: pl.center_x(),
        rect: pl.collision_rect(),
        grounded: pl.body.as_ref().is_some_and(|b| !b.airborne(pl.pos)),
        alive: !pl.is_dead(),
    }) else {
        return;
    };
    let Some(boss) = scene.boss_mut() else { return };

    let damage = decide(boss, &p, bounds, now, events);
    if let Some(amount) = damage {
        force_hurt_player(scene, amount, now, events);
    }
}

/// The ladder proper. Returns damage to apply to the player, which the
/// caller delivers once the boss borrow is released.
fn decide(
    e: &mut Entity,
    p: &PlayerFacts,
    bounds: ArenaBounds,
    now: f64,
    events: &mut Vec<SimEvent>,
) -> Option<i32> {
    let Entity { pos, size, facing_left, health, boss, .. } = e;
    let (Some(health), Some(state)) = (health.as_mut(), boss.as_mut()) else {
        return None;
    };
    if health.is_dead() {
        return None;
    }

    let rect = Rect::new(pos.x, pos.y, size.x, size.y);
    let profile = enemy_profile(EntityKind::Boss, rect);
    let dist = (p.center_x - profile.center_x()).abs();
    let toward: f32 = if p.center_x < profile.center_x() { -1.0 } else { 1.0 };
    let in_contact = p.alive && profile.overlaps(&p.rect);

    let mut damage = None;
    if in_contact && now - state.last_contact >= CONTACT_COOLDOWN {
        state.last_contact = now;
        damage = Some(BOSS_CONTACT_DAMAGE);
    }
    if in_contact {
        state.attacking = true;
    }

    // A running maneuver owns the step.
    if let Some(action) = state.action {
        if now >= action.until() {
            state.action = None;
            match action {
                BossAction::Telegraph { dir, .. } => {
                    let mult = sprint_mult(phase(health.energy()));
                    state.action = Some(BossAction::Sprint {
                        until: now + SPRINT_DURATION,
                        dir,
                        speed_mult: mult,
                    });
                    log::debug!("boss sprints at x{:.1}", mult);
                    events.push(SimEvent::BossActionStarted { kind: BossActionKind::Sprint });
                }
                BossAction::Backstep { base_y, .. } => pos.y = base_y,
                BossAction::Slam { base_y, .. } => {
                    pos.y = base_y;
                    let landed = enemy_profile(
                        EntityKind::Boss,
                        Rect::new(pos.x, pos.y, size.x, size.y),
                    );
                    if landed.overlaps(&p.rect) {
                        damage = Some(damage.unwrap_or(0).max(SLAM_DIRECT_DAMAGE));
                    } else if p.grounded
                        && (p.center_x - landed.center_x()).abs() <= SLAM_SHOCK_RANGE
                    {
                        damage = Some(damage.unwrap_or(0).max(SLAM_SHOCK_DAMAGE));
                    }
                }
                BossAction::Sprint { .. } | BossAction::Retreat { .. } => {}
            }
        } else {
            match action {
                BossAction::Telegraph { .. } => {}
                BossAction::Sprint { dir, speed_mult, .. } => {
                    pos.x = bounds.clamp_x(pos.x + dir * BOSS_BASE_SPEED * speed_mult);
                }
                BossAction::Retreat { dir, .. } => {
                    pos.x = bounds.clamp_x(pos.x + dir * BOSS_BASE_SPEED * RETREAT_MULT);
                }
                BossAction::Backstep { since, until, dir, base_y, hop } => {
                    pos.x = bounds.clamp_x(pos.x + dir * BOSS_BASE_SPEED * BACKSTEP_MULT);
                    pos.y = arc_y(base_y, hop, since, until, now);
                }
                BossAction::Slam { since, until, dir, base_y, hop } => {
                    pos.x = bounds.clamp_x(pos.x + dir * BOSS_BASE_SPEED * SLAM_MULT);
                    pos.y = arc_y(base_y, hop, since, until, now);
                }
            }
        }
        return damage;
    }

    // A deflected stomp bounces the boss back even before engagement.
    if state.stomp_deflect {
        state.stomp_deflect = false;
        state.action = Some(BossAction::Backstep {
            since: now,
            until: now + BACKSTEP_DURATION,
            dir: -toward,
            base_y: pos.y,
            hop: BACKSTEP_HOP,
        });
        log::debug!("boss backsteps off a stomp");
        events.push(SimEvent::BossActionStarted { kind: BossActionKind::Backstep });
        return damage;
    }

    if !p.alive {
        state.attacking = false;
        return damage;
    }

    if !state.engaged {
        if dist <= ALERT_RANGE {
            state.engaged = true;
            state.alert_until = now + ALERT_DURATION;
            log::debug!("boss engaged, player {:.0} away", dist);
        }
        return damage;
    }
    if now < state.alert_until {
        return damage;
    }

    *facing_left = toward < 0.0;
    state.attacking = in_contact || dist <= ATTACK_RANGE;

    let current = phase(health.energy());
    if current >= 2 && dist <= SLAM_RANGE && now - state.last_slam >= slam_cooldown(current) {
        state.last_slam = now;
        state.action = Some(BossAction::Slam {
            since: now,
            until: now + SLAM_DURATION,
            dir: toward,
            base_y: pos.y,
            hop: SLAM_HOP,
        });
        log::debug!("boss slams from {:.0} out", dist);
        events.push(SimEvent::BossActionStarted { kind: BossActionKind::Slam });
        return damage;
    }
    if dist <= RETREAT_RANGE {
        state.action = Some(BossAction::Retreat {
            until: now + RETREAT_DURATION,
            dir: -toward,
        });
        log::debug!("boss retreats at {:.0}", dist);
        events.push(SimEvent::BossActionStarted { kind: BossActionKind::Retreat });
        return damage;
    }
    if (TELEGRAPH_MIN_RANGE..=TELEGRAPH_MAX_RANGE).contains(&dist) {
        state.action = Some(BossAction::Telegraph {
            until: now + TELEGRAPH_DURATION,
            dir: toward,
        });
        log::debug!("boss winds up at {:.0}", dist);
        events.push(SimEvent::BossActionStarted { kind: BossActionKind::Telegraph });
        return damage;
    }

    if !in_contact {
        pos.x = bounds.clamp_x(pos.x + toward * BOSS_BASE_SPEED);
    }
    damage
}

/// Height along a hop arc: a half sine over the action's duration.
fn arc_y(base_y: f32, hop: f32, since: f64, until: f64, now: f64) -> f32 {
    let t = (((now - since) / (until - since)).clamp(0.0, 1.0)) as f32;
    base_y - hop * (std::f32::consts::PI * t).sin()
}

/// Boss damage bypasses the player's guard window; the contact cooldown
/// and slam cadence are the rate limit.
fn force_hurt_player(scene: &mut Scene, amount: i32, now: f64, events: &mut Vec<SimEvent>) {
    let Some(h) = scene.player_mut().and_then(|e| e.health.as_mut()) else {
        return;
    };
    if h.force_hit(amount, now) {
        events.push(SimEvent::PlayerHurt { energy: h.energy() });
        if h.is_dead() {
            log::info!("player defeated");
            events.push(SimEvent::PlayerDefeated);
        }
    }
}
