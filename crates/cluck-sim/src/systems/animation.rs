//! Animation system — picks each entity's animation state from the
//! simulation facts, once per step.
//!
//! Frames are never ticked; they derive from elapsed time inside the
//! state, so this pass only decides state transitions and anchors.

use crate::components::animation::AnimState;
use crate::components::boss::BossAction;
use crate::components::entity::{Entity, EntityKind};
use crate::core::physics::LANDING_HOLD;
use crate::core::scene::Scene;
use crate::input::keys::KeyState;

/// Upward speed above which the jump is still in its launch frames.
const JUMP_RISE_THRESHOLD: f32 = 20.0;
/// Below this (falling fast) the player braces for landing.
const JUMP_FALL_THRESHOLD: f32 = -10.0;
/// Quiet seconds before the idle loop starts.
const IDLE_AFTER: f64 = 10.0;
/// Quiet seconds before the sleepy loop takes over.
const LONG_IDLE_AFTER: f64 = 20.0;

/// Re-derive animation states. `last_input` is the simulated time of the
/// most recent player action, which anchors the idle escalation.
pub fn drive_animations(scene: &mut Scene, keys: &KeyState, last_input: f64, now: f64) {
    for e in scene.iter_mut() {
        match e.kind {
            EntityKind::Player => drive_player(e, keys, last_input, now),
            EntityKind::Chicken | EntityKind::SmallChicken => drive_walker(e, now),
            EntityKind::Boss => drive_boss(e, now),
            // Bottles and coins keep their spawn state; clouds and
            // backdrops have no animator at all.
            _ => {}
        }
    }
}

fn drive_player(e: &mut Entity, keys: &KeyState, last_input: f64, now: f64) {
    let Entity { pos, health, body, animator, .. } = e;
    let (Some(health), Some(body), Some(anim)) = (health.as_mut(), body.as_mut(), animator.as_mut())
    else {
        return;
    };

    if health.is_dead() {
        anim.set_state(AnimState::Dead, now);
        return;
    }
    if health.is_hurt(now) {
        // Anchor on the hit so a re-hit restarts the flash.
        anim.set_state_at(AnimState::Hurt, health.last_hit);
        return;
    }
    if body.airborne(*pos) {
        let state = if body.speed_y > JUMP_RISE_THRESHOLD {
            AnimState::JumpStart
        } else if body.speed_y > JUMP_FALL_THRESHOLD {
            AnimState::JumpMidair
        } else {
            AnimState::JumpLanding
        };
        anim.set_state(state, now);
        return;
    }
    if body.just_landed(now, LANDING_HOLD) {
        anim.set_state(AnimState::JumpLanding, now);
        return;
    }
    if keys.left || keys.right {
        anim.set_state(AnimState::Walking, now);
        return;
    }

    // Standing still: hold the landing pose, then escalate. Anchoring at
    // the exact band edges keeps the loops phase-locked no matter when
    // within the band this runs.
    let quiet = now - last_input;
    if quiet >= LONG_IDLE_AFTER {
        anim.set_state_at(AnimState::LongIdle, last_input + LONG_IDLE_AFTER);
    } else if quiet >= IDLE_AFTER {
        anim.set_state_at(AnimState::Idle, last_input + IDLE_AFTER);
    } else {
        anim.set_state(AnimState::JumpLanding, now);
    }
}

fn drive_walker(e: &mut Entity, now: f64) {
    let dead = e.is_dead();
    if let Some(anim) = e.animator.as_mut() {
        if dead {
            anim.set_state(AnimState::Dead, now);
        } else {
            anim.set_state(AnimState::Walking, now);
        }
    }
}

fn drive_boss(e: &mut Entity, now: f64) {
    let Entity { health, boss, animator, .. } = e;
    let (Some(health), Some(boss), Some(anim)) = (health.as_mut(), boss.as_mut(), animator.as_mut())
    else {
        return;
    };

    if health.is_dead() {
        anim.set_state(AnimState::Dead, now);
        return;
    }
    if health.is_hurt(now) {
        anim.set_state_at(AnimState::Hurt, health.last_hit);
        return;
    }
    if let Some(action) = &boss.action {
        let state = match action {
            BossAction::Telegraph { .. } => AnimState::Alert,
            BossAction::Sprint { .. } | BossAction::Slam { .. } => AnimState::Attack,
            BossAction::Retreat { .. } | BossAction::Backstep { .. } => AnimState::Walking,
        };
        anim.set_state(state, now);
        return;
    }
    if boss.attacking {
        anim.set_state(AnimState::Attack, now);
        return;
    }
    if now < boss.alert_until {
        anim.set_state(AnimState::Alert, now);
        return;
    }
    anim.set_state(AnimState::Walking, now);
}
