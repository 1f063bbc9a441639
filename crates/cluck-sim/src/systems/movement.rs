//! Movement system — horizontal motion for every mover, once per step.
//!
//! Vertical motion belongs to the gravity pass and the boss arcs; this
//! pass only slides things sideways and starts jumps.

use crate::api::config::ArenaBounds;
use crate::components::entity::EntityKind;
use crate::core::scene::Scene;
use crate::input::keys::KeyState;
use crate::level::spawn::PLAYER_JUMP_SPEED;

/// Advance all steerable entities by one step. The boss is not touched
/// here; its action state machine owns its movement.
pub fn tick_movement(scene: &mut Scene, keys: &KeyState, bounds: ArenaBounds) {
    for e in scene.iter_mut() {
        if e.is_dead() {
            continue;
        }
        match e.kind {
            EntityKind::Player => {
                if keys.right {
                    e.pos.x += e.walk_speed;
                    e.facing_left = false;
                }
                if keys.left {
                    e.pos.x -= e.walk_speed;
                    e.facing_left = true;
                }
                e.pos.x = bounds.clamp_x(e.pos.x);
                if keys.space {
                    if let Some(body) = &mut e.body {
                        if !body.airborne(e.pos) {
                            body.speed_y = PLAYER_JUMP_SPEED;
                        }
                    }
                }
            }
            EntityKind::Chicken | EntityKind::SmallChicken => {
                // Roam between the arena edges.
                if e.pos.x <= bounds.min_x {
                    e.facing_left = false;
                } else if e.pos.x + e.size.x >= bounds.max_x {
                    e.facing_left = true;
                }
                let dir = if e.facing_left { -1.0 } else { 1.0 };
                e.pos.x += dir * e.walk_speed;
            }
            EntityKind::Cloud => {
                e.pos.x -= e.walk_speed;
                if e.pos.x + e.size.x < bounds.min_x {
                    e.pos.x = bounds.max_x;
                }
            }
            EntityKind::Bottle if !e.collectible => {
                let dir = if e.facing_left { -1.0 } else { 1.0 };
                e.pos.x += dir * e.walk_speed;
            }
            _ => {}
        }
    }
}
