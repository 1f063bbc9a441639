//! Arcade gravity: per-tick Euler integration against a flat ground
//! line. Runs on the 40 ms interval; speed constants are in units per
//! gravity tick.

use crate::components::entity::Entity;
use crate::core::scene::Scene;

/// Rest line for the player's top edge when standing.
pub const PLAYER_REST_Y: f32 = 180.0;
/// Bottom line every grounded entity's feet sit on.
pub const FLOOR_Y: f32 = 420.0;
/// Downward acceleration per gravity tick.
pub const GRAVITY_ACCEL: f32 = 2.5;
/// How long the landing frame holds after touchdown, in seconds.
pub const LANDING_HOLD: f64 = 0.15;

/// One gravity tick over every live entity with a body: integrate while
/// airborne or rising, clamp back onto the ground line on touchdown.
/// Dead entities are skipped entirely; they hold where they stopped.
pub fn apply_gravity(scene: &mut Scene, now: f64) {
    for e in scene.iter_mut() {
        if e.is_dead() {
            continue;
        }
        let Entity { pos, body, .. } = e;
        let Some(body) = body.as_mut() else { continue };

        if pos.y < body.ground_y || body.speed_y > 0.0 {
            pos.y -= body.speed_y;
            body.speed_y -= body.acceleration;

            if body.rests_on_ground && pos.y >= body.ground_y && body.speed_y <= 0.0 {
                pos.y = body.ground_y;
                body.speed_y = 0.0;
                body.landed_at = Some(now);
            }
        }
    }
}
