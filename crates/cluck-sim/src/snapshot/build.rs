//! Scene-to-draw-list flattening. The only render-facing traversal;
//! everything else in the crate works in world space.

use crate::components::layer::RenderLayer;
use crate::core::scene::Scene;
use crate::snapshot::frame::{RenderSprite, SnapshotBuffer, SPRITE_FLAG_MIRROR};

/// Flatten the scene into `buf`, back to front: layer order first, then
/// spawn order within a layer. Frames are resolved against `now`, so a
/// paused caller can keep pulling identical snapshots.
pub fn build_snapshot(scene: &Scene, camera_x: f32, now: f64, buf: &mut SnapshotBuffer) {
    buf.clear();
    buf.camera_x = camera_x;

    for layer in RenderLayer::ALL {
        for e in scene.iter().filter(|e| e.layer == layer) {
            let (state, frame) = match &e.animator {
                Some(anim) => (anim.state.as_u8(), anim.frame(e.kind, now)),
                None => (0, 0),
            };
            let mut flags = 0u32;
            if e.facing_left {
                flags |= SPRITE_FLAG_MIRROR;
            }
            buf.push(RenderSprite {
                x: e.pos.x,
                y: e.pos.y,
                w: e.size.x,
                h: e.size.y,
                kind: e.kind.as_u8() as f32,
                state: state as f32,
                frame: frame as f32,
                flags: flags as f32,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::IdAlloc;
    use crate::components::entity::EntityKind;
    use crate::level::spawn;

    #[test]
    fn sprites_come_out_layer_ordered() {
        let mut ids = IdAlloc::new();
        let mut scene = Scene::new();
        // Spawn in reverse draw order on purpose.
        scene.spawn(spawn::player(ids.alloc()));
        scene.spawn(spawn::chicken(ids.alloc(), 400.0, None));
        scene.spawn(spawn::backdrop(ids.alloc(), 0.0));

        let mut buf = SnapshotBuffer::new();
        build_snapshot(&scene, 0.0, 0.0, &mut buf);

        let kinds: Vec<u8> = buf.sprites().iter().map(|s| s.kind as u8).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Backdrop.as_u8(),
                EntityKind::Chicken.as_u8(),
                EntityKind::Player.as_u8(),
            ]
        );
    }

    #[test]
    fn sprite_carries_box_camera_and_mirror() {
        let mut ids = IdAlloc::new();
        let mut scene = Scene::new();
        scene.spawn(spawn::chicken(ids.alloc(), 400.0, None));

        let mut buf = SnapshotBuffer::new();
        build_snapshot(&scene, 123.0, 0.0, &mut buf);

        assert_eq!(buf.camera_x, 123.0);
        let s = &buf.sprites()[0];
        assert_eq!(s.x, 400.0);
        assert_eq!(s.y, 350.0);
        assert_eq!(s.w, 70.0);
        assert_eq!(s.h, 70.0);
        assert_eq!(s.flags as u32 & SPRITE_FLAG_MIRROR, SPRITE_FLAG_MIRROR, "chickens spawn facing left");
    }

    #[test]
    fn frames_derive_from_the_sample_time() {
        let mut ids = IdAlloc::new();
        let mut scene = Scene::new();
        scene.spawn(spawn::chicken(ids.alloc(), 400.0, None));

        let mut buf = SnapshotBuffer::new();
        build_snapshot(&scene, 0.0, 0.0, &mut buf);
        assert_eq!(buf.sprites()[0].frame, 0.0);

        build_snapshot(&scene, 0.0, 0.25, &mut buf);
        assert_eq!(buf.sprites()[0].frame, 1.0, "walk clip steps every 0.2s");

        // Same time twice: identical output, nothing ticks.
        build_snapshot(&scene, 0.0, 0.25, &mut buf);
        assert_eq!(buf.sprites()[0].frame, 1.0);
    }

    #[test]
    fn decorations_emit_state_zero() {
        let mut ids = IdAlloc::new();
        let mut scene = Scene::new();
        scene.spawn(spawn::cloud(ids.alloc(), 250.0));

        let mut buf = SnapshotBuffer::new();
        build_snapshot(&scene, 0.0, 5.0, &mut buf);
        let s = &buf.sprites()[0];
        assert_eq!(s.state, 0.0);
        assert_eq!(s.frame, 0.0);
    }
}
