//! Frame-state machine for entity sprites.
//!
//! Frames are derived from elapsed simulated time, never counted per
//! frame: pausing the shell cannot advance or corrupt an animation, and
//! a soft restart leaves nothing to cancel.

use crate::components::entity::EntityKind;

/// Animation states across all entity kinds. Each kind uses the subset
/// its clip table defines; the rest resolve to a static frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AnimState {
    #[default]
    Idle = 0,
    LongIdle = 1,
    Walking = 2,
    JumpStart = 3,
    JumpMidair = 4,
    JumpLanding = 5,
    Hurt = 6,
    Alert = 7,
    Attack = 8,
    Spin = 9,
    Dead = 10,
}

impl AnimState {
    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A frame sequence: how many frames, how long each shows, and whether
/// the sequence loops or clamps to its last frame.
#[derive(Debug, Clone, Copy)]
pub struct AnimClip {
    pub frame_count: u32,
    pub frame_time: f32,
    pub looping: bool,
}

impl AnimClip {
    pub const fn new(frame_count: u32, frame_time: f32, looping: bool) -> Self {
        Self { frame_count, frame_time, looping }
    }

    /// Frame index shown after `elapsed` seconds in this clip.
    pub fn frame_at(&self, elapsed: f32) -> u32 {
        if self.frame_count == 0 {
            return 0;
        }
        let idx = (elapsed.max(0.0) / self.frame_time) as u32;
        if self.looping {
            idx % self.frame_count
        } else {
            idx.min(self.frame_count - 1)
        }
    }

    /// Whether a one-shot clip has shown its last frame. Looping clips
    /// never finish.
    pub fn finished_at(&self, elapsed: f32) -> bool {
        !self.looping && elapsed >= self.frame_time * self.frame_count as f32
    }
}

/// Single static frame, for states a kind has no sequence for.
const STATIC: AnimClip = AnimClip::new(1, 1.0, true);

/// Clip table: which frame sequence a `(kind, state)` pair shows.
/// Durations come from the source material: walk at 12 fps, enemy and
/// boss sheets at 200 ms per frame, death at 200 ms per frame, idle
/// loops at one frame per second.
pub fn clip_for(kind: EntityKind, state: AnimState) -> AnimClip {
    use AnimState::*;
    use EntityKind::*;
    match (kind, state) {
        (Player, Idle) => AnimClip::new(10, 1.0, true),
        (Player, LongIdle) => AnimClip::new(10, 1.0, true),
        (Player, Walking) => AnimClip::new(6, 1.0 / 12.0, true),
        (Player, JumpStart) => AnimClip::new(3, 0.1, false),
        (Player, JumpMidair) => AnimClip::new(3, 0.15, true),
        (Player, JumpLanding) => AnimClip::new(3, 0.1, false),
        (Player, Hurt) => AnimClip::new(3, 0.1, true),
        (Player, Dead) => AnimClip::new(7, 0.2, false),

        (Chicken | SmallChicken, Walking) => AnimClip::new(3, 0.2, true),
        (Chicken | SmallChicken, Dead) => AnimClip::new(1, 0.2, false),

        (Boss, Walking) => AnimClip::new(4, 0.2, true),
        (Boss, Alert) => AnimClip::new(8, 0.2, true),
        (Boss, Attack) => AnimClip::new(8, 0.2, true),
        (Boss, Hurt) => AnimClip::new(3, 0.2, true),
        (Boss, Dead) => AnimClip::new(3, 0.2, false),

        (Bottle, Spin) => AnimClip::new(4, 0.1, true),
        (Coin, Idle) => AnimClip::new(2, 0.3, true),

        _ => STATIC,
    }
}

/// Per-entity animation cursor: the current state and when it was
/// entered. The frame index is derived, not stored.
#[derive(Debug, Clone)]
pub struct Animator {
    pub state: AnimState,
    pub state_entered: f64,
}

impl Animator {
    pub fn new(state: AnimState, now: f64) -> Self {
        Self { state, state_entered: now }
    }

    /// Switch state, re-anchoring only on an actual change so a repeated
    /// selection never restarts the clip.
    pub fn set_state(&mut self, state: AnimState, now: f64) {
        self.set_state_at(state, now);
    }

    /// Switch state with an explicit anchor time. Used where the clip
    /// phase is defined by an earlier instant than the switch itself
    /// (the idle loops anchor at the 10 s / 20 s idle marks).
    pub fn set_state_at(&mut self, state: AnimState, anchor: f64) {
        if self.state != state {
            self.state = state;
            self.state_entered = anchor;
        }
    }

    /// Seconds spent in the current state at `now`.
    pub fn elapsed(&self, now: f64) -> f32 {
        (now - self.state_entered).max(0.0) as f32
    }

    /// Frame index to render at `now`.
    pub fn frame(&self, kind: EntityKind, now: f64) -> u32 {
        clip_for(kind, self.state).frame_at(self.elapsed(now))
    }

    /// Whether the current one-shot clip has completed at `now`.
    pub fn finished(&self, kind: EntityKind, now: f64) -> bool {
        clip_for(kind, self.state).finished_at(self.elapsed(now))
    }
}
