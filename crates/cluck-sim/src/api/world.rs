//! World orchestration — owns the scene, the clocks and the input
//! state, and advances everything on the fixed-timestep ladder.
//!
//! One `advance` call per rendered frame. Internally the world runs
//! zero or more 60 Hz steps; within each step, movement runs first,
//! gravity on its own interval, contacts on theirs, and the boss and
//! animation passes every step. Events accumulate across the steps of
//! one `advance` and are dropped at the start of the next.

use crate::api::config::{ArenaBounds, SimConfig};
use crate::api::types::{IdAlloc, SimEvent};
use crate::core::clock::{FixedTimestep, Interval, SimClock};
use crate::core::physics::apply_gravity;
use crate::core::scene::Scene;
use crate::input::keys::{InputEvent, KeyState};
use crate::level::def::{LevelDef, LevelError};
use crate::level::spawn;
use crate::snapshot::build::build_snapshot;
use crate::snapshot::frame::SnapshotBuffer;
use crate::systems::animation::drive_animations;
use crate::systems::boss::update_boss;
use crate::systems::combat::{resolve_contacts, Inventory};
use crate::systems::movement::tick_movement;

/// A complete headless game world. The shell feeds it input events and
/// frame times; everything else happens in here.
#[derive(Debug)]
pub struct World {
    scene: Scene,
    config: SimConfig,
    level: LevelDef,
    bounds: ArenaBounds,
    ids: IdAlloc,
    keys: KeyState,
    clock: SimClock,
    timestep: FixedTimestep,
    gravity_timer: Interval,
    contact_timer: Interval,
    inventory: Inventory,
    camera_x: f32,
    last_input: f64,
    events: Vec<SimEvent>,
}

impl World {
    /// Build a world from a validated level. Rejects levels that place
    /// things outside their own bounds rather than simulating nonsense.
    pub fn new(level: LevelDef, config: SimConfig) -> Result<Self, LevelError> {
        level.validate()?;

        let bounds = ArenaBounds::new(0.0, level.level_end_x);
        let mut ids = IdAlloc::new();
        let mut scene = Scene::new();
        spawn::populate(&level, &mut scene, &mut ids);

        let mut world = Self {
            scene,
            bounds,
            ids,
            keys: KeyState::new(),
            clock: SimClock::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            gravity_timer: Interval::new(config.gravity_dt as f64),
            contact_timer: Interval::new(config.contact_dt as f64),
            inventory: Inventory::new(),
            camera_x: 0.0,
            last_input: 0.0,
            events: Vec::new(),
            config,
            level,
        };
        world.follow_player();
        log::info!(
            "world ready: {} entities, level ends at {}",
            world.scene.len(),
            world.level.level_end_x
        );
        Ok(world)
    }

    /// Feed one input event. Takes effect from the next step onward.
    pub fn push_input(&mut self, event: InputEvent) {
        self.keys.apply(event);
    }

    /// Advance by one rendered frame's wall time. Runs however many
    /// fixed steps fit (capped inside the timestep, which logs when it
    /// sheds time after a stall).
    pub fn advance(&mut self, frame_dt: f32) {
        self.events.clear();
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.step();
        }
    }

    fn step(&mut self) {
        self.clock.tick(self.timestep.dt());
        let now = self.clock.now();

        if self.keys.any_action() {
            self.last_input = now;
        }

        tick_movement(&mut self.scene, &self.keys, self.bounds);
        if self.gravity_timer.fire(now) {
            apply_gravity(&mut self.scene, now);
        }
        if self.contact_timer.fire(now) {
            resolve_contacts(
                &mut self.scene,
                &mut self.inventory,
                &self.keys,
                &mut self.ids,
                self.bounds,
                now,
                &mut self.events,
            );
        }
        update_boss(&mut self.scene, self.bounds, now, &mut self.events);
        drive_animations(&mut self.scene, &self.keys, self.last_input, now);
        self.follow_player();
    }

    /// Rebuild the starting scene and rewind every clock. Held keys are
    /// released so a restart never begins with phantom input.
    pub fn restart(&mut self) {
        self.scene.clear();
        self.ids = IdAlloc::new();
        spawn::populate(&self.level, &mut self.scene, &mut self.ids);

        self.keys.release_all();
        self.clock.reset();
        self.timestep.reset();
        self.gravity_timer.reset();
        self.contact_timer.reset();
        self.inventory = Inventory::new();
        self.last_input = 0.0;
        self.events.clear();
        self.follow_player();
        log::info!("world restarted");
    }

    fn follow_player(&mut self) {
        if let Some(p) = self.scene.player() {
            let max = (self.level.level_end_x - self.config.viewport_width).max(0.0);
            self.camera_x = (p.pos.x - self.config.camera_lead).clamp(0.0, max);
        }
    }

    /// Flatten the current scene into `buf` for the renderer.
    pub fn snapshot(&self, buf: &mut SnapshotBuffer) {
        build_snapshot(&self.scene, self.camera_x, self.clock.now(), buf);
    }

    /// Events emitted during the most recent `advance` call.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Simulated seconds since the start (or the last restart).
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn carried_bottles(&self) -> u32 {
        self.inventory.bottles
    }

    pub fn coins(&self) -> u32 {
        self.inventory.coins
    }

    /// Remaining player energy, or 0 if there is no player in the scene.
    pub fn player_energy(&self) -> i32 {
        self.scene
            .player()
            .and_then(|p| p.health.as_ref())
            .map_or(0, |h| h.energy())
    }

    /// Remaining boss energy, or None for levels without a boss.
    pub fn boss_energy(&self) -> Option<i32> {
        self.scene
            .boss()
            .and_then(|b| b.health.as_ref())
            .map(|h| h.energy())
    }

    /// True once the player's energy has hit zero. The corpse stays in
    /// the scene, so this holds until `restart`.
    pub fn player_defeated(&self) -> bool {
        self.scene.player().is_some_and(|p| p.is_dead())
    }

    /// True once the boss is down. Also holds until `restart`.
    pub fn boss_defeated(&self) -> bool {
        self.scene.boss().is_some_and(|b| b.is_dead())
    }
}
