//! Simulation time: one fixed-step accumulator, slower periodic passes
//! derived from it, and the simulated clock every timestamp comes from.
//!
//! All recurring activity in the simulation is scheduled here; entities
//! own no timers of their own, so a restart cancels everything by
//! construction.

use log::warn;

/// Most fixed steps one `advance` call may run. Frame deltas beyond this
/// backlog are dropped to avoid the spiral of death.
pub const MAX_CATCHUP_STEPS: u32 = 10;

/// Fixed timestep accumulator: turns variable frame deltas into a whole
/// number of fixed steps.
#[derive(Debug)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self { dt, accumulator: 0.0 }
    }

    /// Add frame time; returns how many fixed steps to run now.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        let cap = self.dt * MAX_CATCHUP_STEPS as f32;
        if self.accumulator > cap {
            warn!(
                "frame delta {:.3}s exceeds step backlog, clamping to {} steps",
                frame_dt, MAX_CATCHUP_STEPS
            );
            self.accumulator = cap;
        }
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation fraction for shells that blend between steps.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Simulated seconds since world construction. Advances only by fixed
/// steps, so wall-clock pauses never move it.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    now: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self { now: 0.0 }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn tick(&mut self, dt: f32) {
        self.now += dt as f64;
    }

    pub fn reset(&mut self) {
        self.now = 0.0;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

/// A periodic pass slower than the master step: 40 ms gravity, 200 ms
/// contact resolution. Re-arms relative to its deadline, not to `now`,
/// so the cadence stays exact over long runs.
#[derive(Debug, Clone)]
pub struct Interval {
    period: f64,
    due: f64,
}

impl Interval {
    pub fn new(period: f64) -> Self {
        Self { period, due: period }
    }

    /// Whether the pass is owed at `now`. Fires at most once per call;
    /// the master step is shorter than any period used here.
    pub fn fire(&mut self, now: f64) -> bool {
        // The epsilon absorbs accumulated float error at exact multiples.
        if now + 1e-9 >= self.due {
            self.due += self.period;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.due = self.period;
    }

    pub fn period(&self) -> f64 {
        self.period
    }
}
