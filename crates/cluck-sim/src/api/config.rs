/// Timing and viewport configuration for a simulation world.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Master fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Gravity integration period in seconds (default: 0.04, i.e. 25 Hz).
    pub gravity_dt: f32,
    /// Contact resolution period in seconds (default: 0.2).
    pub contact_dt: f32,
    /// Visible width in world units, used to clamp the camera.
    pub viewport_width: f32,
    /// Visible height in world units.
    pub viewport_height: f32,
    /// How far ahead of the left viewport edge the camera keeps the player.
    pub camera_lead: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            gravity_dt: 0.04,
            contact_dt: 0.2,
            viewport_width: 720.0,
            viewport_height: 480.0,
            camera_lead: 100.0,
        }
    }
}

/// Horizontal bounds of the playable area, derived from the level.
#[derive(Debug, Clone, Copy)]
pub struct ArenaBounds {
    pub min_x: f32,
    pub max_x: f32,
}

impl ArenaBounds {
    pub fn new(min_x: f32, max_x: f32) -> Self {
        Self { min_x, max_x }
    }

    /// Clamp a left-edge x coordinate into the playable range.
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.min_x, self.max_x)
    }

    /// Whether x lies more than `margin` outside the playable range.
    pub fn outside(&self, x: f32, margin: f32) -> bool {
        x < self.min_x - margin || x > self.max_x + margin
    }
}
