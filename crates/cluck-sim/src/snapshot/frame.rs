use bytemuck::{Pod, Zeroable};

/// Mirror flag: draw the sprite flipped horizontally.
pub const SPRITE_FLAG_MIRROR: u32 = 1;

/// One drawable box as the shell consumes it: 8 floats = 32 bytes
/// stride, ready for a flat typed-array copy. The shell maps
/// `(kind, state, frame)` to a sheet cell; the simulation never sees
/// image data.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderSprite {
    /// Left edge in world space.
    pub x: f32,
    /// Top edge in world space, Y-down.
    pub y: f32,
    /// Drawn width in world units.
    pub w: f32,
    /// Drawn height in world units.
    pub h: f32,
    /// Entity kind discriminant.
    pub kind: f32,
    /// Animation state discriminant.
    pub state: f32,
    /// Frame index within the state's clip.
    pub frame: f32,
    /// Bit flags; bit 0 mirrors horizontally.
    pub flags: f32,
}

impl RenderSprite {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One frame's draw list plus the camera, rebuilt every render pull.
/// Sprites are ordered back to front.
pub struct SnapshotBuffer {
    pub sprites: Vec<RenderSprite>,
    /// World x of the left viewport edge.
    pub camera_x: f32,
}

impl SnapshotBuffer {
    pub fn new() -> Self {
        Self {
            sprites: Vec::with_capacity(64),
            camera_x: 0.0,
        }
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
        self.camera_x = 0.0;
    }

    pub fn push(&mut self, sprite: RenderSprite) {
        self.sprites.push(sprite);
    }

    pub fn sprite_count(&self) -> u32 {
        self.sprites.len() as u32
    }

    pub fn sprites(&self) -> &[RenderSprite] {
        &self.sprites
    }

    /// Raw pointer to sprite data for flat-buffer reads.
    pub fn sprites_ptr(&self) -> *const f32 {
        self.sprites.as_ptr() as *const f32
    }
}

impl Default for SnapshotBuffer {
    fn default() -> Self {
        Self::new()
    }
}
