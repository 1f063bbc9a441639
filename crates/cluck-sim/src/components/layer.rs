/// Render layer — controls draw order in the snapshot.
///
/// Layers are drawn back-to-front: Backdrop first, Projectiles last.
/// Within a layer, entities keep scene (spawn) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Backdrop = 0,
    Clouds = 1,
    Pickups = 2,
    #[default]
    Enemies = 3,
    Player = 4,
    Projectiles = 5,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 6;

    /// All layers in draw order, for snapshot iteration.
    pub const ALL: [RenderLayer; Self::COUNT] = [
        Self::Backdrop,
        Self::Clouds,
        Self::Pickups,
        Self::Enemies,
        Self::Player,
        Self::Projectiles,
    ];

    /// Convert from a u8 value. Returns None if out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Backdrop),
            1 => Some(Self::Clouds),
            2 => Some(Self::Pickups),
            3 => Some(Self::Enemies),
            4 => Some(Self::Player),
            5 => Some(Self::Projectiles),
            _ => None,
        }
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
