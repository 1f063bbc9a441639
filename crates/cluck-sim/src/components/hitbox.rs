use glam::Vec2;

/// Axis-aligned box in world units. `(x, y)` is the top-left corner,
/// Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Strict overlap test: boxes that merely touch along an edge do not
    /// count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    /// Shrink the box by `dx` on the left and right and `dy` on the top
    /// and bottom.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w - 2.0 * dx, self.h - 2.0 * dy)
    }

    /// Shrink only the horizontal sides, by independent amounts.
    pub fn inset_sides(&self, left: f32, right: f32) -> Rect {
        Rect::new(self.x + left, self.y, self.w - left - right, self.h)
    }

    /// Extent of horizontal overlap with `other`, zero when disjoint.
    pub fn overlap_x(&self, other: &Rect) -> f32 {
        (self.right().min(other.right()) - self.left().max(other.left())).max(0.0)
    }

    /// Extent of vertical overlap with `other`, zero when disjoint.
    pub fn overlap_y(&self, other: &Rect) -> f32 {
        (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0.0)
    }
}

/// Collision box override, used where sprite padding would make the
/// visual box feel unfair. Offset is relative to the entity position.
#[derive(Debug, Clone, Copy)]
pub struct Hitbox {
    pub offset: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(offset: Vec2, size: Vec2) -> Self {
        Self { offset, size }
    }

    /// Resolve the override into a world-space box for an entity at `pos`.
    pub fn resolve(&self, pos: Vec2) -> Rect {
        Rect::new(pos.x + self.offset.x, pos.y + self.offset.y, self.size.x, self.size.y)
    }
}
