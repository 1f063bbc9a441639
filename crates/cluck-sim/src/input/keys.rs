//! Logical keyboard state. The shell forwards raw key events; the
//! simulation only ever reads the resulting flags.

/// Browser key codes, the wire format the shell sends.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_SPACE: u32 = 32;
pub const KEY_THROW: u32 = 68; // D

/// A keyboard event from the shell.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
}

/// Held-key flags. Unknown key codes are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub space: bool,
    pub throw: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the flags.
    pub fn apply(&mut self, event: InputEvent) {
        let (key_code, held) = match event {
            InputEvent::KeyDown { key_code } => (key_code, true),
            InputEvent::KeyUp { key_code } => (key_code, false),
        };
        match key_code {
            KEY_LEFT => self.left = held,
            KEY_RIGHT => self.right = held,
            KEY_UP => self.up = held,
            KEY_DOWN => self.down = held,
            KEY_SPACE => self.space = held,
            KEY_THROW => self.throw = held,
            _ => {}
        }
    }

    /// Whether any key that counts as player activity is held. Feeds the
    /// idle timer.
    pub fn any_action(&self) -> bool {
        self.left || self.right || self.space || self.throw
    }

    /// Horizontal input is active.
    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_sets_flag_and_up_clears() {
        let mut keys = KeyState::new();
        keys.apply(InputEvent::KeyDown { key_code: KEY_RIGHT });
        assert!(keys.right);
        keys.apply(InputEvent::KeyUp { key_code: KEY_RIGHT });
        assert!(!keys.right);
    }

    #[test]
    fn full_mapping() {
        let mut keys = KeyState::new();
        for code in [KEY_LEFT, KEY_UP, KEY_RIGHT, KEY_DOWN, KEY_SPACE, KEY_THROW] {
            keys.apply(InputEvent::KeyDown { key_code: code });
        }
        assert!(keys.left && keys.up && keys.right && keys.down && keys.space && keys.throw);
    }

    #[test]
    fn unknown_code_is_ignored() {
        let mut keys = KeyState::new();
        keys.apply(InputEvent::KeyDown { key_code: 65 });
        assert!(!keys.any_action());
    }

    #[test]
    fn activity_excludes_camera_keys() {
        let mut keys = KeyState::new();
        keys.apply(InputEvent::KeyDown { key_code: KEY_DOWN });
        assert!(!keys.any_action(), "up/down alone is not player activity");
        keys.apply(InputEvent::KeyDown { key_code: KEY_SPACE });
        assert!(keys.any_action());
    }

    #[test]
    fn release_all_clears_everything() {
        let mut keys = KeyState::new();
        keys.apply(InputEvent::KeyDown { key_code: KEY_LEFT });
        keys.apply(InputEvent::KeyDown { key_code: KEY_THROW });
        keys.release_all();
        assert!(!keys.horizontal() && !keys.throw);
    }
}
