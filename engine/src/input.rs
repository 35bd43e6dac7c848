use serde::{Deserialize, Serialize};

/// One tick's worth of direction key lines. The key filter hardware is
/// assumed to have already debounced these, so a `true` simply means the
/// key is held during this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub const RELEASED: KeyState = KeyState {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn pressed(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed() {
        assert!(!KeyState::RELEASED.pressed());
        let held = KeyState {
            left: true,
            ..KeyState::RELEASED
        };
        assert!(held.pressed());
    }
}
