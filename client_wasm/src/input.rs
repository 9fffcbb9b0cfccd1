//! Keyboard input handling

use game_core::{GameState, Key};

/// Apply a key edge to the game. Returns true when the key drives a paddle,
/// so the caller can stop the browser from scrolling.
pub fn apply_key(state: &mut GameState, name: &str, pressed: bool) -> bool {
    let Some(key) = Key::from_name(name) else {
        return false;
    };

    if pressed {
        state.key_down(key);
    } else {
        state.key_up(key);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    #[test]
    fn test_arrow_keys_drive_paddle() {
        let mut state = GameState::new(1);
        assert!(apply_key(&mut state, "ArrowDown", true));
        assert!(state.input.down);

        state.tick();
        assert_eq!(state.paddle(Side::Player).pos.y, 258.0);

        assert!(apply_key(&mut state, "ArrowDown", false));
        assert!(!state.input.down);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = GameState::new(1);
        for name in ["w", "s", " ", "Enter", "arrowup"] {
            assert!(!apply_key(&mut state, name, true));
        }
        assert!(!state.input.up);
        assert!(!state.input.down);
    }
}
