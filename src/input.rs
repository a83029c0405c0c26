use winit::keyboard::{Key, NamedKey};

use crate::world::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(Command),
    Quit,
}

/// Maps a pressed key to what it does. Unbound keys return `None`.
pub fn action_for_key(key: &Key) -> Option<InputAction> {
    match key {
        Key::Character(text) if text.eq_ignore_ascii_case("w") => {
            Some(InputAction::Command(Command::Forward))
        }
        Key::Named(NamedKey::ArrowLeft) => Some(InputAction::Command(Command::TurnLeft)),
        Key::Named(NamedKey::ArrowRight) => Some(InputAction::Command(Command::TurnRight)),
        Key::Named(NamedKey::ArrowUp) => Some(InputAction::Command(Command::Ascend)),
        Key::Named(NamedKey::ArrowDown) => Some(InputAction::Command(Command::Descend)),
        Key::Named(NamedKey::Escape) => Some(InputAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::SmolStr;

    use super::*;

    #[test]
    fn arrows_turn_and_climb() {
        assert_eq!(
            action_for_key(&Key::Named(NamedKey::ArrowLeft)),
            Some(InputAction::Command(Command::TurnLeft))
        );
        assert_eq!(
            action_for_key(&Key::Named(NamedKey::ArrowRight)),
            Some(InputAction::Command(Command::TurnRight))
        );
        assert_eq!(
            action_for_key(&Key::Named(NamedKey::ArrowUp)),
            Some(InputAction::Command(Command::Ascend))
        );
        assert_eq!(
            action_for_key(&Key::Named(NamedKey::ArrowDown)),
            Some(InputAction::Command(Command::Descend))
        );
    }

    #[test]
    fn w_moves_forward_regardless_of_shift() {
        for text in ["w", "W"] {
            assert_eq!(
                action_for_key(&Key::Character(SmolStr::new(text))),
                Some(InputAction::Command(Command::Forward))
            );
        }
    }

    #[test]
    fn escape_quits_and_other_keys_are_ignored() {
        assert_eq!(
            action_for_key(&Key::Named(NamedKey::Escape)),
            Some(InputAction::Quit)
        );
        assert_eq!(action_for_key(&Key::Character(SmolStr::new("q"))), None);
        assert_eq!(action_for_key(&Key::Named(NamedKey::Space)), None);
    }
}
