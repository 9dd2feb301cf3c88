//! Key bindings.
//!
//! Physical key codes are used throughout so the layout matches the key positions
//! on non-QWERTY keyboards.

use winit::keyboard::KeyCode;

use super::Action;
use crate::camera::MoveDirection;
use crate::generators::QualityLevel;

/// Mode-select keys in mode-index order.
pub const MODE_KEYS: [KeyCode; 16] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
    KeyCode::Digit0,
    KeyCode::KeyQ,
    KeyCode::Tab,
    KeyCode::KeyE,
    KeyCode::KeyR,
    KeyCode::KeyT,
    KeyCode::KeyG,
];

pub const CONTROLS_HELP: &str = "\
Controls:
  1-9, 0        modes 0-9
  Q Tab E R T G modes 10-15
  W A S D       move
  Space / Shift or C  up / down
  Mouse         look
  Scroll        camera speed
  + / -         central mass (gravity well)
  K             reset camera and mass
  F1-F4         target FPS 30 / 60 / 120 / 144
  F5-F8         quality Low / Medium / High / Ultra
  B             cycle background
  V             toggle VSync
  M             toggle mouse capture
  Esc           quit";

pub fn action_for_key(code: KeyCode) -> Option<Action> {
    if let Some(index) = MODE_KEYS.iter().position(|k| *k == code) {
        return Some(Action::SelectMode(index));
    }

    let action = match code {
        KeyCode::Equal | KeyCode::NumpadAdd => Action::IncreaseMass,
        KeyCode::Minus | KeyCode::NumpadSubtract => Action::DecreaseMass,
        KeyCode::KeyK => Action::Reset,
        KeyCode::F1 => Action::SetTargetFps(30),
        KeyCode::F2 => Action::SetTargetFps(60),
        KeyCode::F3 => Action::SetTargetFps(120),
        KeyCode::F4 => Action::SetTargetFps(144),
        KeyCode::F5 => Action::SetQuality(QualityLevel::Low),
        KeyCode::F6 => Action::SetQuality(QualityLevel::Medium),
        KeyCode::F7 => Action::SetQuality(QualityLevel::High),
        KeyCode::F8 => Action::SetQuality(QualityLevel::Ultra),
        KeyCode::KeyB => Action::CycleBackground,
        KeyCode::KeyV => Action::ToggleVsync,
        KeyCode::KeyM => Action::ToggleCursor,
        KeyCode::Escape => Action::Quit,
        _ => return None,
    };
    Some(action)
}

pub fn movement_for_key(code: KeyCode) -> Option<MoveDirection> {
    match code {
        KeyCode::KeyW => Some(MoveDirection::Forward),
        KeyCode::KeyS => Some(MoveDirection::Backward),
        KeyCode::KeyA => Some(MoveDirection::Left),
        KeyCode::KeyD => Some(MoveDirection::Right),
        KeyCode::Space => Some(MoveDirection::Up),
        KeyCode::ShiftLeft | KeyCode::KeyC => Some(MoveDirection::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keys_cover_all_modes() {
        assert_eq!(action_for_key(KeyCode::Digit1), Some(Action::SelectMode(0)));
        assert_eq!(action_for_key(KeyCode::Digit0), Some(Action::SelectMode(9)));
        assert_eq!(action_for_key(KeyCode::KeyQ), Some(Action::SelectMode(10)));
        assert_eq!(action_for_key(KeyCode::KeyG), Some(Action::SelectMode(15)));
    }

    #[test]
    fn test_mass_keys_include_numpad() {
        assert_eq!(action_for_key(KeyCode::NumpadAdd), Some(Action::IncreaseMass));
        assert_eq!(action_for_key(KeyCode::Minus), Some(Action::DecreaseMass));
    }

    #[test]
    fn test_movement_and_actions_do_not_overlap() {
        for code in [
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyS,
            KeyCode::KeyD,
            KeyCode::Space,
            KeyCode::ShiftLeft,
            KeyCode::KeyC,
        ] {
            assert!(movement_for_key(code).is_some());
            assert_eq!(action_for_key(code), None, "{:?} is bound twice", code);
        }
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(action_for_key(KeyCode::F4), Some(Action::SetTargetFps(144)));
        assert_eq!(
            action_for_key(KeyCode::F5),
            Some(Action::SetQuality(QualityLevel::Low))
        );
        assert_eq!(action_for_key(KeyCode::F9), None);
    }
}
