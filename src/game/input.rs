//! Keyboard sampling
//!
//! The simulation only ever sees these plain structs, so it can be driven
//! from tests without a window.

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};

/// Held movement keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub cam_left: bool,
    pub cam_right: bool,
}

impl InputState {
    pub fn from_keyboard() -> Self {
        let down = |a: KeyCode, b: KeyCode| is_key_down(a) || is_key_down(b);
        Self {
            forward: down(KeyCode::W, KeyCode::Up),
            back: down(KeyCode::S, KeyCode::Down),
            left: down(KeyCode::A, KeyCode::Left),
            right: down(KeyCode::D, KeyCode::Right),
            jump: is_key_down(KeyCode::Space),
            cam_left: is_key_down(KeyCode::Q),
            cam_right: is_key_down(KeyCode::E),
        }
    }

    /// Movement intent as (strafe, forward), each -1, 0 or 1
    pub fn move_axes(&self) -> (f32, f32) {
        let axis = |pos: bool, neg: bool| pos as i8 as f32 - neg as i8 as f32;
        (axis(self.right, self.left), axis(self.forward, self.back))
    }
}

/// Edge-triggered scene keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuInput {
    pub confirm: bool,
    pub back: bool,
    pub up: bool,
    pub down: bool,
    pub screenshot: bool,
}

impl MenuInput {
    pub fn from_keyboard() -> Self {
        Self {
            confirm: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space),
            back: is_key_pressed(KeyCode::Escape),
            up: is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W),
            down: is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S),
            screenshot: is_key_pressed(KeyCode::F12),
        }
    }

    /// Keep presses from frames that ran no tick
    pub fn merge(self, other: MenuInput) -> Self {
        Self {
            confirm: self.confirm || other.confirm,
            back: self.back || other.back,
            up: self.up || other.up,
            down: self.down || other.down,
            screenshot: self.screenshot || other.screenshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposing_keys_cancel() {
        let input = InputState {
            forward: true,
            back: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.move_axes(), (1.0, 0.0));
        assert_eq!(InputState::default().move_axes(), (0.0, 0.0));
    }

    #[test]
    fn test_merge_keeps_any_press() {
        let a = MenuInput { confirm: true, ..Default::default() };
        let b = MenuInput { down: true, ..Default::default() };
        let merged = a.merge(b);
        assert!(merged.confirm && merged.down);
        assert!(!merged.back && !merged.up);
    }
}
