//! Buffers window and device events between frames.
//!
//! Event callbacks only record what happened. The frame driver takes one
//! [`FrameInput`] snapshot per frame and applies it before generating geometry.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::bindings::{action_for_key, movement_for_key};
use super::Action;
use crate::camera::HeldKeys;

/// Everything that happened since the previous frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Discrete actions in press order.
    pub actions: Vec<Action>,
    /// Relative pointer motion samples in arrival order.
    pub pointer_motion: Vec<Vec2>,
    /// Accumulated scroll, in lines.
    pub scroll: f32,
    pub held: HeldKeys,
}

#[derive(Debug, Default)]
pub struct InputCollector {
    actions: Vec<Action>,
    pointer_motion: Vec<Vec2>,
    scroll: f32,
    held_keys: HashSet<KeyCode>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.handle_key_code(code, event.state == ElementState::Pressed, event.repeat);
        }
    }

    /// Record a key transition. Repeats never produce actions.
    pub fn handle_key_code(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        if movement_for_key(code).is_some() {
            if pressed {
                self.held_keys.insert(code);
            } else {
                self.held_keys.remove(&code);
            }
        }

        if pressed && !repeat {
            if let Some(action) = action_for_key(code) {
                log::debug!("Key {:?} -> {:?}", code, action);
                self.actions.push(action);
            }
        }
    }

    pub fn handle_pointer_motion(&mut self, dx: f64, dy: f64) {
        self.pointer_motion.push(Vec2::new(dx as f32, dy as f32));
    }

    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_x, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / 100.0) as f32,
        };
        self.scroll += lines;
    }

    /// Forget held keys, e.g. when the window loses focus and releases go missing.
    pub fn release_all(&mut self) {
        self.held_keys.clear();
    }

    pub fn take_frame(&mut self) -> FrameInput {
        let mut held = HeldKeys::default();
        for code in &self.held_keys {
            if let Some(direction) = movement_for_key(*code) {
                held.set(direction, true);
            }
        }

        FrameInput {
            actions: std::mem::take(&mut self.actions),
            pointer_motion: std::mem::take(&mut self.pointer_motion),
            scroll: std::mem::take(&mut self.scroll),
            held,
        }
    }
}
