//! Presentation settings that are not part of the geometry.

use crate::rendering::palette::{self, BACKGROUNDS};

pub const SUPPORTED_FPS: [u32; 4] = [30, 60, 120, 144];
pub const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    target_fps: u32,
    vsync: bool,
    background_index: usize,
    cursor_captured: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_FPS,
            vsync: true,
            background_index: 0,
            cursor_captured: true,
        }
    }
}

impl DisplaySettings {
    pub fn new(target_fps: u32, vsync: bool, background_index: usize, cursor_captured: bool) -> Self {
        let target_fps = if SUPPORTED_FPS.contains(&target_fps) {
            target_fps
        } else {
            DEFAULT_FPS
        };
        Self {
            target_fps,
            vsync,
            background_index: background_index % BACKGROUNDS.len(),
            cursor_captured,
        }
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    pub fn vsync(&self) -> bool {
        self.vsync
    }

    pub fn background_index(&self) -> usize {
        self.background_index
    }

    pub fn cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Pick a target frame rate. 60 turns vsync on, every other rate turns it off.
    /// Unsupported rates fall back to 60.
    ///
    /// The rate is advisory: it only selects the vsync setting and nothing paces
    /// frames to it.
    pub fn set_target_fps(&mut self, fps: u32) {
        let fps = if SUPPORTED_FPS.contains(&fps) {
            fps
        } else {
            log::warn!("Unsupported target FPS {}, using {}", fps, DEFAULT_FPS);
            DEFAULT_FPS
        };
        self.target_fps = fps;
        self.vsync = fps == DEFAULT_FPS;
        log::info!("Target FPS: {} (VSync {})", fps, on_off(self.vsync));
    }

    pub fn toggle_vsync(&mut self) {
        self.vsync = !self.vsync;
        log::info!("VSync: {}", on_off(self.vsync));
    }

    pub fn cycle_background(&mut self) {
        self.background_index = (self.background_index + 1) % BACKGROUNDS.len();
        log::info!("Background: {}", palette::name(self.background_index));
    }

    /// Flip cursor capture and return the new state.
    pub fn toggle_cursor(&mut self) -> bool {
        self.cursor_captured = !self.cursor_captured;
        log::info!(
            "Cursor {}",
            if self.cursor_captured { "captured" } else { "released" }
        );
        self.cursor_captured
    }

    pub fn background_color(&self) -> [f32; 3] {
        palette::color(self.background_index)
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
