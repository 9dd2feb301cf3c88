//! All mutable viewer state, owned in one place.

use super::{DisplaySettings, GravityState, ModeSelector};
use crate::camera::CameraController;
use crate::config::ViewerConfig;
use crate::generators::QualityLevel;
use crate::input::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    pub mode: ModeSelector,
    pub gravity: GravityState,
    pub quality: QualityLevel,
    pub camera: CameraController,
    pub display: DisplaySettings,
    pub viewport: Viewport,
    pub exit_requested: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl ViewerState {
    pub fn from_config(config: &ViewerConfig) -> Self {
        let display = DisplaySettings::new(
            config.target_fps,
            config.vsync,
            config.background_index,
            config.capture_cursor,
        );
        let mut camera = CameraController::with_settings(config.mouse_sensitivity, config.camera_speed);
        camera.set_look_enabled(display.cursor_captured());

        Self {
            mode: ModeSelector::new(config.initial_mode),
            gravity: GravityState::default(),
            quality: QualityLevel::from_index(config.quality_level),
            camera,
            display,
            viewport: Viewport {
                width: config.window_width,
                height: config.window_height,
            },
            exit_requested: false,
        }
    }

    pub fn multiplier(&self) -> u32 {
        self.quality.multiplier()
    }

    /// Apply one discrete action. Returns `true` for [`Action::Reset`], after
    /// which the caller regenerates the well geometry.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::SelectMode(index) => {
                self.mode.select(index);
            }
            Action::IncreaseMass => self.gravity.increase_mass(),
            Action::DecreaseMass => self.gravity.decrease_mass(),
            Action::SetQuality(level) => {
                if level != self.quality {
                    self.quality = level;
                    log::info!("Quality: {} (x{})", level.display_name(), level.multiplier());
                }
            }
            Action::SetTargetFps(fps) => self.display.set_target_fps(fps),
            Action::CycleBackground => self.display.cycle_background(),
            Action::ToggleVsync => self.display.toggle_vsync(),
            Action::ToggleCursor => {
                let captured = self.display.toggle_cursor();
                self.camera.set_look_enabled(captured);
            }
            Action::Reset => {
                self.camera.reset_position();
                self.gravity.reset();
                log::info!("Camera and mass reset");
                return true;
            }
            Action::Quit => {
                log::info!("Exit requested");
                self.exit_requested = true;
            }
        }
        false
    }
}
