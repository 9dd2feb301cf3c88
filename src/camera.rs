use glam::{Mat4, Vec3};

pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_SPEED: f32 = 2.5;

pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 10.0;

/// Speed change per scroll line.
pub const SCROLL_SPEED_STEP: f32 = 0.5;

/// Movement keys held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.up || self.down
    }

    pub fn set(&mut self, direction: MoveDirection, held: bool) {
        match direction {
            MoveDirection::Forward => self.forward = held,
            MoveDirection::Backward => self.backward = held,
            MoveDirection::Left => self.left = held,
            MoveDirection::Right => self.right = held,
            MoveDirection::Up => self.up = held,
            MoveDirection::Down => self.down = held,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free-flying yaw/pitch camera.
///
/// Angles are in degrees. The `front`/`right`/`up` basis is recomputed whenever the
/// orientation changes; position is unbounded.
#[derive(Debug, Clone)]
pub struct CameraController {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,

    pub sensitivity: f32,
    speed: f32,

    // Drops the first motion sample after look is (re-)enabled so the view does not jump.
    first_motion: bool,
    look_enabled: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        let mut camera = Self {
            position: DEFAULT_POSITION,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::Y,
            sensitivity: DEFAULT_SENSITIVITY,
            speed: DEFAULT_SPEED,
            first_motion: true,
            look_enabled: true,
        };
        camera.update_vectors();
        camera
    }

    /// Camera with configured sensitivity and speed; the speed is clamped.
    pub fn with_settings(sensitivity: f32, speed: f32) -> Self {
        let mut camera = Self::new();
        if sensitivity.is_finite() && sensitivity > 0.0 {
            camera.sensitivity = sensitivity;
        }
        camera.speed = clamp_speed(speed);
        camera
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn look_enabled(&self) -> bool {
        self.look_enabled
    }

    /// Enable or disable mouse look. Re-enabling arms the first-motion guard.
    pub fn set_look_enabled(&mut self, enabled: bool) {
        if enabled && !self.look_enabled {
            self.first_motion = true;
        }
        self.look_enabled = enabled;
    }

    /// Apply one relative pointer motion sample in pixels.
    ///
    /// Screen-down is negative pitch. Ignored while look is disabled; the first
    /// sample after (re-)enabling only arms tracking.
    pub fn handle_pointer_motion(&mut self, dx: f32, dy: f32) {
        if !self.look_enabled {
            return;
        }
        if self.first_motion {
            self.first_motion = false;
            return;
        }
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }

        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Adjust flight speed by scroll lines.
    pub fn handle_scroll(&mut self, lines: f32) {
        if lines == 0.0 || !lines.is_finite() {
            return;
        }
        let previous = self.speed;
        self.speed = clamp_speed(self.speed + lines * SCROLL_SPEED_STEP);
        if self.speed != previous {
            log::info!("Camera speed: {:.1}", self.speed);
        }
    }

    /// Move along the camera basis for every held key. Contributions add up and
    /// are not re-normalised, so diagonal movement is faster.
    pub fn advance(&mut self, held: HeldKeys, dt: f32) {
        if !held.any() || !(dt > 0.0) {
            return;
        }
        let step = self.speed * dt;

        if held.forward {
            self.position += self.front * step;
        }
        if held.backward {
            self.position -= self.front * step;
        }
        if held.left {
            self.position -= self.right * step;
        }
        if held.right {
            self.position += self.right * step;
        }
        if held.up {
            self.position += self.up * step;
        }
        if held.down {
            self.position -= self.up * step;
        }

        log::debug!("Camera position: {:?}", self.position);
    }

    /// Move back to the start position; orientation and speed are kept.
    pub fn reset_position(&mut self) {
        self.position = DEFAULT_POSITION;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

fn clamp_speed(speed: f32) -> f32 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        DEFAULT_SPEED
    }
}
