//! Seam between the frame driver and whatever draws the frame.

use glam::{Mat4, Vec3};

use super::RenderError;
use crate::camera::CameraController;
use crate::generators::DrawMode;

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Radians per second of model spin.
pub const MODEL_SPIN_RATE: f32 = 0.3;
pub const MODEL_SPIN_AXIS: Vec3 = Vec3::new(0.1, 1.0, 0.0);

/// Model, view and projection matrices for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl FrameTransforms {
    pub fn compute(camera: &CameraController, aspect: f32, time: f32) -> Self {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Self {
            model: Mat4::from_axis_angle(MODEL_SPIN_AXIS.normalize(), time * MODEL_SPIN_RATE),
            view: camera.view_matrix(),
            projection: Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR),
        }
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FramePacket<'a> {
    /// Interleaved `(x, y, z, r, g, b)`.
    pub vertices: &'a [f32],
    pub draw_mode: DrawMode,
    pub transforms: FrameTransforms,
    pub clear_color: [f32; 3],
}

impl FramePacket<'_> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / crate::generators::FLOATS_PER_VERTEX
    }
}

/// Draws frames.
///
/// The frame driver calls these once per frame in order: `set_vsync` (only when the
/// setting changed) and then `draw`. `resize` comes from window events.
pub trait RenderBackend {
    /// Upload the packet's vertices and draw them.
    fn draw(&mut self, packet: &FramePacket<'_>) -> Result<(), RenderError>;

    /// Switch presentation between vsync and uncapped.
    fn set_vsync(&mut self, enabled: bool);

    /// Handle window resize.
    fn resize(&mut self, width: u32, height: u32);
}
