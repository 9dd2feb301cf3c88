pub mod backend;
pub mod palette;
pub mod primitive_renderer;

pub use backend::{FramePacket, FrameTransforms, RenderBackend};
pub use primitive_renderer::PrimitiveRenderer;

/// Per-frame rendering failures.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// Fatal failures while bringing up the window and GPU.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("No compatible GPU adapter found")]
    NoAdapter,
    #[error("Failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("Surface reports no supported formats")]
    NoSurfaceFormat,
}
