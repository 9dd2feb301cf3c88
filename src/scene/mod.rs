//! Viewer state and the per-frame driver.
//!
//! [`ViewerState`] owns everything that changes at runtime (mode, gravity, quality,
//! camera, display settings). [`FrameDriver`] advances it once per frame from a
//! [`crate::input::FrameInput`] snapshot and hands the result to a
//! [`crate::rendering::RenderBackend`].

pub mod display;
pub mod frame;
pub mod gravity;
pub mod mode;
pub mod state;

pub use display::DisplaySettings;
pub use frame::{FrameDriver, FrameReport};
pub use gravity::GravityState;
pub use mode::ModeSelector;
pub use state::{ViewerState, Viewport};
