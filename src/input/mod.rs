//! Keyboard and mouse input.

pub mod action;
pub mod bindings;
pub mod collector;

pub use action::Action;
pub use collector::{FrameInput, InputCollector};
