//! # Math Animations: real-time procedural geometry viewer
//!
//! Sixteen closed-form generators (curves, surfaces, an implicit gyroid, the
//! Lorenz attractor, a Mandelbrot height field, a projected tesseract and a
//! gravitational well) are re-evaluated every frame as functions of elapsed time
//! and drawn as point clouds or line strips under a free-flying camera.
//!
//! ## Architecture Overview
//!
//! ### 1. Generators ([`generators`])
//! - [`generators::Generator`] - closed set of modes with one `generate` entry point
//! - [`generators::quality`] - quality level to sample-density multiplier
//!
//! **Key Design**: generators are pure functions of `(time, multiplier, well
//! parameters)`; each call rebuilds the vertex buffer from scratch.
//!
//! ### 2. Viewer State ([`scene`])
//! - [`scene::ViewerState`] - mode, gravity, quality, camera and display settings
//! - [`scene::FrameDriver`] - per-frame update: input, generation, transforms, draw
//!
//! ### 3. Input ([`input`])
//! - [`input::InputCollector`] - buffers events into one [`input::FrameInput`] per frame
//! - [`input::bindings`] - the key table
//!
//! ### 4. Rendering ([`rendering`])
//! - [`rendering::RenderBackend`] - what the frame driver draws through
//! - [`rendering::PrimitiveRenderer`] - wgpu implementation
//!
//! ## Data Flow
//!
//! ```text
//! winit events → InputCollector → FrameInput → ViewerState → Generator → RenderBackend
//! ```
//!
//! ## Dependencies
//!
//! - **Graphics**: `wgpu` (GPU abstraction), `winit` (windowing), `pollster` (device setup)
//! - **Math**: `glam` (vectors and matrices), `bytemuck` (vertex upload)
//! - **Serialization**: `serde` + `ron` (startup configuration)
//! - **Diagnostics**: `log` + `env_logger`, `thiserror`

pub mod app;
pub mod camera;
pub mod config;
pub mod generators;
pub mod input;
pub mod rendering;
pub mod scene;
