//! Per-frame update, in fixed order: time step, input, generation, transforms,
//! draw.

use super::ViewerState;
use crate::generators::{GenerationContext, Generator, VertexBuffer};
use crate::input::FrameInput;
use crate::rendering::{FramePacket, FrameTransforms, RenderBackend, RenderError};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub dt: f32,
    pub generator: Generator,
    pub vertex_count: usize,
    /// Reset was applied with the well active, so the drawn well was built at `t = 0`.
    pub well_reset: bool,
}

/// Owns the per-frame vertex storage and the previous timestamp.
#[derive(Debug, Default)]
pub struct FrameDriver {
    vertices: VertexBuffer,
    last_time: Option<f32>,
    applied_vsync: Option<bool>,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    /// Run one frame at `now` seconds since startup.
    pub fn run_frame<B: RenderBackend + ?Sized>(
        &mut self,
        state: &mut ViewerState,
        input: &FrameInput,
        now: f32,
        backend: &mut B,
    ) -> Result<FrameReport, RenderError> {
        let dt = match self.last_time {
            Some(previous) => (now - previous).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(now);
        self.frames += 1;

        let look_was_enabled = state.camera.look_enabled();
        let mut reset_applied = false;
        for action in &input.actions {
            reset_applied |= state.apply(*action);
        }
        // Motion buffered while the cursor was released must not turn the camera.
        if look_was_enabled || !state.camera.look_enabled() {
            for motion in &input.pointer_motion {
                state.camera.handle_pointer_motion(motion.x, motion.y);
            }
        }
        state.camera.handle_scroll(input.scroll);
        state.camera.advance(input.held, dt);

        let vsync = state.display.vsync();
        if self.applied_vsync != Some(vsync) {
            backend.set_vsync(vsync);
            self.applied_vsync = Some(vsync);
        }

        let generator = state.mode.current();
        // A reset while the well is showing redraws it from `t = 0`.
        let well_reset = reset_applied && generator == Generator::GravityWell;
        let time = if well_reset { 0.0 } else { now };
        let ctx = GenerationContext::new(
            time,
            state.multiplier() as i64,
            state.gravity.well_params(),
        );
        generator.generate(&ctx, &mut self.vertices);
        log::trace!(
            "Frame {}: {} produced {} vertices",
            self.frames,
            generator.display_name(),
            self.vertices.len()
        );

        let transforms = FrameTransforms::compute(&state.camera, state.viewport.aspect(), now);
        backend.draw(&FramePacket {
            vertices: self.vertices.as_floats(),
            draw_mode: generator.draw_mode(),
            transforms,
            clear_color: state.display.background_color(),
        })?;

        Ok(FrameReport {
            dt,
            generator,
            vertex_count: self.vertices.len(),
            well_reset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{HeldKeys, DEFAULT_POSITION};
    use crate::generators::{gravity_well, DrawMode, WellParams, FLOATS_PER_VERTEX};
    use crate::input::Action;
    use glam::{Mat4, Vec2};

    #[derive(Default)]
    struct RecordingBackend {
        draws: Vec<(usize, DrawMode, [f32; 3], Mat4)>,
        vsync_calls: Vec<bool>,
        drawn: Vec<f32>,
        fail_next: bool,
    }

    impl RenderBackend for RecordingBackend {
        fn draw(&mut self, packet: &FramePacket<'_>) -> Result<(), RenderError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(RenderError::Surface(wgpu::SurfaceError::Timeout));
            }
            assert_eq!(packet.vertices.len() % FLOATS_PER_VERTEX, 0);
            self.draws.push((
                packet.vertex_count(),
                packet.draw_mode,
                packet.clear_color,
                packet.transforms.view,
            ));
            self.drawn = packet.vertices.to_vec();
            Ok(())
        }

        fn set_vsync(&mut self, enabled: bool) {
            self.vsync_calls.push(enabled);
        }

        fn resize(&mut self, _width: u32, _height: u32) {}
    }

    fn input_with(actions: Vec<Action>) -> FrameInput {
        FrameInput {
            actions,
            ..FrameInput::default()
        }
    }

    #[test]
    fn test_first_frame_has_zero_dt() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        let first = driver
            .run_frame(&mut state, &FrameInput::default(), 3.0, &mut backend)
            .unwrap();
        let second = driver
            .run_frame(&mut state, &FrameInput::default(), 3.25, &mut backend)
            .unwrap();
        assert_eq!(first.dt, 0.0);
        assert_eq!(second.dt, 0.25);
        assert_eq!(driver.frames(), 2);
    }

    #[test]
    fn test_backwards_clock_clamps_dt() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        driver.run_frame(&mut state, &FrameInput::default(), 5.0, &mut backend).unwrap();
        let report = driver
            .run_frame(&mut state, &FrameInput::default(), 4.0, &mut backend)
            .unwrap();
        assert_eq!(report.dt, 0.0);
    }

    #[test]
    fn test_mode_switch_applies_before_generation() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        let report = driver
            .run_frame(&mut state, &input_with(vec![Action::SelectMode(13)]), 1.0, &mut backend)
            .unwrap();
        assert_eq!(report.generator, Generator::Tesseract);
        assert_eq!(backend.draws[0].0, 16);
        assert_eq!(backend.draws[0].1, DrawMode::LineStrip);

        driver
            .run_frame(&mut state, &input_with(vec![Action::SelectMode(3)]), 1.1, &mut backend)
            .unwrap();
        assert_eq!(backend.draws[1].1, DrawMode::Points);
    }

    #[test]
    fn test_vsync_only_sent_on_change() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        driver.run_frame(&mut state, &FrameInput::default(), 0.0, &mut backend).unwrap();
        driver.run_frame(&mut state, &FrameInput::default(), 0.1, &mut backend).unwrap();
        driver
            .run_frame(&mut state, &input_with(vec![Action::SetTargetFps(144)]), 0.2, &mut backend)
            .unwrap();
        assert_eq!(backend.vsync_calls, vec![true, false]);
    }

    #[test]
    fn test_reset_rebuilds_well_and_restores_state() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        state.mode.select(15);
        let mut backend = RecordingBackend::default();

        let heavier = input_with(vec![Action::IncreaseMass, Action::IncreaseMass]);
        driver.run_frame(&mut state, &heavier, 0.0, &mut backend).unwrap();
        assert_eq!(state.gravity.central_mass(), 0.9);

        let report = driver
            .run_frame(&mut state, &input_with(vec![Action::Reset]), 2.0, &mut backend)
            .unwrap();
        assert!(report.well_reset);
        assert_eq!(state.gravity.central_mass(), 0.5);
        assert_eq!(report.vertex_count, gravity_well::vertex_count());

        // Centre sample of the surface reflects the reset mass.
        let centre_depth = driver
            .vertices()
            .vertices()
            .iter()
            .take(gravity_well::GRID_SIZE * gravity_well::GRID_SIZE)
            .map(|v| v.position[1])
            .fold(f32::INFINITY, f32::min);
        assert!(centre_depth > -0.5 - 1e-4);
    }

    #[test]
    fn test_reset_draws_well_rebuilt_at_time_zero() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        state.mode.select(15);
        let mut backend = RecordingBackend::default();

        let heavier = input_with(vec![Action::IncreaseMass]);
        driver.run_frame(&mut state, &heavier, 0.0, &mut backend).unwrap();
        let report = driver
            .run_frame(&mut state, &input_with(vec![Action::Reset]), 2.0, &mut backend)
            .unwrap();

        let mut expected = VertexBuffer::new();
        let ctx = GenerationContext::new(0.0, state.multiplier() as i64, WellParams::default());
        Generator::GravityWell.generate(&ctx, &mut expected);
        assert!(report.well_reset);
        assert_eq!(backend.drawn, expected.as_floats());
    }

    #[test]
    fn test_reset_outside_well_mode_draws_active_generator() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        let report = driver
            .run_frame(&mut state, &input_with(vec![Action::Reset]), 1.0, &mut backend)
            .unwrap();

        let mut expected = VertexBuffer::new();
        let ctx = GenerationContext::new(1.0, state.multiplier() as i64, WellParams::default());
        Generator::ParametricSpiral.generate(&ctx, &mut expected);
        assert!(!report.well_reset);
        assert_eq!(report.generator, Generator::ParametricSpiral);
        assert_eq!(backend.drawn, expected.as_floats());
        assert_eq!(state.gravity.central_mass(), 0.5);
    }

    #[test]
    fn test_input_applied_before_view_is_built() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        let input = FrameInput {
            held: HeldKeys { forward: true, ..Default::default() },
            ..FrameInput::default()
        };
        driver.run_frame(&mut state, &FrameInput::default(), 0.0, &mut backend).unwrap();
        driver.run_frame(&mut state, &input, 1.0, &mut backend).unwrap();

        assert_ne!(state.camera.position, DEFAULT_POSITION);
        assert_eq!(backend.draws[1].3, state.camera.view_matrix());
    }

    #[test]
    fn test_pointer_motion_and_scroll_reach_camera() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        let input = FrameInput {
            pointer_motion: vec![Vec2::ZERO, Vec2::new(50.0, 0.0)],
            scroll: 1.0,
            ..FrameInput::default()
        };
        driver.run_frame(&mut state, &input, 0.0, &mut backend).unwrap();

        assert!((state.camera.yaw() - (-90.0 + 5.0)).abs() < 1e-4);
        assert_eq!(state.camera.speed(), 3.0);
    }

    #[test]
    fn test_motion_from_released_cursor_is_dropped_on_recapture() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        driver
            .run_frame(&mut state, &input_with(vec![Action::ToggleCursor]), 0.0, &mut backend)
            .unwrap();
        assert!(!state.camera.look_enabled());

        let recapture = FrameInput {
            actions: vec![Action::ToggleCursor],
            pointer_motion: vec![Vec2::new(50.0, 0.0), Vec2::new(50.0, 0.0)],
            ..FrameInput::default()
        };
        driver.run_frame(&mut state, &recapture, 0.1, &mut backend).unwrap();
        assert!(state.camera.look_enabled());
        assert_eq!(state.camera.yaw(), -90.0);

        // The next frame still drops its first sample, then turns normally.
        let look = FrameInput {
            pointer_motion: vec![Vec2::new(50.0, 0.0), Vec2::new(50.0, 0.0)],
            ..FrameInput::default()
        };
        driver.run_frame(&mut state, &look, 0.2, &mut backend).unwrap();
        assert!((state.camera.yaw() - (-90.0 + 5.0)).abs() < 1e-4);
    }

    #[test]
    fn test_background_reaches_backend() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend::default();

        driver
            .run_frame(&mut state, &input_with(vec![Action::CycleBackground]), 0.0, &mut backend)
            .unwrap();
        assert_eq!(backend.draws[0].2, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_backend_error_is_returned() {
        let mut driver = FrameDriver::new();
        let mut state = ViewerState::default();
        let mut backend = RecordingBackend {
            fail_next: true,
            ..Default::default()
        };

        let result = driver.run_frame(&mut state, &FrameInput::default(), 0.0, &mut backend);
        assert!(matches!(result, Err(RenderError::Surface(_))));
        assert!(driver.run_frame(&mut state, &FrameInput::default(), 0.1, &mut backend).is_ok());
    }
}
