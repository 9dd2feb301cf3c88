use crate::config::ViewerConfig;
use crate::input::bindings::CONTROLS_HELP;
use crate::input::InputCollector;
use crate::rendering::{InitError, PrimitiveRenderer, RenderBackend, RenderError};
use crate::scene::{FrameDriver, ViewerState, Viewport};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

pub const WINDOW_TITLE: &str = "Mathematical Functions Animation";

pub struct App {
    window: Arc<Window>,
    renderer: PrimitiveRenderer,
    state: ViewerState,
    driver: FrameDriver,
    input: InputCollector,
    start_time: Instant,
    frame_count: u32,
    fps_timer: Instant,
}

impl App {
    pub fn new(window: Arc<Window>, renderer: PrimitiveRenderer, state: ViewerState) -> Self {
        let app = Self {
            window,
            renderer,
            state,
            driver: FrameDriver::new(),
            input: InputCollector::new(),
            start_time: Instant::now(),
            frame_count: 0,
            fps_timer: Instant::now(),
        };
        app.sync_cursor();
        log::info!("Mode {}: {}", app.state.mode.index(), app.state.mode.current().display_name());
        app
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns `false` once the viewer should close.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                return false;
            }
            WindowEvent::Resized(physical_size) => {
                self.renderer.resize(physical_size.width, physical_size.height);
                if physical_size.width > 0 && physical_size.height > 0 {
                    self.state.viewport = Viewport {
                        width: physical_size.width,
                        height: physical_size.height,
                    };
                }
            }
            WindowEvent::Focused(false) => {
                self.input.release_all();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.input.handle_scroll(*delta);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.handle_key(event);
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            _ => {}
        }
        !self.state.exit_requested
    }

    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.handle_pointer_motion(delta.0, delta.1);
        }
    }

    fn render(&mut self) {
        let input = self.input.take_frame();
        let cursor_was_captured = self.state.display.cursor_captured();
        let now = self.start_time.elapsed().as_secs_f32();

        match self.driver.run_frame(&mut self.state, &input, now, &mut self.renderer) {
            Ok(_) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                log::error!("Surface out of memory, exiting");
                self.state.exit_requested = true;
            }
            Err(e) => {
                log::warn!("Frame skipped: {}", e);
            }
        }

        if self.state.display.cursor_captured() != cursor_was_captured {
            self.sync_cursor();
        }

        // FPS counter
        self.frame_count += 1;
        if self.fps_timer.elapsed().as_secs_f32() >= 1.0 {
            log::info!("FPS: {}", self.frame_count);
            self.frame_count = 0;
            self.fps_timer = Instant::now();
        }
    }

    fn sync_cursor(&self) {
        let captured = self.state.display.cursor_captured();
        let grab = if captured {
            // Not every platform supports locking; confining is close enough.
            self.window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            self.window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = grab {
            log::warn!("Failed to change cursor grab: {}", e);
        }
        self.window.set_cursor_visible(!captured);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

struct AppState {
    config: ViewerConfig,
    app: Option<App>,
    init_error: Option<InitError>,
}

impl AppState {
    fn init(&self, event_loop: &ActiveEventLoop) -> Result<App, InitError> {
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let mut state = ViewerState::from_config(&self.config);
        let size = window.inner_size();
        if size.width > 0 && size.height > 0 {
            state.viewport = Viewport {
                width: size.width,
                height: size.height,
            };
        }

        let renderer = PrimitiveRenderer::new(window.clone(), state.display.vsync())?;
        Ok(App::new(window, renderer, state))
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }

        match self.init(event_loop) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                log::error!("Initialisation failed: {}", e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(app) = &mut self.app else { return };

        if window_id != app.window().id() {
            return;
        }

        if !app.handle_event(&event) {
            event_loop.exit();
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(app) = &mut self.app {
            app.handle_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(app) = &self.app {
            app.request_redraw();
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error(transparent)]
    Init(#[from] InitError),
}

pub fn run() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("{}", CONTROLS_HELP);

    let config = ViewerConfig::load();
    let event_loop = EventLoop::new()?;
    let mut state = AppState {
        config,
        app: None,
        init_error: None,
    };

    event_loop.run_app(&mut state)?;

    match state.init_error.take() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
