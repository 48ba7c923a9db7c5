//! Seafarer - three ships bobbing on a rolling sea
//!
//! Scrolling scrubs the story: the palette darkens, the camera swings
//! around, the ships sail off and the camera pulls back.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use seafarer::assets::GltfLoader;
use seafarer::cli::Args;
use seafarer::frame_loop::FrameLoop;
use seafarer::params::{CaptureConfig, StageParams};
use seafarer::rendering::RenderSystem;

/// Main application state
struct App {
    window: Option<Arc<Window>>,
    frame_loop: Option<FrameLoop<RenderSystem>>,

    params: StageParams,
    capture: Option<CaptureConfig>,

    start_time: Instant,
    failure: Option<anyhow::Error>,
}

impl App {
    fn new(args: &Args) -> Self {
        Self {
            window: None,
            frame_loop: None,
            params: args.stage_params(),
            capture: args.capture_config(),
            start_time: Instant::now(),
            failure: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Seafarer")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.params.render.window_width,
                self.params.render.window_height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create window")?,
        );

        let capture = self.capture.clone();
        let params = &self.params;
        let mut frame_loop = FrameLoop::boot(&GltfLoader, params, |scene| {
            pollster::block_on(RenderSystem::new(
                Arc::clone(&window),
                scene,
                params,
                capture,
            ))
        })?;

        let size = window.inner_size();
        frame_loop.resize(size.width, size.height);

        log::info!("Seafarer is running (scroll to play, ESC to quit)");

        self.start_time = Instant::now();
        self.window = Some(window);
        self.frame_loop = Some(frame_loop);
        Ok(())
    }

    fn viewport_height(&self) -> f32 {
        self.window
            .as_ref()
            .map(|w| w.inner_size().height as f32)
            .unwrap_or(self.params.render.window_height as f32)
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        let page = self.viewport_height();
        let Some(frame_loop) = self.frame_loop.as_mut() else {
            return;
        };
        match key {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::PageDown | KeyCode::Space => frame_loop.scroll_by(page),
            KeyCode::PageUp => frame_loop.scroll_by(-page),
            KeyCode::ArrowDown => frame_loop.scroll_lines(1.0),
            KeyCode::ArrowUp => frame_loop.scroll_lines(-1.0),
            KeyCode::Home => frame_loop.scroll_to(0.0),
            KeyCode::End => {
                let end = frame_loop.scroll().max();
                frame_loop.scroll_to(end);
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let (Some(window), Some(frame_loop)) = (&self.window, &self.frame_loop) else {
            return;
        };
        if frame_loop.wants_redraw() {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.failure.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.start(event_loop) {
            log::error!("Startup failed: {:#}", e);
            self.failure = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => self.handle_key(event_loop, key),
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(frame_loop) = self.frame_loop.as_mut() {
                    match delta {
                        MouseScrollDelta::LineDelta(_, y) => frame_loop.scroll_lines(-y),
                        MouseScrollDelta::PixelDelta(pos) => frame_loop.scroll_by(-pos.y as f32),
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(frame_loop) = self.frame_loop.as_mut() {
                    frame_loop.resize(size.width, size.height);
                }
            }
            WindowEvent::Occluded(occluded) => {
                if let Some(frame_loop) = self.frame_loop.as_mut() {
                    frame_loop.set_visible(!occluded);
                }
                if !occluded {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let elapsed_s = self.start_time.elapsed().as_secs_f32();
                if let Some(frame_loop) = self.frame_loop.as_mut() {
                    frame_loop.tick(elapsed_s);
                    if frame_loop.sink().capture_done() {
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut app = App::new(&args);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow!("event loop error: {}", e))?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
