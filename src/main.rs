use clap::Parser;
use glam::Vec2;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cube_viewer::arcball::Arcball;
use cube_viewer::cli::Cli;
use cube_viewer::renderer::CubeRenderer;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Event-loop glue: routes window events into the arcball and drives the
/// renderer. Redraws are requested only after a state change, so the viewer
/// idles between inputs.
struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<CubeRenderer>,
    arcball: Arcball,
    cursor: Vec2,
}

impl App {
    fn new(cli: Cli) -> Self {
        let arcball = Arcball::new(cli.width, cli.height);
        Self {
            cli,
            window: None,
            renderer: None,
            arcball,
            cursor: Vec2::ZERO,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Cube Viewer")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            // Fail-fast: a broken GPU session is not worth limping along with.
            let renderer = match pollster::block_on(CubeRenderer::new(
                window.clone(),
                self.cli.cube_width,
                self.cli.texture.as_deref(),
            )) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.arcball.resize(size.width, size.height);

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.arcball.resize(size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                self.request_redraw();
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.arcball.press(self.cursor),
                ElementState::Released => self.arcball.release(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                if self.arcball.drag(self.cursor) {
                    self.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.arcball) {
                        log::error!("render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
