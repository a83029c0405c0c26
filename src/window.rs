use std::sync::Arc;

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    config::AppConfig,
    demo::ZeppelinDemo,
    input::{self, InputAction},
    rendering::renderer::Renderer,
};

struct App {
    renderer: Option<Renderer>,
    demo: ZeppelinDemo,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(demo: ZeppelinDemo) -> Self {
        Self {
            renderer: None,
            demo,
            error: None,
        }
    }

    fn create_renderer(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Renderer> {
        let window_config = &self.demo.config.window;
        let window_attributes = Window::default_attributes()
            .with_title(window_config.title.as_str())
            .with_inner_size(LogicalSize::new(window_config.width, window_config.height));

        let window = event_loop
            .create_window(window_attributes)
            .context("Failed to create window")?;

        log::info!(
            "Created {}x{} window",
            window.inner_size().width,
            window.inner_size().height
        );

        pollster::block_on(Renderer::new(Arc::new(window), &self.demo.config))
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        match input::action_for_key(&event.logical_key) {
            Some(InputAction::Command(command)) => {
                self.demo.handle_command(command);
                if let Some(renderer) = &self.renderer {
                    renderer.window.request_redraw();
                }
            }
            Some(InputAction::Quit) => event_loop.exit(),
            None => (),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match self.demo.render(renderer) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
                renderer.window.request_redraw();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory");
                event_loop.exit();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timeout");
            }
            Err(other) => {
                log::error!("Unexpected error: {:?}", other);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        match self.create_renderer(event_loop) {
            Ok(renderer) => {
                renderer.window.request_redraw();
                self.renderer = Some(renderer);
            }
            Err(error) => {
                log::error!("{error:#}");
                self.error = Some(error);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if self.demo.resize(new_size.width, new_size.height) {
                    if let Some(renderer) = self.renderer.as_mut() {
                        renderer.resize(new_size);
                        renderer.window.request_redraw();
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event_loop, &event);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => (),
        }
    }
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(ZeppelinDemo::new(config));
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
