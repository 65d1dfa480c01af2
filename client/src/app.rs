use std::sync::Arc;

use game_core::{Config, FrameClock, Game, HeldKeys};
use log::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::input::logical_key;
use crate::renderer::Renderer;

/// Owns the game, the live input state and the frame clock
pub struct App {
    config: Config,
    game: Game,
    keys: HeldKeys,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    fatal: Option<String>,
}

impl App {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            game: Game::new(config.clone(), seed),
            config,
            keys: HeldKeys::new(),
            clock: FrameClock::new(),
            window: None,
            renderer: None,
            fatal: None,
        }
    }

    /// Setup failure that ended the event loop, if any
    pub fn take_fatal(&mut self) -> Option<String> {
        self.fatal.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, message: String) {
        error!("{message}");
        self.fatal = Some(message);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, String> {
        let attributes = Window::default_attributes()
            .with_title("Ping Pong")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));
        event_loop
            .create_window(attributes)
            .map(Arc::new)
            .map_err(|e| format!("Failed to create window: {:?}", e))
    }

    /// One iteration: measure, update, draw, present
    fn frame(&mut self) {
        let dt = self.clock.tick();
        self.game.tick(dt, &self.keys);

        if let Some(renderer) = self.renderer.as_mut() {
            if let Err(e) = renderer.render(&self.game) {
                error!("Render error: {}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e),
        };
        let renderer = match pollster::block_on(Renderer::new(window.clone(), &self.config)) {
            Ok(renderer) => renderer,
            Err(e) => return self.fail(event_loop, e),
        };
        info!(
            "Window created: {}x{}",
            self.config.window_width, self.config.window_height
        );

        // Don't count setup time as the first frame's delta
        self.clock = FrameClock::new();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(
                    "Close requested, exiting. Final score {} - {}",
                    self.game.score.left, self.game.score.right
                );
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = logical_key(code) {
                        self.keys.set(key, event.state.is_pressed());
                    }
                }
            }
            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused
                self.keys.clear();
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => (),
        }
    }
}
