//! Desktop Pong: winit window, wgpu rendering, `game_core` simulation

mod app;
mod camera;
mod font;
mod input;
mod mesh;
mod renderer;

use std::time::{SystemTime, UNIX_EPOCH};

use game_core::Config;
use log::{error, info};
use winit::event_loop::{ControlFlow, EventLoop};

use app::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let event_loop = EventLoop::new().map_err(|e| {
        error!("Failed to create event loop: {:?}", e);
        e
    })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Seed once per process from the wall clock
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    info!("Starting Ping Pong (seed {seed})");

    let mut app = App::new(Config::new(), seed);
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Application error: {:?}", e);
        return Err(Box::new(e));
    }

    if let Some(fatal) = app.take_fatal() {
        return Err(fatal.into());
    }
    Ok(())
}
