pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
///
/// Uses `time.dt` as given: no clamping and no fixed sub-steps, so the
/// result depends on the frame pacing of the caller.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &impl InputState,
    rng: &mut GameRng,
) -> BallUpdate {
    // Clear events at start of frame
    events.clear();

    // 1. Move paddles based on held keys
    move_paddles(world, time, &config.arena(), input);

    // 2. Move ball against the updated paddle rects
    let update = update_ball(world, time, config, events, rng);

    // 3. Credit a point if the ball left the arena
    check_scoring(&update, score, events);

    // Update time
    time.now += time.dt;

    update
}

/// Helper to create a paddle entity, vertically centered on its side
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(side, config.paddle_x(side), config.center().y, config);
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius),))
}
