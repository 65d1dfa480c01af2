use crate::{Aabb, Ball, BallUpdate, Config, Events, GameRng, Paddle, Side, Time};
use hecs::World;
use log::debug;

/// Advance the ball and resolve walls, paddles and out-of-bounds resets.
///
/// Paddle rects are read before the ball is borrowed mutably. Without both
/// paddles in the world the ball is left untouched.
pub fn update_ball(
    world: &mut World,
    time: &Time,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> BallUpdate {
    let (left, right) = match paddle_rects(world) {
        (Some(left), Some(right)) => (left, right),
        _ => return BallUpdate::default(),
    };

    let mut result = BallUpdate::default();
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        result = ball.update(time.dt, &left, &right, config, rng);

        if result.hit_paddle() {
            debug!(
                "Ball hit {} paddle, velocity now ({:.1}, {:.1})",
                if result.hit_left_paddle { "left" } else { "right" },
                ball.vel.x,
                ball.vel.y
            );
        }
        if let Some(side) = result.exited {
            debug!(
                "Ball left through the {:?} edge, reset to ({:.1}, {:.1}) with velocity ({:.1}, {:.1})",
                side, ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y
            );
        }
    }

    events.ball_hit_wall |= result.hit_wall;
    events.ball_hit_paddle |= result.hit_paddle();
    result
}

/// Current left and right paddle rectangles
pub fn paddle_rects(world: &World) -> (Option<Aabb>, Option<Aabb>) {
    let mut left = None;
    let mut right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(paddle.rect),
            Side::Right => right = Some(paddle.rect),
        }
    }
    (left, right)
}
