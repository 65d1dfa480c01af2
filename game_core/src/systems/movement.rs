use crate::{Arena, InputState, Paddle, Time};
use hecs::World;

/// Move every paddle by its held keys
pub fn move_paddles(world: &mut World, time: &Time, arena: &Arena, input: &impl InputState) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.update(time.dt, input, arena);
    }
}
