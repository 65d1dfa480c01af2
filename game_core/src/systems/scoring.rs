use crate::{BallUpdate, Events, Score, Side};
use log::debug;

/// Credit the point for a ball that left the arena
///
/// Leaving through the left edge scores for the right player and vice versa.
pub fn check_scoring(update: &BallUpdate, score: &mut Score, events: &mut Events) {
    match update.exited {
        Some(Side::Left) => {
            score.increment_right();
            events.right_scored = true;
        }
        Some(Side::Right) => {
            score.increment_left();
            events.left_scored = true;
        }
        None => return,
    }
    debug!("Score {} - {}", score.left, score.right);
}
