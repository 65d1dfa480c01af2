use game_core::*;
use glam::Vec2;
use std::f32::consts::TAU;

fn idle() -> HeldKeys {
    HeldKeys::new()
}

/// Park both paddles at the top so the ball's path along y=384 is clear
fn clear_the_lane(game: &mut Game) {
    let mut keys = HeldKeys::new();
    keys.press(Key::LeftUp);
    keys.press(Key::RightUp);
    for side in [Side::Left, Side::Right] {
        let arena = game.config.arena();
        if let Some(mut paddle) = game.paddle_mut(side) {
            paddle.update(10.0, &keys, &arena);
        }
    }
}

fn place_ball(game: &mut Game, pos: Vec2, vel: Vec2) {
    let mut ball = game.ball_mut().unwrap();
    ball.pos = pos;
    ball.vel = vel;
}

#[test]
fn test_ball_exits_right_and_resets_to_center() {
    let mut game = Game::new(Config::new(), 2024);
    clear_the_lane(&mut game);
    place_ball(&mut game, Vec2::new(512.0, 384.0), Vec2::new(300.0, 0.0));

    // 512 + 300 * 1.7 = 1022: still inside
    for _ in 0..17 {
        let update = game.tick(0.1, &idle());
        assert_eq!(update.exited, None);
    }
    let ball = game.ball().unwrap();
    assert!((ball.pos.x - 1022.0).abs() < 1e-2);
    assert_eq!(ball.pos.y, 384.0);

    // Next step crosses 1024 and resets in the same update
    let update = game.tick(0.1, &idle());
    assert_eq!(update.exited, Some(Side::Right));

    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, Vec2::new(512.0, 384.0));
    assert!((ball.vel.length() - 300.0).abs() < 1e-3);
    assert_eq!(game.score.left, 1);
    assert_eq!(game.score.right, 0);
    assert!(game.events.left_scored);
}

#[test]
fn test_events_only_describe_latest_step() {
    let mut game = Game::new(Config::new(), 5);
    clear_the_lane(&mut game);
    place_ball(&mut game, Vec2::new(1020.0, 384.0), Vec2::new(300.0, 0.0));

    game.tick(0.1, &idle());
    assert!(game.events.left_scored);

    place_ball(&mut game, Vec2::new(512.0, 384.0), Vec2::new(10.0, 0.0));
    game.tick(0.01, &idle());
    assert!(!game.events.left_scored, "Events are cleared every step");
    assert_eq!(game.score.left, 1, "Score persists");
}

#[test]
fn test_left_paddle_return_accelerates_ball() {
    let mut game = Game::new(Config::new(), 11);
    // Left paddle spans x 50..70 and y 334..434 at start
    place_ball(&mut game, Vec2::new(75.0, 384.0), Vec2::new(-100.0, 10.0));

    game.tick(0.0, &idle());

    let ball = game.ball().unwrap();
    assert!((ball.vel.x - 105.0).abs() < 1e-3);
    assert!((ball.vel.y - 10.5).abs() < 1e-3);
    assert!(game.events.ball_hit_paddle);
}

#[test]
fn test_paddle_moves_before_ball_collision() {
    let mut game = Game::new(Config::new(), 11);
    // Ball sits just above the left paddle's starting span
    place_ball(&mut game, Vec2::new(65.0, 450.0), Vec2::new(-100.0, 0.0));

    let mut keys = HeldKeys::new();
    keys.press(Key::LeftUp);
    // 400 * 0.1 = 40 up: paddle now spans 374..474
    game.tick(0.1, &keys);

    assert!(game.events.ball_hit_paddle, "Collision uses the moved paddle");
}

#[test]
fn test_wall_bounce_keeps_speed() {
    let mut game = Game::new(Config::new(), 3);
    place_ball(&mut game, Vec2::new(500.0, 5.0), Vec2::new(0.0, -50.0));

    game.tick(0.0, &idle());

    let ball = game.ball().unwrap();
    assert_eq!(ball.vel, Vec2::new(0.0, 50.0));
    assert!(game.events.ball_hit_wall);
}

#[test]
fn test_paddles_stay_in_bounds_over_long_play() {
    let mut game = Game::new(Config::new(), 8);
    let height = game.config.window_height;
    let mut keys = HeldKeys::new();

    for frame in 0..600 {
        keys.clear();
        if (frame / 50) % 2 == 0 {
            keys.press(Key::LeftUp);
            keys.press(Key::RightDown);
        } else {
            keys.press(Key::LeftDown);
            keys.press(Key::RightUp);
        }
        game.tick(1.0 / 60.0, &keys);

        for side in [Side::Left, Side::Right] {
            let rect = game.paddle(side).unwrap().rect;
            assert!(rect.min.y >= 0.0, "frame {frame}: {side:?} below floor");
            assert!(rect.max.y <= height, "frame {frame}: {side:?} above ceiling");
        }
    }
}

#[test]
fn test_reset_speed_is_initial_speed_after_rallies() {
    let mut game = Game::new(Config::new(), 21);
    clear_the_lane(&mut game);

    for _ in 0..20 {
        // Much faster than the initial speed, heading out the left edge
        place_ball(&mut game, Vec2::new(5.0, 384.0), Vec2::new(-2000.0, 700.0));
        let update = game.tick(0.01, &idle());
        assert_eq!(update.exited, Some(Side::Left));

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, game.config.center());
        assert!((ball.vel.length() - game.config.ball_speed_initial).abs() < 1e-3);
    }
    assert_eq!(game.score.right, 20);
}

#[test]
fn test_reset_angles_are_uniform() {
    let mut rng = GameRng::new(4242);
    let config = Config::new();
    let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_radius);

    const BUCKETS: usize = 8;
    const SAMPLES: usize = 16_000;
    let mut counts = [0usize; BUCKETS];
    for _ in 0..SAMPLES {
        ball.reset(config.center(), config.ball_speed_initial, &mut rng);
        let angle = ball.vel.y.atan2(ball.vel.x).rem_euclid(TAU);
        let bucket = ((angle / TAU) * BUCKETS as f32) as usize;
        counts[bucket.min(BUCKETS - 1)] += 1;
    }

    // Chi-squared with 7 degrees of freedom; 24.3 is the 0.1% critical value
    let expected = (SAMPLES / BUCKETS) as f32;
    let chi2: f32 = counts
        .iter()
        .map(|&c| (c as f32 - expected).powi(2) / expected)
        .sum();
    assert!(chi2 < 24.3, "angle buckets {counts:?} (chi2 = {chi2})");
}

#[test]
fn test_large_delta_is_not_capped() {
    let mut game = Game::new(Config::new(), 9);
    clear_the_lane(&mut game);
    place_ball(&mut game, Vec2::new(100.0, 384.0), Vec2::new(300.0, 0.0));

    // A two-second stall jumps the ball 600 units in one step
    game.tick(2.0, &idle());

    let ball = game.ball().unwrap();
    assert!((ball.pos.x - 700.0).abs() < 1e-3);
}
