//! Frame driver state: the world, its resources and the per-frame entry points

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, BallUpdate, Canvas, Color, Config, Events, GameRng,
    InputState, Paddle, Score, Side, Time,
};

/// Title drawn in the top-left corner
pub const TITLE: &str = "PING PONG GAME";

/// Two paddles, one ball and everything needed to advance them
pub struct Game {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left_paddle = create_paddle(&mut world, Side::Left, &config);
        let right_paddle = create_paddle(&mut world, Side::Right, &config);

        let start = Ball::spawn(config.center(), config.ball_speed_initial, config.ball_radius, &mut rng);
        let ball = create_ball(&mut world, start.pos, start.vel, &config);

        Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            left_paddle,
            right_paddle,
            ball,
        }
    }

    /// Advance by `dt` wall-clock seconds reading the live input state
    pub fn tick(&mut self, dt: f32, input: &impl InputState) -> BallUpdate {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            input,
            &mut self.rng,
        )
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Mutable access for placing the ball directly
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn paddle_mut(&mut self, side: Side) -> Option<hecs::RefMut<'_, Paddle>> {
        let entity = match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        };
        self.world.get::<&mut Paddle>(entity).ok()
    }

    /// Paddles, ball, title and score
    pub fn draw(&self, canvas: &mut impl Canvas) {
        for side in [Side::Left, Side::Right] {
            if let Some(paddle) = self.paddle(side) {
                paddle.draw(canvas);
            }
        }
        if let Some(ball) = self.ball() {
            ball.draw(canvas);
        }

        let top = self.config.window_height - 10.0;
        canvas.text(Vec2::new(10.0, top), 2.0, TITLE, Color::WHITE);

        let quarter = self.config.window_width / 4.0;
        let score_top = top - 40.0;
        canvas.text(Vec2::new(quarter, score_top), 2.0, &self.score.left.to_string(), Color::BLUE);
        canvas.text(
            Vec2::new(3.0 * quarter, score_top),
            2.0,
            &self.score.right.to_string(),
            Color::RED,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Aabb, HeldKeys};

    #[derive(Default)]
    struct RecordingCanvas {
        rects: Vec<(Aabb, Color)>,
        circles: Vec<(Vec2, f32, Color)>,
        texts: Vec<String>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, rect: Aabb, color: Color) {
            self.rects.push((rect, color));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }

        fn text(&mut self, _origin: Vec2, _scale: f32, text: &str, _color: Color) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(Config::new(), 12345);

        let left = game.paddle(Side::Left).unwrap();
        let right = game.paddle(Side::Right).unwrap();
        assert_eq!(left.rect.min, Vec2::new(50.0, 334.0));
        assert_eq!(right.rect.min, Vec2::new(954.0, 334.0));

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, Vec2::new(512.0, 384.0));
        assert!((ball.vel.length() - 300.0).abs() < 1e-3);
        assert_eq!(ball.radius, 10.0);
    }

    #[test]
    fn test_same_seed_same_start() {
        let a = Game::new(Config::new(), 77);
        let b = Game::new(Config::new(), 77);
        assert_eq!(a.ball().unwrap().vel, b.ball().unwrap().vel);
    }

    #[test]
    fn test_tick_advances_time() {
        let mut game = Game::new(Config::new(), 1);
        game.tick(0.016, &HeldKeys::new());
        game.tick(0.020, &HeldKeys::new());
        assert!((game.time.now - 0.036).abs() < 1e-6);
        assert_eq!(game.time.dt, 0.020);
    }

    #[test]
    fn test_draw_emits_every_entity() {
        let game = Game::new(Config::new(), 1);
        let mut canvas = RecordingCanvas::default();

        game.draw(&mut canvas);

        assert_eq!(canvas.rects.len(), 2);
        assert_eq!(canvas.rects[0].1, Color::BLUE);
        assert_eq!(canvas.rects[1].1, Color::RED);
        assert_eq!(canvas.circles.len(), 1);
        assert_eq!(canvas.circles[0].0, Vec2::new(512.0, 384.0));
        assert_eq!(canvas.circles[0].1, 10.0);
        assert_eq!(canvas.texts, vec![TITLE.to_string(), "0".to_string(), "0".to_string()]);
    }
}
