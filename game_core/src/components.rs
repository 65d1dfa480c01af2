use glam::Vec2;

use crate::{Aabb, Arena, Canvas, Color, Config, GameRng, InputState, KeyBindings};

/// Which half of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - a player-controlled vertical bar
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub rect: Aabb,
    pub speed: f32, // units per second
    pub color: Color,
    pub bindings: KeyBindings,
}

impl Paddle {
    /// `x` is the paddle's left edge, `y` its vertical center
    pub fn new(side: Side, x: f32, y: f32, config: &Config) -> Self {
        let (color, bindings) = match side {
            Side::Left => (Color::BLUE, KeyBindings::LEFT),
            Side::Right => (Color::RED, KeyBindings::RIGHT),
        };
        let size = Vec2::new(config.paddle_width, config.paddle_height);
        Self {
            side,
            rect: Aabb::new(Vec2::new(x, y - size.y / 2.0), Vec2::new(x + size.x, y + size.y / 2.0)),
            speed: config.paddle_speed,
            color,
            bindings,
        }
    }

    /// Move by the held keys, then clamp so the rect stays inside the arena.
    ///
    /// `dt` is the wall-clock seconds since the previous frame. Up and down
    /// held together cancel out.
    pub fn update(&mut self, dt: f32, input: &impl InputState, arena: &Arena) {
        let center = self.rect.center();
        let mut y = center.y;
        if input.is_held(self.bindings.up) {
            y += self.speed * dt;
        }
        if input.is_held(self.bindings.down) {
            y -= self.speed * dt;
        }

        let y = arena.clamp_y(y, self.rect.size().y / 2.0);
        self.rect = self.rect.with_center(Vec2::new(center.x, y));
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_rect(self.rect, self.color);
    }
}

/// What happened to the ball during one update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BallUpdate {
    pub hit_wall: bool,
    pub hit_left_paddle: bool,
    pub hit_right_paddle: bool,
    /// Edge the ball crossed before being reset to the center
    pub exited: Option<Side>,
}

impl BallUpdate {
    pub fn hit_paddle(&self) -> bool {
        self.hit_left_paddle || self.hit_right_paddle
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            color: Color::WHITE,
        }
    }

    /// Ball at `pos` heading in a random direction at `speed`
    pub fn spawn(pos: Vec2, speed: f32, radius: f32, rng: &mut GameRng) -> Self {
        Self::new(pos, rng.velocity(speed), radius)
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Reflect off the top or bottom wall. No position correction: the ball
    /// may overlap the wall for a frame.
    pub fn bounce_walls(&mut self, arena: &Arena) -> bool {
        if self.pos.y - self.radius < 0.0 || self.pos.y + self.radius > arena.height {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Only the center's Y is tested against the paddle span, and the test
    /// fires on every frame the overlap persists.
    pub fn bounce_left_paddle(&mut self, paddle: &Aabb, acceleration: f32) -> bool {
        if self.pos.x - self.radius < paddle.max.x && paddle.spans_y(self.pos.y) {
            self.deflect(acceleration);
            return true;
        }
        false
    }

    pub fn bounce_right_paddle(&mut self, paddle: &Aabb, acceleration: f32) -> bool {
        if self.pos.x + self.radius > paddle.min.x && paddle.spans_y(self.pos.y) {
            self.deflect(acceleration);
            return true;
        }
        false
    }

    fn deflect(&mut self, acceleration: f32) {
        self.vel.x = -self.vel.x * acceleration;
        self.vel.y *= acceleration;
    }

    /// Side whose edge the center has crossed, if any
    pub fn exited(&self, arena: &Arena) -> Option<Side> {
        if self.pos.x < 0.0 {
            Some(Side::Left)
        } else if self.pos.x > arena.width {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Snap to `center` with a fresh random direction at `speed`
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut GameRng) {
        self.pos = center;
        self.vel = rng.velocity(speed);
    }

    /// One physics step: move, walls, left paddle, right paddle, out-of-bounds reset.
    ///
    /// `dt` is not clamped; a stalled frame moves the ball by the full amount.
    pub fn update(
        &mut self,
        dt: f32,
        left: &Aabb,
        right: &Aabb,
        config: &Config,
        rng: &mut GameRng,
    ) -> BallUpdate {
        let arena = config.arena();
        let mut update = BallUpdate::default();

        self.advance(dt);
        update.hit_wall = self.bounce_walls(&arena);
        update.hit_left_paddle = self.bounce_left_paddle(left, config.ball_acceleration);
        update.hit_right_paddle = self.bounce_right_paddle(right, config.ball_acceleration);

        if let Some(side) = self.exited(&arena) {
            self.reset(arena.center(), config.ball_speed_initial, rng);
            update.exited = Some(side);
        }

        update
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_circle(self.pos, self.radius, self.color);
    }
}
