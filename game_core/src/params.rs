/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: f32 = 1024.0;
    pub const WINDOW_HEIGHT: f32 = 768.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0; // units per second
    pub const PADDLE_MARGIN: f32 = 50.0; // gap between window edge and paddle

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_RADIUS: f32 = Self::BALL_SIZE / 2.0;
    pub const BALL_SPEED_INITIAL: f32 = 300.0;
    pub const BALL_ACCELERATION: f32 = 1.05; // Multiply velocity on paddle hit
}
