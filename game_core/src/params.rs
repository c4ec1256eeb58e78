/// Game tuning parameters for hand-controlled Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side wall
    pub const PADDLE_KEY_SPEED: f32 = 6.0; // units per tick (keyboard control)
    pub const AI_PADDLE_SPEED: f32 = 3.0; // units per tick
    pub const AI_DEAD_ZONE: f32 = 20.0; // Band around ball.y where the AI holds still

    // Hand smoothing: y' = y * SMOOTH_RETAIN + target * SMOOTH_BLEND
    pub const SMOOTH_RETAIN: f32 = 0.7;
    pub const SMOOTH_BLEND: f32 = 0.3;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 4.0; // units per tick, per axis
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply on paddle hit, uncapped

    // Cadence (distances above are per tick at this rate)
    pub const TICK_RATE_HZ: f32 = 60.0;
}
