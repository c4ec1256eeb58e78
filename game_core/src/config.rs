use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_key_speed: f32,
    pub ai_paddle_speed: f32,
    pub ai_dead_zone: f32,
    pub smooth_retain: f32,
    pub smooth_blend: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_speed_increase: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_key_speed: Params::PADDLE_KEY_SPEED,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            smooth_retain: Params::SMOOTH_RETAIN,
            smooth_blend: Params::SMOOTH_BLEND,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp a paddle top edge to the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Vertically centered paddle top edge
    pub fn paddle_center_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Arena center, where the ball spawns and respawns
    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}
