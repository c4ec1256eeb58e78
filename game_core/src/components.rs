use glam::Vec2;

use crate::config::Config;
use crate::resources::GameRng;

/// Which side of the arena a paddle, player, or score event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - y is the top edge, x is fixed per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Vertical center, used by the AI tracker
    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// X of the face the ball hits (right edge for left paddle, left edge for right)
    pub fn face_x(&self, config: &Config) -> f32 {
        match self.side {
            Side::Left => config.paddle_x(Side::Left) + config.paddle_width,
            Side::Right => config.paddle_x(Side::Right),
        }
    }

    /// Whether a y coordinate lies within the paddle's vertical span
    pub fn spans_y(&self, y: f32, config: &Config) -> bool {
        y >= self.y && y <= self.y + config.paddle_height
    }
}

/// Who drove the paddle on the latest tick; feeds the UI control indicator
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleControl {
    pub human: bool,
}

impl PaddleControl {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Recenter with sign-randomized velocity at base speed.
    /// Rally speed escalation does not survive a reset.
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.ball_spawn();
        let vx = if rng.0.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        let vy = if rng.0.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        self.vel = Vec2::new(vx, vy);
    }
}
