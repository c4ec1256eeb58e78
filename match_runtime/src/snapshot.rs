//! Read-only per-tick view of the match, handed to the presentation
//! layer. Built by value - the renderer never touches live state.

use serde::{Deserialize, Serialize};

/// Ball view: position, velocity, radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

/// Paddle view: rect plus who drove it this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// True when a detector sample controlled this paddle on the latest
    /// tick; the UI uses it for the hand-control indicator.
    pub human: bool,
}

/// Complete match snapshot for one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub running: bool,
    pub ball: BallView,
    pub left_paddle: PaddleView,
    pub right_paddle: PaddleView,
    pub score_left: u32,
    pub score_right: u32,
}
