use crate::components::Side;

/// Game score tracking. No win threshold - rallies continue until the
/// match is stopped and restarted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn mark_scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

/// Random number generator; the only randomness source in the simulation
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// One side's optional detector reading for this tick. `norm_y` is the
/// vertical sample normalized to [0, 1] in detector-frame coordinates;
/// `None` means no detection for this side this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlSample {
    pub norm_y: Option<f32>,
}

impl ControlSample {
    pub fn detected(norm_y: f32) -> Self {
        Self {
            norm_y: Some(norm_y),
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.norm_y.is_some()
    }
}

/// The complete per-tick input: one sample per paddle side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlFrame {
    pub left: ControlSample,
    pub right: ControlSample,
}

impl ControlFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> ControlSample {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, sample: ControlSample) {
        match side {
            Side::Left => self.left = sample,
            Side::Right => self.right = sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Right);
        score.increment(Side::Right);
        assert_eq!(score.left, 1);
        assert_eq!(score.right, 2);
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.mark_scored(Side::Left);
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_control_frame_routing() {
        let mut frame = ControlFrame::new();
        assert!(!frame.get(Side::Left).is_present());

        frame.set(Side::Right, ControlSample::detected(0.25));

        assert!(!frame.get(Side::Left).is_present());
        assert_eq!(frame.get(Side::Right).norm_y, Some(0.25));
    }
}
