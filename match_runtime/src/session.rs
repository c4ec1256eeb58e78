//! Match session: owns the canonical game state and drives one
//! simulation tick at a time between `start` and `stop`.

use hecs::World;

use game_core::{
    create_ball, create_paddle, step, Ball, Config, ControlFrame, Events, GameRng, Paddle,
    PaddleControl, Score, Side,
};

use crate::fsm::{MatchAction, MatchFsm, MatchPhase};
use crate::input::{InputSource, SourceError};
use crate::snapshot::{BallView, MatchSnapshot, PaddleView};

/// A match session. State is owned exclusively by whoever calls `tick` -
/// the presentation layer only ever sees snapshots.
pub struct MatchSession<S: InputSource> {
    source: S,
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    fsm: MatchFsm,
    tick: u64,
}

impl<S: InputSource> MatchSession<S> {
    pub fn new(source: S, seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();

        let center = config.paddle_center_y();
        create_paddle(&mut world, Side::Left, center);
        create_paddle(&mut world, Side::Right, center);
        create_ball(
            &mut world,
            config.ball_spawn(),
            glam::Vec2::splat(config.ball_speed),
        );

        Self {
            source,
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            fsm: MatchFsm::new(),
            tick: 0,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events raised by the latest tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Acquire the input source and begin a fresh match: score zeroed,
    /// paddles centered, ball recentered with randomized direction.
    /// If acquisition fails the session stays idle with no partial state.
    /// Starting an already running match is a no-op.
    pub fn start(&mut self) -> Result<(), SourceError> {
        if !self.fsm.can_transition(MatchAction::Start) {
            log::debug!("start ignored: match already running");
            return Ok(());
        }

        self.source.acquire()?;

        self.score = Score::new();
        let center = self.config.paddle_center_y();
        for (_entity, (paddle, control)) in
            self.world.query_mut::<(&mut Paddle, &mut PaddleControl)>()
        {
            paddle.y = center;
            control.human = false;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }
        self.tick = 0;
        self.fsm.transition(MatchAction::Start);
        log::info!("match started");
        Ok(())
    }

    /// Release the input source and go idle. Score and paddle positions
    /// are retained for display until the next `start`. Stopping an idle
    /// match is a no-op.
    pub fn stop(&mut self) {
        if self.fsm.transition(MatchAction::Stop).is_none() {
            return;
        }
        self.source.release();
        log::info!(
            "match stopped at {} - {}",
            self.score.left,
            self.score.right
        );
    }

    /// Run one tick: poll the source, fuse controls, advance physics.
    /// Returns `None` when the match is not running - the tick loop's
    /// cancellation check. A failed poll degrades both paddles to AI for
    /// this tick only; the match continues.
    pub fn tick(&mut self) -> Option<MatchSnapshot> {
        if !self.fsm.is_running() {
            return None;
        }

        let frame = match self.source.poll_samples() {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("{}; degrading to AI control for this tick", err);
                ControlFrame::new()
            }
        };

        let scorer = step(
            &mut self.world,
            &self.config,
            &frame,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;

        if let Some(side) = scorer {
            log::info!(
                "{:?} scored: {} - {}",
                side,
                self.score.left,
                self.score.right
            );
        }

        Some(self.snapshot())
    }

    /// Read-only view of the current state, available in any phase.
    pub fn snapshot(&self) -> MatchSnapshot {
        let ball = {
            let mut ball_query = self.world.query::<&Ball>();
            ball_query
                .iter()
                .next()
                .map(|(_e, b)| (b.pos, b.vel))
                .unwrap_or((self.config.ball_spawn(), glam::Vec2::ZERO))
        };

        let center = self.config.paddle_center_y();
        let mut views = [
            self.paddle_view(Side::Left, center, false),
            self.paddle_view(Side::Right, center, false),
        ];
        {
            let mut paddle_query = self.world.query::<(&Paddle, &PaddleControl)>();
            for (_entity, (paddle, control)) in paddle_query.iter() {
                let view = self.paddle_view(paddle.side, paddle.y, control.human);
                match paddle.side {
                    Side::Left => views[0] = view,
                    Side::Right => views[1] = view,
                }
            }
        }

        MatchSnapshot {
            tick: self.tick,
            running: self.fsm.is_running(),
            ball: BallView {
                x: ball.0.x,
                y: ball.0.y,
                vx: ball.1.x,
                vy: ball.1.y,
                radius: self.config.ball_radius,
            },
            left_paddle: views[0],
            right_paddle: views[1],
            score_left: self.score.left,
            score_right: self.score.right,
        }
    }

    fn paddle_view(&self, side: Side, y: f32, human: bool) -> PaddleView {
        PaddleView {
            x: self.config.paddle_x(side),
            y,
            width: self.config.paddle_width,
            height: self.config.paddle_height,
            human,
        }
    }
}
