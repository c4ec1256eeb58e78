use hecs::World;

use crate::{Ball, Config, ControlFrame, Paddle, PaddleControl};

/// Fixed-weight exponential moving average. Raw detector samples jitter
/// frame to frame; the 0.7/0.3 split keeps the paddle steady while still
/// tracking at 60 ticks/second.
pub fn smooth(previous: f32, target: f32, config: &Config) -> f32 {
    previous * config.smooth_retain + target * config.smooth_blend
}

/// Map a normalized detector sample to a paddle top edge, centering the
/// paddle on the sample rather than aligning its top edge to it.
pub fn map_target(norm_y: f32, config: &Config) -> f32 {
    let centered = norm_y * config.arena_height - config.paddle_height / 2.0;
    config.clamp_paddle_y(centered)
}

/// One AI tracking step: follow the ball's y with a dead-zone so the
/// paddle doesn't oscillate around it.
fn ai_track(paddle: &Paddle, ball_y: f32, config: &Config) -> f32 {
    let center = paddle.center_y(config);
    if center < ball_y - config.ai_dead_zone {
        config.clamp_paddle_y(paddle.y + config.ai_paddle_speed)
    } else if center > ball_y + config.ai_dead_zone {
        config.clamp_paddle_y(paddle.y - config.ai_paddle_speed)
    } else {
        paddle.y
    }
}

/// Drive both paddles for this tick: a present sample takes the paddle
/// over completely (smoothed toward the mapped target); an absent one
/// hands the paddle to the AI tracker. The decision is remade from
/// scratch every tick - a single missed detection means one tick of AI.
pub fn apply_controls(world: &mut World, frame: &ControlFrame, config: &Config) {
    // Ball position first; paddle mutation below would hold the borrow
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &mut PaddleControl)>() {
        match frame.get(paddle.side).norm_y {
            Some(norm_y) => {
                let target = map_target(norm_y, config);
                paddle.y = config.clamp_paddle_y(smooth(paddle.y, target, config));
                control.human = true;
            }
            None => {
                if let Some(ball_y) = ball_y {
                    paddle.y = ai_track(paddle, ball_y, config);
                }
                control.human = false;
            }
        }
    }
}
