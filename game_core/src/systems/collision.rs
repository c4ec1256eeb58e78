use hecs::World;

use crate::{Ball, Config, Events, Paddle, Side};

/// Resolve ball collisions against the horizontal walls and both paddles.
/// Tests run on the post-move position; there is no swept collision.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect ball and paddle state without holding borrows across the writes
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    let radius = config.ball_radius;

    // Top/bottom wall bounce. The position clamp keeps the ball inside
    // [radius, height - radius] at tick end even on a deep overshoot.
    if ball_pos.y <= radius || ball_pos.y >= config.arena_height - radius {
        ball_vel.y = -ball_vel.y;
        ball_pos.y = ball_pos.y.clamp(radius, config.arena_height - radius);
        events.ball_hit_wall = true;
    }

    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    for paddle in paddles {
        match paddle.side {
            // Left paddle: leading edge of a left-moving ball has crossed
            // the paddle face and the ball is inside the vertical span.
            // No rear-face test.
            Side::Left => {
                if ball_pos.x - radius <= paddle.face_x(config)
                    && paddle.spans_y(ball_pos.y, config)
                    && ball_vel.x < 0.0
                {
                    ball_vel.x = ball_vel.x.abs() * config.ball_speed_increase;
                    events.ball_hit_paddle = true;
                }
            }
            Side::Right => {
                if ball_pos.x + radius >= paddle.face_x(config)
                    && paddle.spans_y(ball_pos.y, config)
                    && ball_vel.x > 0.0
                {
                    ball_vel.x = -ball_vel.x.abs() * config.ball_speed_increase;
                    events.ball_hit_paddle = true;
                }
            }
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}
