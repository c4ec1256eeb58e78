use hecs::World;

use crate::Ball;

/// Advance the ball one tick. Velocities are arena units per tick, so
/// there is no dt scaling here.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = hecs::World::new();
        let ball = create_ball(
            &mut world,
            glam::Vec2::new(300.0, 200.0),
            glam::Vec2::new(4.0, -4.0),
        );

        move_ball(&mut world);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, glam::Vec2::new(304.0, 196.0));
        assert_eq!(ball.vel, glam::Vec2::new(4.0, -4.0));
    }
}
