use hecs::World;

use crate::{Ball, Config, Events, GameRng, Score, Side};

/// Check whether the ball left the arena. The scorer's side is returned;
/// only the ball resets - paddles and the running score stay as they are.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            scorer = Some(Side::Right);
        } else if ball.pos.x > config.arena_width {
            scorer = Some(Side::Left);
        }

        if let Some(side) = scorer {
            score.increment(side);
            events.mark_scored(side);
            ball.reset(config, rng);
        }
    }

    scorer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    fn setup() -> (hecs::World, Config, Score, Events, GameRng) {
        (
            hecs::World::new(),
            Config::new(),
            Score::new(),
            Events::new(),
            GameRng::new(12345),
        )
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            glam::Vec2::new(-1.0, 200.0),
            glam::Vec2::new(-4.0, 4.0),
        );

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0, "Left score must be untouched");
        assert!(events.right_scored);
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            glam::Vec2::new(config.arena_width + 0.5, 200.0),
            glam::Vec2::new(4.0, 4.0),
        );

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(score.left, 1);
        assert_eq!(score.right, 0);
        assert!(events.left_scored);
    }

    #[test]
    fn test_ball_resets_to_center_at_base_speed() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        let ball = create_ball(
            &mut world,
            glam::Vec2::new(-1.0, 333.0),
            glam::Vec2::new(-9.9, 7.3), // Escalated rally speed
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(
            ball.vel.x.abs(),
            config.ball_speed,
            "Escalation does not carry into the next rally"
        );
        assert_eq!(ball.vel.y.abs(), config.ball_speed);
    }

    #[test]
    fn test_no_scoring_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            glam::Vec2::new(300.0, 200.0),
            glam::Vec2::new(4.0, 4.0),
        );

        let scorer = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(scorer, None);
        assert_eq!(score, Score::new());
        assert!(!events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        let ball = create_ball(
            &mut world,
            glam::Vec2::new(-1.0, 200.0),
            glam::Vec2::new(-4.0, 4.0),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);
        // Push the ball out again for a second rally loss
        world.get::<&mut Ball>(ball).unwrap().pos.x = -2.0;
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 2, "Score is monotonic across rallies");
    }
}
