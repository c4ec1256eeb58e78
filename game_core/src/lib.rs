pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the simulation one tick: fuse the control inputs into paddle
/// positions, then run the physics. Returns the side that scored this
/// tick, if any.
pub fn step(
    world: &mut World,
    config: &Config,
    frame: &ControlFrame,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Drive paddles (detector samples, AI fallback per side)
    apply_controls(world, frame, config);

    // 2. Move ball
    move_ball(world);

    // 3. Resolve wall and paddle collisions
    check_collisions(world, config, events);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, config, score, events, rng)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleControl::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
