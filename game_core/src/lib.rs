pub mod components;
pub mod config;
pub mod frame_loop;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frame_loop::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Advance the ball physics by one tick.
///
/// Callers gate this on the session being `Running`.
pub fn step(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check collisions (walls, paddle on the ball's half)
    check_collisions(world, field, config, events);

    // 3. Check scoring (ball exited the playfield)
    check_scoring(world, field, config, score, events, rng);

    // 4. AI paddle follows the ball
    track_ball(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(side, config);
    match side {
        Side::Player => world.spawn((paddle, PaddleIntent::new())),
        Side::Ai => world.spawn((paddle, AiTracker::new(config.ai_tracking))),
    }
}

/// Helper to create the ball entity at base speed
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_radius, config.ball_speed_initial),))
}
