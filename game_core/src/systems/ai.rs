use crate::{AiTracker, Ball, Config, Paddle};
use hecs::World;

/// Nudge AI paddles toward the ball's height.
///
/// Each tick closes `gain` of the gap between the paddle centre and the
/// ball, then clamps to the playfield.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, (paddle, tracker)) in world.query_mut::<(&mut Paddle, &AiTracker)>() {
        paddle.pos.y += (ball_y - paddle.center_y()) * tracker.gain;
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use approx::assert_relative_eq;
    use glam::Vec2;

    #[test]
    fn test_ai_closes_ten_percent_of_gap() {
        let mut world = World::new();
        let config = Config::new();
        let ai = create_paddle(&mut world, Side::Ai, &config);
        // Paddle centre at 300, ball 100 below
        create_ball(&mut world, Vec2::new(600.0, 400.0), Vec2::ZERO, &config);

        track_ball(&mut world, &config);

        assert_relative_eq!(world.get::<&Paddle>(ai).unwrap().pos.y, 260.0);
    }

    #[test]
    fn test_player_paddle_is_not_tracked() {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, Side::Player, &config);
        create_ball(&mut world, Vec2::new(600.0, 400.0), Vec2::ZERO, &config);

        track_ball(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(player).unwrap().pos.y, 250.0);
    }

    #[test]
    fn test_ai_stays_on_field() {
        let mut world = World::new();
        let config = Config::new();
        let ai = create_paddle(&mut world, Side::Ai, &config);
        let ball = create_ball(&mut world, Vec2::new(600.0, 300.0), Vec2::ZERO, &config);

        // Ball far below the field pulls the paddle down
        world.get::<&mut Ball>(ball).unwrap().pos.y = 5000.0;
        for _ in 0..100 {
            track_ball(&mut world, &config);
        }
        assert_eq!(world.get::<&Paddle>(ai).unwrap().pos.y, 500.0);
    }
}
