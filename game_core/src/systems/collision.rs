use crate::{Ball, Config, Events, Paddle, Playfield};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, field: &Playfield, config: &Config, events: &mut Events) {
    // Collect ball data first so no borrow is held while reading paddles
    let ball_data = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let mut ball = match ball_data {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    // Top/bottom walls: flip only, no push-out
    if ball.pos.y + ball.radius > field.height || ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }

    // Only the paddle on the ball's half can be hit
    let side = field.half_of(ball.pos.x);
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p);

    if let Some(paddle) = paddle {
        if paddle.bounds().overlaps(&ball.bounds()) {
            bounce_off_paddle(&mut ball, &paddle, field, config);
            events.ball_hit_paddle = true;
            log::debug!("ball hit {:?} paddle, speed now {}", side, ball.speed);
        }
    }

    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}

/// Redirect the ball away from `paddle`.
///
/// The hit offset from the paddle centre, in [-1, 1], maps linearly to a
/// bounce angle of up to `max_bounce_angle`. The scalar speed grows by
/// `ball_speed_increase` and the new velocity carries that speed.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, field: &Playfield, config: &Config) {
    let half_height = paddle.size.y / 2.0;
    let offset = ((ball.pos.y - paddle.center_y()) / half_height).clamp(-1.0, 1.0);
    let angle = config.max_bounce_angle * offset;

    let dir = match field.half_of(ball.pos.x) {
        crate::Side::Player => 1.0,
        crate::Side::Ai => -1.0,
    };

    ball.speed += config.ball_speed_increase;
    ball.vel = Vec2::new(dir * ball.speed * angle.cos(), ball.speed * angle.sin());
}
