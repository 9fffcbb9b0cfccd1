use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply keyboard paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    let floor = config.field_height - config.paddle_height;
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up && paddle.pos.y > 0.0 {
            paddle.pos.y -= paddle.speed;
        }
        if intent.down && paddle.pos.y < floor {
            paddle.pos.y += paddle.speed;
        }

        // Clamp to playfield bounds
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
