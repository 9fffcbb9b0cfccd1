use crate::{Ball, Config, Events, GameRng, Playfield, Score, Side};
use hecs::World;

/// Check if ball left the playfield (scoring)
pub fn check_scoring(
    world: &mut World,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x - ball.radius < 0.0 {
            Some(Side::Ai)
        } else if ball.pos.x + ball.radius > field.width {
            Some(Side::Player)
        } else {
            None
        };

        if let Some(side) = scorer {
            score.increment(side);
            events.scored(side);
            log::debug!(
                "{} scored, player {} - ai {}",
                side.label(),
                score.player,
                score.ai
            );

            ball.reset(field.center(), config, rng);
        }
    }
}
