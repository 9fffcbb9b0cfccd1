use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Copy held keys into the keyboard paddle's intent
pub fn ingest_input(world: &mut World, input: &InputState) {
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.up = input.up;
        intent.down = input.down;
    }
}
