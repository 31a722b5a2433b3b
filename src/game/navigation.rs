/// Movement between rooms
use log::debug;

use crate::game::state::GameState;
use crate::game::types::{Direction, MoveOutcome};
use crate::game::world::World;

/// Resolve a move request against the room graph.
///
/// Pure: the input state is never touched. An unknown token or a direction
/// with no exit from the current room gives back an identical state and
/// [`MoveOutcome::Blocked`]; neither is an error.
pub fn move_player(world: &World, state: &GameState, direction: &str) -> (GameState, MoveOutcome) {
    let graph = world.graph();
    let from = state.current_room();

    let destination = Direction::parse(direction).and_then(|dir| graph.exit(from, dir));
    match destination {
        Some(to) => {
            debug!("Player moved {} -> {}", graph.name(from), graph.name(to));
            (
                state.moved_to(to),
                MoveOutcome::Moved(graph.name(to).to_string()),
            )
        }
        None => {
            debug!("Move '{}' blocked in {}", direction.trim(), graph.name(from));
            (state.clone(), MoveOutcome::Blocked)
        }
    }
}
