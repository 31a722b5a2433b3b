//! Win/lose resolution.

use crate::game::state::GameState;
use crate::game::types::GameResult;
use crate::game::world::World;

/// Decide the game result for `state`.
///
/// `InProgress` anywhere but the terminal room. In the terminal room the
/// player wins only when every registry item is held. Pure and idempotent.
pub fn resolve(world: &World, state: &GameState) -> GameResult {
    if state.current_room() != world.terminal() {
        return GameResult::InProgress;
    }
    if state.inventory().len() == world.items().len() {
        GameResult::Win
    } else {
        GameResult::Lose
    }
}

/// Coarse session phase derived from [`GameResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    Won,
    Lost,
}

impl From<GameResult> for Phase {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress => Phase::Exploring,
            GameResult::Win => Phase::Won,
            GameResult::Lose => Phase::Lost,
        }
    }
}

impl Phase {
    /// Won and Lost accept no further state-changing commands.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Exploring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::inventory::collect_item;
    use crate::game::navigation::move_player;
    use crate::game::seed::canonical_world_seed;
    use crate::game::types::IntegrityPolicy;

    fn mansion() -> World {
        World::from_seed(canonical_world_seed(), IntegrityPolicy::FailFast).unwrap()
    }

    fn walk(world: &World, mut state: GameState, dirs: &[&str]) -> GameState {
        for dir in dirs {
            state = move_player(world, &state, dir).0;
        }
        state
    }

    #[test]
    fn in_progress_away_from_terminal() {
        let world = mansion();
        let state = GameState::new(&world);
        assert_eq!(resolve(&world, &state), GameResult::InProgress);
        assert_eq!(Phase::from(resolve(&world, &state)), Phase::Exploring);
    }

    #[test]
    fn empty_handed_arrival_loses() {
        let world = mansion();
        let state = walk(&world, GameState::new(&world), &["east", "east", "east", "south"]);
        assert_eq!(world.graph().name(state.current_room()), "Attic");
        assert_eq!(resolve(&world, &state), GameResult::Lose);
        // Idempotent.
        assert_eq!(resolve(&world, &state), GameResult::Lose);
        assert!(Phase::from(resolve(&world, &state)).is_terminal());
    }

    #[test]
    fn five_of_six_still_loses() {
        let world = mansion();
        let mut state = GameState::new(&world);
        for (route, item) in [
            (&["north"][..], "cursed mirror"),
            (&["east"][..], "silver dagger"),
            (&["south"][..], "ghost locket"),
            (&["west"][..], "spell book"),
            (&["east", "east"][..], "sacred candle"),
        ] {
            state = walk(&world, state, route);
            state = collect_item(&world, &state, item).0;
        }
        assert_eq!(state.inventory().len(), 5);
        let state = walk(&world, state, &["south"]);
        assert_eq!(resolve(&world, &state), GameResult::Lose);
    }
}
