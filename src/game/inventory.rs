/// Relic collection for the player's inventory
use log::debug;

use crate::game::state::GameState;
use crate::game::types::CollectOutcome;
use crate::game::world::World;

// ============================================================================
// Collection
// ============================================================================

/// Resolve a pickup request against the current room's item.
///
/// The requested name is trimmed and compared case-insensitively. A name
/// that does not match the room's item reports `NothingHere`, the same as an
/// empty room. Collecting a held item again reports `AlreadyCollected` and
/// leaves the inventory as it was.
pub fn collect_item(
    world: &World,
    state: &GameState,
    requested: &str,
) -> (GameState, CollectOutcome) {
    let Some(item) = world.room_item(state.current_room()) else {
        return (state.clone(), CollectOutcome::NothingHere);
    };

    let registry = world.items();
    let name = registry.name(item);
    if name.to_lowercase() != requested.trim().to_lowercase() {
        return (state.clone(), CollectOutcome::NothingHere);
    }

    if state.has_item(item) {
        let home = world.graph().name(registry.get(item).home);
        return (
            state.clone(),
            CollectOutcome::AlreadyCollected {
                item: name.to_string(),
                home_room: home.to_string(),
            },
        );
    }

    debug!("Collected {} ({} held)", name, state.inventory().len() + 1);
    (state.with_item(item), CollectOutcome::Collected(name.to_string()))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::navigation::move_player;
    use crate::game::seed::canonical_world_seed;
    use crate::game::types::IntegrityPolicy;

    fn mansion() -> World {
        World::from_seed(canonical_world_seed(), IntegrityPolicy::FailFast).unwrap()
    }

    fn at(world: &World, room: &str) -> GameState {
        let mut state = GameState::new(world);
        let route: &[&str] = match room {
            "Foyer" => &[],
            "Library" => &["north"],
            "Basement" => &["south"],
            "Dining Room" => &["east"],
            _ => panic!("no route to {}", room),
        };
        for dir in route {
            state = move_player(world, &state, dir).0;
        }
        state
    }

    #[test]
    fn collect_matching_item() {
        let world = mansion();
        let state = at(&world, "Library");
        let (next, outcome) = collect_item(&world, &state, "  cursed MIRROR ");
        assert_eq!(outcome, CollectOutcome::Collected("Cursed Mirror".into()));
        assert_eq!(next.inventory().len(), 1);
        assert!(state.inventory().is_empty());
    }

    #[test]
    fn empty_room_has_nothing() {
        let world = mansion();
        let state = at(&world, "Foyer");
        let (next, outcome) = collect_item(&world, &state, "cursed mirror");
        assert_eq!(outcome, CollectOutcome::NothingHere);
        assert_eq!(next, state);
    }

    #[test]
    fn wrong_name_looks_like_empty_room() {
        let world = mansion();
        let state = at(&world, "Basement");
        let (next, outcome) = collect_item(&world, &state, "spell book");
        assert_eq!(outcome, CollectOutcome::NothingHere);
        assert_eq!(next, state);
    }

    #[test]
    fn recollect_reports_home_room() {
        let world = mansion();
        let state = at(&world, "Basement");
        let (state, first) = collect_item(&world, &state, "protective amulet");
        assert_eq!(first, CollectOutcome::Collected("Protective Amulet".into()));
        let (after, second) = collect_item(&world, &state, "Protective Amulet");
        assert_eq!(
            second,
            CollectOutcome::AlreadyCollected {
                item: "Protective Amulet".into(),
                home_room: "Basement".into(),
            }
        );
        assert_eq!(after.inventory().len(), 1);
        assert_eq!(after, state);
    }
}
