//! End-to-end walkthroughs of the built-in mansion through the engines and
//! through a console session.

use relichunt::game::{
    canonical_world_seed, collect_item, move_player, resolve, CollectOutcome, GameResult,
    GameSession, GameState, IntegrityPolicy, MoveOutcome, World, MANSION_ITEM_COUNT,
};

fn mansion() -> World {
    World::from_seed(canonical_world_seed(), IntegrityPolicy::FailFast).expect("mansion builds")
}

fn room_name(world: &World, state: &GameState) -> String {
    world.graph().name(state.current_room()).to_string()
}

fn go(world: &World, state: GameState, dir: &str) -> GameState {
    let (next, outcome) = move_player(world, &state, dir);
    assert!(
        matches!(outcome, MoveOutcome::Moved(_)),
        "expected to move {} from {}",
        dir,
        room_name(world, &state)
    );
    next
}

fn get(world: &World, state: GameState, item: &str) -> GameState {
    let (next, outcome) = collect_item(world, &state, item);
    assert!(matches!(outcome, CollectOutcome::Collected(_)), "collect {}", item);
    next
}

/// Collect all six relics and end up back in the Foyer.
fn gather_everything(world: &World) -> GameState {
    let mut s = GameState::new(world);
    s = go(world, s, "south");
    s = get(world, s, "protective amulet");
    s = go(world, s, "north");
    s = go(world, s, "north");
    s = get(world, s, "cursed mirror");
    s = go(world, s, "east");
    s = get(world, s, "silver dagger");
    s = go(world, s, "south");
    s = get(world, s, "ghost locket");
    s = go(world, s, "east");
    s = get(world, s, "sacred candle");
    s = go(world, s, "west");
    s = go(world, s, "west");
    s = get(world, s, "spell book");
    s = go(world, s, "west");
    assert_eq!(room_name(world, &s), "Foyer");
    s
}

#[test]
fn scenario_a_library_mirror() {
    let world = mansion();
    let state = GameState::new(&world);
    assert_eq!(room_name(&world, &state), "Foyer");
    assert!(state.inventory().is_empty());

    let (state, outcome) = move_player(&world, &state, "North");
    assert_eq!(outcome, MoveOutcome::Moved("Library".into()));
    assert_eq!(state.status(&world).item.as_deref(), Some("Cursed Mirror"));

    let (state, outcome) = collect_item(&world, &state, "cursed mirror");
    assert_eq!(outcome, CollectOutcome::Collected("Cursed Mirror".into()));
    assert_eq!(state.status(&world).inventory, vec!["Cursed Mirror".to_string()]);
}

#[test]
fn scenario_b_library_has_no_west_exit() {
    let world = mansion();
    let state = go(&world, GameState::new(&world), "north");
    let (after, outcome) = move_player(&world, &state, "West");
    assert_eq!(outcome, MoveOutcome::Blocked);
    assert_eq!(room_name(&world, &after), "Library");
    assert_eq!(after, state);
}

#[test]
fn scenario_c_full_inventory_wins() {
    let world = mansion();
    let mut state = gather_everything(&world);
    assert_eq!(state.inventory().len(), MANSION_ITEM_COUNT);
    for (dir, expected) in [
        ("east", "Dining Room"),
        ("east", "Guest Room"),
        ("east", "Chapel"),
    ] {
        state = go(&world, state, dir);
        assert_eq!(room_name(&world, &state), expected);
        assert_eq!(resolve(&world, &state), GameResult::InProgress);
    }
    let (state, outcome) = move_player(&world, &state, "south");
    assert_eq!(outcome, MoveOutcome::Moved("Attic".into()));
    assert_eq!(resolve(&world, &state), GameResult::Win);
}

#[test]
fn scenario_d_partial_inventory_loses() {
    let world = mansion();
    let mut state = GameState::new(&world);
    state = go(&world, state, "east");
    state = get(&world, state, "spell book");
    for dir in ["east", "east", "south"] {
        state = go(&world, state, dir);
    }
    assert_eq!(room_name(&world, &state), "Attic");
    assert_eq!(resolve(&world, &state), GameResult::Lose);
}

#[test]
fn scenario_e_wrong_item_name_in_basement() {
    let world = mansion();
    let state = go(&world, GameState::new(&world), "south");
    assert_eq!(state.status(&world).item.as_deref(), Some("Protective Amulet"));
    let (after, outcome) = collect_item(&world, &state, "spell book");
    assert_eq!(outcome, CollectOutcome::NothingHere);
    assert!(after.inventory().is_empty());
}

#[test]
fn scenario_f_amulet_twice() {
    let world = mansion();
    let state = go(&world, GameState::new(&world), "south");
    let state = get(&world, state, "Protective Amulet");
    let (after, outcome) = collect_item(&world, &state, "protective amulet");
    assert_eq!(
        outcome,
        CollectOutcome::AlreadyCollected {
            item: "Protective Amulet".into(),
            home_room: "Basement".into(),
        }
    );
    assert_eq!(after.inventory().len(), 1);
}

#[test]
fn console_session_plays_to_victory() {
    let world = mansion();
    let mut session = GameSession::new(&world);
    let script = [
        "go south",
        "get protective amulet",
        "go north",
        "n",
        "get Cursed Mirror",
        "go east",
        "get silver dagger",
        "go south",
        "get ghost locket",
        "go west",
        "get spell book",
        "go east",
        "go east",
        "get sacred candle",
    ];
    for line in script {
        let reply = session.process(line);
        assert!(!reply.finished, "finished early at {:?}", line);
        assert!(!reply.text.contains("nothing like that"), "{:?}: {}", line, reply.text);
    }
    let reply = session.process("go south");
    assert_eq!(reply.result, GameResult::Win);
    assert!(reply.finished);
    assert!(reply.text.contains("You survived!"));
    assert_eq!(session.turns(), 15);
}

#[test]
fn console_session_reports_missing_relics() {
    let world = mansion();
    let mut session = GameSession::new(&world);
    let reply = session.process("get cursed mirror");
    assert!(reply.text.contains("There's nothing like that here."));
    assert!(reply.text.contains("Missing relics:"));
    let reply = session.process("go up");
    assert!(reply.text.contains("no path that way"));
    assert!(reply.text.contains("You are in the Foyer."));
}
