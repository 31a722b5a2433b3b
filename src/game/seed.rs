//! The reference world shipped with the game: a haunted mansion with eight
//! rooms and six relics. Operators can replace it with their own layout via
//! `game.world_file` (see [`crate::game::seed_loader`]).

use crate::game::types::{Direction, ItemSeed, RoomSeed, WorldSeed};

/// Room the player starts in.
pub const START_ROOM: &str = "Foyer";

/// Entering this room ends the game.
pub const TERMINAL_ROOM: &str = "Attic";

/// Relics in the reference world.
pub const MANSION_ITEM_COUNT: usize = 6;

pub fn canonical_world_seed() -> WorldSeed {
    use Direction::*;

    let rooms = vec![
        RoomSeed::new(
            "Foyer",
            "Thunder shakes the mansion as the door slams shut behind you. The haunted foyer is thick with dread.",
        )
        .with_exit(North, "Library")
        .with_exit(East, "Dining Room")
        .with_exit(South, "Basement"),
        RoomSeed::new(
            "Library",
            "Cobwebbed shelves and flickering candlelight reveal the cursed mirror glinting in the gloom.",
        )
        .with_exit(South, "Foyer")
        .with_exit(East, "Conservatory")
        .with_item("Cursed Mirror"),
        RoomSeed::new(
            "Dining Room",
            "Dusty china, overturned chairs, and a whisper of cold air greet you in the ruined dining room.",
        )
        .with_exit(West, "Foyer")
        .with_exit(East, "Guest Room")
        .with_item("Spell Book"),
        RoomSeed::new(
            "Conservatory",
            "Twisted plants and cracked windows tangle the conservatory in shadows and silver moonlight.",
        )
        .with_exit(West, "Library")
        .with_exit(South, "Guest Room")
        .with_item("Silver Dagger"),
        RoomSeed::new(
            "Guest Room",
            "A faded portrait stares at you with hollow eyes. The ghost locket glimmers atop the pillow.",
        )
        .with_exit(West, "Dining Room")
        .with_exit(North, "Conservatory")
        .with_exit(East, "Chapel")
        .with_item("Ghost Locket"),
        RoomSeed::new(
            "Chapel",
            "Crumbling pews and melted wax hint at ancient rituals. A sacred candle burns with an eerie blue flame.",
        )
        .with_exit(West, "Guest Room")
        .with_exit(South, "Attic")
        .with_item("Sacred Candle"),
        RoomSeed::new(
            "Basement",
            "Each step creaks louder than the last. A protective amulet lies half-buried in the dirt.",
        )
        .with_exit(North, "Foyer")
        .with_item("Protective Amulet"),
        RoomSeed::new(
            "Attic",
            "Cobwebs thicken. Mistress Elira's chilling presence presses close. The air is heavy with doom.",
        )
        .with_exit(North, "Chapel"),
    ];

    let items = vec![
        ItemSeed::new(
            "Cursed Mirror",
            "Library",
            "A mirror with a cracked frame shivers as you approach, your reflection warped by shadows.",
        ),
        ItemSeed::new(
            "Spell Book",
            "Dining Room",
            "A dusty tome, its pages fluttering as if caught in a phantom breeze, rests on the table.",
        ),
        ItemSeed::new(
            "Silver Dagger",
            "Conservatory",
            "A silver dagger gleams with an unnatural light, its blade cold as ice.",
        ),
        ItemSeed::new(
            "Ghost Locket",
            "Guest Room",
            "A locket floats inches above the pillow, glowing with a pale, spectral light.",
        ),
        ItemSeed::new(
            "Sacred Candle",
            "Chapel",
            "A candle burns with blue flame, filling the chapel with an ancient, spicy scent.",
        ),
        ItemSeed::new(
            "Protective Amulet",
            "Basement",
            "A weathered amulet hums quietly in the gloom, your only defense against Elira's wrath.",
        ),
    ];

    let map_art = [
        "      [Library]",
        "          |",
        "      [Foyer]---[Dining Room]---[Guest Room]---[Chapel]---[Attic]",
        "         |              |",
        "    [Basement]   [Conservatory]",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    WorldSeed {
        title: "Haunted Mansion".to_string(),
        intro: "Lightning crackles. The door slams shut behind you. You are trapped in Mistress Elira's cursed mansion.\nYour only hope: collect all 6 ancient relics before she claims your soul..."
            .to_string(),
        start_room: START_ROOM.to_string(),
        terminal_room: TERMINAL_ROOM.to_string(),
        rooms,
        items,
        map_art,
    }
}
