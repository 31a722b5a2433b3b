//! Plain-text rendering of statuses and outcomes for the console loop.

use crate::game::state::RoomStatus;
use crate::game::types::{CollectOutcome, GameResult, MoveOutcome};
use crate::game::world::{IntegrityViolation, World};

const RULE_WIDTH: usize = 60;

pub fn help_text() -> String {
    [
        "Commands:",
        "  go north | go south | go east | go west   (or n, s, e, w)",
        "  get [item name]",
        "  look     - describe the room again",
        "  map      - show the map",
        "  help     - show this list",
        "  exit     - give up and leave",
    ]
    .join("\n")
}

/// Title, intro text and command list shown once at session start.
pub fn format_intro(world: &World) -> String {
    let mut out = String::new();
    out.push_str(&format!("*** {} ***\n", world.title()));
    if !world.intro().is_empty() {
        out.push_str(world.intro());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&help_text());
    out
}

pub fn format_status(status: &RoomStatus, terminal_room: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("You are in the {}.\n", status.room));
    if !status.description.is_empty() {
        out.push_str(&status.description);
        out.push('\n');
    }
    if status.inventory.is_empty() {
        out.push_str("Inventory: (empty)\n");
    } else {
        out.push_str(&format!("Inventory: {}\n", status.inventory.join(", ")));
    }

    match status.missing.as_slice() {
        [] => out.push_str(&format!(
            "You have collected all the relics! Head to the {}!\n",
            terminal_room
        )),
        [last] => out.push_str(&format!(
            "You're almost there! Only one relic remains: {}\n",
            last
        )),
        many => out.push_str(&format!("Missing relics: {}\n", many.join(", "))),
    }

    if status.exits.is_empty() {
        out.push_str("Exits: none\n");
    } else {
        out.push_str("Exits:\n");
        for (dir, dest) in &status.exits {
            out.push_str(&format!("  {}: leads to the {}\n", dir, dest));
        }
    }

    if let Some(item) = &status.item {
        out.push('\n');
        match status.item_description.as_deref() {
            Some(desc) if !desc.is_empty() => out.push_str(desc),
            _ => out.push_str(&format!("You see {} here.", item)),
        }
        out.push('\n');
        out.push_str(&format!("Type: get {}  to claim it.\n", item.to_lowercase()));
    }
    out.push_str(&rule);
    out
}

pub fn format_move(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Moved(room) => format!("You make your way to the {}.", room),
        MoveOutcome::Blocked => "A cold wind howls. There's no path that way.".to_string(),
    }
}

pub fn format_collect(outcome: &CollectOutcome) -> String {
    match outcome {
        CollectOutcome::Collected(item) => format!(
            "You claim the {}. A chill passes through you. Was that a whisper of approval or warning?",
            item
        ),
        CollectOutcome::AlreadyCollected { item, home_room } => format!(
            "You already claimed the {}. You found it in the {}.",
            item, home_room
        ),
        CollectOutcome::NothingHere => {
            "There's nothing like that here. The shadows mock your mistake.".to_string()
        }
    }
}

pub fn format_result(result: GameResult) -> Option<&'static str> {
    match result {
        GameResult::InProgress => None,
        GameResult::Win => Some(
            "The relics pulse with ghostly light! The presence screams and dissolves into mist.\nThe way out opens. You stagger free, soul intact. You survived!",
        ),
        GameResult::Lose => Some(
            "Laughter echoes as darkness closes in...\nYour soul is lost to this place forever. Game over.",
        ),
    }
}

pub fn format_map(world: &World) -> String {
    let mut out = String::new();
    if world.map_art().is_empty() {
        // No authored art: list rooms and their exits instead.
        let graph = world.graph();
        for id in graph.ids() {
            let exits: Vec<String> = graph
                .exits(id)
                .map(|(dir, to)| format!("{}->{}", dir, graph.name(to)))
                .collect();
            out.push_str(&format!("[{}] {}\n", graph.name(id), exits.join(" ")));
        }
    } else {
        for line in world.map_art() {
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("Rooms with relics will reveal themselves as you explore.");
    out
}

/// Farewell listing the exits the player could still have taken.
pub fn format_quit(status: &RoomStatus) -> String {
    let mut out = String::new();
    if !status.exits.is_empty() {
        out.push_str("If you continued, you could have gone:\n");
        for (dir, dest) in &status.exits {
            out.push_str(&format!("  {}: to the {}\n", dir, dest));
        }
        out.push('\n');
    }
    out.push_str("You close your eyes, wishing this was all a nightmare. Thanks for playing.");
    out
}

pub fn format_unknown() -> String {
    "The spirits do not understand your words. Try another command...".to_string()
}

pub fn format_game_over() -> String {
    "The game is over. Start a new session to play again.".to_string()
}

pub fn format_integrity_report(violations: &[IntegrityViolation]) -> String {
    if violations.is_empty() {
        return "Room integrity check: PASSED. All exits lead to real rooms.".to_string();
    }
    let mut out = format!(
        "Room integrity check: {} problem(s) found.\n",
        violations.len()
    );
    for v in violations {
        out.push_str(&format!("  Error: {}\n", v));
    }
    out.trim_end().to_string()
}
