//! Command parsing and the per-player game session.
//!
//! A line of input becomes a [`GameCommand`]; [`GameSession`] owns the one
//! [`GameState`] of a play-through, feeds movement and pickup commands to the
//! engines, re-resolves the outcome after every change, and renders a reply.

use log::{debug, info};

use crate::game::inventory::collect_item;
use crate::game::navigation::move_player;
use crate::game::outcome::{resolve, Phase};
use crate::game::render;
use crate::game::state::GameState;
use crate::game::types::GameResult;
use crate::game::world::World;
use crate::logutil::escape_log;

/// Closed set of player intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    // Navigation
    Move(String), // go north, n
    // Items
    Collect(String), // get cursed mirror
    // Queries (never touch state)
    Map,
    Help,
    Status,
    Quit,
    Unknown(String),
}

pub fn parse_command(input: &str) -> GameCommand {
    let trimmed = input.trim();
    let lowered = trimmed.to_lowercase();
    let (verb, rest) = match lowered.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (lowered.as_str(), ""),
    };

    match (verb, rest.is_empty()) {
        ("go" | "move", false) => GameCommand::Move(rest.to_string()),
        ("get" | "take", false) => GameCommand::Collect(rest.to_string()),

        ("n" | "north", true) => GameCommand::Move("north".into()),
        ("s" | "south", true) => GameCommand::Move("south".into()),
        ("e" | "east", true) => GameCommand::Move("east".into()),
        ("w" | "west", true) => GameCommand::Move("west".into()),

        ("map", true) => GameCommand::Map,
        ("help" | "?", true) => GameCommand::Help,
        ("look" | "l" | "status", true) => GameCommand::Status,
        ("exit" | "quit" | "q", true) => GameCommand::Quit,

        _ => GameCommand::Unknown(trimmed.to_string()),
    }
}

/// What the session says back after one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub result: GameResult,
    /// True once the game has been won, lost, or abandoned.
    pub finished: bool,
}

pub struct GameSession<'w> {
    world: &'w World,
    state: GameState,
    phase: Phase,
    quit: bool,
    turns: u32,
}

impl<'w> GameSession<'w> {
    pub fn new(world: &'w World) -> Self {
        let state = GameState::new(world);
        // A world may start the player in the terminal room.
        let phase = Phase::from(resolve(world, &state));
        info!(
            "New session in '{}' at {} ({:?})",
            world.title(),
            world.graph().name(state.current_room()),
            phase
        );
        Self {
            world,
            state,
            phase,
            quit: false,
            turns: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> GameResult {
        resolve(self.world, &self.state)
    }

    pub fn is_finished(&self) -> bool {
        self.quit || self.phase.is_terminal()
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Intro plus the first status block, and the ending if the game is
    /// already decided.
    pub fn opening(&self) -> String {
        let mut text = format!("{}\n\n{}", render::format_intro(self.world), self.status_text());
        if let Some(ending) = render::format_result(self.result()) {
            text.push_str("\n\n");
            text.push_str(ending);
        }
        text
    }

    pub fn process(&mut self, input: &str) -> Reply {
        if self.is_finished() {
            return self.reply(render::format_game_over());
        }

        let command = parse_command(input);
        debug!(
            "Command parsed: input={} command={:?}",
            escape_log(input),
            command
        );

        match command {
            GameCommand::Move(direction) => {
                let (state, outcome) = move_player(self.world, &self.state, &direction);
                self.state = state;
                self.turns += 1;
                let text = format!("{}\n{}", render::format_move(&outcome), self.status_text());
                self.after_turn(text)
            }
            GameCommand::Collect(name) => {
                let (state, outcome) = collect_item(self.world, &self.state, &name);
                self.state = state;
                self.turns += 1;
                let text = format!(
                    "{}\n{}",
                    render::format_collect(&outcome),
                    self.status_text()
                );
                self.after_turn(text)
            }
            GameCommand::Map => self.reply(render::format_map(self.world)),
            GameCommand::Help => self.reply(render::help_text()),
            GameCommand::Status => self.reply(self.status_text()),
            GameCommand::Quit => {
                self.quit = true;
                info!("Player quit after {} turns", self.turns);
                let status = self.state.status(self.world);
                self.reply(render::format_quit(&status))
            }
            GameCommand::Unknown(_) => self.reply(render::format_unknown()),
        }
    }

    fn after_turn(&mut self, mut text: String) -> Reply {
        let result = resolve(self.world, &self.state);
        self.phase = Phase::from(result);
        if result.is_over() {
            info!("Game over: {:?} after {} turns", result, self.turns);
        }
        if let Some(ending) = render::format_result(result) {
            text.push_str("\n\n");
            text.push_str(ending);
        }
        self.reply(text)
    }

    fn reply(&self, text: String) -> Reply {
        Reply {
            text,
            result: self.result(),
            finished: self.is_finished(),
        }
    }

    fn status_text(&self) -> String {
        let status = self.state.status(self.world);
        render::format_status(&status, self.world.graph().name(self.world.terminal()))
    }
}
