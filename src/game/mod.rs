//! Relic-hunt game core: the room graph and item registry, the per-session
//! state, and the engines that move the player, collect relics and decide
//! the win/lose outcome.

pub mod commands;
pub mod errors;
pub mod inventory;
pub mod navigation;
pub mod outcome;
pub mod render;
pub mod seed;
pub mod seed_loader;
pub mod state;
pub mod types;
pub mod world;

pub use commands::{parse_command, GameCommand, GameSession, Reply};
pub use errors::GameError;
pub use inventory::collect_item;
pub use navigation::move_player;
pub use outcome::{resolve, Phase};
pub use seed::{canonical_world_seed, MANSION_ITEM_COUNT, START_ROOM, TERMINAL_ROOM};
pub use seed_loader::{load_world, load_world_from_json, save_world_to_json};
pub use state::{GameState, RoomStatus};
pub use types::*;
pub use world::{validate, IntegrityViolation, ItemId, ItemRegistry, RoomGraph, RoomId, World};
