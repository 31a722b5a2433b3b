//! # Relichunt - a turn-based relic-hunting adventure
//!
//! The player walks a fixed graph of rooms, picks up the relics scattered
//! through it, and wins only by reaching the terminal room with every relic
//! in hand.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use relichunt::game::{canonical_world_seed, GameSession, IntegrityPolicy, World};
//!
//! fn main() -> Result<(), relichunt::game::GameError> {
//!     let world = World::from_seed(canonical_world_seed(), IntegrityPolicy::Warn)?;
//!     let mut session = GameSession::new(&world);
//!     println!("{}", session.opening());
//!     let reply = session.process("go north");
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - room graph, item registry, game state, and the movement,
//!   collection and outcome engines
//! - [`config`] - TOML configuration
//! - [`logutil`] - single-line escaping of player input for logs

pub mod config;
pub mod game;
pub mod logutil;
