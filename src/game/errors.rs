use thiserror::Error;

use crate::game::world::IntegrityViolation;

/// Errors that can arise while building or loading a world.
///
/// Player input never produces one of these; bad moves and pickups are
/// reported through the outcome values instead.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around IO errors (reading or writing world files).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON (de)serialization errors for world seeds.
    #[error("world file error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two rooms share a name.
    #[error("duplicate room: {0}")]
    DuplicateRoom(String),

    /// Two items share a name.
    #[error("duplicate item: {0}")]
    DuplicateItem(String),

    /// A designated room (start, terminal, item home) does not exist.
    #[error("{role} room not found: {name}")]
    UnknownRoom { role: &'static str, name: String },

    /// The world has more rooms than the compiled graph can index.
    #[error("too many rooms: {0}")]
    TooManyRooms(usize),

    /// The world has more items than the item registry can index.
    #[error("too many items: {0}")]
    TooManyItems(usize),

    /// Integrity check failed under the fail-fast policy.
    #[error("world integrity check failed with {} violation(s)", .0.len())]
    Integrity(Vec<IntegrityViolation>),
}
