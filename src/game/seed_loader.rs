//! World files: load and save a [`WorldSeed`] as JSON.
//!
//! This lets operators ship their own map without recompiling. Loading only
//! parses; structural and integrity checks happen in [`World::from_seed`].

use std::fs;
use std::path::Path;

use log::debug;

use crate::game::errors::GameError;
use crate::game::types::{IntegrityPolicy, WorldSeed};
use crate::game::world::World;

/// Parse a world seed from a JSON file.
pub fn load_world_from_json<P: AsRef<Path>>(path: P) -> Result<WorldSeed, GameError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let seed: WorldSeed = serde_json::from_str(&contents)?;
    debug!(
        "Loaded world '{}' from {} ({} rooms, {} items)",
        seed.title,
        path.display(),
        seed.rooms.len(),
        seed.items.len()
    );
    Ok(seed)
}

/// Write a world seed as pretty JSON, replacing the file atomically.
pub fn save_world_to_json<P: AsRef<Path>>(seed: &WorldSeed, path: P) -> Result<(), GameError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(seed)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Load and compile a world file in one step.
pub fn load_world<P: AsRef<Path>>(path: P, policy: IntegrityPolicy) -> Result<World, GameError> {
    World::from_seed(load_world_from_json(path)?, policy)
}
