use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Cardinal directions an exit can be labeled with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Fixed N, S, E, W order used for validation and exit listings.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Normalize a player-supplied token. Case-insensitive, surrounding
    /// whitespace ignored. Anything other than the four full names is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    /// Slot in the compiled exit table.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to do when the world fails its integrity check at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityPolicy {
    /// Log every violation and continue with the offending links dropped.
    #[default]
    Warn,
    /// Refuse to build the world.
    FailFast,
}

impl std::str::FromStr for IntegrityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "warn" => Ok(IntegrityPolicy::Warn),
            "fail_fast" | "strict" => Ok(IntegrityPolicy::FailFast),
            other => Err(format!("unknown integrity policy '{}'", other)),
        }
    }
}

// ============================================================================
// World seed records (name-keyed, as authored)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomSeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exits: BTreeMap<Direction, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

impl RoomSeed {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            exits: BTreeMap::new(),
            item: None,
        }
    }

    pub fn with_exit(mut self, direction: Direction, destination: &str) -> Self {
        self.exits.insert(direction, destination.to_string());
        self
    }

    pub fn with_item(mut self, item: &str) -> Self {
        self.item = Some(item.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemSeed {
    pub name: String,
    pub home_room: String,
    #[serde(default)]
    pub description: String,
}

impl ItemSeed {
    pub fn new(name: &str, home_room: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            home_room: home_room.to_string(),
            description: description.to_string(),
        }
    }
}

/// A complete authored world: rooms, relics, and the two designated rooms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorldSeed {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: String,
    pub terminal_room: String,
    pub rooms: Vec<RoomSeed>,
    pub items: Vec<ItemSeed>,
    /// Optional ASCII art shown by the MAP command.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub map_art: Vec<String>,
}

// ============================================================================
// Outcome values
// ============================================================================

/// Result of a single move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No path that way; state unchanged.
    Blocked,
    /// Player now stands in the named room.
    Moved(String),
}

/// Result of a single pickup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    /// No item here, or the requested name does not match the room's item.
    NothingHere,
    /// The room's item is already held; carries the item and its home room.
    AlreadyCollected { item: String, home_room: String },
    Collected(String),
}

/// Win/lose resolution, evaluated against the terminal room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    InProgress,
    Win,
    Lose,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}
