//! Compiled world: the room graph, the item registry, and the integrity
//! check run once before play.
//!
//! Rooms and items are authored by name (see [`WorldSeed`]) and interned into
//! dense indices here. The compiled graph is read-only; nothing in a session
//! can change its topology.

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{info, warn};

use crate::game::errors::GameError;
use crate::game::types::{Direction, IntegrityPolicy, WorldSeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u16);

impl RoomId {
    fn idx(self) -> usize {
        self.0 as usize
    }
}

impl ItemId {
    fn idx(self) -> usize {
        self.0 as usize
    }
}

/// One problem found by [`validate`]. None of these stop a session on their
/// own; the configured [`IntegrityPolicy`] decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// An exit points at a room that does not exist.
    DanglingExit {
        room: String,
        direction: Direction,
        target: String,
    },
    /// A room lists an item the registry does not know.
    UnregisteredRoomItem { room: String, item: String },
    /// A room lists an item whose home is elsewhere.
    MisplacedItem {
        room: String,
        item: String,
        home_room: String,
    },
    /// An item's home room does not list it, so it can never be collected.
    ItemNotPlaced { item: String, home_room: String },
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityViolation::DanglingExit {
                room,
                direction,
                target,
            } => write!(
                f,
                "{} -> {} points to undefined room: {}",
                room, direction, target
            ),
            IntegrityViolation::UnregisteredRoomItem { room, item } => {
                write!(f, "{} holds unregistered item: {}", room, item)
            }
            IntegrityViolation::MisplacedItem {
                room,
                item,
                home_room,
            } => write!(f, "{} holds {} whose home is {}", room, item, home_room),
            IntegrityViolation::ItemNotPlaced { item, home_room } => {
                write!(f, "{} is not listed in its home room {}", item, home_room)
            }
        }
    }
}

/// Check referential integrity of an authored world without changing it.
///
/// Produces one record per dangling exit (in room order, then N, S, E, W),
/// followed by any room/item consistency problems.
pub fn validate(seed: &WorldSeed) -> Vec<IntegrityViolation> {
    let room_names: HashSet<&str> = seed.rooms.iter().map(|r| r.name.as_str()).collect();
    let homes: HashMap<&str, &str> = seed
        .items
        .iter()
        .map(|i| (i.name.as_str(), i.home_room.as_str()))
        .collect();
    let mut violations = Vec::new();

    for room in &seed.rooms {
        for direction in Direction::ALL {
            if let Some(target) = room.exits.get(&direction) {
                if !room_names.contains(target.as_str()) {
                    violations.push(IntegrityViolation::DanglingExit {
                        room: room.name.clone(),
                        direction,
                        target: target.clone(),
                    });
                }
            }
        }
    }

    for room in &seed.rooms {
        let Some(item) = &room.item else { continue };
        match homes.get(item.as_str()) {
            None => violations.push(IntegrityViolation::UnregisteredRoomItem {
                room: room.name.clone(),
                item: item.clone(),
            }),
            Some(home) if *home != room.name => {
                violations.push(IntegrityViolation::MisplacedItem {
                    room: room.name.clone(),
                    item: item.clone(),
                    home_room: home.to_string(),
                })
            }
            Some(_) => {}
        }
    }

    for item in &seed.items {
        // A missing home room is a structural error reported by World::from_seed.
        if let Some(home) = seed.rooms.iter().find(|r| r.name == item.home_room) {
            if home.item.as_deref() != Some(item.name.as_str()) {
                violations.push(IntegrityViolation::ItemNotPlaced {
                    item: item.name.clone(),
                    home_room: item.home_room.clone(),
                });
            }
        }
    }

    violations
}

// ============================================================================
// Room graph
// ============================================================================

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub description: String,
    exits: [Option<RoomId>; 4],
    item: Option<ItemId>,
}

impl Room {
    pub fn item(&self) -> Option<ItemId> {
        self.item
    }
}

/// Build-once adjacency table indexed by [`RoomId`].
#[derive(Debug, Clone)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    index: HashMap<String, RoomId>,
}

impl RoomGraph {
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.idx()]
    }

    pub fn lookup(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: RoomId) -> &str {
        &self.room(id).name
    }

    /// Destination of the exit labeled `direction`, if the room has one.
    pub fn exit(&self, from: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(from).exits[direction.index()]
    }

    /// Exits of a room in N, S, E, W order.
    pub fn exits(&self, from: RoomId) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.exit(from, dir).map(|to| (dir, to)))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = RoomId> {
        (0..self.rooms.len() as u16).map(RoomId)
    }
}

// ============================================================================
// Item registry
// ============================================================================

#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub home: RoomId,
}

/// Static mapping of every item to its single home room.
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    items: Vec<Item>,
    index: HashMap<String, ItemId>,
}

impl ItemRegistry {
    pub fn get(&self, id: ItemId) -> &Item {
        &self.items[id.idx()]
    }

    pub fn lookup(&self, name: &str) -> Option<ItemId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: ItemId) -> &str {
        &self.get(id).name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> {
        (0..self.items.len() as u16).map(ItemId)
    }
}

// ============================================================================
// World
// ============================================================================

/// A validated, immutable world ready to host sessions.
#[derive(Debug, Clone)]
pub struct World {
    title: String,
    intro: String,
    map_art: Vec<String>,
    graph: RoomGraph,
    items: ItemRegistry,
    start: RoomId,
    terminal: RoomId,
}

impl World {
    /// Compile an authored world.
    ///
    /// Structural faults (duplicate names, unknown start/terminal/home room)
    /// always fail. Integrity violations follow `policy`: under `Warn` each is
    /// logged and the offending link is left out of the compiled graph.
    pub fn from_seed(seed: WorldSeed, policy: IntegrityPolicy) -> Result<Self, GameError> {
        if seed.rooms.len() > u16::MAX as usize {
            return Err(GameError::TooManyRooms(seed.rooms.len()));
        }
        if seed.items.len() > u16::MAX as usize {
            return Err(GameError::TooManyItems(seed.items.len()));
        }

        let mut room_index = HashMap::with_capacity(seed.rooms.len());
        for (i, room) in seed.rooms.iter().enumerate() {
            if room_index
                .insert(room.name.clone(), RoomId(i as u16))
                .is_some()
            {
                return Err(GameError::DuplicateRoom(room.name.clone()));
            }
        }

        let find_room = |role: &'static str, name: &str| {
            room_index
                .get(name)
                .copied()
                .ok_or_else(|| GameError::UnknownRoom {
                    role,
                    name: name.to_string(),
                })
        };

        let mut items = Vec::with_capacity(seed.items.len());
        let mut item_index = HashMap::with_capacity(seed.items.len());
        for (i, item) in seed.items.iter().enumerate() {
            if item_index
                .insert(item.name.clone(), ItemId(i as u16))
                .is_some()
            {
                return Err(GameError::DuplicateItem(item.name.clone()));
            }
            items.push(Item {
                name: item.name.clone(),
                description: item.description.clone(),
                home: find_room("home", &item.home_room)?,
            });
        }

        let start = find_room("start", &seed.start_room)?;
        let terminal = find_room("terminal", &seed.terminal_room)?;

        let violations = validate(&seed);
        if violations.is_empty() {
            info!("World integrity check passed: all exits lead to real rooms");
        } else {
            match policy {
                IntegrityPolicy::FailFast => return Err(GameError::Integrity(violations)),
                IntegrityPolicy::Warn => {
                    for violation in &violations {
                        warn!("World integrity: {}", violation);
                    }
                }
            }
        }

        let rooms = seed
            .rooms
            .into_iter()
            .enumerate()
            .map(|(i, room)| {
                let mut exits = [None; 4];
                for (direction, target) in &room.exits {
                    exits[direction.index()] = room_index.get(target).copied();
                }
                let item = room
                    .item
                    .as_deref()
                    .and_then(|name| item_index.get(name).copied())
                    .filter(|id: &ItemId| items[id.idx()].home == RoomId(i as u16));
                Room {
                    name: room.name,
                    description: room.description,
                    exits,
                    item,
                }
            })
            .collect();

        Ok(Self {
            title: seed.title,
            intro: seed.intro,
            map_art: seed.map_art,
            graph: RoomGraph {
                rooms,
                index: room_index,
            },
            items: ItemRegistry {
                items,
                index: item_index,
            },
            start,
            terminal,
        })
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn terminal(&self) -> RoomId {
        self.terminal
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn map_art(&self) -> &[String] {
        &self.map_art
    }

    /// The item that lives in `room`, if any.
    pub fn room_item(&self, room: RoomId) -> Option<ItemId> {
        self.graph.room(room).item()
    }
}
