use std::collections::BTreeSet;

use crate::game::types::Direction;
use crate::game::world::{ItemId, RoomId, World};

/// Mutable runtime state of one session: where the player stands and what
/// they carry.
///
/// Only the engines produce new states. The room is always a compiled
/// [`RoomId`] and the inventory only holds registry [`ItemId`]s, so both
/// always refer to things that exist in the world.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    current_room: RoomId,
    inventory: BTreeSet<ItemId>,
}

/// Snapshot of everything a renderer needs to describe the current room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStatus {
    pub room: String,
    pub description: String,
    /// `(direction, destination)` in N, S, E, W order.
    pub exits: Vec<(Direction, String)>,
    /// The room's item, only if it has not been collected yet.
    pub item: Option<String>,
    pub item_description: Option<String>,
    /// Items not yet in the inventory, sorted by name.
    pub missing: Vec<String>,
    /// Items held, in registry order.
    pub inventory: Vec<String>,
}

impl GameState {
    /// Fresh state at the world's start room with an empty inventory.
    pub fn new(world: &World) -> Self {
        Self {
            current_room: world.start(),
            inventory: BTreeSet::new(),
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn inventory(&self) -> &BTreeSet<ItemId> {
        &self.inventory
    }

    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    pub(crate) fn moved_to(&self, room: RoomId) -> Self {
        Self {
            current_room: room,
            inventory: self.inventory.clone(),
        }
    }

    pub(crate) fn with_item(&self, item: ItemId) -> Self {
        let mut inventory = self.inventory.clone();
        inventory.insert(item);
        Self {
            current_room: self.current_room,
            inventory,
        }
    }

    /// Items still to be found, sorted by name.
    pub fn missing_items<'w>(&self, world: &'w World) -> Vec<&'w str> {
        let registry = world.items();
        let mut missing: Vec<&str> = registry
            .ids()
            .filter(|id| !self.has_item(*id))
            .map(|id| registry.name(id))
            .collect();
        missing.sort_unstable();
        missing
    }

    pub fn status(&self, world: &World) -> RoomStatus {
        let graph = world.graph();
        let registry = world.items();
        let room = graph.room(self.current_room);
        let uncollected = world
            .room_item(self.current_room)
            .filter(|id| !self.has_item(*id));

        RoomStatus {
            room: room.name.clone(),
            description: room.description.clone(),
            exits: graph
                .exits(self.current_room)
                .map(|(dir, to)| (dir, graph.name(to).to_string()))
                .collect(),
            item: uncollected.map(|id| registry.name(id).to_string()),
            item_description: uncollected.map(|id| registry.get(id).description.clone()),
            missing: self
                .missing_items(world)
                .into_iter()
                .map(str::to_string)
                .collect(),
            inventory: self
                .inventory
                .iter()
                .map(|id| registry.name(*id).to_string())
                .collect(),
        }
    }
}
