use crate::error::{AppResult, DomainError, InfraError};
use crate::models::room::Room;
use crate::models::types::{ItemId, RoomId};
use std::collections::{BTreeMap, BTreeSet};

/// Entry in the list of rooms a new player may start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSummary<'a> {
    pub id: RoomId,
    pub name: &'a str,
}

/// All rooms of the game. The exit graph is fixed once built; only the items
/// inside rooms change afterwards.
#[derive(Debug, Clone)]
pub struct World {
    rooms: BTreeMap<RoomId, Room>,
    /// Rooms that some *other* room has an exit into
    inbound: BTreeSet<RoomId>,
}

impl World {
    /// Builds the world and checks that the exit graph is closed and that item
    /// ids are unique across all rooms.
    pub fn new(rooms: Vec<Room>) -> Result<Self, InfraError> {
        let mut map = BTreeMap::new();
        for room in rooms {
            let id = room.id;
            if map.insert(id, room).is_some() {
                return Err(InfraError::Seed(format!("duplicate room id {id}")));
            }
        }

        let mut inbound = BTreeSet::new();
        let mut seen_items = BTreeSet::new();
        for room in map.values() {
            for (dir, to) in &room.exits {
                if !map.contains_key(to) {
                    return Err(InfraError::Seed(format!(
                        "exit {dir} of room {} points to unknown room {to}",
                        room.id
                    )));
                }
                if *to != room.id {
                    inbound.insert(*to);
                }
            }
            for item_id in room.items.ids() {
                if !seen_items.insert(item_id.clone()) {
                    return Err(InfraError::Seed(format!("duplicate item id {item_id}")));
                }
            }
        }

        Ok(Self { rooms: map, inbound })
    }

    pub fn room(&self, id: RoomId) -> AppResult<&Room> {
        self.rooms.get(&id).ok_or_else(|| DomainError::room_not_found(id))
    }

    pub fn room_mut(&mut self, id: RoomId) -> AppResult<&mut Room> {
        self.rooms.get_mut(&id).ok_or_else(|| DomainError::room_not_found(id))
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms nobody can walk into, ordered by id. These are the valid entry
    /// points for a new player. The iterator is lazy and can be cloned to
    /// restart it.
    pub fn available_rooms(&self) -> impl Iterator<Item = RoomSummary<'_>> + Clone + '_ {
        self.rooms
            .values()
            .filter(|room| !self.inbound.contains(&room.id))
            .map(|room| RoomSummary {
                id: room.id,
                name: room.name.as_str(),
            })
    }

    /// `<option>` elements for the new-player form.
    pub fn available_rooms_to_string(&self) -> String {
        self.available_rooms()
            .map(|r| format!(r#"<option value="{}">{}</option>"#, r.id, r.name))
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// The room currently holding the item, if any.
    pub fn locate_item(&self, id: &ItemId) -> Option<RoomId> {
        self.rooms.values().find(|r| r.items.contains(id)).map(|r| r.id)
    }
}
