use crate::error::InfraError;
use crate::models::item::Item;
use crate::models::room::Room;
use crate::models::types::{Direction, ItemId, RoomId};
use crate::models::world::World;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Item ids are written into `/items/{id}/{action}` as-is, so they are limited
/// to characters that need no percent-encoding in a path segment.
static ITEM_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("valid item id regex"));

/// The world that ships with the binary.
pub const BASIC_WORLD: &str = include_str!("../data/basic-world.yaml");

#[derive(Debug, Deserialize)]
pub struct WorldYaml {
    pub rooms: Vec<RoomYaml>,
    #[serde(default)]
    pub items: Vec<ItemYaml>,
}

#[derive(Debug, Deserialize)]
pub struct RoomYaml {
    pub id: RoomId,                      // 1
    pub name: String,                    // "Foyer"
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exits: BTreeMap<String, RoomId>, // "n" -> 2
}

#[derive(Debug, Deserialize)]
pub struct ItemYaml {
    pub id: String,   // "apple"
    pub name: String, // "Red Apple"
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub edible: bool,
    pub room: RoomId, // where it starts out
}

/// Parses and validates a YAML seed and builds the world from it.
pub fn load_world(text: &str) -> Result<World, InfraError> {
    let seed: WorldYaml = serde_yaml::from_str(text)?;
    build_world(seed)
}

pub fn load_world_file<P: AsRef<Path>>(path: P) -> Result<World, InfraError> {
    let text = std::fs::read_to_string(path)?;
    load_world(&text)
}

pub fn build_world(seed: WorldYaml) -> Result<World, InfraError> {
    validate_seed(&seed)?;

    let mut rooms: BTreeMap<RoomId, Room> = BTreeMap::new();
    for r in seed.rooms {
        let mut room = Room::new(r.id, r.name, r.description);
        for (code, to) in r.exits {
            let dir = code
                .parse::<Direction>()
                .map_err(|_| InfraError::Seed(format!("room {}: invalid exit direction '{code}'", r.id)))?;
            room.exits.insert(dir, to);
        }
        rooms.insert(room.id, room);
    }

    for i in seed.items {
        let room = rooms
            .get_mut(&i.room)
            .ok_or_else(|| InfraError::Seed(format!("item {} placed in unknown room {}", i.id, i.room)))?;
        room.items.insert(Item::new(ItemId(i.id), i.name, i.description, i.edible));
    }

    World::new(rooms.into_values().collect())
}

pub fn validate_seed(seed: &WorldYaml) -> Result<(), InfraError> {
    let bail = |msg: String| Err(InfraError::Seed(msg));

    if seed.rooms.is_empty() {
        return bail("no rooms".to_string());
    }

    let mut room_ids = HashSet::new();
    for room in &seed.rooms {
        if room.name.trim().is_empty() {
            return bail(format!("room {} has an empty name", room.id));
        }
        if !room_ids.insert(room.id) {
            return bail(format!("duplicate room id {}", room.id));
        }
    }

    let mut item_ids = HashSet::new();
    for item in &seed.items {
        if item.id.is_empty() {
            return bail("item with empty id".to_string());
        }
        if !ITEM_ID_RE.is_match(&item.id) {
            return bail(format!("item id '{}' may only use letters, digits and . _ ~ -", item.id));
        }
        if item.name.trim().is_empty() {
            return bail(format!("item {} has an empty name", item.id));
        }
        if !item_ids.insert(item.id.as_str()) {
            return bail(format!("duplicate item id {}", item.id));
        }
    }

    Ok(())
}
