use crate::models::inventory::Inventory;
use crate::models::types::{Direction, RoomId};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    /// Items lying on the floor
    pub items: Inventory,
    /// Direction -> target room. Targets are checked against the world at load time.
    pub exits: BTreeMap<Direction, RoomId>,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            items: Inventory::new(),
            exits: BTreeMap::new(),
        }
    }

    pub fn exit(&self, dir: Direction) -> Option<RoomId> {
        self.exits.get(&dir).copied()
    }

    /// Items on the floor, each with a "take" button.
    pub fn items_to_string(&self) -> String {
        self.items.to_html_list(&["take"])
    }

    /// One link per exit, pointing at the move route for this room.
    pub fn exits_to_string(&self) -> String {
        if self.exits.is_empty() {
            return "<li>none</li>".to_string();
        }

        self.exits
            .keys()
            .map(|dir| {
                format!(
                    r#"<li><a href="/rooms/{id}/{code}">{dir}</a></li>"#,
                    id = self.id,
                    code = dir.to_short(),
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::Item;

    #[test]
    fn exits_render_as_move_links() {
        let mut room = Room::new(RoomId(3), "Kitchen", "Smells of bread.");
        room.exits.insert(Direction::West, RoomId(2));
        room.exits.insert(Direction::North, RoomId(4));

        assert_eq!(
            room.exits_to_string(),
            "<li><a href=\"/rooms/3/n\">north</a></li>\n<li><a href=\"/rooms/3/w\">west</a></li>"
        );
        assert_eq!(room.exit(Direction::West), Some(RoomId(2)));
        assert_eq!(room.exit(Direction::East), None);
        assert_eq!(room.exit(Direction::North), Some(RoomId(4)));
    }

    #[test]
    fn room_without_exits() {
        let room = Room::new(RoomId(1), "Closet", "Cramped.");
        assert_eq!(room.exits_to_string(), "<li>none</li>");
    }

    #[test]
    fn floor_items_can_be_taken() {
        let mut room = Room::new(RoomId(1), "Closet", "Cramped.");
        room.items.insert(Item::new("mop", "Mop", "Damp.", false));
        assert!(room.items_to_string().contains(r#"action="/items/mop/take""#));
    }
}
