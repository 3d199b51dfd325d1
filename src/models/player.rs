use crate::error::{AppResult, DomainError};
use crate::models::inventory::Inventory;
use crate::models::item::Item;
use crate::models::room::Room;
use crate::models::types::{Direction, ItemId, RoomId};
use crate::models::world::World;

/// The active player. Rooms are referenced by id and resolved against the
/// world on every operation, so the world stays the sole owner of rooms.
///
/// Every operation either completes or leaves both the world and the inventory
/// untouched.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    current_room: RoomId,
    inventory: Inventory,
}

impl Player {
    /// The caller resolves `start` against the world before creating the player.
    pub fn new(name: impl Into<String>, start: &Room) -> Self {
        Self {
            name: name.into(),
            current_room: start.id,
            inventory: Inventory::new(),
        }
    }

    pub fn current_room_id(&self) -> RoomId {
        self.current_room
    }

    pub fn current_room<'w>(&self, world: &'w World) -> AppResult<&'w Room> {
        world.room(self.current_room)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Follows the exit for `code` (first letter, case-insensitive) out of the
    /// current room.
    pub fn move_to<'w>(&mut self, world: &'w World, code: &str) -> AppResult<&'w Room> {
        let invalid = || DomainError::InvalidDirection(code.to_string());

        let dir = Direction::parse(code).ok_or_else(invalid)?;
        let to = self.current_room(world)?.exit(dir).ok_or_else(invalid)?;
        let room = world.room(to)?;

        self.current_room = room.id;
        Ok(room)
    }

    /// Moves an item from the floor of the current room into the inventory.
    pub fn take_item(&mut self, world: &mut World, id: &ItemId) -> AppResult<&Item> {
        let room = world.room_mut(self.current_room)?;
        let item = room
            .items
            .remove(id)
            .ok_or_else(|| DomainError::ItemNotFound(id.clone()))?;

        self.inventory.insert(item);
        self.inventory
            .get(id)
            .ok_or_else(|| DomainError::ItemNotFound(id.clone()))
    }

    /// Moves an item from the inventory onto the floor of the current room.
    pub fn drop_item<'w>(&mut self, world: &'w mut World, id: &ItemId) -> AppResult<&'w Item> {
        let room = world.room_mut(self.current_room)?;
        let item = self
            .inventory
            .remove(id)
            .ok_or_else(|| DomainError::ItemNotFound(id.clone()))?;

        room.items.insert(item);
        room.items.get(id).ok_or_else(|| DomainError::ItemNotFound(id.clone()))
    }

    /// Destroys an edible item from the inventory.
    pub fn eat_item(&mut self, id: &ItemId) -> AppResult<String> {
        let item = self
            .inventory
            .get(id)
            .ok_or_else(|| DomainError::ItemNotFound(id.clone()))?;
        if !item.is_edible {
            return Err(DomainError::ItemNotEdible(item.name.clone()));
        }

        let name = item.name.clone();
        self.inventory.remove(id);
        Ok(format!("You ate the {name}. Delicious!"))
    }

    /// Carried items, each with "drop" and "eat" buttons.
    pub fn inventory_to_string(&self) -> String {
        self.inventory.to_html_list(&["drop", "eat"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        let mut foyer = Room::new(RoomId(1), "Foyer", "A dusty entrance.");
        foyer.exits.insert(Direction::North, RoomId(2));
        foyer.items.insert(Item::new("apple", "Apple", "Crisp.", true));
        foyer.items.insert(Item::new("rock", "Rock", "Heavy.", false));

        let mut hall = Room::new(RoomId(2), "Hall", "Echoes.");
        hall.exits.insert(Direction::South, RoomId(1));

        World::new(vec![foyer, hall]).unwrap()
    }

    fn player(world: &World) -> Player {
        Player::new("A", world.room(RoomId(1)).unwrap())
    }

    #[test]
    fn move_follows_exits() {
        let world = world();
        let mut p = player(&world);

        assert_eq!(p.move_to(&world, "N").unwrap().id, RoomId(2));
        assert_eq!(p.current_room_id(), RoomId(2));
        assert_eq!(p.move_to(&world, "south").unwrap().id, RoomId(1));
    }

    #[test]
    fn move_without_exit_leaves_room_unchanged() {
        let world = world();
        let mut p = player(&world);

        assert!(matches!(p.move_to(&world, "x"), Err(DomainError::InvalidDirection(_))));
        assert!(matches!(p.move_to(&world, "e"), Err(DomainError::InvalidDirection(_))));
        assert!(matches!(p.move_to(&world, ""), Err(DomainError::InvalidDirection(_))));
        assert_eq!(p.current_room_id(), RoomId(1));
    }

    #[test]
    fn take_then_drop_restores_the_room() {
        let mut world = world();
        let mut p = player(&world);
        let before = world.room(RoomId(1)).unwrap().items.clone();
        let rock = ItemId::from("rock");

        assert_eq!(p.take_item(&mut world, &rock).unwrap().name, "Rock");
        assert!(p.inventory().contains(&rock));
        assert_eq!(world.locate_item(&rock), None);

        p.drop_item(&mut world, &rock).unwrap();
        assert!(p.inventory().is_empty());
        assert_eq!(world.room(RoomId(1)).unwrap().items, before);
    }

    #[test]
    fn drop_puts_the_item_in_the_current_room() {
        let mut world = world();
        let mut p = player(&world);
        let rock = ItemId::from("rock");

        p.take_item(&mut world, &rock).unwrap();
        p.move_to(&world, "n").unwrap();
        p.drop_item(&mut world, &rock).unwrap();

        assert_eq!(world.locate_item(&rock), Some(RoomId(2)));
    }

    #[test]
    fn missing_items_are_not_found() {
        let mut world = world();
        let mut p = player(&world);
        let ghost = ItemId::from("ghost");

        assert!(matches!(p.take_item(&mut world, &ghost), Err(DomainError::ItemNotFound(_))));
        assert!(matches!(p.drop_item(&mut world, &ghost), Err(DomainError::ItemNotFound(_))));
        assert!(matches!(p.eat_item(&ghost), Err(DomainError::ItemNotFound(_))));

        // present in the room but not carried
        assert!(matches!(p.drop_item(&mut world, &ItemId::from("rock")), Err(DomainError::ItemNotFound(_))));
        assert!(world.room(RoomId(1)).unwrap().items.contains(&ItemId::from("rock")));
    }

    #[test]
    fn eating_destroys_edible_items_only() {
        let mut world = world();
        let mut p = player(&world);
        let apple = ItemId::from("apple");
        let rock = ItemId::from("rock");

        p.take_item(&mut world, &apple).unwrap();
        p.take_item(&mut world, &rock).unwrap();

        let err = p.eat_item(&rock).unwrap_err();
        assert!(matches!(err, DomainError::ItemNotEdible(_)));
        assert!(!err.to_string().is_empty());
        assert!(p.inventory().contains(&rock));

        assert!(p.eat_item(&apple).unwrap().contains("Apple"));
        assert!(!p.inventory().contains(&apple));
        assert_eq!(world.locate_item(&apple), None);
    }

    #[test]
    fn inventory_listing() {
        let mut world = world();
        let mut p = player(&world);
        assert_eq!(p.inventory_to_string(), "<li>nothing</li>");

        p.take_item(&mut world, &ItemId::from("apple")).unwrap();
        let html = p.inventory_to_string();
        assert!(html.contains(r#"action="/items/apple/drop""#));
        assert!(html.contains(r#"action="/items/apple/eat""#));
    }
}
