use crate::models::player::Player;
use crate::models::room::Room;
use crate::models::world::World;
use crate::renderer::RenderVars;

/// Variables for the new player form.
pub fn new_player_vars(world: &World) -> RenderVars {
    let mut vars = RenderVars::new();
    vars.set("availableRooms", world.available_rooms_to_string());
    vars
}

/// Variables for the room view. The room shown is the one requested, which is
/// not necessarily where the player stands.
pub fn room_vars(room: &Room, player: &Player) -> RenderVars {
    let mut vars = RenderVars::new();
    vars.set("roomName", room.name.as_str())
        .set("roomDescription", room.description.as_str())
        .set("playerName", player.name.as_str())
        .set("inventory", player.inventory_to_string())
        .set("roomItems", room.items_to_string())
        .set("exits", room.exits_to_string());
    vars
}

pub fn error_vars(message: impl Into<String>) -> RenderVars {
    let mut vars = RenderVars::new();
    vars.set("errorMessage", message);
    vars
}
