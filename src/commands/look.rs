use crate::commands::{CmdCtx, Outcome};
use crate::error::DomainError;
use crate::models::types::RoomId;
use crate::renderer::Template;
use crate::renderer::vars::room_vars;

/// Renders any room by id, not only the one the player is in.
pub fn look(ctx: &mut CmdCtx, raw_id: &str) -> Outcome {
    let game = &*ctx.game;

    // The view shows the inventory, so somebody has to be playing
    let Ok(player) = game.session.player() else {
        return Outcome::Redirect("/".to_string());
    };

    // Digits that overflow a room id name no room at all
    match raw_id.parse::<RoomId>().and_then(|id| game.world.room(id)) {
        Ok(room) => Outcome::Page(ctx.renderer.render(Template::Room, &room_vars(room, player))),
        Err(e @ DomainError::RoomNotFound(_)) => ctx.not_found(&e),
        Err(e) => ctx.bad_request(&e),
    }
}
