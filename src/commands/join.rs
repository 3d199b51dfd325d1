use crate::commands::{CmdCtx, Outcome};
use crate::error::{AppResult, DomainError};
use crate::models::player::Player;
use crate::models::types::RoomId;

pub fn join(ctx: &mut CmdCtx) -> Outcome {
    match try_join(ctx) {
        Ok(room_id) => Outcome::to_room(room_id),
        Err(e) => {
            tracing::warn!(error=%e, "join rejected");
            ctx.bad_request(&e)
        }
    }
}

fn try_join(ctx: &mut CmdCtx) -> AppResult<RoomId> {
    let raw = ctx.form.get("roomId").ok_or(DomainError::MissingField("roomId"))?;
    let name = ctx.form.get("name").unwrap_or_default();

    // Resolve the room before anybody is created
    let room = ctx.game.world.room(raw.parse::<RoomId>()?)?;
    let player = Player::new(name, room);
    let room_id = room.id;

    ctx.game.join(player)?;
    tracing::info!(player=%name, room=%room_id, "player joined");

    Ok(room_id)
}
