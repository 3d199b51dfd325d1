use crate::commands::{CmdCtx, Outcome};
use crate::error::AppResult;
use crate::input::parser::ItemAction;
use crate::models::types::{ItemId, RoomId};

pub fn item(ctx: &mut CmdCtx, id: &ItemId, action: &ItemAction) -> Outcome {
    match try_item(ctx, id, action) {
        Ok(room_id) => Outcome::to_room(room_id),
        Err(e) => {
            let location = ctx.game.world.locate_item(id);
            tracing::warn!(
                item=%id, action=action.as_str(), ?location, error=%e,
                "item action rejected"
            );
            ctx.bad_request(&e)
        }
    }
}

/// Applies the action and returns the room to go back to.
fn try_item(ctx: &mut CmdCtx, id: &ItemId, action: &ItemAction) -> AppResult<RoomId> {
    let (player, world) = ctx.game.parts_mut()?;

    let message = match action {
        ItemAction::Take => Some(format!("You take the {}.", player.take_item(world, id)?.name)),
        ItemAction::Drop => Some(format!("You drop the {}.", player.drop_item(world, id)?.name)),
        ItemAction::Eat => Some(player.eat_item(id)?),
        ItemAction::Other(_) => None,
    };

    if let Some(message) = message {
        tracing::info!(player=%player.name, item=%id, "{message}");
    }

    Ok(player.current_room_id())
}
