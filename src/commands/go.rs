use crate::commands::{CmdCtx, Outcome};

/// Moves the player. Failures are not shown to the player: they simply end
/// up back in the room the request came from.
pub fn go(ctx: &mut CmdCtx, from: &str, direction: &str) -> Outcome {
    let (player, world) = match ctx.game.parts_mut() {
        Ok(parts) => parts,
        Err(e) => {
            tracing::debug!(error=%e, "go: nobody to move");
            return Outcome::to_room(from);
        }
    };

    match player.move_to(world, direction) {
        Ok(room) => Outcome::to_room(room.id),
        Err(e) => {
            tracing::debug!(error=%e, room=%player.current_room_id(), "go: no such exit");
            Outcome::to_room(from)
        }
    }
}
