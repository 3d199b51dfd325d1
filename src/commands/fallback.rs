use crate::commands::{CmdCtx, Outcome};
use crate::error::DomainError;
use crate::input::parser::Intent;

/// Unmatched requests go back to the player's room, or 404 when nobody plays.
pub fn fallback(ctx: &mut CmdCtx, intent: &Intent) -> Outcome {
    match ctx.game.session.player() {
        Ok(player) => Outcome::to_room(player.current_room_id()),
        Err(_) => {
            let e = DomainError::RouteNotFound {
                method: intent.method.to_string(),
                path: intent.path.clone(),
            };
            tracing::debug!(error=%e, "no route");
            ctx.not_found(&e)
        }
    }
}
