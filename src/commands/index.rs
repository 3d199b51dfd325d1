use crate::commands::{CmdCtx, Outcome};
use crate::renderer::Template;
use crate::renderer::vars::new_player_vars;

pub fn index(ctx: &mut CmdCtx) -> Outcome {
    let vars = new_player_vars(&ctx.game.world);
    Outcome::Page(ctx.renderer.render(Template::NewPlayer, &vars))
}
