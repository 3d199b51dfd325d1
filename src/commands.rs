use crate::error::DomainError;
use crate::input::parser::{Intent, Verb};
use crate::net::form::FormData;
use crate::renderer::vars::error_vars;
use crate::renderer::{Render, Template};
use crate::state::session::Game;

mod fallback;
mod go;
mod index;
mod item;
mod join;
mod look;

/// How a request is answered. Every route produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 200 with an HTML body
    Page(String),
    /// 302 to the given location
    Redirect(String),
    /// 400 with an HTML error body
    BadRequest(String),
    /// 404 with an HTML error body
    NotFound(String),
}

impl Outcome {
    pub fn to_room(id: impl std::fmt::Display) -> Self {
        Outcome::Redirect(format!("/rooms/{id}"))
    }
}

/// Command context passed to request handlers
pub struct CmdCtx<'a> {
    /// World and session, already locked by the caller
    pub game: &'a mut Game,
    /// Template renderer
    pub renderer: &'a dyn Render,
    /// Decoded request body
    pub form: &'a FormData,
}

impl CmdCtx<'_> {
    fn error_page(&self, err: &DomainError) -> String {
        self.renderer.render(Template::Error, &error_vars(err.to_string()))
    }

    pub(crate) fn bad_request(&self, err: &DomainError) -> Outcome {
        Outcome::BadRequest(self.error_page(err))
    }

    pub(crate) fn not_found(&self, err: &DomainError) -> Outcome {
        Outcome::NotFound(self.error_page(err))
    }
}

/// Runs one request against the game state.
pub fn process_request(intent: &Intent, ctx: &mut CmdCtx) -> Outcome {
    tracing::debug!(method=%intent.method, path=%intent.path, verb=intent.verb.as_str(), "dispatch");

    match &intent.verb {
        Verb::Index => index::index(ctx),
        Verb::Join => join::join(ctx),
        Verb::Look(room_id) => look::look(ctx, room_id),
        Verb::Go { from, direction } => go::go(ctx, from, direction),
        Verb::Item { id, action } => item::item(ctx, id, action),
        Verb::Unknown => fallback::fallback(ctx, intent),
    }
}
