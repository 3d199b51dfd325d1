use crate::config::Config;
use crate::import::{BASIC_WORLD, load_world, load_world_file};
use crate::models::world::World;
use crate::renderer::{Render, TemplateRenderer, Templates};
use crate::state::session::Game;
use anyhow::Context;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared by every request handler.
pub struct Registry {
    pub renderer: Arc<dyn Render>,
    /// World and session live behind a single lock, so a request sees and
    /// applies its whole state transition at once.
    pub game: Mutex<Game>,
}

impl Registry {
    pub fn new(world: World, renderer: Arc<dyn Render>) -> Self {
        Self {
            renderer,
            game: Mutex::new(Game::new(world)),
        }
    }

    /// Loads the world and templates named by the configuration, falling back
    /// to the ones built into the binary.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let world = match &config.world_file {
            Some(path) => load_world_file(path).with_context(|| format!("loading world {}", path.display()))?,
            None => load_world(BASIC_WORLD).context("loading built-in world")?,
        };

        let templates = match &config.views_dir {
            Some(dir) => {
                Templates::load(dir).with_context(|| format!("loading views from {}", dir.display()))?
            }
            None => Templates::embedded(),
        };

        tracing::info!(rooms = world.len(), entry_points = world.available_rooms().count(), "world loaded");

        Ok(Self::new(world, Arc::new(TemplateRenderer::new(templates))))
    }
}
