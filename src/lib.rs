pub mod commands;
pub mod config;
pub mod error;
pub mod import;
pub mod input;
pub mod models;
pub mod net;
pub mod renderer;
pub mod state;

// Convenient re-exports (so call sites can do `roomcrawl::Registry`, etc.)
pub use commands::{Outcome, process_request};
pub use state::{
    registry::Registry,
    session::{Game, Session},
};
