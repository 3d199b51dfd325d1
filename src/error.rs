use crate::models::types::{ItemId, RoomId};
use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// No route matched and there is nobody to redirect
    #[error("nothing here: {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// No exit in that direction from the current room
    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("you cannot eat the {0}")]
    ItemNotEdible(String),

    /// Acting before anybody joined the game
    #[error("no player has joined yet")]
    MissingPlayer,

    #[error("room not found: {0}")]
    RoomNotFound(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),
}

impl DomainError {
    pub fn room_not_found(id: RoomId) -> Self {
        DomainError::RoomNotFound(id.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: ConfigErrorKind,
    },

    #[error("invalid world seed: {0}")]
    Seed(String),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
