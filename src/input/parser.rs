//! Request parser: turns (method, path) into an [`Intent`].
//!
//! Rules are tried in this order, first match wins. Paths are split on `/`, so
//! `/rooms/5` has three segments (`""`, `"rooms"`, `"5"`):
//!
//!   GET  /                         -> Verb::Index
//!   POST /player                   -> Verb::Join
//!   GET  /rooms/{id}               -> Verb::Look      (exactly 3 segments, numeric id)
//!   GET  /rooms/{id}/{direction}   -> Verb::Go        (exactly 4 segments)
//!   POST /items/{id}/{action}      -> Verb::Item      (exactly 4 segments)
//!   anything else                  -> Verb::Unknown
//!
//! `/rooms/5/x` never reads as a room view, and `/rooms/5` never as a move.
//! `/rooms/abc` is not a room view either, it falls through to Unknown. An id
//! made of digits is always a room view, even when it is too large to name a
//! room; that case is answered with 404.
//! Query strings are not part of the path and are ignored.

use crate::models::types::ItemId;
use axum::http::Method;

/// What to do with an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    Take,
    Drop,
    Eat,
    /// Anything else; handled as a no-op.
    Other(String),
}

impl ItemAction {
    pub fn parse(s: &str) -> Self {
        match s {
            "take" => ItemAction::Take,
            "drop" => ItemAction::Drop,
            "eat" => ItemAction::Eat,
            other => ItemAction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemAction::Take => "take",
            ItemAction::Drop => "drop",
            ItemAction::Eat => "eat",
            ItemAction::Other(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// New player form
    Index,
    /// Create the player
    Join,
    /// Show a room; the id is all ASCII digits but may not fit a `RoomId`
    Look(String),
    /// Move; `from` is the raw room segment, used to bounce back on failure
    Go { from: String, direction: String },
    /// Take, drop or eat an item
    Item { id: ItemId, action: ItemAction },
    /// No rule matched
    Unknown,
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Index => "index",
            Verb::Join => "join",
            Verb::Look(_) => "look",
            Verb::Go { .. } => "go",
            Verb::Item { .. } => "item",
            Verb::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub verb: Verb,
    pub method: Method,
    pub path: String,
}

pub fn parse_request(method: &Method, path: &str) -> Intent {
    Intent {
        verb: resolve(method, path),
        method: method.clone(),
        path: path.to_string(),
    }
}

fn resolve(method: &Method, path: &str) -> Verb {
    let segs: Vec<&str> = path.split('/').collect();

    if *method == Method::GET && path == "/" {
        return Verb::Index;
    }

    if *method == Method::POST && path == "/player" {
        return Verb::Join;
    }

    if *method == Method::GET {
        if let ["", "rooms", id] = segs.as_slice() {
            if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
                return Verb::Look(id.to_string());
            }
        }

        if let ["", "rooms", from, direction] = segs.as_slice() {
            return Verb::Go {
                from: from.to_string(),
                direction: direction.to_string(),
            };
        }
    }

    if *method == Method::POST {
        if let ["", "items", id, action] = segs.as_slice() {
            return Verb::Item {
                id: ItemId::from(*id),
                action: ItemAction::parse(action),
            };
        }
    }

    Verb::Unknown
}
