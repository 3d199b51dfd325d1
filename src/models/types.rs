use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Numeric room identifier, as it appears in `/rooms/{id}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl core::fmt::Display for RoomId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for RoomId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::RoomNotFound(s.to_string()));
        }
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| DomainError::RoomNotFound(s.to_string()))
    }
}

/// Item identifier. Unique across the whole world.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Exit directions. Exits are keyed by their single letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn canonical(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn to_short(&self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
            Direction::Up => 'u',
            Direction::Down => 'd',
        }
    }

    /// Case-insensitive lookup of a single letter code.
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Direction::North),
            'e' => Some(Direction::East),
            's' => Some(Direction::South),
            'w' => Some(Direction::West),
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            _ => None,
        }
    }

    /// Uses only the first character, so "north", "N" and "n" are all the same.
    pub fn parse(s: &str) -> Option<Self> {
        s.chars().next().and_then(Self::from_code)
    }
}

impl core::str::FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c).ok_or_else(|| DomainError::InvalidDirection(s.to_string())),
            _ => Err(DomainError::InvalidDirection(s.to_string())),
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_id_must_be_numeric() {
        assert_eq!("12".parse::<RoomId>().unwrap(), RoomId(12));
        assert!("".parse::<RoomId>().is_err());
        assert!("abc".parse::<RoomId>().is_err());
        assert!("-1".parse::<RoomId>().is_err());
        assert!("1.5".parse::<RoomId>().is_err());
    }

    #[test]
    fn direction_codes_are_case_insensitive() {
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("w"), Some(Direction::West));
        assert_eq!(Direction::parse("x"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn seed_codes_are_single_letters() {
        assert_eq!("s".parse::<Direction>().unwrap(), Direction::South);
        assert!("south".parse::<Direction>().is_err());
        assert!("q".parse::<Direction>().is_err());
    }
}
