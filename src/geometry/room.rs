use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// The kind of gap an opening cuts into a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
    Closet,
    /// Placeholder for "no physical opening"; never produces a clearance zone.
    #[default]
    None,
}

impl OpeningKind {
    /// Returns `true` if this kind produces a clearance zone.
    #[must_use]
    pub fn is_physical(self) -> bool {
        self != Self::None
    }

    /// Lower-case name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Window => "window",
            Self::Closet => "closet",
            Self::None => "none",
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpeningKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "door" => Ok(Self::Door),
            "window" => Ok(Self::Window),
            "closet" => Ok(Self::Closet),
            "none" | "" => Ok(Self::None),
            other => Err(LayoutError::UnknownOpeningKind(other.to_owned())),
        }
    }
}

/// A door, window or closet gap in a wall.
///
/// `start` is measured in inches from the wall's origin corner. Neither
/// `start` nor `start + width` is checked against the wall length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub kind: OpeningKind,
    pub start: f64,
    pub width: f64,
}

impl Opening {
    #[must_use]
    pub fn new(kind: OpeningKind, start: f64, width: f64) -> Self {
        Self { kind, start, width }
    }

    /// Offset of the opening's midpoint along its wall.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.start + self.width / 2.0
    }
}

/// A named wall of a given length, optionally carrying openings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub name: String,
    pub length: f64,
    #[serde(default)]
    pub openings: Vec<Opening>,
}

impl Wall {
    /// Creates a wall without openings.
    #[must_use]
    pub fn new(name: impl Into<String>, length: f64) -> Self {
        Self {
            name: name.into(),
            length,
            openings: Vec::new(),
        }
    }

    /// Builder-style helper that appends an opening.
    #[must_use]
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.openings.push(opening);
        self
    }
}

/// A room: an ordered list of walls. Wall order drives polygon construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    #[serde(default)]
    pub walls: Vec<Wall>,
}

impl Room {
    #[must_use]
    pub fn new(name: impl Into<String>, walls: Vec<Wall>) -> Self {
        Self {
            name: name.into(),
            walls,
        }
    }

    /// Finds a wall by case-insensitive name. The last match wins.
    #[must_use]
    pub fn wall(&self, name: &str) -> Option<&Wall> {
        self.walls
            .iter()
            .rev()
            .find(|w| w.name.eq_ignore_ascii_case(name))
    }

    pub(crate) fn wall_mut(&mut self, name: &str) -> Option<&mut Wall> {
        self.walls
            .iter_mut()
            .rev()
            .find(|w| w.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn opening_kind_parses_case_insensitively() {
        assert_eq!("Door".parse::<OpeningKind>().unwrap(), OpeningKind::Door);
        assert_eq!(" WINDOW ".parse::<OpeningKind>().unwrap(), OpeningKind::Window);
        assert_eq!("closet".parse::<OpeningKind>().unwrap(), OpeningKind::Closet);
        assert_eq!("".parse::<OpeningKind>().unwrap(), OpeningKind::None);
        assert!("arch".parse::<OpeningKind>().is_err());
    }

    #[test]
    fn none_is_not_physical() {
        assert!(!OpeningKind::None.is_physical());
        assert!(OpeningKind::Door.is_physical());
    }

    #[test]
    fn wall_lookup_last_match_wins() {
        let room = Room::new(
            "dup",
            vec![Wall::new("North", 100.0), Wall::new("north", 120.0)],
        );
        assert!((room.wall("NORTH").unwrap().length - 120.0).abs() < 1e-12);
        assert!(room.wall("south").is_none());
    }

    #[test]
    fn room_deserializes_from_toml() {
        let src = r#"
            name = "Bedroom"

            [[walls]]
            name = "north"
            length = 180.0

            [[walls]]
            name = "south"
            length = 180.0
            openings = [{ kind = "door", start = 72.0, width = 36.0 }]
        "#;
        let room: Room = toml::from_str(src).unwrap();
        assert_eq!(room.walls.len(), 2);
        assert!(room.walls[0].openings.is_empty());
        assert_eq!(room.walls[1].openings[0].kind, OpeningKind::Door);
        assert!((room.walls[1].openings[0].midpoint() - 90.0).abs() < 1e-12);
    }
}
