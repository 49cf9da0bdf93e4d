//! Room records: per-direction exit descriptions, navigation targets, and
//! role flags.
//!
//! The original data encoded navigation as raw integers (0 meaning "no
//! exit," -1 meaning "connector"). Those sentinels are replaced here by the
//! tagged [`ExitTarget`] so a connector marker can never be mistaken for a
//! room id.

use crate::RoomId;
use serde::{Deserialize, Serialize};

/// The four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Parses a direction from a command letter, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::Direction;
    ///
    /// assert_eq!(Direction::from_char('n'), Some(Direction::North));
    /// assert_eq!(Direction::from_char('W'), Some(Direction::West));
    /// assert_eq!(Direction::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_lowercase() {
            'n' => Some(Direction::North),
            's' => Some(Direction::South),
            'e' => Some(Direction::East),
            'w' => Some(Direction::West),
            _ => None,
        }
    }

    /// Returns the lowercase command letter for this direction.
    pub fn to_char(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }

    /// Returns all four directions in display order (N, S, E, W).
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }
}

/// Where an exit leads, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitTarget {
    /// No exit in this direction; moving here is a no-op.
    Blocked,
    /// Leads to another room in the same building.
    Room(RoomId),
    /// Leaves the building through the room's connector link.
    Connector,
}

/// One directional exit: flavor text plus a navigation target.
///
/// Every direction carries text even when blocked; the original authors
/// wrote "you can't go that way" flavor for dead ends and it is returned
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exit {
    pub description: String,
    pub target: ExitTarget,
}

impl Exit {
    fn new(description: &str, target: ExitTarget) -> Self {
        Self {
            description: description.to_string(),
            target,
        }
    }
}

/// A single room: four exits and role flags.
///
/// `connects_to` holds a 1-based *logical* building number. It is resolved
/// through the current [`BuildingOrder`](crate::BuildingOrder) at traversal
/// time, never stored as a physical index, since the order can change
/// independently of the room data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub north: Exit,
    pub south: Exit,
    pub east: Exit,
    pub west: Exit,
    pub is_start: bool,
    pub is_item: bool,
    pub is_connector: bool,
    pub connects_to: Option<u8>,
}

impl Room {
    /// Creates a room with all exits blocked and no flags set. Fixture code
    /// fills in exits and flags with the builder methods below.
    pub fn new(id: RoomId) -> Self {
        let blocked = || Exit::new("", ExitTarget::Blocked);
        Self {
            id,
            north: blocked(),
            south: blocked(),
            east: blocked(),
            west: blocked(),
            is_start: false,
            is_item: false,
            is_connector: false,
            connects_to: None,
        }
    }

    pub fn north(mut self, description: &str, target: ExitTarget) -> Self {
        self.north = Exit::new(description, target);
        self
    }

    pub fn south(mut self, description: &str, target: ExitTarget) -> Self {
        self.south = Exit::new(description, target);
        self
    }

    pub fn east(mut self, description: &str, target: ExitTarget) -> Self {
        self.east = Exit::new(description, target);
        self
    }

    pub fn west(mut self, description: &str, target: ExitTarget) -> Self {
        self.west = Exit::new(description, target);
        self
    }

    /// Flags this room as the building's start room.
    pub fn start(mut self) -> Self {
        self.is_start = true;
        self
    }

    /// Flags this room as the item (goal) room.
    pub fn item(mut self) -> Self {
        self.is_item = true;
        self
    }

    /// Flags this room as a connector to the given logical building number
    /// (1-based).
    pub fn connector(mut self, logical_building: u8) -> Self {
        self.is_connector = true;
        self.connects_to = Some(logical_building);
        self
    }

    /// Returns the exit record for a direction.
    pub fn exit(&self, direction: Direction) -> &Exit {
        match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }
}
