//! A building: ten rooms addressed by 1-based id, with the shared
//! navigation and description-lookup algorithms.
//!
//! The original repository carried four near-identical per-author copies of
//! this logic; here there is one data-driven implementation and the
//! per-author worlds are fixtures (see [`crate::world::fixtures`]).

use crate::world::room::{Direction, ExitTarget, Room};
use crate::{config, RoomId, WarrenError, WarrenResult};
use serde::{Deserialize, Serialize};

/// Result of a navigation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavResult {
    /// Move to this room within the same building.
    Room(RoomId),
    /// No exit in that direction; the move is a no-op.
    Blocked,
    /// The exit leaves the building; resolve the room's connector link
    /// through the building order.
    ConnectorTraversal,
}

/// An immutable ten-room world graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    name: String,
    rooms: Vec<Room>,
}

impl Building {
    /// Creates a building from authored room data. Call
    /// [`validate`](Building::validate) before serving from it.
    pub fn new(name: &str, rooms: Vec<Room>) -> Self {
        Self {
            name: name.to_string(),
            rooms,
        }
    }

    /// The building's author-facing name, used only in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a room by its 1-based id.
    pub fn room(&self, room_id: RoomId) -> Option<&Room> {
        if room_id == 0 {
            return None;
        }
        self.rooms.get(room_id as usize - 1)
    }

    /// The 1-based id of the building's start room.
    ///
    /// Validation guarantees exactly one start room exists, so this cannot
    /// fail on a validated building.
    pub fn start_room(&self) -> WarrenResult<RoomId> {
        self.rooms
            .iter()
            .find(|r| r.is_start)
            .map(|r| r.id)
            .ok_or_else(|| {
                WarrenError::DataIntegrity(format!("building '{}' has no start room", self.name))
            })
    }

    /// Maps (room, direction) to the next room, a blocked move, or a
    /// connector traversal.
    ///
    /// Pure lookup with no side effects. An out-of-range `room_id` resolves
    /// to `Blocked` rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::{world::fixtures, NavResult};
    ///
    /// let building = fixtures::dungeon();
    /// assert_eq!(building.navigate(1, warren::Direction::North), NavResult::Room(2));
    /// assert_eq!(building.navigate(0, warren::Direction::North), NavResult::Blocked);
    /// ```
    pub fn navigate(&self, room_id: RoomId, direction: Direction) -> NavResult {
        let Some(room) = self.room(room_id) else {
            return NavResult::Blocked;
        };
        match room.exit(direction).target {
            ExitTarget::Blocked => NavResult::Blocked,
            ExitTarget::Room(next) => NavResult::Room(next),
            ExitTarget::Connector => NavResult::ConnectorTraversal,
        }
    }

    /// Returns the exit description for a room and direction, verbatim.
    ///
    /// Fails with `InvalidRoom` when `room_id` is outside the building's
    /// range. Direction validity is enforced by the [`Direction`] type at
    /// the command-parse boundary.
    pub fn describe(&self, room_id: RoomId, direction: Direction) -> WarrenResult<&str> {
        let room = self
            .room(room_id)
            .ok_or(WarrenError::InvalidRoom(room_id))?;
        Ok(&room.exit(direction).description)
    }

    /// Checks the authored data against the world contract.
    ///
    /// Run once at startup; a violation is a configuration fault and the
    /// server refuses to start rather than discovering bad data mid-session.
    ///
    /// Enforced: exactly `ROOMS_PER_BUILDING` rooms, ids equal to 1-based
    /// position, exactly one start room, every connector room has an
    /// in-range logical target and is reachable from some other room, and
    /// every `Connector` exit sits on a room flagged as a connector.
    pub fn validate(&self, building_count: usize) -> WarrenResult<()> {
        let fault = |msg: String| {
            Err(WarrenError::DataIntegrity(format!(
                "building '{}': {msg}",
                self.name
            )))
        };

        if self.rooms.len() != config::ROOMS_PER_BUILDING {
            return fault(format!(
                "expected {} rooms, found {}",
                config::ROOMS_PER_BUILDING,
                self.rooms.len()
            ));
        }

        for (idx, room) in self.rooms.iter().enumerate() {
            if room.id as usize != idx + 1 {
                return fault(format!(
                    "room at position {} has id {}",
                    idx + 1,
                    room.id
                ));
            }
        }

        let start_count = self.rooms.iter().filter(|r| r.is_start).count();
        if start_count != 1 {
            return fault(format!("expected exactly one start room, found {start_count}"));
        }

        for room in &self.rooms {
            if room.is_connector {
                match room.connects_to {
                    None => return fault(format!("connector room {} has no target", room.id)),
                    Some(target) if target == 0 || target as usize > building_count => {
                        return fault(format!(
                            "connector room {} points at building {} (valid: 1..={})",
                            room.id, target, building_count
                        ));
                    }
                    Some(_) => {}
                }
                if !self.reachable(room.id) {
                    return fault(format!("connector room {} is unreachable", room.id));
                }
            }
            for direction in Direction::all() {
                if room.exit(direction).target == ExitTarget::Connector && !room.is_connector {
                    return fault(format!(
                        "room {} has a connector exit but is not flagged as a connector",
                        room.id
                    ));
                }
            }
        }

        Ok(())
    }

    /// True when some *other* room's navigation yields `room_id`.
    fn reachable(&self, room_id: RoomId) -> bool {
        self.rooms.iter().any(|r| {
            r.id != room_id
                && Direction::all()
                    .iter()
                    .any(|&d| r.exit(d).target == ExitTarget::Room(room_id))
        })
    }
}
