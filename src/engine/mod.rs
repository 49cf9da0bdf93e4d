//! # Engine Module
//!
//! Per-player session state and the movement state machine.
//!
//! The engine owns the [`World`] and the session table outright and is the
//! only component that mutates either. It performs no I/O: every operation
//! returns a [`Reply`] (or an error) that the transport layer delivers to
//! the right player. The surrounding server serializes commands per player,
//! so no locking happens here; callers that dispatch concurrently wrap the
//! whole engine in one mutex, since a reset mutates the order and the
//! sessions together.

use crate::world::{Direction, NavResult, World};
use crate::{config, PlayerId, RoomId, WarrenError, WarrenResult};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rejection text for a move with no exit in that direction.
pub const BLOCKED_TEXT: &str = "You can't go that way. Try another direction.";

/// Rejection text for an unrecognized command.
pub const INVALID_COMMAND_TEXT: &str = "Invalid command. Use N, S, E, W to move.";

/// Per-player session state, owned exclusively by the engine.
///
/// Sessions persist for the life of the process; they are overwritten on
/// reset and connector traversal but never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSession {
    pub player_id: PlayerId,
    /// Physical index into the building registry.
    pub physical_building: usize,
    pub current_room: RoomId,
    pub active: bool,
}

/// What an engine operation wants delivered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// Room or exit text to push to the player. `won` is set when the move
    /// just landed the player in an item room.
    Description { text: String, won: bool },
    /// The command was understood but refused; state is unchanged.
    Rejection { text: String },
}

impl Reply {
    fn description(text: String) -> Self {
        Reply::Description { text, won: false }
    }

    /// The delivered text, whichever variant this is.
    pub fn text(&self) -> &str {
        match self {
            Reply::Description { text, .. } => text,
            Reply::Rejection { text } => text,
        }
    }
}

/// The movement/session engine.
pub struct Engine {
    world: World,
    sessions: HashMap<PlayerId, PlayerSession>,
    /// Transport client key -> player id, filled in at join time.
    players_by_key: HashMap<String, PlayerId>,
    next_player_id: PlayerId,
    rng: StdRng,
}

impl Engine {
    /// Creates an engine over a validated world, seeding its RNG from the
    /// OS.
    pub fn new(world: World) -> Self {
        Self::with_rng(world, StdRng::from_entropy())
    }

    /// Creates an engine with an explicit RNG, for seeded runs and tests.
    pub fn with_rng(world: World, rng: StdRng) -> Self {
        Self {
            world,
            sessions: HashMap::new(),
            players_by_key: HashMap::new(),
            next_player_id: 0,
            rng,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player_count(&self) -> usize {
        self.sessions.len()
    }

    /// The player id previously assigned to a transport client key, if any.
    pub fn player_for_key(&self, client_key: &str) -> Option<PlayerId> {
        self.players_by_key.get(client_key).copied()
    }

    pub fn session(&self, player_id: PlayerId) -> Option<&PlayerSession> {
        self.sessions.get(&player_id)
    }

    /// Handles a `new` command from a client.
    ///
    /// A key that already has a session just gets its current room summary
    /// again. A new key is assigned the next player id, placed in the start
    /// room of a uniformly random logical building, and sent the initial
    /// description. Fails with `CapacityExceeded` at the player cap, in
    /// which case nothing is allocated.
    pub fn join(&mut self, client_key: &str) -> WarrenResult<(PlayerId, Reply)> {
        if let Some(player_id) = self.player_for_key(client_key) {
            info!("existing player {player_id} requested new game");
            return Ok((player_id, Reply::description(self.room_summary(player_id)?)));
        }

        if self.sessions.len() >= config::MAX_PLAYERS {
            warn!("maximum number of players reached, join rejected");
            return Err(WarrenError::CapacityExceeded);
        }

        let player_id = self.next_player_id;
        let (logical, physical, start_room) = self.pick_spawn()?;

        self.next_player_id += 1;
        self.players_by_key.insert(client_key.to_string(), player_id);
        self.sessions.insert(
            player_id,
            PlayerSession {
                player_id,
                physical_building: physical,
                current_room: start_room,
                active: true,
            },
        );

        info!(
            "new player {player_id} starting in building {} (physical location {}), room {start_room}",
            logical + 1,
            physical + 1
        );

        Ok((player_id, Reply::description(self.room_summary(player_id)?)))
    }

    /// Applies a movement command for a player.
    ///
    /// - No exit in that direction: a rejection reply, session unchanged.
    /// - A room in the same building: the session's room is updated and the
    ///   reply is the *pre-move* room's exit text for the direction taken
    ///   ("what you saw while leaving"). Landing in an item room sets the
    ///   reply's `won` flag.
    /// - A connector: the room's logical target is resolved through the
    ///   current building order and the player is placed in that building's
    ///   start room, with a full summary of the new location.
    pub fn move_player(&mut self, player_id: PlayerId, direction: Direction) -> WarrenResult<Reply> {
        let session = self
            .sessions
            .get(&player_id)
            .ok_or(WarrenError::InvalidPlayer(player_id))?;
        let physical = session.physical_building;
        let from_room = session.current_room;

        match self.world.building(physical).navigate(from_room, direction) {
            NavResult::Blocked => {
                info!(
                    "player {player_id} blocked going {} from building {} room {from_room}",
                    direction.to_char(),
                    physical + 1
                );
                Ok(Reply::Rejection {
                    text: BLOCKED_TEXT.to_string(),
                })
            }
            NavResult::Room(next_room) => {
                let building = self.world.building(physical);
                let text = building.describe(from_room, direction)?.to_string();
                let won = building.room(next_room).is_some_and(|r| r.is_item);

                let session = self
                    .sessions
                    .get_mut(&player_id)
                    .ok_or(WarrenError::InvalidPlayer(player_id))?;
                session.current_room = next_room;

                if won {
                    info!(
                        "player {player_id} found the item in building {}, room {next_room}",
                        physical + 1
                    );
                }
                Ok(Reply::Description { text, won })
            }
            NavResult::ConnectorTraversal => self.traverse_connector(player_id, physical, from_room),
        }
    }

    /// Handles a reset: reshuffles the global building order (changing the
    /// layout for every player), then re-places this player like a join,
    /// keeping its id and skipping the capacity check.
    pub fn reset(&mut self, player_id: PlayerId) -> WarrenResult<Reply> {
        if !self.sessions.contains_key(&player_id) {
            return Err(WarrenError::InvalidPlayer(player_id));
        }

        self.world.reshuffle(&mut self.rng);

        let (logical, physical, start_room) = self.pick_spawn()?;
        let session = self
            .sessions
            .get_mut(&player_id)
            .ok_or(WarrenError::InvalidPlayer(player_id))?;
        session.physical_building = physical;
        session.current_room = start_room;

        info!(
            "player {player_id} reset to building {} (physical location {}), room {start_room}",
            logical + 1,
            physical + 1
        );

        Ok(Reply::description(self.room_summary(player_id)?))
    }

    /// The 1-based logical number of the player's current building, for
    /// display in outbound messages.
    pub fn logical_building_number(&self, player_id: PlayerId) -> WarrenResult<usize> {
        let session = self
            .sessions
            .get(&player_id)
            .ok_or(WarrenError::InvalidPlayer(player_id))?;
        Ok(self.world.physical_to_logical(session.physical_building) + 1)
    }

    /// Picks a uniformly random logical building and returns (logical,
    /// physical, start room).
    fn pick_spawn(&mut self) -> WarrenResult<(usize, usize, RoomId)> {
        let logical = self.rng.gen_range(0..self.world.building_count());
        let physical = self.world.logical_to_physical(logical);
        let start_room = self.world.building(physical).start_room()?;
        Ok((logical, physical, start_room))
    }

    /// Moves a player through a connector room into the target building's
    /// start room.
    fn traverse_connector(
        &mut self,
        player_id: PlayerId,
        physical: usize,
        from_room: RoomId,
    ) -> WarrenResult<Reply> {
        let room = self
            .world
            .building(physical)
            .room(from_room)
            .ok_or(WarrenError::InvalidRoom(from_room))?;
        // Validation guarantees connector exits only exist on connector
        // rooms with in-range targets.
        let logical_target = room.connects_to.ok_or_else(|| {
            WarrenError::DataIntegrity(format!(
                "connector room {from_room} has no target building"
            ))
        })? as usize
            - 1;

        let next_physical = self.world.logical_to_physical(logical_target);
        let start_room = self.world.building(next_physical).start_room()?;

        let session = self
            .sessions
            .get_mut(&player_id)
            .ok_or(WarrenError::InvalidPlayer(player_id))?;
        session.physical_building = next_physical;
        session.current_room = start_room;

        info!(
            "player {player_id} moved from building {} to building {} (physical position {})",
            physical + 1,
            logical_target + 1,
            next_physical + 1
        );

        Ok(Reply::description(self.room_summary(player_id)?))
    }

    /// Formats the full summary of a player's current room: its id, the
    /// logical building number, and all four exit descriptions.
    fn room_summary(&self, player_id: PlayerId) -> WarrenResult<String> {
        let session = self
            .sessions
            .get(&player_id)
            .ok_or(WarrenError::InvalidPlayer(player_id))?;
        let building = self.world.building(session.physical_building);
        let room = building
            .room(session.current_room)
            .ok_or(WarrenError::InvalidRoom(session.current_room))?;
        let logical = self.world.physical_to_logical(session.physical_building) + 1;

        Ok(format!(
            "Room {} (Building {})\n\nN: {}\nS: {}\nE: {}\nW: {}",
            room.id,
            logical,
            room.north.description,
            room.south.description,
            room.east.description,
            room.west.description
        ))
    }
}
