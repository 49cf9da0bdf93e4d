//! # Warren
//!
//! A small multiplayer text-adventure server. Players connect over UDP, send
//! single-letter movement commands, and receive room-description text pushed
//! back over a per-player delivery channel.
//!
//! ## Architecture Overview
//!
//! The world is a fixed set of independently authored "buildings," each a
//! directed graph of ten rooms. Buildings link to each other through
//! connector rooms, and the mapping from player-facing building numbers to
//! physical building data is reshuffled at startup and on every reset.
//!
//! - **World**: immutable building data plus the logical-to-physical
//!   building order
//! - **Engine**: per-player session state and the movement state machine
//! - **Server**: the UDP dispatch loop and per-player delivery channels
//!
//! The engine never performs I/O itself; it returns replies that the server
//! layer routes to the right player.

pub mod engine;
pub mod server;
pub mod world;

pub use engine::{Engine, PlayerSession, Reply};
pub use server::{ChannelDelivery, Command, DeliverySink, Server};
pub use world::{Building, BuildingOrder, Direction, ExitTarget, NavResult, Room, World};

/// Core error type for the Warren server.
#[derive(thiserror::Error, Debug)]
pub enum WarrenError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Building data failed validation at startup
    #[error("data integrity fault: {0}")]
    DataIntegrity(String),

    /// The player table is full
    #[error("maximum number of players reached")]
    CapacityExceeded,

    /// No session exists for this player id
    #[error("unknown player {0}")]
    InvalidPlayer(PlayerId),

    /// Room id outside the building's valid range
    #[error("invalid room {0}")]
    InvalidRoom(RoomId),

    /// Command character is not one of the four cardinal letters
    #[error("invalid direction '{0}'")]
    InvalidDirection(char),
}

/// Result type used throughout the Warren codebase.
pub type WarrenResult<T> = Result<T, WarrenError>;

/// Identifier for a connected player, allocated in join order.
pub type PlayerId = u32;

/// 1-based room identifier within a building.
pub type RoomId = u8;

/// Version information for the server.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Number of buildings in the world
    pub const BUILDING_COUNT: usize = 4;

    /// Number of rooms in every building
    pub const ROOMS_PER_BUILDING: usize = 10;

    /// Maximum number of concurrent players
    pub const MAX_PLAYERS: usize = 10;

    /// Default UDP bind address for the server
    pub const DEFAULT_BIND: &str = "0.0.0.0:8888";
}
