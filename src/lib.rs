//! Birdman Challenge - a side-scrolling flap-to-fly arcade game
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (physics, spawning, collisions, mode state machine)
//! - `config`: Screen and sprite dimensions the simulation is parameterized by
//! - `records`: Distance records and the in-memory leaderboard

pub mod config;
pub mod records;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use records::{Leaderboard, format_record, record_for_x};

/// Game configuration constants
pub mod consts {
    /// Logical tick rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Character start X (on the cliff, left of the world origin)
    pub const BIRDMAN_START_X: i32 = -60;
    /// Camera start X
    pub const CAMERA_START_X: i32 = -100;

    /// Horizontal step per tick while running or flying
    pub const BIRDMAN_STEP_X: i32 = 1;
    /// Camera scroll per tick while airborne
    pub const CAMERA_STEP_X: i32 = 1;
    /// Obstacle drift per tick (towards the player)
    pub const BIRD_STEP_X: i32 = 1;

    /// Downward acceleration per tick
    pub const GRAVITY: i32 = 1;
    /// Maximum downward velocity
    pub const MAX_FALL_SPEED: i32 = 5;
    /// Fixed fall rate while damaged
    pub const DAMAGED_FALL_SPEED: i32 = 1;

    /// A new bird spawns every time the character's X is a multiple of this
    pub const BIRD_SPAWN_PERIOD: i32 = 200;
    /// Birds never spawn within this many pixels of the top or bottom edge
    pub const BIRD_SPAWN_MARGIN: i32 = 50;

    /// Combined character/bird collision radius
    pub const COLLISION_RADIUS: i32 = 50;

    /// World units per displayed meter
    pub const UNITS_PER_METER: i32 = 10;
}
