//! Game state and core simulation types
//!
//! One [`GameState`] is one play session: the character, the birds on
//! screen, the camera, and the counters threaded through run restarts.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::effect::{Effect, TelemetryEvent};
use crate::config::{ConfigError, SimConfig};
use crate::consts::*;
use crate::records::record_for_x;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen, waiting for a tap
    Title,
    /// Run in progress
    Playing,
    /// Run ended, waiting for a tap to return to the title
    GameOver,
}

/// Character sub-state while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdmanState {
    /// Running along the cliff towards the edge
    Running,
    /// Airborne, full physics
    Flying,
    /// Tumbling after a hit; recovers after one second
    Damaged,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birdman {
    pub state: BirdmanState,
    /// World position (center of the sprite)
    pub pos: IVec2,
    /// Vertical velocity, positive is down
    pub vy: i32,
    /// Hits taken this run (never decreases)
    pub damage_count: u32,
    /// Ticks spent in the current Damaged spell
    pub damaged_ticks: u32,
}

impl Birdman {
    /// Character at the start of a run, standing on the cliff
    pub fn new(config: &SimConfig) -> Self {
        Self {
            state: BirdmanState::Running,
            pos: IVec2::new(BIRDMAN_START_X, config.initial_birdman_y()),
            vy: 0,
            damage_count: 0,
            damaged_ticks: 0,
        }
    }

    /// Register a hit: count it and start tumbling
    pub fn take_damage(&mut self) {
        self.damage_count += 1;
        self.damaged_ticks = 0;
        self.state = BirdmanState::Damaged;
    }

    /// Apply gravity, capped at the maximum fall speed
    pub fn apply_gravity(&mut self) {
        self.vy = (self.vy + GRAVITY).min(MAX_FALL_SPEED);
    }
}

/// An airborne obstacle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    /// World position (center of the sprite)
    pub pos: IVec2,
}

impl Bird {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
        }
    }

    /// Drift one step towards the player
    pub fn advance(&mut self) {
        self.pos.x -= BIRD_STEP_X;
    }

    /// Whether the bird's trailing edge has scrolled past the camera
    pub fn is_behind(&self, camera: &Camera, bird_size: i32) -> bool {
        self.pos.x + bird_size <= camera.pos.x
    }
}

/// Scrolling camera
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub pos: IVec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: IVec2::new(CAMERA_START_X, 0),
        }
    }
}

/// Process-wide run bookkeeping for telemetry
///
/// Threaded through the session rather than held in a global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounter {
    /// Identifies this process in telemetry
    pub run_id: Uuid,
    /// Number of run initializations so far (never reset)
    pub initialize_count: u64,
}

impl Default for RunCounter {
    fn default() -> Self {
        Self::new(Uuid::new_v4())
    }
}

impl RunCounter {
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            initialize_count: 0,
        }
    }

    /// Bump and return the initialize count
    pub fn next_initialize(&mut self) -> u64 {
        self.initialize_count += 1;
        self.initialize_count
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    pub mode: Mode,
    pub birdman: Birdman,
    /// Birds in spawn order
    pub birds: Vec<Bird>,
    pub camera: Camera,
    pub counter: RunCounter,
    /// Obstacle placement RNG
    pub(crate) rng: Pcg32,
    /// Effects raised outside of a tick, drained by the driver
    pending_effects: Vec<Effect>,
}

impl GameState {
    /// Create a session with a fresh run id and an entropy-seeded RNG
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_counter(config, RunCounter::default(), rand::random())
    }

    /// Create a session with a fixed RNG seed
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_counter(config, RunCounter::default(), seed)
    }

    /// Create a session continuing an existing run counter
    ///
    /// Fails if `config` does not pass [`SimConfig::validate`].
    pub fn with_counter(
        config: SimConfig,
        counter: RunCounter,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self {
            birdman: Birdman::new(&config),
            config,
            mode: Mode::Title,
            birds: Vec::new(),
            camera: Camera::default(),
            counter,
            rng: Pcg32::seed_from_u64(seed),
            pending_effects: Vec::new(),
        };

        state.initialize_run();

        Ok(state)
    }

    /// Reset to the start of a run and return the new initialize count
    ///
    /// Queues an `initialize` telemetry event; drain it with
    /// [`take_pending_effects`](Self::take_pending_effects).
    pub fn initialize_run(&mut self) -> u64 {
        let count = self.reset_run();
        let event = self.initialize_event(count);
        self.pending_effects.push(event);
        count
    }

    /// Reset entities, bump the counter; the caller reports the event
    pub(crate) fn reset_run(&mut self) -> u64 {
        self.mode = Mode::Title;
        self.birdman = Birdman::new(&self.config);
        self.birds.clear();
        self.camera = Camera::default();
        let count = self.counter.next_initialize();
        log::debug!("Run initialized (count {})", count);
        count
    }

    pub(crate) fn initialize_event(&self, count: u64) -> Effect {
        Effect::Telemetry(TelemetryEvent::Initialize {
            run_id: self.counter.run_id,
            initialize_count: count,
        })
    }

    /// Drain effects raised outside of [`advance`](super::tick::advance)
    pub fn take_pending_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending_effects)
    }

    /// Distance of the current run in meters
    pub fn record(&self) -> i32 {
        record_for_x(self.birdman.pos.x)
    }
}
