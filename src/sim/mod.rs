//! Tick-driven simulation module
//!
//! All gameplay logic lives here:
//! - One call to [`advance`] per logical tick
//! - Side effects are returned as [`Effect`] values, never performed
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod effect;
pub mod state;
pub mod tick;

pub use clock::TickClock;
pub use collision::{circles_overlap, first_colliding_bird};
pub use difficulty::{base_impulse, flap_impulse};
pub use effect::{Effect, EffectSink, SoundEffect, TelemetryEvent};
pub use state::{Bird, Birdman, BirdmanState, Camera, GameState, Mode, RunCounter};
pub use tick::{TickInput, advance};
