//! Side-effect requests emitted by the simulation
//!
//! The simulation never plays audio or sends telemetry itself. Each tick
//! returns a list of [`Effect`]s and the driver hands them to an
//! [`EffectSink`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sound effect types. Each request restarts the sound from the beginning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundEffect {
    /// Tap while flying
    Flap,
    /// Ceiling breach or bird collision
    Damage,
    /// Fell into the sea
    GameOver,
}

/// Telemetry events, serialized as `{"event": "<name>", ...fields}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TelemetryEvent {
    StartGame {
        run_id: Uuid,
        initialize_count: u64,
    },
    GameOver {
        run_id: Uuid,
        x: i32,
        damage_count: u32,
    },
    Initialize {
        run_id: Uuid,
        initialize_count: u64,
    },
}

impl TelemetryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TelemetryEvent::StartGame { .. } => "start_game",
            TelemetryEvent::GameOver { .. } => "game_over",
            TelemetryEvent::Initialize { .. } => "initialize",
        }
    }
}

/// A side-effect request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PlaySound(SoundEffect),
    Telemetry(TelemetryEvent),
}

/// Consumer of effect requests
///
/// Telemetry is fire-and-forget: sinks swallow their own failures.
pub trait EffectSink {
    fn play_sound(&mut self, sound: SoundEffect);

    fn emit_telemetry(&mut self, event: &TelemetryEvent);

    /// Route each effect in order
    fn dispatch(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::PlaySound(sound) => self.play_sound(*sound),
                Effect::Telemetry(event) => self.emit_telemetry(event),
            }
        }
    }
}
