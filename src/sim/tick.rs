//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one logical tick.

use rand::Rng;

use super::collision::first_colliding_bird;
use super::difficulty::flap_impulse;
use super::effect::{Effect, SoundEffect, TelemetryEvent};
use super::state::{Bird, BirdmanState, GameState, Mode};
use crate::consts::*;

/// Input for a single tick (debounced by the platform layer)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// A tap/click happened since the previous tick
    pub tap: bool,
}

impl TickInput {
    pub fn tap() -> Self {
        Self { tap: true }
    }
}

/// Advance the game state by one tick and return the effects it raised
pub fn advance(state: &mut GameState, input: &TickInput) -> Vec<Effect> {
    let mut effects = Vec::new();

    match state.mode {
        Mode::Title => {
            if input.tap {
                state.mode = Mode::Playing;
                log::debug!("Title -> Playing");
                effects.push(Effect::Telemetry(TelemetryEvent::StartGame {
                    run_id: state.counter.run_id,
                    initialize_count: state.counter.initialize_count,
                }));
            }
        }
        Mode::Playing => match state.birdman.state {
            BirdmanState::Running => tick_running(state),
            BirdmanState::Flying => tick_flying(state, input, &mut effects),
            BirdmanState::Damaged => tick_damaged(state, &mut effects),
        },
        Mode::GameOver => {
            if input.tap {
                let count = state.reset_run();
                effects.push(state.initialize_event(count));
            }
        }
    }

    effects
}

fn tick_running(state: &mut GameState) {
    let birdman = &mut state.birdman;
    birdman.pos.x += BIRDMAN_STEP_X;
    if birdman.pos.x >= 0 {
        birdman.state = BirdmanState::Flying;
        log::debug!("Running -> Flying at x={}", birdman.pos.x);
    }
}

fn tick_flying(state: &mut GameState, input: &TickInput, effects: &mut Vec<Effect>) {
    // Camera move
    state.camera.pos.x += CAMERA_STEP_X;

    // Spawn, using the pre-move X
    let x = state.birdman.pos.x;
    if x.rem_euclid(BIRD_SPAWN_PERIOD) == 0 {
        let y = state.rng.random_range(state.config.spawn_band());
        let bird = Bird::new(x + state.config.screen_width, y);
        log::trace!("Bird spawned at ({}, {})", bird.pos.x, bird.pos.y);
        state.birds.push(bird);
    }

    // Birds move, retire the ones behind the camera
    let camera = &state.camera;
    let bird_size = state.config.bird_sprite_size;
    state.birds.retain_mut(|bird| {
        bird.advance();
        let behind = bird.is_behind(camera, bird_size);
        if behind {
            log::trace!("Bird retired at ({}, {})", bird.pos.x, bird.pos.y);
        }
        !behind
    });

    let birdman = &mut state.birdman;

    // Flap
    if input.tap {
        birdman.vy -= flap_impulse(birdman.pos.x, birdman.damage_count);
        effects.push(Effect::PlaySound(SoundEffect::Flap));
    }

    birdman.apply_gravity();

    birdman.pos.x += BIRDMAN_STEP_X;
    birdman.pos.y += birdman.vy;

    // At most one hit per tick: the ceiling is checked first
    let hit = if birdman.pos.y < 0 {
        log::debug!("Ceiling hit at x={}", birdman.pos.x);
        true
    } else if let Some(index) = first_colliding_bird(birdman.pos, &state.birds) {
        log::debug!("Bird {} hit at x={}", index, birdman.pos.x);
        true
    } else {
        false
    };
    if hit {
        birdman.take_damage();
        effects.push(Effect::PlaySound(SoundEffect::Damage));
    }

    check_fall(state, effects);
}

fn tick_damaged(state: &mut GameState, effects: &mut Vec<Effect>) {
    for bird in &mut state.birds {
        bird.advance();
    }

    let birdman = &mut state.birdman;
    birdman.damaged_ticks += 1;
    birdman.vy = 0;
    birdman.pos.y += DAMAGED_FALL_SPEED;

    if check_fall(state, effects) {
        return;
    }

    let birdman = &mut state.birdman;
    if birdman.damaged_ticks >= state.config.ticks_per_second {
        birdman.damaged_ticks = 0;
        birdman.state = BirdmanState::Flying;
        log::debug!("Damaged -> Flying at x={}", birdman.pos.x);
    }
}

/// End the run if the character dropped below the screen
fn check_fall(state: &mut GameState, effects: &mut Vec<Effect>) -> bool {
    if state.birdman.pos.y <= state.config.screen_height {
        return false;
    }

    state.mode = Mode::GameOver;
    log::debug!(
        "Playing -> GameOver at x={} (damage {})",
        state.birdman.pos.x,
        state.birdman.damage_count
    );
    effects.push(Effect::Telemetry(TelemetryEvent::GameOver {
        run_id: state.counter.run_id,
        x: state.birdman.pos.x,
        damage_count: state.birdman.damage_count,
    }));
    effects.push(Effect::PlaySound(SoundEffect::GameOver));
    true
}
