//! End-to-end runs through the mode state machine

use birdman::SimConfig;
use birdman::sim::{
    Bird, BirdmanState, Effect, GameState, Mode, SoundEffect, TelemetryEvent, TickInput, advance,
};

fn new_state() -> GameState {
    let mut state = GameState::with_seed(SimConfig::default(), 2024).unwrap();
    state.take_pending_effects();
    state
}

fn count_sound(effects: &[Effect], sound: SoundEffect) -> usize {
    effects
        .iter()
        .filter(|e| **e == Effect::PlaySound(sound))
        .count()
}

fn count_event(effects: &[Effect], name: &str) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::Telemetry(ev) if ev.name() == name))
        .count()
}

#[test]
fn test_tap_on_title_starts_game_once() {
    let mut state = new_state();
    let mut all = Vec::new();

    all.extend(advance(&mut state, &TickInput::tap()));
    assert_eq!(state.mode, Mode::Playing);

    // Further taps are consumed by the character, not the mode
    for _ in 0..10 {
        all.extend(advance(&mut state, &TickInput::tap()));
        assert_eq!(state.mode, Mode::Playing);
    }
    assert_eq!(count_event(&all, "start_game"), 1);
}

#[test]
fn test_never_flapping_falls_into_sea() {
    let mut state = new_state();
    let mut all = Vec::new();
    all.extend(advance(&mut state, &TickInput::tap()));

    let mut ticks = 0;
    while state.mode == Mode::Playing {
        all.extend(advance(&mut state, &TickInput::default()));
        ticks += 1;
        assert!(ticks < 1000, "run never ended");
    }

    assert_eq!(state.mode, Mode::GameOver);
    assert!(state.birdman.pos.y > state.config.screen_height);
    assert_eq!(count_event(&all, "game_over"), 1);
    assert_eq!(count_sound(&all, SoundEffect::GameOver), 1);
    assert_eq!(count_sound(&all, SoundEffect::Flap), 0);

    let game_over = all.iter().find_map(|e| match e {
        Effect::Telemetry(TelemetryEvent::GameOver {
            x, damage_count, ..
        }) => Some((*x, *damage_count)),
        _ => None,
    });
    assert_eq!(
        game_over,
        Some((state.birdman.pos.x, state.birdman.damage_count))
    );
    assert_eq!(state.record(), state.birdman.pos.x / 10);
}

#[test]
fn test_damaged_fall_reports_game_over_once() {
    let mut state = new_state();
    advance(&mut state, &TickInput::tap());
    while state.birdman.state == BirdmanState::Running {
        advance(&mut state, &TickInput::default());
    }
    state.birdman.pos.y = 470;
    state.birdman.take_damage();
    state.birdman.take_damage();

    let mut all = Vec::new();
    for _ in 0..30 {
        all.extend(advance(&mut state, &TickInput::default()));
    }

    assert_eq!(state.mode, Mode::GameOver);
    assert_eq!(state.birdman.pos.y, 481);
    assert_eq!(count_sound(&all, SoundEffect::GameOver), 1);
    assert_eq!(
        all.iter()
            .filter(|e| matches!(
                e,
                Effect::Telemetry(TelemetryEvent::GameOver {
                    damage_count: 2,
                    ..
                })
            ))
            .count(),
        1
    );
}

#[test]
fn test_restart_cycle_counts_initializations() {
    let mut state = GameState::with_seed(SimConfig::default(), 5).unwrap();
    let startup = state.take_pending_effects();
    assert_eq!(count_event(&startup, "initialize"), 1);

    for expected in 2..=4u64 {
        advance(&mut state, &TickInput::tap());
        while state.mode == Mode::Playing {
            advance(&mut state, &TickInput::default());
        }
        let effects = advance(&mut state, &TickInput::tap());
        assert_eq!(state.mode, Mode::Title);
        assert_eq!(state.counter.initialize_count, expected);
        assert!(matches!(
            effects[..],
            [Effect::Telemetry(TelemetryEvent::Initialize { initialize_count, .. })]
                if initialize_count == expected
        ));
    }
}

#[test]
fn test_damage_then_recover_keeps_flying() {
    let mut state = new_state();
    advance(&mut state, &TickInput::tap());
    while state.birdman.state == BirdmanState::Running {
        advance(&mut state, &TickInput::default());
    }

    // Park a bird on the flight path
    state.birdman.pos.y = 200;
    state.birds.push(Bird::new(state.birdman.pos.x + 2, 200));
    let effects = advance(&mut state, &TickInput::default());
    assert_eq!(count_sound(&effects, SoundEffect::Damage), 1);
    assert_eq!(state.birdman.state, BirdmanState::Damaged);

    let x_at_hit = state.birdman.pos.x;
    for _ in 0..state.config.ticks_per_second {
        advance(&mut state, &TickInput::default());
    }
    assert_eq!(state.birdman.state, BirdmanState::Flying);
    // No forward progress while tumbling
    assert_eq!(state.birdman.pos.x, x_at_hit);
    assert_eq!(state.birdman.damage_count, 1);
}
