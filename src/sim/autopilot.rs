//! Idle/demo mode input
//!
//! Plays the game on its own: starts runs, flaps to hold the middle of the
//! screen and nudges away from the nearest bird ahead.

use super::state::{BirdmanState, GameState, Mode};
use crate::consts::COLLISION_RADIUS;

/// How far ahead (world units) a bird is considered a threat
const LOOKAHEAD_X: i32 = 120;

/// Decide whether to tap this tick
pub fn decide_tap(state: &GameState) -> bool {
    match state.mode {
        Mode::Title | Mode::GameOver => true,
        Mode::Playing => {
            let birdman = &state.birdman;
            if birdman.state != BirdmanState::Flying || birdman.vy < 0 {
                return false;
            }

            let mut target_y = state.config.screen_height / 2;

            // Closest bird in front of us; aim to pass on the roomier side
            let threat = state
                .birds
                .iter()
                .filter(|b| b.pos.x >= birdman.pos.x && b.pos.x - birdman.pos.x < LOOKAHEAD_X)
                .min_by_key(|b| b.pos.x);
            if let Some(bird) = threat {
                let clearance = COLLISION_RADIUS * 2;
                target_y = if bird.pos.y > state.config.screen_height / 2 {
                    bird.pos.y - clearance
                } else {
                    bird.pos.y + clearance
                };
            }

            birdman.pos.y > target_y
        }
    }
}
