//! Character/bird collision detection
//!
//! Both sprites are treated as a single point each; they collide when the
//! centers are closer than one shared radius.

use glam::IVec2;

use super::state::Bird;
use crate::consts::COLLISION_RADIUS;

/// Whether two centers are strictly within `radius` of each other
#[inline]
pub fn circles_overlap(a: IVec2, b: IVec2, radius: i32) -> bool {
    // i64 so far-apart entities can't overflow the squared distance
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    let r = radius as i64;
    dx * dx + dy * dy < r * r
}

/// Index of the first bird (in spawn order) touching `pos`
pub fn first_colliding_bird(pos: IVec2, birds: &[Bird]) -> Option<usize> {
    birds
        .iter()
        .position(|bird| circles_overlap(pos, bird.pos, COLLISION_RADIUS))
}
