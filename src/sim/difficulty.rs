//! Flap strength tables
//!
//! The farther the character has flown, the weaker each flap. Every hit
//! taken during the run divides the remaining strength further.

/// Base flap impulse (upward magnitude) for a distance traveled
pub fn base_impulse(x: i32) -> i32 {
    match x {
        x if x < 1000 => 20,
        x if x < 2000 => 15,
        x if x < 3000 => 10,
        x if x < 4000 => 7,
        _ => 5,
    }
}

/// Flap impulse after `damage_count` hits (integer division)
pub fn flap_impulse(x: i32, damage_count: u32) -> i32 {
    let divisor = i32::try_from(damage_count).map_or(i32::MAX, |d| d.saturating_add(1));
    base_impulse(x) / divisor
}
