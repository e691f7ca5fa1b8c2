//! Time-accumulator driven entity spawning
//!
//! Both accumulators advance every tick regardless of status; spawn
//! decisions only materialize while playing. Intervals shrink as the
//! difficulty factor grows with score.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

use super::state::{GameState, Hazard, Pickup};
use crate::consts::*;

/// Seconds between hazard spawns at the current difficulty
pub fn hazard_interval(difficulty: f64) -> f32 {
    (HAZARD_BASE_INTERVAL / difficulty as f32).max(HAZARD_MIN_INTERVAL)
}

/// Seconds between pickup spawns at the current difficulty
pub fn pickup_interval(difficulty: f64) -> f32 {
    (PICKUP_BASE_INTERVAL / (difficulty as f32).sqrt()).max(PICKUP_MIN_INTERVAL)
}

/// Check both accumulators and emit at most one hazard and one pickup.
/// Only called while playing.
pub fn run(state: &mut GameState) {
    let difficulty = state.difficulty();

    if state.hazard_timer >= hazard_interval(difficulty) {
        state.hazard_timer = 0.0;
        let hazard = spawn_hazard(state, difficulty as f32);
        state.hazards.push(hazard);
    }

    if state.pickup_timer >= pickup_interval(difficulty) {
        // Reset to a random head start instead of zero, staggering
        // subsequent spawns
        state.pickup_timer = state.rng.random_range(0.4..1.0);
        let pickup = spawn_pickup(state);
        state.pickups.push(pickup);
    }
}

/// One hazard above the top edge, within the middle 70% of the width.
/// Velocities scale with difficulty; vertical motion is strictly down.
fn spawn_hazard(state: &mut GameState, difficulty: f32) -> Hazard {
    let rng = &mut state.rng;
    Hazard {
        pos: Vec2::new(state.width * rng.random_range(0.15..0.85), -60.0),
        width: rng.random_range(60.0..115.0),
        height: rng.random_range(18.0..44.0),
        rotation: rng.random_range(0.0..PI),
        rotation_speed: rng.random_range(-0.75..0.75),
        vel: Vec2::new(
            rng.random_range(-80.0..80.0) * difficulty,
            rng.random_range(HAZARD_BASE_SPEED..HAZARD_BASE_SPEED + 120.0) * difficulty,
        ),
    }
}

/// One orb above the top edge, within the middle 80% of the width
fn spawn_pickup(state: &mut GameState) -> Pickup {
    let rng = &mut state.rng;
    Pickup {
        pos: Vec2::new(state.width * rng.random_range(0.1..0.9), -20.0),
        radius: rng.random_range(14.0..22.0),
        fall_speed: rng.random_range(PICKUP_BASE_SPEED..PICKUP_BASE_SPEED + 60.0),
    }
}
