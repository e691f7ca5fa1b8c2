//! Neon Drift - a dodge-and-collect arcade game for HTML canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `render`: Stateless frame painter over an abstract drawing surface
//! - `storage`: Key-value persistence (LocalStorage on web)
//! - `bestscore`: Best-score tracking across sessions
//! - `settings`: Persisted visual preferences

pub mod bestscore;
pub mod render;
pub mod settings;
pub mod sim;
pub mod storage;

pub use bestscore::BestScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed to the simulation, in seconds.
    /// Prevents tunnelling and spawn bursts after tab backgrounding.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const START_LIVES: u8 = 3;
    /// Player speed is derived from surface size, then clamped to this range
    pub const PLAYER_SPEED_FACTOR: f32 = 0.45;
    pub const PLAYER_MIN_SPEED: f32 = 220.0;
    pub const PLAYER_MAX_SPEED: f32 = 480.0;
    /// Keep-out margin between the player and the surface edges
    pub const EDGE_MARGIN: f32 = 16.0;
    /// Trail history length (rendering only)
    pub const TRAIL_LENGTH: usize = 16;
    /// Grace period after taking a hit, in seconds
    pub const INVULN_DURATION: f32 = 1.1;

    /// Score accrues at 14/s, compounding as the accumulator grows
    pub const SCORE_RATE: f64 = 14.0;
    pub const SCORE_RATE_SCALE: f64 = 600.0;
    /// Difficulty = 1 + score / DIFFICULTY_SCALE
    pub const DIFFICULTY_SCALE: f64 = 400.0;
    /// Bonus added on pickup collection
    pub const PICKUP_BONUS: f64 = 80.0;

    /// Hazard spawn interval bounds (seconds)
    pub const HAZARD_BASE_INTERVAL: f32 = 1.1;
    pub const HAZARD_MIN_INTERVAL: f32 = 0.45;
    /// Hazard base fall speed before difficulty scaling
    pub const HAZARD_BASE_SPEED: f32 = 160.0;
    /// Hazards past the sides by this much are despawned
    pub const HAZARD_SIDE_MARGIN: f32 = 200.0;

    /// Pickup spawn interval bounds (seconds)
    pub const PICKUP_BASE_INTERVAL: f32 = 3.6;
    pub const PICKUP_MIN_INTERVAL: f32 = 1.5;
    /// Pickup base fall speed
    pub const PICKUP_BASE_SPEED: f32 = 110.0;
    /// Head start on the pickup accumulator after a reset, so the
    /// first orb shows up well before the full base interval
    pub const PICKUP_START_HEAD_START: f32 = 2.0;
}

/// Clamp a value to `[min, max]` without panicking on a reversed range
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max.max(min))
}
