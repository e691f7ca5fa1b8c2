//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Driven by one `tick` per display frame with a clamped delta

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{hazard_hits_player, pickup_hits_player};
pub use input::{Action, InputState};
pub use state::{GameEvent, GameState, GameStatus, Hazard, Pickup, Player};
pub use tick::tick;
