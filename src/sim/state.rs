//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clamp;
use crate::consts::*;

/// Current status of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Before the first simulation tick
    Ready,
    /// Active gameplay
    Playing,
    /// Run suspended, entities frozen
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Movement speed in surface units/s, derived from surface size
    pub speed: f32,
    /// Grace period remaining after a hit, seconds (>= 0)
    pub invulnerable: f32,
    /// Recent positions for rendering, newest first
    pub trail: Vec<Vec2>,
}

impl Player {
    /// Spawn centered horizontally, near the bottom edge
    pub fn new(width: f32, height: f32) -> Self {
        let speed_base = width.min(height);
        Self {
            pos: Vec2::new(width / 2.0, height - 140.0),
            radius: PLAYER_RADIUS,
            speed: clamp(
                speed_base * PLAYER_SPEED_FACTOR,
                PLAYER_MIN_SPEED,
                PLAYER_MAX_SPEED,
            ),
            invulnerable: 0.0,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0.0
    }

    /// Record current position to trail (call each tick while playing)
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop();
        }
    }

    /// Keep the player fully inside the surface, minus the edge margin
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        let pad = self.radius + EDGE_MARGIN;
        self.pos.x = clamp(self.pos.x, pad, width - pad);
        self.pos.y = clamp(self.pos.y, pad, height - pad);
    }
}

/// A falling obstacle. Collision costs a life unless the player is
/// inside an invulnerability window.
#[derive(Debug, Clone)]
pub struct Hazard {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
    /// Angular velocity, radians/s
    pub rotation_speed: f32,
    pub vel: Vec2,
}

impl Hazard {
    /// True once the hazard has left the removal bounds
    pub fn off_surface(&self, width: f32, height: f32) -> bool {
        self.pos.y > height + self.height
            || self.pos.x < -HAZARD_SIDE_MARGIN
            || self.pos.x > width + HAZARD_SIDE_MARGIN
    }
}

/// A collectible energy orb worth a fixed score bonus
#[derive(Debug, Clone)]
pub struct Pickup {
    pub pos: Vec2,
    pub radius: f32,
    /// Downward velocity, units/s
    pub fall_speed: f32,
}

/// Events emitted by the simulation for the shell (HUD messages,
/// best-score persistence). Drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    LifeLost { remaining: u8 },
    PickupCollected,
    GameOver { final_score: u64 },
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, the only source of randomness in the sim
    pub rng: Pcg32,
    pub status: GameStatus,
    /// Continuous score accumulator; display uses the floor
    pub score: f64,
    /// Floor of `score`, cached so the HUD only repaints on change
    pub displayed_score: u64,
    pub lives: u8,
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub pickups: Vec<Pickup>,
    /// Seconds since the last hazard spawn
    pub hazard_timer: f32,
    /// Seconds since the last pickup spawn
    pub pickup_timer: f32,
    /// Surface dimensions, kept in lockstep with the canvas
    pub width: f32,
    pub height: f32,
    /// Pending events for the shell
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game in `Ready` status
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            status: GameStatus::Ready,
            score: 0.0,
            displayed_score: 0,
            lives: START_LIVES,
            player: Player::new(width, height),
            hazards: Vec::new(),
            pickups: Vec::new(),
            hazard_timer: 0.0,
            pickup_timer: PICKUP_START_HEAD_START,
            width,
            height,
            events: Vec::new(),
        }
    }

    /// Full reset into a fresh `Playing` run. The RNG stream keeps
    /// running, so a whole session stays reproducible from one seed.
    pub fn reset(&mut self) {
        self.player = Player::new(self.width, self.height);
        self.score = 0.0;
        self.displayed_score = 0;
        self.lives = START_LIVES;
        self.hazards.clear();
        self.pickups.clear();
        self.hazard_timer = 0.0;
        self.pickup_timer = PICKUP_START_HEAD_START;
        self.events.clear();
        self.status = GameStatus::Playing;
        log::info!("run started (seed {})", self.seed);
    }

    /// Difficulty factor scaling spawn rates and hazard velocities
    pub fn difficulty(&self) -> f64 {
        1.0 + self.score / DIFFICULTY_SCALE
    }

    /// Pause toggle. Legal only between `Playing` and `Paused`;
    /// ignored in `Ready` and `GameOver`.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            other => other,
        };
    }

    /// Explicit restart, legal from any state
    pub fn restart(&mut self) {
        self.reset();
    }

    /// Pointer/tap on the surface: (re)start from any non-playing state
    pub fn pointer_pressed(&mut self) {
        match self.status {
            GameStatus::Ready | GameStatus::Paused | GameStatus::GameOver => self.reset(),
            GameStatus::Playing => {}
        }
    }

    /// End the run. Remaining entities freeze in place until restart.
    pub(crate) fn enter_game_over(&mut self) {
        self.status = GameStatus::GameOver;
        let final_score = self.score.max(0.0).floor() as u64;
        self.events.push(GameEvent::GameOver { final_score });
        log::info!("game over, final score {final_score}");
    }

    /// Refresh the cached display score. Returns true if it changed.
    pub fn sync_displayed_score(&mut self) -> bool {
        let floored = self.score.max(0.0).floor() as u64;
        if floored != self.displayed_score {
            self.displayed_score = floored;
            true
        } else {
            false
        }
    }

    /// Apply a surface resize. Never resets the run; the player is
    /// re-centered horizontally and re-clamped into the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.player.pos.x = self.width / 2.0;
        self.player.clamp_to(self.width, self.height);
    }
}
