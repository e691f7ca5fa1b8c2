//! Per-frame simulation step
//!
//! One call per display frame. The frame delta is clamped so a
//! backgrounded tab never produces tunnelling or a spawn burst.
//! Order within a step: input -> containment -> score -> spawner ->
//! hazards -> pickups. Rendering happens elsewhere and never here.

use super::collision::{hazard_hits_player, pickup_hits_player};
use super::input::InputState;
use super::spawn;
use super::state::{GameEvent, GameState, GameStatus};
use crate::consts::*;

/// Advance the game by one frame.
///
/// Spawn accumulators tick in every status; everything else only moves
/// while `Playing`. Returns immediately (after timer accrual) otherwise,
/// so pausing freezes score, lives and entity positions exactly.
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    state.hazard_timer += dt;
    state.pickup_timer += dt;

    if state.status != GameStatus::Playing {
        return;
    }

    state.player.invulnerable = (state.player.invulnerable - dt).max(0.0);

    // Diagonal movement is intentionally not normalized; holding two
    // keys really is faster.
    let step = state.player.speed * dt;
    if input.left {
        state.player.pos.x -= step;
    }
    if input.right {
        state.player.pos.x += step;
    }
    if input.up {
        state.player.pos.y -= step;
    }
    if input.down {
        state.player.pos.y += step;
    }
    state.player.clamp_to(state.width, state.height);
    state.player.record_trail();

    // Continuous score accrual; the rate compounds with the accumulator
    state.score += dt as f64 * SCORE_RATE * (1.0 + state.score / SCORE_RATE_SCALE);
    state.sync_displayed_score();

    spawn::run(state);

    step_hazards(state, dt);
    if state.status == GameStatus::Playing {
        step_pickups(state, dt);
    }
}

/// Integrate hazards, drop the off-screen ones, resolve collisions.
///
/// A collision while vulnerable consumes the hazard, costs a life and
/// opens the invulnerability window. While invulnerable, hazards pass
/// through the player untouched. Losing the last life ends the run and
/// abandons the rest of this tick's hazards, frozen mid-flight.
fn step_hazards(state: &mut GameState, dt: f32) {
    let mut kept = Vec::with_capacity(state.hazards.len());

    for mut hazard in std::mem::take(&mut state.hazards) {
        hazard.pos += hazard.vel * dt;
        hazard.rotation += hazard.rotation_speed * dt;

        if hazard.off_surface(state.width, state.height) {
            continue;
        }

        if !state.player.is_invulnerable() && hazard_hits_player(&hazard, &state.player) {
            state.player.invulnerable = INVULN_DURATION;
            state.lives -= 1;
            state.events.push(GameEvent::LifeLost {
                remaining: state.lives,
            });
            if state.lives == 0 {
                state.enter_game_over();
                break;
            }
            // Hazard consumed by the hit
            continue;
        }

        kept.push(hazard);
    }

    state.hazards = kept;
}

/// Integrate pickups, drop the sunken ones, collect on contact
fn step_pickups(state: &mut GameState, dt: f32) {
    let mut kept = Vec::with_capacity(state.pickups.len());

    for mut pickup in std::mem::take(&mut state.pickups) {
        pickup.pos.y += pickup.fall_speed * dt;

        if pickup.pos.y >= state.height + pickup.radius {
            continue;
        }

        if pickup_hits_player(&pickup, &state.player) {
            state.score += PICKUP_BONUS;
            state.sync_displayed_score();
            state.events.push(GameEvent::PickupCollected);
            continue;
        }

        kept.push(pickup);
    }

    state.pickups = kept;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Hazard, Pickup};
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn playing_state() -> GameState {
        let mut state = GameState::new(800.0, 600.0, 12345);
        state.reset();
        state
    }

    fn still_hazard(x: f32, y: f32) -> Hazard {
        Hazard {
            pos: Vec2::new(x, y),
            width: 80.0,
            height: 20.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            vel: Vec2::ZERO,
        }
    }

    /// Run playing ticks with empty input and spawn timers pinned low,
    /// so no entities appear mid-test.
    fn run_quiet_ticks(state: &mut GameState, n: u32, dt: f32) {
        let input = InputState::default();
        for _ in 0..n {
            state.hazard_timer = 0.0;
            state.pickup_timer = 0.0;
            tick(state, &input, dt);
        }
    }

    #[test]
    fn test_score_accrues_at_base_rate() {
        // 1.0s of play from zero, delivered as clamped 0.05s slices;
        // compounding lands a hair above 14, floored display is 14.
        let mut state = playing_state();
        run_quiet_ticks(&mut state, 20, 0.05);
        assert!(state.score >= 14.0 && state.score < 14.3, "score {}", state.score);
        assert_eq!(state.displayed_score, 14);
    }

    #[test]
    fn test_score_monotonic_while_playing() {
        let mut state = playing_state();
        let mut last = state.score;
        for _ in 0..120 {
            state.hazard_timer = 0.0;
            state.pickup_timer = 0.0;
            tick(&mut state, &InputState::default(), DT);
            assert!(state.score >= last);
            last = state.score;
        }
    }

    #[test]
    fn test_paused_freezes_everything() {
        let mut state = playing_state();
        run_quiet_ticks(&mut state, 10, DT);
        state.hazards.push(still_hazard(100.0, 100.0));

        state.toggle_pause();
        let score = state.score;
        let lives = state.lives;
        let player_pos = state.player.pos;
        let hazard_pos = state.hazards[0].pos;

        let held = InputState {
            left: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &held, DT);
        }

        assert_eq!(state.score, score);
        assert_eq!(state.lives, lives);
        assert_eq!(state.player.pos, player_pos);
        assert_eq!(state.hazards[0].pos, hazard_pos);
    }

    #[test]
    fn test_pause_toggle_is_idempotent() {
        let mut state = playing_state();
        run_quiet_ticks(&mut state, 5, DT);
        let before_score = state.score;
        let before_pos = state.player.pos;

        state.toggle_pause();
        state.toggle_pause();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, before_score);
        assert_eq!(state.player.pos, before_pos);
    }

    #[test]
    fn test_dt_is_clamped() {
        // A 5-second frame (tab was backgrounded) advances at most 0.05s
        let mut state = playing_state();
        tick(&mut state, &InputState::default(), 5.0);
        assert!(state.score <= 0.05 * 14.0 * 1.01 + f64::EPSILON);
        // Negative deltas are inert
        let score = state.score;
        tick(&mut state, &InputState::default(), -1.0);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_movement_and_containment() {
        let mut state = playing_state();
        let left = InputState {
            left: true,
            up: true,
            ..Default::default()
        };
        // Hold up-left long enough to hit the corner
        for _ in 0..600 {
            state.hazard_timer = 0.0;
            state.pickup_timer = 0.0;
            tick(&mut state, &left, DT);
        }
        let pad = state.player.radius + EDGE_MARGIN;
        assert_eq!(state.player.pos.x, pad);
        assert_eq!(state.player.pos.y, pad);
    }

    #[test]
    fn test_diagonal_movement_is_not_normalized() {
        let mut straight = playing_state();
        let mut diagonal = playing_state();
        let start = straight.player.pos;

        tick(&mut straight, &InputState { left: true, ..Default::default() }, DT);
        tick(
            &mut diagonal,
            &InputState { left: true, up: true, ..Default::default() },
            DT,
        );

        let d_straight = start.distance(straight.player.pos);
        let d_diagonal = start.distance(diagonal.player.pos);
        assert!((d_diagonal - d_straight * 2.0_f32.sqrt()).abs() < 0.001);
    }

    #[test]
    fn test_hazard_collision_costs_a_life() {
        // Hazard parked on the player, player vulnerable
        let mut state = playing_state();
        state.hazards.push(still_hazard(state.player.pos.x, state.player.pos.y));
        state.hazard_timer = 0.0;
        state.pickup_timer = 0.0;

        tick(&mut state, &InputState::default(), DT);

        assert_eq!(state.lives, START_LIVES - 1);
        // The window is set after this tick's decrement, so it is exact
        assert_eq!(state.player.invulnerable, INVULN_DURATION);
        assert!(state.hazards.is_empty(), "colliding hazard is consumed");
        assert!(state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::LifeLost { remaining: 2 })));
    }

    #[test]
    fn test_invulnerable_player_passes_through() {
        let mut state = playing_state();
        state.player.invulnerable = 1.0;
        state.hazards.push(still_hazard(state.player.pos.x, state.player.pos.y));
        state.hazard_timer = 0.0;
        state.pickup_timer = 0.0;

        tick(&mut state, &InputState::default(), DT);

        assert_eq!(state.lives, START_LIVES);
        // Hazard survives the pass-through and is re-evaluated next tick
        assert_eq!(state.hazards.len(), 1);
    }

    #[test]
    fn test_three_hits_end_the_run() {
        // Three collisions with the grace window respected between
        // them: lives 3 -> 2 -> 1 -> 0, game over on the third
        let mut state = playing_state();
        let input = InputState::default();

        for expected in [2u8, 1, 0] {
            state.hazards.push(still_hazard(state.player.pos.x, state.player.pos.y));
            state.hazard_timer = 0.0;
            state.pickup_timer = 0.0;
            tick(&mut state, &input, DT);
            assert_eq!(state.lives, expected);

            // Wait out the invulnerability window before the next hit
            while state.player.invulnerable > 0.0 && state.status == GameStatus::Playing {
                state.hazard_timer = 0.0;
                state.pickup_timer = 0.0;
                tick(&mut state, &input, DT);
            }
        }

        assert_eq!(state.status, GameStatus::GameOver);
        assert!(state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. })));
    }

    #[test]
    fn test_game_over_exactly_at_zero_lives() {
        let mut state = playing_state();
        state.lives = 1;
        state.hazards.push(still_hazard(state.player.pos.x, state.player.pos.y));
        state.hazard_timer = 0.0;
        state.pickup_timer = 0.0;

        tick(&mut state, &InputState::default(), DT);

        assert_eq!(state.lives, 0);
        assert_eq!(state.status, GameStatus::GameOver);

        // Frozen afterwards: no further score or lives movement
        let score = state.score;
        tick(&mut state, &InputState::default(), DT);
        assert_eq!(state.score, score);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_pickup_collection_adds_bonus() {
        let mut state = playing_state();
        state.pickups.push(Pickup {
            pos: state.player.pos,
            radius: 14.0,
            fall_speed: 0.0,
        });
        state.hazard_timer = 0.0;
        state.pickup_timer = 0.0;
        let before = state.score;

        tick(&mut state, &InputState::default(), DT);

        assert!(state.pickups.is_empty());
        assert!(state.score >= before + PICKUP_BONUS);
        assert!(state.events.contains(&GameEvent::PickupCollected));
    }

    #[test]
    fn test_offscreen_entities_are_removed() {
        let mut state = playing_state();
        state.hazards.push(still_hazard(400.0, 700.0)); // past the bottom
        state.hazards.push(still_hazard(-250.0, 100.0)); // past the left margin
        state.hazards.push(still_hazard(400.0, 100.0)); // live
        state.pickups.push(Pickup {
            pos: Vec2::new(400.0, 650.0),
            radius: 14.0,
            fall_speed: 0.0,
        });
        state.hazard_timer = 0.0;
        state.pickup_timer = 0.0;

        tick(&mut state, &InputState::default(), DT);

        assert_eq!(state.hazards.len(), 1);
        assert!(state.pickups.is_empty());
    }

    #[test]
    fn test_restart_resets_the_run() {
        // Restart from game over: back to playing, fresh everything
        let mut state = playing_state();
        run_quiet_ticks(&mut state, 60, DT);
        state.hazards.push(still_hazard(100.0, 100.0));
        state.pickups.push(Pickup {
            pos: Vec2::new(200.0, 200.0),
            radius: 14.0,
            fall_speed: 110.0,
        });
        state.lives = 1;
        state.enter_game_over();

        state.restart();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.displayed_score, 0);
        assert!(state.hazards.is_empty());
        assert!(state.pickups.is_empty());
        assert_eq!(state.hazard_timer, 0.0);
        assert_eq!(state.pickup_timer, PICKUP_START_HEAD_START);
    }

    #[test]
    fn test_spawn_timers_advance_in_any_status() {
        let mut state = GameState::new(800.0, 600.0, 1);
        let t0 = state.hazard_timer;
        tick(&mut state, &InputState::default(), DT);
        assert!(state.hazard_timer > t0, "timers run even in Ready");
        assert!(state.hazards.is_empty(), "but nothing spawns outside Playing");
    }

    #[test]
    fn test_long_session_spawns_and_culls() {
        // Unattended playing session: collections must stay bounded
        // because the removal pass culls everything that leaves the
        // surface.
        let mut state = playing_state();
        // Park the player in a corner so hazards mostly miss
        state.player.pos = Vec2::new(60.0, 560.0);
        let input = InputState::default();
        for _ in 0..(60 * 60) {
            tick(&mut state, &input, DT);
            if state.status != GameStatus::Playing {
                state.restart();
            }
            assert!(state.hazards.len() < 200);
            assert!(state.pickups.len() < 100);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The player never leaves the containment box, whatever
            /// the input sequence or (non-degenerate) surface size.
            #[test]
            fn prop_player_contained(
                width in 120.0f32..2000.0,
                height in 120.0f32..2000.0,
                seed in 0u64..1_000,
                moves in proptest::collection::vec(0u8..16, 1..300),
            ) {
                let mut state = GameState::new(width, height, seed);
                state.reset();
                for bits in moves {
                    let input = InputState {
                        up: bits & 1 != 0,
                        down: bits & 2 != 0,
                        left: bits & 4 != 0,
                        right: bits & 8 != 0,
                    };
                    tick(&mut state, &input, DT);
                    let pad = state.player.radius + EDGE_MARGIN;
                    prop_assert!(state.player.pos.x >= pad);
                    prop_assert!(state.player.pos.x <= width - pad);
                    prop_assert!(state.player.pos.y >= pad);
                    prop_assert!(state.player.pos.y <= height - pad);
                }
            }

            /// Lives stay in [0, 3] and zero lives always means game
            /// over, even under a rain of point-blank hazards.
            #[test]
            fn prop_lives_bounded(
                seed in 0u64..1_000,
                frames in 1usize..400,
                hit_every in 1usize..40,
            ) {
                let mut state = GameState::new(800.0, 600.0, seed);
                state.reset();
                let input = InputState::default();
                for frame in 0..frames {
                    if frame % hit_every == 0 {
                        state.hazards.push(still_hazard(
                            state.player.pos.x,
                            state.player.pos.y,
                        ));
                    }
                    tick(&mut state, &input, DT);
                    prop_assert!(state.lives <= START_LIVES);
                    prop_assert_eq!(
                        state.lives == 0,
                        state.status == GameStatus::GameOver
                    );
                }
            }
        }
    }

    #[test]
    fn test_determinism_from_seed() {
        let mut a = GameState::new(800.0, 600.0, 99999);
        let mut b = GameState::new(800.0, 600.0, 99999);
        a.reset();
        b.reset();
        let input = InputState {
            right: true,
            ..Default::default()
        };
        for _ in 0..300 {
            tick(&mut a, &input, DT);
            tick(&mut b, &input, DT);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.hazards.len(), b.hazards.len());
        assert_eq!(a.player.pos, b.player.pos);
    }
}
