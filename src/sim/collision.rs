//! Collision predicates
//!
//! Hazards use a cheap circle-vs-bounding-box proximity test (squared
//! distance against the larger half-extent); pickups use an exact
//! circle-circle test. Both are strict inequalities, so exact tangency
//! never counts as a hit.

use super::state::{Hazard, Pickup, Player};

/// Proximity test between a hazard's bounding box and the player circle.
///
/// The hazard's effective radius is half its larger extent; the player
/// contributes 80% of its radius, which forgives grazing the corners of
/// a rotated rectangle.
pub fn hazard_hits_player(hazard: &Hazard, player: &Player) -> bool {
    let delta = hazard.pos - player.pos;
    let reach = hazard.width.max(hazard.height) * 0.5 + player.radius * 0.8;
    delta.length_squared() < reach * reach
}

/// Circle-circle test between a pickup and the player.
///
/// The player contributes 90% of its radius so orbs feel collected at
/// the ship's body, not its glow.
pub fn pickup_hits_player(pickup: &Pickup, player: &Player) -> bool {
    pickup.pos.distance(player.pos) < pickup.radius + player.radius * 0.9
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player_at(x: f32, y: f32) -> Player {
        let mut player = Player::new(800.0, 600.0);
        player.pos = Vec2::new(x, y);
        player
    }

    fn hazard_at(x: f32, y: f32, width: f32, height: f32) -> Hazard {
        Hazard {
            pos: Vec2::new(x, y),
            width,
            height,
            rotation: 0.0,
            rotation_speed: 0.0,
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn test_hazard_hit_inside_reach() {
        let player = player_at(400.0, 300.0);
        // reach = 80/2 + 20*0.8 = 56
        let hazard = hazard_at(400.0, 300.0 + 55.0, 80.0, 20.0);
        assert!(hazard_hits_player(&hazard, &player));
    }

    #[test]
    fn test_hazard_miss_outside_reach() {
        let player = player_at(400.0, 300.0);
        let hazard = hazard_at(400.0, 300.0 + 57.0, 80.0, 20.0);
        assert!(!hazard_hits_player(&hazard, &player));
    }

    #[test]
    fn test_hazard_tangent_is_not_a_hit() {
        let player = player_at(400.0, 300.0);
        let hazard = hazard_at(400.0, 300.0 + 56.0, 80.0, 20.0);
        assert!(!hazard_hits_player(&hazard, &player));
    }

    #[test]
    fn test_hazard_uses_larger_extent() {
        let player = player_at(400.0, 300.0);
        // Tall and thin: reach driven by height
        let hazard = hazard_at(400.0, 300.0 + 60.0, 20.0, 100.0);
        assert!(hazard_hits_player(&hazard, &player));
    }

    #[test]
    fn test_pickup_tangent_is_not_collected() {
        let player = player_at(400.0, 300.0);
        let pickup = Pickup {
            // Exactly at radius sum: 14 + 20*0.9 = 32
            pos: Vec2::new(400.0, 300.0 + 32.0),
            radius: 14.0,
            fall_speed: 110.0,
        };
        assert!(!pickup_hits_player(&pickup, &player));
    }

    #[test]
    fn test_pickup_just_inside_is_collected() {
        let player = player_at(400.0, 300.0);
        let pickup = Pickup {
            pos: Vec2::new(400.0, 300.0 + 31.999),
            radius: 14.0,
            fall_speed: 110.0,
        };
        assert!(pickup_hits_player(&pickup, &player));
    }
}
