//! Stateless frame painter
//!
//! Draws the whole scene for the current state, every frame, in every
//! status: background and grid, hazards, pickups, trail, player.
//! Takes `&GameState` only — rendering can never mutate the sim.

use glam::Vec2;

use super::surface::{Color, DrawSurface, Glow, Paint};
use crate::settings::Settings;
use crate::sim::state::{GameState, Hazard, Pickup, Player};

const BG_TOP: Color = Color::rgb(0x0f, 0x17, 0x2a);
const BG_BOTTOM: Color = Color::rgb(0x02, 0x06, 0x17);
const GRID_LINE: Color = Color::rgba(0x38, 0xbd, 0xf8, 0.08);
const GRID_SPACING: f32 = 80.0;

const HAZARD_EDGE: Color = Color::rgba(251, 146, 60, 0.1);
const HAZARD_CORE: Color = Color::rgba(248, 113, 113, 0.85);
const HAZARD_GLOW: Glow = Glow {
    blur: 30.0,
    color: Color::rgba(248, 113, 113, 0.8),
};

const PICKUP_CENTER: Color = Color::rgb(0xfe, 0xf9, 0xc3);
const PICKUP_RIM: Color = Color::rgb(0xfa, 0xcc, 0x15);
const PICKUP_GLOW: Glow = Glow {
    blur: 25.0,
    color: Color::rgba(250, 204, 21, 0.9),
};

const TRAIL_COLOR: Color = Color::rgba(56, 189, 248, 0.35);
const TRAIL_WIDTH: f32 = 6.0;

const PLAYER_HIGHLIGHT: Color = Color::rgb(0xe0, 0xf2, 0xfe);
const PLAYER_BODY: Color = Color::rgb(0x0e, 0xa5, 0xe9);
const PLAYER_GLOW: Glow = Glow {
    blur: 18.0,
    color: Color::rgb(0x38, 0xbd, 0xf8),
};
const PLAYER_GLOW_INVULN: Glow = Glow {
    blur: 30.0,
    color: Color::rgb(0xba, 0xe6, 0xfd),
};

/// Paint one frame of the current state
pub fn draw_frame(state: &GameState, settings: &Settings, surface: &mut impl DrawSurface) {
    draw_background(surface, settings);

    for hazard in &state.hazards {
        draw_hazard(surface, hazard, settings);
    }
    for pickup in &state.pickups {
        draw_pickup(surface, pickup, settings);
    }

    draw_player(surface, &state.player, settings);
}

/// Vertical background gradient with a faint grid overlay
fn draw_background(surface: &mut impl DrawSurface, settings: &Settings) {
    let (width, height) = surface.size();
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(width, height),
        &Paint::Linear {
            from: Vec2::ZERO,
            to: Vec2::new(0.0, height),
            stops: vec![(0.0, BG_TOP), (1.0, BG_BOTTOM)],
        },
    );

    if !settings.show_grid {
        return;
    }
    let mut x = 0.0;
    while x < width {
        surface.stroke_polyline(&[Vec2::new(x, 0.0), Vec2::new(x, height)], 1.0, GRID_LINE);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < height {
        surface.stroke_polyline(&[Vec2::new(0.0, y), Vec2::new(width, y)], 1.0, GRID_LINE);
        y += GRID_SPACING;
    }
}

/// Rotated rectangle with a horizontal fade gradient and glow
fn draw_hazard(surface: &mut impl DrawSurface, hazard: &Hazard, settings: &Settings) {
    let half_w = hazard.width / 2.0;
    let paint = Paint::Linear {
        from: Vec2::new(-half_w, 0.0),
        to: Vec2::new(half_w, 0.0),
        stops: vec![(0.0, HAZARD_EDGE), (0.5, HAZARD_CORE), (1.0, HAZARD_EDGE)],
    };
    surface.fill_rotated_rect(
        hazard.pos,
        Vec2::new(hazard.width, hazard.height),
        hazard.rotation,
        &paint,
        settings.glow.then_some(HAZARD_GLOW),
    );
}

/// Filled circle with a radial gradient and glow
fn draw_pickup(surface: &mut impl DrawSurface, pickup: &Pickup, settings: &Settings) {
    let paint = Paint::Radial {
        start: pickup.pos,
        start_radius: 4.0,
        end: pickup.pos,
        end_radius: pickup.radius,
        stops: vec![(0.0, PICKUP_CENTER), (1.0, PICKUP_RIM)],
    };
    surface.fill_circle(
        pickup.pos,
        pickup.radius,
        &paint,
        settings.glow.then_some(PICKUP_GLOW),
    );
}

/// Trail stroke, then the ship with an off-center radial highlight.
/// Glow switches brighter and wider while the grace window holds.
fn draw_player(surface: &mut impl DrawSurface, player: &Player, settings: &Settings) {
    if settings.trails && player.trail.len() >= 2 {
        surface.stroke_polyline(&player.trail, TRAIL_WIDTH, TRAIL_COLOR);
    }

    let glow = if player.is_invulnerable() {
        PLAYER_GLOW_INVULN
    } else {
        PLAYER_GLOW
    };
    let paint = Paint::Radial {
        start: player.pos - Vec2::new(0.0, player.radius * 0.4),
        start_radius: player.radius * 0.2,
        end: player.pos,
        end_radius: player.radius,
        stops: vec![(0.0, PLAYER_HIGHLIGHT), (1.0, PLAYER_BODY)],
    };
    surface.fill_circle(
        player.pos,
        player.radius,
        &paint,
        settings.glow.then_some(glow),
    );
}
