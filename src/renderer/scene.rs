//! Frame scene assembly
//!
//! Builds the vertex list for one frame from a read-only view of the game
//! state. Pure geometry; no surface or queue access, so it is unit-testable
//! without a GPU.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::GameState;

/// Cloud drift speed divisor (bigger = slower)
const CLOUD_DRIFT_DIVISOR: f64 = 50.0;

/// Build the full scene for one frame.
///
/// `time_ms` only animates decorative elements (cloud drift); gameplay
/// geometry comes from `state` alone.
pub fn build(state: &GameState, settings: &Settings, time_ms: f64) -> Vec<Vertex> {
    let tuning = &state.tuning;
    let sky = tuning.sky_height();
    let mut out = Vec::with_capacity(1024);

    // Sky gradient
    out.extend(shapes::gradient_quad(
        Vec2::ZERO,
        Vec2::new(tuning.playfield_width, sky),
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    ));

    // Drifting clouds
    if settings.clouds {
        let drift = ((time_ms / CLOUD_DRIFT_DIVISOR) % 90.0) as f32;
        for i in 0..6u32 {
            let x = ((i * 90) as f32 + drift) % tuning.playfield_width;
            let y = 50.0 + (i % 3) as f32 * 40.0;
            out.extend(shapes::ellipse(
                Vec2::new(x, y),
                Vec2::new(35.0, 18.0),
                colors::CLOUD,
                20,
            ));
        }
    }

    // Obstacles as building slabs around the gap
    for obstacle in &state.obstacles {
        building(
            &mut out,
            obstacle.x,
            0.0,
            tuning.obstacle_width,
            obstacle.gap_top,
            false,
        );
        let below = obstacle.gap_top + obstacle.gap_height;
        building(
            &mut out,
            obstacle.x,
            below,
            tuning.obstacle_width,
            sky - below,
            true,
        );
    }

    // Ground strip with tick marks
    out.extend(shapes::rect(
        Vec2::new(0.0, sky),
        Vec2::new(tuning.playfield_width, tuning.ground_height),
        colors::GROUND,
    ));
    let mut x = 0.0;
    while x < tuning.playfield_width {
        out.extend(shapes::rect(
            Vec2::new(x, sky),
            Vec2::new(14.0, 8.0),
            colors::GROUND_TICK,
        ));
        x += 20.0;
    }

    craft(&mut out, state, settings);

    out
}

/// One building slab: body, roof band on the gap-facing edge, window grid
fn building(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, roof_at_top: bool) {
    if h <= 0.0 {
        return;
    }

    out.extend(shapes::rect(
        Vec2::new(x, y),
        Vec2::new(w, h),
        colors::BUILDING,
    ));

    // Roof band overhangs the slab slightly
    let roof_y = if roof_at_top { y } else { y + h - 10.0 };
    out.extend(shapes::rect(
        Vec2::new(x - 2.0, roof_y),
        Vec2::new(w + 4.0, 10.0),
        colors::BUILDING_ROOF,
    ));

    // Window grid, two columns
    let col_step = (w - 16.0) / 2.0;
    for col in 0..2u32 {
        let wx = x + 8.0 + col as f32 * col_step;
        let mut wy = y + 12.0;
        while wy < y + h - 12.0 {
            out.extend(shapes::rect(
                Vec2::new(wx, wy),
                Vec2::new(10.0, 12.0),
                colors::WINDOW,
            ));
            wy += 22.0;
        }
    }
}

/// The craft: body disc, wing, eye, beak, tilted with vertical velocity
fn craft(out: &mut Vec<Vertex>, state: &GameState, settings: &Settings) {
    let center = Vec2::new(state.tuning.craft_x, state.craft.y);
    let radius = state.tuning.craft_radius;
    let start = out.len();

    out.extend(shapes::circle(center, radius, colors::CRAFT_BODY, 24));

    // Wing, itself slightly rotated
    let wing_center = center + Vec2::new(-4.0, 2.0);
    let wing_start = out.len();
    out.extend(shapes::ellipse(
        wing_center,
        Vec2::new(8.0, 6.0),
        colors::CRAFT_WING,
        16,
    ));
    shapes::rotate_about(&mut out[wing_start..], wing_center, -0.3);

    out.extend(shapes::circle(
        center + Vec2::new(6.0, -5.0),
        5.0,
        colors::CRAFT_EYE,
        16,
    ));
    out.extend(shapes::circle(
        center + Vec2::new(8.0, -5.0),
        2.0,
        colors::CRAFT_PUPIL,
        12,
    ));
    out.extend(shapes::triangle(
        center + Vec2::new(18.0, -2.0),
        center + Vec2::new(26.0, 0.0),
        center + Vec2::new(18.0, 2.0),
        colors::CRAFT_BEAK,
    ));

    if !settings.reduced_motion {
        let tilt = (state.craft.vy / 12.0).clamp(-0.5, 0.6);
        shapes::rotate_about(&mut out[start..], center, tilt);
    }
}
