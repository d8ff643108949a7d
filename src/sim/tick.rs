//! Per-frame simulation step
//!
//! Advances the world by one variable-length frame. Obstacle motion and
//! spawn timing follow real elapsed time; craft integration runs once per
//! step at the reference rate.

use rand::Rng;

use super::collision::circle_rect_overlap;
use super::state::{GamePhase, GameState, Obstacle};
use crate::timescale;

/// Advance the game by one frame of `elapsed_ms` real time.
///
/// Nothing moves outside Running. A frame that ends the run still finishes
/// in full: obstacles advance, the spawn clock accrues, and an obstacle the
/// craft already cleared may still score.
pub fn tick(state: &mut GameState, elapsed_ms: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    let scale = timescale(elapsed_ms);
    let sky = state.tuning.sky_height();
    let width = state.tuning.obstacle_width;

    // Craft physics: velocity first, then position. Deliberately not
    // timescaled; only obstacle motion follows real time.
    state.craft.vy += state.tuning.gravity;
    state.craft.y += state.craft.vy;

    // Ground contact
    if state.craft.y + state.tuning.craft_radius >= sky {
        state.craft.y = sky - state.tuning.craft_radius;
        state.phase = GamePhase::GameOver;
    }

    // Obstacles scroll left; retire the ones fully past the edge
    for obstacle in &mut state.obstacles {
        obstacle.x -= state.tuning.obstacle_speed * scale;
    }
    let retire_x = -state.tuning.retire_margin;
    state.obstacles.retain(|o| o.x + width > retire_x);

    // Spawn clock: real time, at most one spawn per step. The remainder is
    // carried over so spawn density is invariant to step size.
    state.spawn_clock_ms += elapsed_ms;
    if state.spawn_clock_ms >= state.tuning.spawn_interval_ms {
        state.spawn_clock_ms -= state.tuning.spawn_interval_ms;
        spawn_obstacle(state);
    }

    // Collision and scoring walk the collection in spawn order; the first
    // hit stops the walk, so the colliding obstacle never scores but an
    // earlier one already behind the craft still can.
    let craft_x = state.tuning.craft_x;
    let craft_y = state.craft.y;
    let radius = state.tuning.craft_radius;
    let mut hit = false;
    for obstacle in &mut state.obstacles {
        if circle_rect_overlap(craft_x, craft_y, radius, obstacle.upper_rect(width))
            || circle_rect_overlap(craft_x, craft_y, radius, obstacle.lower_rect(width, sky))
        {
            hit = true;
            break;
        }
        if !obstacle.scored && obstacle.center_x(width) < craft_x {
            obstacle.scored = true;
            state.score += 1;
            if state.score > state.best {
                state.best = state.score;
            }
        }
    }
    if hit {
        state.phase = GamePhase::GameOver;
    }
}

/// Place a fresh obstacle just past the right edge with a randomized gap
fn spawn_obstacle(state: &mut GameState) {
    let min_top = state.tuning.min_gap_top;
    let max_top = state.tuning.max_gap_top();
    let gap_top = state.rng.random_range(min_top..=max_top);
    state.obstacles.push(Obstacle {
        x: state.tuning.playfield_width + state.tuning.spawn_lead,
        gap_top,
        gap_height: state.tuning.gap_height,
        scored: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::REF_FRAME_MS;
    use crate::sim::state::Command;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(Tuning::default(), seed).unwrap();
        state.apply(Command::Activate);
        state
    }

    /// Tuning with gravity off and the gap pinned to the playfield middle,
    /// so an idle craft coasts through every obstacle untouched.
    fn coasting_tuning() -> Tuning {
        let mut tuning = Tuning::default();
        tuning.gravity = 0.0;
        tuning.min_gap_top = (tuning.sky_height() - tuning.gap_height) / 2.0;
        tuning
    }

    /// An obstacle whose gap is centered on an idle craft's flight line
    fn passable_obstacle(x: f32) -> Obstacle {
        Obstacle {
            x,
            gap_top: 220.0,
            gap_height: 140.0,
            scored: false,
        }
    }

    #[test]
    fn test_gravity_velocity_before_position() {
        let mut state = running_state(1);
        let mut expected_y = state.craft.y;
        for n in 1..=10 {
            tick(&mut state, REF_FRAME_MS);
            let expected_vy = n as f32 * 0.5;
            expected_y += expected_vy;
            assert_eq!(state.craft.vy, expected_vy);
            assert_eq!(state.craft.y, expected_y);
        }
    }

    #[test]
    fn test_flap_overrides_accumulated_velocity() {
        let mut state = running_state(1);
        for _ in 0..6 {
            tick(&mut state, REF_FRAME_MS);
        }
        assert!(state.craft.vy > 0.0);

        state.apply(Command::Activate);
        assert_eq!(state.craft.vy, -8.5);

        // Not additive: a second flap lands on the same value
        state.apply(Command::Activate);
        assert_eq!(state.craft.vy, -8.5);
    }

    #[test]
    fn test_ground_contact_clamps_and_ends_run() {
        let mut state = running_state(1);
        let floor = state.tuning.sky_height() - state.tuning.craft_radius;
        for _ in 0..200 {
            tick(&mut state, REF_FRAME_MS);
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.craft.y, floor);
    }

    #[test]
    fn test_spawn_bounds_and_constant_gap() {
        for seed in [3u64, 99, 4242] {
            let mut state = running_state(seed);
            for _ in 0..500 {
                spawn_obstacle(&mut state);
            }
            let min_top = state.tuning.min_gap_top;
            let max_top = state.tuning.max_gap_top();
            for obstacle in &state.obstacles {
                assert!(obstacle.gap_top >= min_top && obstacle.gap_top <= max_top);
                assert_eq!(obstacle.gap_height, state.tuning.gap_height);
            }
        }
    }

    #[test]
    fn test_spawns_at_most_once_per_step() {
        let mut state = GameState::new(coasting_tuning(), 1).unwrap();
        state.apply(Command::Activate);

        // One huge frame covers three spawn intervals but yields one spawn
        tick(&mut state, 5000.0);
        assert_eq!(state.obstacles.len(), 1);

        // The remainder is carried, so the backlog drains on later steps
        tick(&mut state, 0.1);
        assert_eq!(state.obstacles.len(), 2);
        tick(&mut state, 0.1);
        assert_eq!(state.obstacles.len(), 3);
        tick(&mut state, 0.1);
        assert_eq!(state.obstacles.len(), 3);
    }

    #[test]
    fn test_scoring_is_timescale_invariant() {
        // Same six real seconds, three different step sizes
        let run = |step_ms: f32| {
            let mut state = GameState::new(coasting_tuning(), 7).unwrap();
            state.apply(Command::Activate);
            let steps = (6000.0 / step_ms) as u32;
            for _ in 0..steps {
                tick(&mut state, step_ms);
            }
            assert_eq!(state.phase, GamePhase::Running);
            state.score
        };
        let fine = run(10.0);
        assert_eq!(fine, run(20.0));
        assert_eq!(fine, run(50.0));
        assert!(fine > 0);
    }

    #[test]
    fn test_obstacles_retire_past_left_edge() {
        let mut state = GameState::new(coasting_tuning(), 1).unwrap();
        state.apply(Command::Activate);
        state.obstacles.push(passable_obstacle(-69.0));

        // One reference frame pushes x + width below the -10 retire line
        tick(&mut state, REF_FRAME_MS);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_each_obstacle_scores_exactly_once() {
        let mut state = GameState::new(coasting_tuning(), 1).unwrap();
        state.apply(Command::Activate);
        state.obstacles.push(passable_obstacle(80.0));

        // Center starts at 110, right of the craft at x=100: no score yet
        tick(&mut state, REF_FRAME_MS);
        assert_eq!(state.score, 0);

        for _ in 0..20 {
            tick(&mut state, REF_FRAME_MS);
        }
        assert_eq!(state.score, 1);
        assert!(state.obstacles[0].scored);

        // Still alive, still just one point
        assert!(!state.obstacles.is_empty());
        assert_eq!(state.score, 1);
        assert_eq!(state.best, 1);
    }

    #[test]
    fn test_best_survives_reset_cycles() {
        let mut state = GameState::new(coasting_tuning(), 1).unwrap();
        state.apply(Command::Activate);
        state.obstacles.push(passable_obstacle(80.0));
        state.obstacles.push(passable_obstacle(200.0));
        for _ in 0..60 {
            tick(&mut state, REF_FRAME_MS);
        }
        assert_eq!(state.score, 2);
        assert_eq!(state.best, 2);

        state.apply(Command::Restart);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.best, 2);

        // A weaker follow-up run never lowers the session best
        state.apply(Command::Activate);
        state.obstacles.push(passable_obstacle(80.0));
        for _ in 0..20 {
            tick(&mut state, REF_FRAME_MS);
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.best, 2);
    }

    #[test]
    fn test_state_machine_paths() {
        let mut state = GameState::new(Tuning::default(), 5).unwrap();
        assert_eq!(state.phase, GamePhase::Ready);

        // Ready + activate starts a clean run
        state.apply(Command::Activate);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.craft.vy, 0.0);

        // Running + restart forces Ready
        state.apply(Command::Restart);
        assert_eq!(state.phase, GamePhase::Ready);

        // A collision while Running ends the run
        state.apply(Command::Activate);
        state.obstacles.push(Obstacle {
            x: 90.0,
            gap_top: 0.0,
            gap_height: 140.0,
            scored: false,
        });
        tick(&mut state, REF_FRAME_MS);
        assert_eq!(state.phase, GamePhase::GameOver);

        // GameOver + activate behaves as restart, not start
        state.apply(Command::Activate);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_world_freezes_after_game_over() {
        let mut state = GameState::new(coasting_tuning(), 1).unwrap();
        state.apply(Command::Activate);
        state.obstacles.push(Obstacle {
            x: 90.0,
            gap_top: 0.0,
            gap_height: 140.0,
            scored: false,
        });
        tick(&mut state, REF_FRAME_MS);
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen_craft = state.craft;
        let frozen_obstacles = state.obstacles.clone();
        let frozen_score = state.score;
        for _ in 0..30 {
            tick(&mut state, REF_FRAME_MS);
        }
        assert_eq!(state.craft, frozen_craft);
        assert_eq!(state.obstacles, frozen_obstacles);
        assert_eq!(state.score, frozen_score);
    }

    #[test]
    fn test_quit_raises_flag_in_any_phase() {
        let mut state = GameState::new(Tuning::default(), 1).unwrap();
        state.apply(Command::Quit);
        assert!(state.quit_requested);

        let mut state = running_state(1);
        state.apply(Command::Quit);
        assert!(state.quit_requested);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = running_state(99999);
        let mut b = running_state(99999);
        for frame in 0..600 {
            if frame % 20 == 0 {
                a.apply(Command::Activate);
                b.apply(Command::Activate);
            }
            tick(&mut a, REF_FRAME_MS);
            tick(&mut b, REF_FRAME_MS);
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.craft, b.craft);
    }

    #[test]
    fn test_reference_flight() {
        // Hand-checked against the tuning defaults: gravity 0.5, flap -8.5,
        // sky 580, radius 16
        let mut state = GameState::new(Tuning::default(), 1).unwrap();
        state.apply(Command::Activate);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.craft.y, 290.0);
        assert_eq!(state.craft.vy, 0.0);

        tick(&mut state, REF_FRAME_MS);
        tick(&mut state, REF_FRAME_MS);
        assert_eq!(state.craft.vy, 1.0);
        assert_eq!(state.craft.y, 291.5);

        state.apply(Command::Activate);
        assert_eq!(state.craft.vy, -8.5);
        assert_eq!(state.craft.y, 291.5);
    }

    proptest! {
        /// Spawn bounds hold for arbitrary seeds
        #[test]
        fn spawned_gaps_stay_in_range(seed in any::<u64>()) {
            let mut state = running_state(seed);
            for _ in 0..64 {
                spawn_obstacle(&mut state);
            }
            let min_top = state.tuning.min_gap_top;
            let max_top = state.tuning.max_gap_top();
            for obstacle in &state.obstacles {
                prop_assert!(obstacle.gap_top >= min_top);
                prop_assert!(obstacle.gap_top <= max_top);
            }
        }
    }
}
