//! Per-frame motion update
//!
//! Frame-driven, not fixed-timestep: velocity is expressed in percent per
//! animation frame and the host calls `tick` once per frame callback. The
//! phase cycle is timer-driven and advances elsewhere.

use super::state::MotState;
use crate::consts::*;

/// Advance every disc by one animation frame.
///
/// Each disc moves by its velocity, then bounces off the arena walls with
/// clamp-then-negate reflection, X axis then Y axis. Overshoot past a wall
/// is clamped to the wall rather than sub-step reflected; the demo is a
/// visual effect, not a physics model. Discs never interact.
pub fn tick(state: &mut MotState) {
    state.time_ticks += 1;
    for disc in &mut state.discs {
        disc.pos += disc.vel;
        reflect_axis(&mut disc.pos.x, &mut disc.vel.x);
        reflect_axis(&mut disc.pos.y, &mut disc.vel.y);
    }
}

/// Clamp-then-negate wall bounce for one axis.
///
/// Applied after the position update, so a disc starting exactly on a wall
/// with inward velocity still reflects and can never leave the arena.
fn reflect_axis(coord: &mut f32, vel: &mut f32) {
    if *coord <= 0.0 {
        *coord = 0.0;
        *vel = -*vel;
    }
    if *coord >= ARENA_MAX {
        *coord = ARENA_MAX;
        *vel = -*vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading_velocity;
    use crate::sim::state::Disc;
    use glam::Vec2;
    use proptest::prelude::*;

    fn in_bounds(disc: &Disc) -> bool {
        disc.pos.x >= 0.0
            && disc.pos.x <= ARENA_MAX
            && disc.pos.y >= 0.0
            && disc.pos.y <= ARENA_MAX
    }

    fn disc_at(pos: Vec2, vel: Vec2) -> MotState {
        let mut state = MotState::new(0);
        state.discs[0].pos = pos;
        state.discs[0].vel = vel;
        state
    }

    #[test]
    fn test_reflect_high_wall() {
        // Raw x = 93 exceeds 90: clamp to the wall and flip vx
        let mut state = disc_at(Vec2::new(91.0, 40.0), Vec2::new(2.0, 0.0));
        tick(&mut state);
        assert_eq!(state.discs[0].pos.x, ARENA_MAX);
        assert_eq!(state.discs[0].vel.x, -2.0);
    }

    #[test]
    fn test_reflect_low_wall() {
        // Raw x = -2 is past the origin: clamp to 0 and flip vx
        let mut state = disc_at(Vec2::new(1.0, 40.0), Vec2::new(-3.0, 0.0));
        tick(&mut state);
        assert_eq!(state.discs[0].pos.x, 0.0);
        assert_eq!(state.discs[0].vel.x, 3.0);
    }

    #[test]
    fn test_reflect_on_wall_start() {
        // Starting exactly on the wall with inward velocity still bounces
        let mut state = disc_at(Vec2::new(0.0, 40.0), Vec2::new(-0.8, 0.0));
        tick(&mut state);
        assert_eq!(state.discs[0].pos.x, 0.0);
        assert!(state.discs[0].vel.x > 0.0);
    }

    #[test]
    fn test_zero_speed_is_stationary() {
        let mut state = disc_at(Vec2::new(45.0, 45.0), Vec2::ZERO);
        for _ in 0..100 {
            tick(&mut state);
        }
        assert_eq!(state.discs[0].pos, Vec2::new(45.0, 45.0));
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut state = MotState::new(5);
        for _ in 0..60 {
            tick(&mut state);
        }
        assert_eq!(state.time_ticks, 60);
    }

    #[test]
    fn test_target_identity_stable_across_ticks() {
        let mut state = MotState::new(321);
        for _ in 0..1000 {
            tick(&mut state);
            let targets: Vec<_> = state.discs.iter().filter(|d| d.is_target).collect();
            assert_eq!(targets.len(), 1);
            assert_eq!(targets[0].id, 0);
        }
    }

    #[test]
    fn test_tick_does_not_touch_phase() {
        let mut state = MotState::new(8);
        let phase = state.phase;
        for _ in 0..500 {
            tick(&mut state);
        }
        assert_eq!(state.phase, phase);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = MotState::new(777);
        let mut b = MotState::new(777);
        for _ in 0..300 {
            tick(&mut a);
            tick(&mut b);
        }
        for (da, db) in a.discs.iter().zip(b.discs.iter()) {
            assert_eq!(da.pos, db.pos);
            assert_eq!(da.vel, db.vel);
        }
    }

    proptest! {
        /// No disc ever leaves the arena, for any seed and run length
        #[test]
        fn prop_bounds_invariant(seed in any::<u64>(), ticks in 1usize..600) {
            let mut state = MotState::new(seed);
            for _ in 0..ticks {
                tick(&mut state);
                for disc in &state.discs {
                    prop_assert!(in_bounds(disc));
                }
            }
        }

        /// Wall bounces flip a component's sign but never change speed
        #[test]
        fn prop_speed_invariant(seed in any::<u64>(), ticks in 1usize..600) {
            let mut state = MotState::new(seed);
            let speeds: Vec<f32> = state.discs.iter().map(|d| d.vel.length()).collect();
            for _ in 0..ticks {
                tick(&mut state);
                for (disc, &speed) in state.discs.iter().zip(speeds.iter()) {
                    prop_assert!((disc.vel.length() - speed).abs() < 1e-4);
                }
            }
        }

        /// Even extreme velocities (far beyond the configured speed) are
        /// contained by clamp-then-negate
        #[test]
        fn prop_fast_discs_stay_contained(
            x in 0.0f32..=90.0, y in 0.0f32..=90.0,
            heading in 0.0f32..std::f32::consts::TAU,
            speed in 0.0f32..500.0,
        ) {
            let mut state = MotState::new(0);
            state.discs[0].pos = Vec2::new(x, y);
            state.discs[0].vel = heading_velocity(heading, speed);
            for _ in 0..50 {
                tick(&mut state);
                prop_assert!(in_bounds(&state.discs[0]));
            }
        }
    }
}
