//! Demo state and core simulation types
//!
//! All state owned by one mounted simulation instance lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::heading_velocity;

/// Current phase of the tracking cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Target highlighted so the viewer can lock onto it
    Identification,
    /// All discs rendered identically; the viewer tracks from memory
    Tracking,
}

impl Phase {
    /// Whether the target is visually distinguished in this phase
    pub fn visible(self) -> bool {
        matches!(self, Phase::Identification)
    }

    /// The phase entered when this one's timer fires
    pub fn next(self) -> Phase {
        match self {
            Phase::Identification => Phase::Tracking,
            Phase::Tracking => Phase::Identification,
        }
    }

    /// How long this phase lasts before the cycle advances
    pub fn duration_secs(self) -> f32 {
        match self {
            Phase::Identification => IDENTIFY_SECS,
            Phase::Tracking => TRACK_SECS,
        }
    }

    /// Timer delay for the host, in whole milliseconds
    pub fn duration_ms(self) -> i32 {
        (self.duration_secs() * 1000.0) as i32
    }
}

/// Phase as a function of seconds since mount (period 8 s)
pub fn phase_at(elapsed_secs: f32) -> Phase {
    let t = elapsed_secs.rem_euclid(IDENTIFY_SECS + TRACK_SECS);
    if t < IDENTIFY_SECS {
        Phase::Identification
    } else {
        Phase::Tracking
    }
}

/// A moving disc in the arena
///
/// Positions are the top-left corner of the disc's bounding square, in
/// percent of arena span, so the legal range is `[0, ARENA_MAX]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub id: u32,
    pub is_target: bool,
    pub pos: Vec2,
    /// Percent per animation frame; constant magnitude, wall bounces only
    /// flip the sign of one component
    pub vel: Vec2,
}

/// Renderer-facing view of a disc (position only, no velocity)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscView {
    pub id: u32,
    pub is_target: bool,
    pub pos: Vec2,
}

/// Consistent per-paint snapshot of the whole instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub discs: [DiscView; DISC_COUNT],
    pub visible: bool,
}

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct MotState {
    /// Instance seed for reproducibility
    pub seed: u64,
    /// Discs in stable index order; index 0 is the target
    pub discs: [Disc; DISC_COUNT],
    /// Current phase of the identification/tracking cycle
    pub phase: Phase,
    /// Animation frames elapsed since mount
    pub time_ticks: u64,
}

impl MotState {
    /// Create a fresh instance: random positions in the legal range,
    /// random headings at the fixed speed, identification phase.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let discs = std::array::from_fn(|i| {
            let heading = rng.random_range(0.0..std::f32::consts::TAU);
            Disc {
                id: i as u32,
                is_target: i == 0,
                pos: Vec2::new(
                    rng.random_range(0.0..ARENA_MAX),
                    rng.random_range(0.0..ARENA_MAX),
                ),
                vel: heading_velocity(heading, DISC_SPEED),
            }
        });

        Self {
            seed,
            discs,
            phase: Phase::Identification,
            time_ticks: 0,
        }
    }

    /// The distinguished disc the viewer must follow
    pub fn target(&self) -> &Disc {
        &self.discs[0]
    }

    /// Advance the phase cycle one transition (called by the host's timer)
    pub fn advance_phase(&mut self) {
        self.phase = self.phase.next();
    }

    /// Read-only snapshot for the renderer; never mutates
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            discs: self.discs.map(|d| DiscView {
                id: d.id,
                is_target: d.is_target,
                pos: d.pos,
            }),
            visible: self.phase.visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_in_bounds_with_fixed_speed() {
        let state = MotState::new(42);
        assert_eq!(state.discs.len(), DISC_COUNT);
        for disc in &state.discs {
            assert!(disc.pos.x >= 0.0 && disc.pos.x <= ARENA_MAX);
            assert!(disc.pos.y >= 0.0 && disc.pos.y <= ARENA_MAX);
            assert!((disc.vel.length() - DISC_SPEED).abs() < 1e-4);
        }
    }

    #[test]
    fn test_exactly_one_target_at_index_zero() {
        let state = MotState::new(7);
        let targets: Vec<_> = state.discs.iter().filter(|d| d.is_target).collect();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, 0);
        assert_eq!(state.target().id, 0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = MotState::new(1234);
        let b = MotState::new(1234);
        for (da, db) in a.discs.iter().zip(b.discs.iter()) {
            assert_eq!(da.pos, db.pos);
            assert_eq!(da.vel, db.vel);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = MotState::new(1);
        let b = MotState::new(2);
        assert!(a.discs.iter().zip(b.discs.iter()).any(|(da, db)| da.pos != db.pos));
    }

    #[test]
    fn test_phase_cycle() {
        assert!(Phase::Identification.visible());
        assert!(!Phase::Tracking.visible());
        assert_eq!(Phase::Identification.next(), Phase::Tracking);
        assert_eq!(Phase::Tracking.next(), Phase::Identification);
        assert_eq!(Phase::Identification.duration_ms(), 3000);
        assert_eq!(Phase::Tracking.duration_ms(), 5000);
    }

    #[test]
    fn test_phase_at_timeline() {
        // 3 s visible, 5 s hidden, repeating with period 8 s
        assert_eq!(phase_at(0.0), Phase::Identification);
        assert_eq!(phase_at(2.9), Phase::Identification);
        assert_eq!(phase_at(3.0), Phase::Tracking);
        assert_eq!(phase_at(7.9), Phase::Tracking);
        assert_eq!(phase_at(8.0), Phase::Identification);
        assert_eq!(phase_at(11.0), Phase::Tracking);
        assert_eq!(phase_at(16.0), Phase::Identification);
    }

    #[test]
    fn test_snapshot_is_pure() {
        let state = MotState::new(99);
        let a = state.snapshot();
        let b = state.snapshot();
        assert_eq!(a, b);
        assert!(a.visible);
        assert_eq!(a.discs[0].pos, state.discs[0].pos);
    }
}
