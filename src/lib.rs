//! MOT Deck - an interactive research-proposal presentation
//!
//! Core modules:
//! - `sim`: Deterministic multiple-object-tracking demo (motion + phase cycle)
//! - `deck`: Slide navigation state and static slide content

pub mod deck;
pub mod sim;

pub use deck::Deck;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Discs in the MOT arena (1 target + 7 distractors)
    pub const DISC_COUNT: usize = 8;
    /// Disc diameter as a percentage of the arena span
    pub const DISC_SIZE_PCT: f32 = 10.0;
    /// Disc speed in arena percent per animation frame
    pub const DISC_SPEED: f32 = 0.8;
    /// Arena span; legal positions are `[0, ARENA_SPAN - DISC_SIZE_PCT]`
    pub const ARENA_SPAN: f32 = 100.0;
    /// Highest legal disc coordinate on either axis
    pub const ARENA_MAX: f32 = ARENA_SPAN - DISC_SIZE_PCT;

    /// Seconds the target stays highlighted (identification phase)
    pub const IDENTIFY_SECS: f32 = 3.0;
    /// Seconds the target stays hidden (tracking phase)
    pub const TRACK_SECS: f32 = 5.0;
}

/// Velocity of the given speed along a heading (radians)
#[inline]
pub fn heading_velocity(heading: f32, speed: f32) -> Vec2 {
    Vec2::new(heading.cos() * speed, heading.sin() * speed)
}
