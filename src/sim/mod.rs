//! Deterministic MOT simulation module
//!
//! All demo logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by disc index)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Disc, DiscView, MotState, Phase, Snapshot, phase_at};
pub use tick::tick;
