//! Slide deck navigation
//!
//! Pure deck state, no platform dependencies. The wasm shell in `main.rs`
//! reads this to decide what to paint and when to mount the MOT demo.

pub mod slides;

pub use slides::{MOT_SLIDE, SLIDE_COUNT, Slide, slide};

/// Deck navigation state.
///
/// Slide numbers are 1-based to match the on-screen `n / 10` counter.
#[derive(Debug, Clone)]
pub struct Deck {
    current: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self { current: 1 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        SLIDE_COUNT
    }

    /// Advance one slide; returns false when already on the last slide
    pub fn next(&mut self) -> bool {
        if self.current < SLIDE_COUNT {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one slide; returns false when already on the first slide
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Progress bar fill fraction in `(0, 1]`
    pub fn progress(&self) -> f32 {
        self.current as f32 / SLIDE_COUNT as f32
    }

    /// Content of the current slide
    pub fn slide(&self) -> &'static Slide {
        slide(self.current)
    }

    /// Whether the current slide hosts the live MOT demo
    pub fn shows_simulation(&self) -> bool {
        self.current == MOT_SLIDE
    }
}
