//! Confetti animation state for the confirmation view

use std::time::{Duration, Instant};

/// Animation phase for the confetti burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationPhase {
    /// Pieces falling across the screen
    Falling,
    /// Animation finished, never restarts
    Complete,
}

/// A single confetti piece at its current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfettiPiece {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    /// Index into the renderer's palette
    pub color: usize,
}

/// Confetti animation state
#[derive(Debug)]
pub struct CelebrationState {
    /// When the burst started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: CelebrationPhase,
    /// Overall progress from 0.0 to 1.0
    pub progress: f32,
}

const GLYPHS: [char; 5] = ['*', '•', '◆', '▪', '✦'];

/// Deterministic per-piece scatter in [0, 1)
fn scatter(index: usize, salt: u32) -> f32 {
    let mut h = (index as u32).wrapping_mul(0x9E37_79B1) ^ salt.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    (h % 10_000) as f32 / 10_000.0
}

impl CelebrationState {
    /// Duration of the whole burst
    const DURATION: Duration = Duration::from_millis(3500);
    /// Number of pieces in the burst
    pub const PIECE_COUNT: usize = 160;
    /// Number of colors pieces cycle through
    pub const PALETTE_SIZE: usize = 6;

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: CelebrationPhase::Falling,
            progress: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        self.advance_to(self.start_time.elapsed());
    }

    /// Update animation state for a given elapsed time
    pub fn advance_to(&mut self, elapsed: Duration) {
        if elapsed >= Self::DURATION {
            self.progress = 1.0;
            self.phase = CelebrationPhase::Complete;
        } else if self.phase != CelebrationPhase::Complete {
            self.progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        }
    }

    /// Stop the animation early
    pub fn skip(&mut self) {
        self.phase = CelebrationPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == CelebrationPhase::Complete
    }

    /// Positions of pieces currently visible in a `width` x `height` area
    pub fn pieces(&self, width: u16, height: u16) -> Vec<ConfettiPiece> {
        if self.is_complete() || width == 0 || height == 0 {
            return Vec::new();
        }

        (0..Self::PIECE_COUNT)
            .filter_map(|i| {
                // Pieces start staggered over the first half of the burst
                let delay = scatter(i, 1) * 0.5;
                let local = (self.progress - delay) / (1.0 - delay);
                if !(0.0..1.0).contains(&local) {
                    return None;
                }
                let fall = simple_easing::quad_in(local);
                let drift = (scatter(i, 3) - 0.5) * 6.0 * local;
                let column = scatter(i, 2) * width as f32 + drift;
                let row = fall * (height as f32 + 1.0) - 1.0;
                if column < 0.0 || row < 0.0 {
                    return None;
                }
                let (x, y) = (column as u16, row as u16);
                (x < width && y < height).then_some(ConfettiPiece {
                    x,
                    y,
                    glyph: GLYPHS[i % GLYPHS.len()],
                    color: i % Self::PALETTE_SIZE,
                })
            })
            .collect()
    }
}

impl Default for CelebrationState {
    fn default() -> Self {
        Self::new()
    }
}
