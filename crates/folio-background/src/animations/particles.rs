//! Floating particles (stateful).

use std::f32::consts::PI;

/// A particle bobbing around a fixed anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Anchor as a fraction of the hero width.
    pub anchor_x: f32,
    /// Anchor as a fraction of the hero height.
    pub anchor_y: f32,
    /// Length of one bob cycle.
    pub period_ms: u64,
    /// Time before the particle starts moving.
    pub delay_ms: u64,
}

/// Where a particle is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSprite {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

/// Horizontal drift amplitude in columns.
const DRIFT_COLUMNS: f32 = 0.6;
/// Vertical bob amplitude in rows.
const BOB_ROWS: f32 = 1.0;

/// Initialize `count` particles spread diagonally across the hero.
pub fn init_particles(count: u8) -> Vec<Particle> {
    (0..count as u64)
        .map(|i| Particle {
            anchor_x: ((20 + i * 20) % 100) as f32 / 100.0,
            anchor_y: ((30 + i * 10) % 100) as f32 / 100.0,
            period_ms: 3000 + i * 500,
            delay_ms: i * 300,
        })
        .collect()
}

impl Particle {
    /// Position and opacity within a `width` x `height` hero.
    pub fn sprite(&self, width: u16, height: u16, elapsed_ms: u64) -> ParticleSprite {
        let local = elapsed_ms.saturating_sub(self.delay_ms);
        let phase = (local % self.period_ms.max(1)) as f32 / self.period_ms.max(1) as f32;
        // Keyframes [-a, a, -a] eased through a full cosine cycle.
        let wave = -(phase * 2.0 * PI).cos();
        ParticleSprite {
            x: self.anchor_x * width as f32 + wave * DRIFT_COLUMNS,
            y: self.anchor_y * height as f32 + wave * BOB_ROWS,
            opacity: 0.5 + 0.3 * wave,
        }
    }
}
