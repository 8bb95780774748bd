//! Layers computed from position and time only.

use std::f32::consts::PI;

use crate::chars::{DUST_CHARS, STAR_CHARS};
use crate::color::{Rgb, hsl_to_rgb, mix};

/// Stars twinkle to a new pattern this often.
const STAR_TWINKLE_PERIOD_MS: u64 = 1500;

/// Opacity of the star layer over the backdrop.
const STAR_OPACITY: f32 = 0.4;

/// Gradient stops, top to bottom, already blended onto black.
const GRADIENT_STOPS: [(f32, Rgb); 4] = [
    (0.106, (1, 1, 1)),
    (0.558, (20, 19, 21)),
    (0.793, (26, 25, 29)),
    (1.0, (26, 25, 29)),
];

/// Percent of the hero height covered by the breathing overlay.
const OVERLAY_PERCENT: u32 = 30;
const OVERLAY_RGB: Rgb = (27, 27, 27);
const OVERLAY_PERIOD_MS: u64 = 4000;

/// Backdrop color for row `y` of a hero `height` rows tall.
pub fn gradient_rgb(y: u16, height: u16) -> Rgb {
    let y_norm = y as f32 / height.max(1) as f32;
    let mut prev = (0.0, GRADIENT_STOPS[0].1);
    for (stop, rgb) in GRADIENT_STOPS {
        if y_norm <= stop {
            let span = stop - prev.0;
            let t = if span > 0.0 {
                (y_norm - prev.0) / span
            } else {
                1.0
            };
            return mix(prev.1, rgb, t);
        }
        prev = (stop, rgb);
    }
    prev.1
}

/// Opacity of the breathing overlay at row `y`, or `None` below it.
pub fn overlay_opacity(y: u16, height: u16, elapsed_ms: u64) -> Option<f32> {
    let limit = (height as u32 * OVERLAY_PERCENT).div_ceil(100);
    if y as u32 >= limit {
        return None;
    }
    let phase = (elapsed_ms % OVERLAY_PERIOD_MS) as f32 / OVERLAY_PERIOD_MS as f32;
    Some(0.2 - 0.05 * (phase * 2.0 * PI).cos())
}

/// Apply the overlay to a backdrop color.
pub fn apply_overlay(rgb: Rgb, opacity: f32) -> Rgb {
    mix(rgb, OVERLAY_RGB, opacity)
}

/// Hash a layer coordinate into a pseudo-random seed.
fn seed(x: i64, y: i64, salt: u64) -> usize {
    (x as u64)
        .wrapping_mul(31)
        .wrapping_add((y as u64).wrapping_mul(17))
        .wrapping_add(salt) as usize
}

/// Star at layer coordinate (`x`, `y`), blended over `backdrop`.
///
/// Layer coordinates may be negative once shifted by parallax.
pub fn starfield_char(x: i64, y: i64, elapsed_ms: u64, backdrop: Rgb) -> Option<(char, Rgb)> {
    let frame_num = elapsed_ms / STAR_TWINKLE_PERIOD_MS;
    let seed = seed(x, y, frame_num);

    // ~3% of positions
    if seed % 100 >= 3 {
        return None;
    }
    let ch = STAR_CHARS[seed % STAR_CHARS.len()];
    let lightness = match seed % 3 {
        0 => 0.35,
        1 => 0.55,
        _ => 0.75,
    };
    let star = hsl_to_rgb(250.0, 0.35, lightness);
    Some((ch, mix(backdrop, star, STAR_OPACITY)))
}

/// Dust mote on the secondary layer.
pub fn dust_char(x: i64, y: i64, backdrop: Rgb) -> Option<(char, Rgb)> {
    let seed = seed(x, y, 7919);
    if seed % 97 != 0 {
        return None;
    }
    let ch = DUST_CHARS[seed % DUST_CHARS.len()];
    Some((ch, mix(backdrop, (200, 200, 210), 0.25)))
}
