//! Cursor follower dot.

use std::f32::consts::PI;

use crate::chars::CURSOR_CHARS;

const PULSE_PERIOD_MS: u64 = 2000;

/// Cell and glyph of the follower, or `None` while the pointer is away.
///
/// The follower sits at the hero center moved by `offset` cells.
pub fn follower(
    width: u16,
    height: u16,
    offset: (f32, f32),
    hovered: bool,
    elapsed_ms: u64,
) -> Option<(u16, u16, char, f32)> {
    if !hovered || width == 0 || height == 0 {
        return None;
    }
    let x = (width as f32 / 2.0 + offset.0).round();
    let y = (height as f32 / 2.0 + offset.1).round();
    if x < 0.0 || y < 0.0 || x >= width as f32 || y >= height as f32 {
        return None;
    }

    let phase = (elapsed_ms % PULSE_PERIOD_MS) as f32 / PULSE_PERIOD_MS as f32;
    let pulse = 0.5 - 0.5 * (phase * 2.0 * PI).cos();
    let ch = CURSOR_CHARS[usize::from(pulse > 0.5)];
    let opacity = 0.3 + 0.3 * pulse;
    Some((x as u16, y as u16, ch, opacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_without_hover() {
        assert_eq!(follower(80, 24, (0.0, 0.0), false, 0), None);
    }

    #[test]
    fn test_follows_offset() {
        let (x, y, ch, opacity) = follower(80, 24, (3.2, -1.6), true, 0).unwrap();
        assert_eq!((x, y), (43, 10));
        assert_eq!(ch, '•');
        assert!((opacity - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_pulse_peak() {
        let (_, _, ch, opacity) = follower(80, 24, (0.0, 0.0), true, 1000).unwrap();
        assert_eq!(ch, '●');
        assert!((opacity - 0.6).abs() < 1e-4);
    }

    #[test]
    fn test_offscreen_is_hidden() {
        assert_eq!(follower(10, 4, (20.0, 0.0), true, 0), None);
    }
}
