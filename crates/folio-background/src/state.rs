//! Background layer state and composition.

use folio_motion::MotionFrame;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use serde::{Deserialize, Serialize};

use crate::animations::{cursor, particles, stateless};
use crate::chars::PARTICLE_CHAR;
use crate::color::{Rgb, mix, to_color};

/// Which decorative layers to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSettings {
    /// Draw the twinkling starfield.
    pub stars: bool,
    /// Number of floating particles.
    pub particles: u8,
    /// Draw the breathing overlay across the top of the hero.
    pub overlay: bool,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            stars: true,
            particles: 5,
            overlay: true,
        }
    }
}

const PARTICLE_RGB: Rgb = (255, 255, 255);
const CURSOR_RGB: Rgb = (255, 255, 255);

/// Background animation state.
#[derive(Debug)]
pub struct BackgroundState {
    settings: BackgroundSettings,
    particles: Vec<particles::Particle>,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new(BackgroundSettings::default())
    }
}

impl BackgroundState {
    pub fn new(settings: BackgroundSettings) -> Self {
        let particles = particles::init_particles(settings.particles);
        Self {
            settings,
            particles,
        }
    }

    pub fn settings(&self) -> &BackgroundSettings {
        &self.settings
    }

    /// Render every layer into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, motion: &MotionFrame, elapsed_ms: u64) {
        let lines = self.lines(area.width, area.height, motion, elapsed_ms);
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Compose the layers for a `width` x `height` hero.
    pub fn lines(
        &self,
        width: u16,
        height: u16,
        motion: &MotionFrame,
        elapsed_ms: u64,
    ) -> Vec<Line<'static>> {
        let sprites: Vec<(u16, u16, f32)> = self
            .particles
            .iter()
            .filter_map(|p| {
                let sprite = p.sprite(width, height, elapsed_ms);
                let (x, y) = (sprite.x.round(), sprite.y.round());
                (x >= 0.0 && y >= 0.0 && x < width as f32 && y < height as f32)
                    .then_some((x as u16, y as u16, sprite.opacity))
            })
            .collect();
        let follower = cursor::follower(width, height, motion.cursor, motion.hovered, elapsed_ms);

        (0..height)
            .map(|y| {
                let mut backdrop = stateless::gradient_rgb(y, height);
                if self.settings.overlay
                    && let Some(opacity) = stateless::overlay_opacity(y, height, elapsed_ms)
                {
                    backdrop = stateless::apply_overlay(backdrop, opacity);
                }

                let spans: Vec<Span> = (0..width)
                    .map(|x| {
                        let (ch, fg) = self
                            .front_char(
                                x, y, width, height, motion, elapsed_ms, backdrop, &sprites,
                                follower,
                            )
                            .unwrap_or((' ', backdrop));
                        Span::styled(
                            ch.to_string(),
                            Style::new().fg(to_color(fg)).bg(to_color(backdrop)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// The front-most glyph at (`x`, `y`), if any layer draws there.
    #[allow(clippy::too_many_arguments)]
    fn front_char(
        &self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        motion: &MotionFrame,
        elapsed_ms: u64,
        backdrop: Rgb,
        sprites: &[(u16, u16, f32)],
        follower: Option<(u16, u16, char, f32)>,
    ) -> Option<(char, Rgb)> {
        if let Some((fx, fy, ch, opacity)) = follower
            && fx == x
            && fy == y
        {
            return Some((ch, mix(backdrop, CURSOR_RGB, opacity)));
        }
        if let Some(&(_, _, opacity)) = sprites.iter().find(|(sx, sy, _)| *sx == x && *sy == y) {
            return Some((PARTICLE_CHAR, mix(backdrop, PARTICLE_RGB, opacity * 0.2 + 0.1)));
        }

        let (lx, ly) = layer_coords(x, y, width, height, motion.layer, 1.0);
        if let Some(dust) = stateless::dust_char(lx, ly, backdrop) {
            return Some(dust);
        }

        if self.settings.stars {
            let (sx, sy) = layer_coords(x, y, width, height, motion.background, motion.zoom);
            return stateless::starfield_char(sx, sy, elapsed_ms, backdrop);
        }
        None
    }
}

/// Map a screen cell to a layer cell for a layer moved by `shift` and
/// scaled by `zoom` around the hero center.
fn layer_coords(
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    shift: (f32, f32),
    zoom: f32,
) -> (i64, i64) {
    let zoom = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let lx = cx + (x as f32 - cx) / zoom - shift.0;
    let ly = cy + (y as f32 - cy) / zoom - shift.1;
    (lx.round() as i64, ly.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{DUST_CHARS, STAR_CHARS};

    fn still() -> MotionFrame {
        MotionFrame {
            zoom: 1.0,
            ..MotionFrame::default()
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_fill_area() {
        let state = BackgroundState::default();
        let lines = state.lines(40, 12, &still(), 0);
        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|l| l.spans.len() == 40));
    }

    #[test]
    fn test_layer_coords_identity() {
        assert_eq!(layer_coords(7, 3, 40, 12, (0.0, 0.0), 1.0), (7, 3));
        assert_eq!(layer_coords(7, 3, 40, 12, (2.0, -1.0), 1.0), (5, 4));
    }

    #[test]
    fn test_zoom_pulls_toward_center() {
        let (x, _) = layer_coords(0, 6, 40, 12, (0.0, 0.0), 1.05);
        assert_eq!(x, 1);
    }

    #[test]
    fn test_parallax_shifts_stars() {
        let state = BackgroundState::new(BackgroundSettings {
            stars: true,
            particles: 0,
            overlay: false,
        });
        let shifted = MotionFrame {
            background: (2.0, 0.0),
            ..still()
        };
        let base = state.lines(60, 10, &still(), 0);
        let moved = state.lines(60, 10, &shifted, 0);
        for (y, (a, b)) in base.iter().zip(&moved).enumerate() {
            let a: Vec<char> = text_of(a).chars().collect();
            let b: Vec<char> = text_of(b).chars().collect();
            for x in 2..60usize {
                // Dust sits on its own layer and does not move here.
                let dusty =
                    |x: usize| stateless::dust_char(x as i64, y as i64, (0, 0, 0)).is_some();
                if dusty(x) || dusty(x - 2) {
                    continue;
                }
                assert_eq!(a[x - 2], b[x], "row {y} column {x}");
            }
        }
    }

    #[test]
    fn test_follower_drawn_when_hovered() {
        let state = BackgroundState::new(BackgroundSettings {
            stars: false,
            particles: 0,
            overlay: false,
        });
        let hovered = MotionFrame {
            hovered: true,
            ..still()
        };
        let lines = state.lines(20, 6, &hovered, 0);
        assert_eq!(lines[3].spans[10].content, "•");
    }

    #[test]
    fn test_no_stars_when_disabled() {
        let state = BackgroundState::new(BackgroundSettings {
            stars: false,
            particles: 0,
            overlay: false,
        });
        let lines = state.lines(30, 8, &still(), 0);
        let stars: usize = lines
            .iter()
            .map(|l| {
                text_of(l)
                    .chars()
                    .filter(|c| STAR_CHARS.contains(c) && !DUST_CHARS.contains(c))
                    .count()
            })
            .sum();
        assert_eq!(stars, 0);
    }
}
