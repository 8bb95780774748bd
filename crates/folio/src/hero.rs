//! Drawing the hero: background, name and pointer indicator.

use folio_background::{BackgroundState, Rgb, mix, to_color};
use folio_core::LayoutMode;
use folio_fonts::{NameLayout, StyledGlyph};
use folio_motion::{Entrance, HeroMotion, MotionFrame};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const NAME_RGB: Rgb = (220, 220, 228);
const EMPHASIS_RGB: Rgb = (255, 255, 255);
/// Whole name while the pointer is on it or it is being dragged.
const LIT_RGB: Rgb = (255, 255, 255);
/// Glyph under the pointer.
const HOVER_RGB: Rgb = (255, 107, 107);
/// Color the name fades in from.
const FADE_RGB: Rgb = (26, 25, 29);
const INDICATOR_RGB: Rgb = (128, 128, 132);

/// Time the whole hero takes to fade in after start.
pub const FADE_IN_MS: u64 = 1_000;

/// Columns the name shifts per degree of tilt around the vertical axis.
const TILT_COLUMNS_PER_DEGREE: f32 = 0.4;
/// Rows the name shifts per degree of tilt around the horizontal axis.
const TILT_ROWS_PER_DEGREE: f32 = 0.2;

/// A piece of the name and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub area: Rect,
    pub line: Line<'static>,
}

/// How the name reacts to the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Highlight {
    lit: bool,
    dragging: bool,
    /// Index of the glyph under the pointer.
    hovered: Option<usize>,
}

/// Render the whole hero into `area`.
///
/// `pointer` is the cell under the mouse, if any. The hero fades in over
/// the first [`FADE_IN_MS`] of `elapsed_ms`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    hero: &HeroMotion,
    name: &NameLayout,
    background: &BackgroundState,
    elapsed_ms: u64,
    pointer: Option<Position>,
) {
    let motion = hero.tracker.frame();
    background.render(frame, area, &motion, elapsed_ms);

    for piece in place_name(area, name, hero, pointer) {
        frame.render_widget(Paragraph::new(piece.line), piece.area);
    }

    if motion.hovered {
        let lines = indicator_lines(&motion);
        let indicator = Rect::new(
            area.x.saturating_add(2),
            area.y.saturating_add(1),
            34,
            lines.len() as u16,
        )
        .intersection(area);
        frame.render_widget(Paragraph::new(lines), indicator);
    }

    let opacity = fade_in_opacity(elapsed_ms);
    if opacity < 1.0 {
        fade(frame.buffer_mut(), area, opacity);
    }
}

/// Opacity of the whole hero `elapsed_ms` after start.
pub fn fade_in_opacity(elapsed_ms: u64) -> f32 {
    (elapsed_ms as f32 / FADE_IN_MS as f32).min(1.0)
}

/// Blend every cell of `area` toward the page color.
fn fade(buffer: &mut Buffer, area: Rect, opacity: f32) {
    let faded = |color: Color| match color {
        Color::Rgb(r, g, b) => to_color(mix(FADE_RGB, (r, g, b), opacity)),
        other => other,
    };
    for position in area.intersection(buffer.area).positions() {
        if let Some(cell) = buffer.cell_mut(position) {
            cell.fg = faded(cell.fg);
            cell.bg = faded(cell.bg);
        }
    }
}

/// Lay out the visible pieces of the name inside `area`.
///
/// Normal mode centers the whole name. Split mode puts the head near the
/// left edge and the tail near the right edge. Pieces that have not
/// started their entrance are left out. The name lights up while
/// `pointer` is on it or it is being dragged, and the glyph under
/// `pointer` is picked out.
pub fn place_name(
    area: Rect,
    name: &NameLayout,
    hero: &HeroMotion,
    pointer: Option<Position>,
) -> Vec<PlacedText> {
    if area.is_empty() {
        return Vec::new();
    }
    let motion = hero.tracker.frame();
    let shift = tilt_shift(&motion);
    let drag = hero.drag.offset();
    let row = area.y as f32 + (area.height / 2) as f32;

    let pieces: Vec<(&[StyledGlyph], u16, f32, &Entrance)> = match name.mode {
        LayoutMode::Normal => {
            let columns = name.head_columns();
            let x = area.x as f32 + area.width.saturating_sub(columns) as f32 / 2.0;
            vec![(&name.head[..], columns, x, &hero.name.whole)]
        }
        LayoutMode::Split => {
            let margin = (area.width / 8) as f32;
            let tail_columns = name.tail_columns();
            let right = area.x as f32 + area.width as f32 - margin - tail_columns as f32;
            vec![
                (
                    &name.head[..],
                    name.head_columns(),
                    area.x as f32 + margin,
                    &hero.name.head,
                ),
                (&name.tail[..], tail_columns, right, &hero.name.tail),
            ]
        }
    };

    let placed: Vec<(&[StyledGlyph], Rect, f32)> = pieces
        .into_iter()
        .filter(|(glyphs, _, _, entrance)| !glyphs.is_empty() && entrance.opacity() > 0.0)
        .map(|(glyphs, columns, x, entrance)| {
            let (dx, dy) = entrance.offset();
            let x = x + dx + drag.0 + shift.0;
            let y = row + dy + drag.1 + shift.1;
            (glyphs, fit(area, x, y, columns), entrance.opacity())
        })
        .collect();

    let dragging = hero.drag.is_dragging();
    let over_name = pointer.is_some_and(|p| placed.iter().any(|(_, rect, _)| rect.contains(p)));
    placed
        .into_iter()
        .map(|(glyphs, rect, opacity)| {
            let highlight = Highlight {
                lit: over_name || dragging,
                dragging,
                hovered: pointer.and_then(|p| glyph_at(glyphs, rect, p)),
            };
            PlacedText {
                area: rect,
                line: styled_line(glyphs, opacity, highlight),
            }
        })
        .collect()
}

/// Whether the cell (`column`, `row`) is on the name.
pub fn name_contains(
    area: Rect,
    name: &NameLayout,
    hero: &HeroMotion,
    column: u16,
    row: u16,
) -> bool {
    place_name(area, name, hero, None)
        .iter()
        .any(|piece| piece.area.contains(Position::new(column, row)))
}

/// Index of the glyph drawn at `pointer` when `glyphs` start at `area`.
fn glyph_at(glyphs: &[StyledGlyph], area: Rect, pointer: Position) -> Option<usize> {
    if !area.contains(pointer) {
        return None;
    }
    let mut end = area.x;
    glyphs.iter().position(|glyph| {
        end = end.saturating_add(glyph.columns());
        pointer.x < end
    })
}

/// Shift standing in for the 3D tilt of the name.
fn tilt_shift(motion: &MotionFrame) -> (f32, f32) {
    (
        motion.tilt_y * TILT_COLUMNS_PER_DEGREE,
        -motion.tilt_x * TILT_ROWS_PER_DEGREE,
    )
}

/// One row `columns` wide at (`x`, `y`), kept inside `area`.
fn fit(area: Rect, x: f32, y: f32, columns: u16) -> Rect {
    let width = columns.min(area.width);
    let max_x = area.right().saturating_sub(width) as f32;
    let max_y = area.bottom().saturating_sub(1) as f32;
    let x = x.round().clamp(area.x as f32, max_x);
    let y = y.round().clamp(area.y as f32, max_y);
    Rect::new(x as u16, y as u16, width, 1)
}

/// Spans for `glyphs`. A dragged name is slanted in italics.
fn styled_line(glyphs: &[StyledGlyph], opacity: f32, highlight: Highlight) -> Line<'static> {
    let base = if highlight.dragging {
        Style::new().add_modifier(Modifier::ITALIC)
    } else {
        Style::new()
    };
    glyphs
        .iter()
        .enumerate()
        .map(|(index, glyph)| {
            let (rgb, style) = if highlight.hovered == Some(index) {
                (HOVER_RGB, base.add_modifier(Modifier::BOLD))
            } else if glyph.emphasized {
                (EMPHASIS_RGB, base.add_modifier(Modifier::BOLD))
            } else if highlight.lit {
                (LIT_RGB, base)
            } else {
                (NAME_RGB, base)
            };
            Span::styled(
                glyph.rendered.to_string(),
                style.fg(to_color(mix(FADE_RGB, rgb, opacity))),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

/// The raw pointer readout shown while hovering.
pub fn indicator_lines(motion: &MotionFrame) -> Vec<Line<'static>> {
    let style = Style::new().fg(to_color(INDICATOR_RGB));
    let (x, y) = motion.pointer_px;
    vec![
        Line::styled(format!("Mouse X: {}", x.round() as i32), style),
        Line::styled(format!("Mouse Y: {}", y.round() as i32), style),
        Line::default(),
        Line::styled("Drag the text • Move your mouse", style),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Bounds;
    use folio_fonts::{FontFamily, layout};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn settled_hero() -> HeroMotion {
        let mut hero = HeroMotion::default();
        for _ in 0..600 {
            hero.tick(FRAME);
        }
        hero
    }

    fn plain(text: &str, mode: LayoutMode) -> NameLayout {
        let fonts = vec![FontFamily::Plain; text.chars().count()];
        layout(text, &fonts, &[], mode)
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn draw_at(
        hero: &HeroMotion,
        name: &NameLayout,
        elapsed_ms: u64,
        pointer: Option<Position>,
    ) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let background = BackgroundState::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, hero, name, &background, elapsed_ms, pointer);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(hero: &HeroMotion, name: &NameLayout) -> Buffer {
        draw_at(hero, name, FADE_IN_MS, None)
    }

    #[test]
    fn test_normal_name_centered() {
        let hero = settled_hero();
        let name = plain("Ada King", LayoutMode::Normal);
        let pieces = place_name(Rect::new(0, 0, 40, 12), &name, &hero, None);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].area, Rect::new(16, 6, 8, 1));

        let buffer = draw(&hero, &name);
        assert!(row_text(&buffer, 6).contains("Ada\u{a0}King"));
    }

    #[test]
    fn test_hidden_before_entrance() {
        let hero = HeroMotion::default();
        let name = plain("Ada", LayoutMode::Normal);
        assert!(place_name(Rect::new(0, 0, 40, 12), &name, &hero, None).is_empty());
    }

    #[test]
    fn test_split_places_head_left_of_tail() {
        let hero = settled_hero();
        let name = plain("Vemula Moksha", LayoutMode::Split);
        let pieces = place_name(Rect::new(0, 0, 40, 12), &name, &hero, None);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].area, Rect::new(5, 6, 6, 1));
        assert_eq!(pieces[1].area, Rect::new(29, 6, 6, 1));
    }

    #[test]
    fn test_split_without_tail() {
        let hero = settled_hero();
        let name = plain("Cher", LayoutMode::Split);
        let pieces = place_name(Rect::new(0, 0, 40, 12), &name, &hero, None);
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn test_name_kept_inside_area() {
        let mut hero = settled_hero();
        hero.drag.grab(0.0, 0.0);
        hero.drag.drag_to(-200.0, 100.0);
        let name = plain("Ada", LayoutMode::Normal);
        let pieces = place_name(Rect::new(0, 0, 40, 12), &name, &hero, None);
        assert_eq!(pieces[0].area.x, 0);
        assert!(pieces[0].area.y < 12);
    }

    #[test]
    fn test_drag_moves_name() {
        let mut hero = settled_hero();
        let name = plain("Ada", LayoutMode::Normal);
        let area = Rect::new(0, 0, 40, 12);
        assert!(name_contains(area, &name, &hero, 20, 6));

        hero.drag.grab(20.0, 6.0);
        hero.drag.drag_to(24.0, 6.0);
        assert!(!name_contains(area, &name, &hero, 20, 6));
        assert!(name_contains(area, &name, &hero, 24, 6));
    }

    #[test]
    fn test_indicator_shown_on_hover() {
        let mut hero = settled_hero();
        let name = plain("Ada", LayoutMode::Normal);
        hero.tracker
            .on_pointer_move(30.0, 6.0, Bounds::new(0.0, 0.0, 40.0, 12.0));

        let buffer = draw(&hero, &name);
        assert!(row_text(&buffer, 1).contains("Mouse X: 80"));
        assert!(row_text(&buffer, 2).contains("Mouse Y: 0"));
        assert!(row_text(&buffer, 4).contains("Drag the text"));
    }

    #[test]
    fn test_emphasis_is_bold() {
        let name = layout("ab", &[FontFamily::Plain; 2], &[true, false], LayoutMode::Normal);
        let line = styled_line(&name.head, 1.0, Highlight::default());
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.spans[0].style.fg, Some(to_color(EMPHASIS_RGB)));
    }

    #[test]
    fn test_glyph_under_pointer_highlighted() {
        let hero = settled_hero();
        let name = plain("Ada", LayoutMode::Normal);
        // "Ada" is centered at columns 19..22 on row 6.
        let buffer = draw_at(&hero, &name, FADE_IN_MS, Some(Position::new(20, 6)));

        let hovered = &buffer[(20, 6)];
        assert_eq!(hovered.symbol(), "d");
        assert_eq!(hovered.fg, to_color(HOVER_RGB));
        assert!(hovered.modifier.contains(Modifier::BOLD));
        assert_eq!(buffer[(19, 6)].fg, to_color(LIT_RGB));
        assert!(!buffer[(19, 6)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_pointer_off_name_keeps_plain_style() {
        let hero = settled_hero();
        let name = plain("Ada", LayoutMode::Normal);
        let buffer = draw_at(&hero, &name, FADE_IN_MS, Some(Position::new(5, 2)));
        for x in 19..22 {
            assert_eq!(buffer[(x, 6)].fg, to_color(NAME_RGB));
        }
    }

    #[test]
    fn test_split_hover_lights_both_halves() {
        let hero = settled_hero();
        let name = plain("Vemula Moksha", LayoutMode::Split);
        let pieces = place_name(
            Rect::new(0, 0, 40, 12),
            &name,
            &hero,
            Some(Position::new(30, 6)),
        );
        // Head at 5..11, tail at 29..35; the pointer is on the tail's "o".
        assert_eq!(pieces[0].line.spans[0].style.fg, Some(to_color(LIT_RGB)));
        assert_eq!(pieces[1].line.spans[1].style.fg, Some(to_color(HOVER_RGB)));
        assert_eq!(pieces[1].line.spans[0].style.fg, Some(to_color(LIT_RGB)));
    }

    #[test]
    fn test_dragged_name_is_lit_and_slanted() {
        let mut hero = settled_hero();
        hero.drag.grab(20.0, 6.0);
        let name = plain("Ada", LayoutMode::Normal);
        let buffer = draw_at(&hero, &name, FADE_IN_MS, None);
        for x in 19..22 {
            let cell = &buffer[(x, 6)];
            assert_eq!(cell.fg, to_color(LIT_RGB));
            assert!(cell.modifier.contains(Modifier::ITALIC));
        }

        hero.drag.release();
        let buffer = draw_at(&hero, &name, FADE_IN_MS, None);
        assert_eq!(buffer[(19, 6)].fg, to_color(NAME_RGB));
        assert!(!buffer[(19, 6)].modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_glyph_at_counts_wide_glyphs() {
        let name = layout("ab", &[FontFamily::Fullwidth; 2], &[], LayoutMode::Normal);
        let area = Rect::new(10, 3, name.head_columns(), 1);
        assert_eq!(area.width, 4);
        assert_eq!(glyph_at(&name.head, area, Position::new(11, 3)), Some(0));
        assert_eq!(glyph_at(&name.head, area, Position::new(12, 3)), Some(1));
        assert_eq!(glyph_at(&name.head, area, Position::new(14, 3)), None);
        assert_eq!(glyph_at(&name.head, area, Position::new(11, 4)), None);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(250, 0.25)]
    #[case(1_000, 1.0)]
    #[case(60_000, 1.0)]
    fn test_fade_in_opacity(#[case] elapsed_ms: u64, #[case] expected: f32) {
        assert_eq!(fade_in_opacity(elapsed_ms), expected);
    }

    #[test]
    fn test_hero_fades_in() {
        let hero = settled_hero();
        let name = plain("Ada", LayoutMode::Normal);
        let start = draw_at(&hero, &name, 0, None);
        assert!(
            start
                .content()
                .iter()
                .all(|cell| cell.bg == to_color(FADE_RGB))
        );
        assert_eq!(start[(19, 6)].fg, to_color(FADE_RGB));

        let half = draw_at(&hero, &name, FADE_IN_MS / 2, None);
        let full = draw(&hero, &name);
        assert_eq!(full[(19, 6)].fg, to_color(NAME_RGB));
        assert_ne!(half[(19, 6)].fg, full[(19, 6)].fg);
        assert_ne!(half[(19, 6)].fg, start[(19, 6)].fg);
    }
}
