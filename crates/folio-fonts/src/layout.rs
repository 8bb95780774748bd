//! Laying out the name in normal or split mode.

use folio_core::LayoutMode;

use crate::palette::FontFamily;

/// Whitespace is drawn as a non-breaking space so it never collapses.
pub const NBSP: char = '\u{00A0}';

/// A character ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledGlyph {
    /// Character from the source text.
    pub source: char,
    /// Character after applying the font.
    pub rendered: char,
    pub font: FontFamily,
    pub emphasized: bool,
}

impl StyledGlyph {
    pub fn new(source: char, font: FontFamily, emphasized: bool) -> Self {
        let rendered = if source.is_whitespace() {
            NBSP
        } else {
            font.apply(source)
        };
        Self {
            source,
            rendered,
            font,
            emphasized,
        }
    }

    /// Terminal columns the glyph occupies.
    pub fn columns(&self) -> u16 {
        if self.font.is_wide() && self.rendered != self.source {
            2
        } else {
            1
        }
    }
}

/// The name split into the pieces a renderer places.
///
/// In normal mode the whole string is in `head` and `tail` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLayout {
    pub mode: LayoutMode,
    pub head: Vec<StyledGlyph>,
    pub tail: Vec<StyledGlyph>,
}

impl NameLayout {
    pub fn head_text(&self) -> String {
        self.head.iter().map(|g| g.source).collect()
    }

    pub fn tail_text(&self) -> String {
        self.tail.iter().map(|g| g.source).collect()
    }

    pub fn head_columns(&self) -> u16 {
        self.head.iter().map(StyledGlyph::columns).sum()
    }

    pub fn tail_columns(&self) -> u16 {
        self.tail.iter().map(StyledGlyph::columns).sum()
    }
}

/// Split `text` at its first whitespace character.
///
/// The separator belongs to neither half. Without whitespace the tail is empty.
pub fn split_first_token(text: &str) -> (&str, &str) {
    match text.char_indices().find(|(_, ch)| ch.is_whitespace()) {
        Some((at, sep)) => (&text[..at], &text[at + sep.len_utf8()..]),
        None => (text, ""),
    }
}

/// Lay out `text` using per-character `fonts` and `emphasis`.
///
/// Tail glyphs read their font at the tail position offset by the head
/// length. Missing entries fall back to [`FontFamily::Plain`].
pub fn layout(
    text: &str,
    fonts: &[FontFamily],
    emphasis: &[bool],
    mode: LayoutMode,
) -> NameLayout {
    let glyph_at = |index: usize, ch: char| {
        StyledGlyph::new(
            ch,
            fonts.get(index).copied().unwrap_or(FontFamily::Plain),
            emphasis.get(index).copied().unwrap_or(false),
        )
    };

    match mode {
        LayoutMode::Normal => NameLayout {
            mode,
            head: text.chars().enumerate().map(|(i, ch)| glyph_at(i, ch)).collect(),
            tail: Vec::new(),
        },
        LayoutMode::Split => {
            let (head, tail) = split_first_token(text);
            let head_len = head.chars().count();
            NameLayout {
                mode,
                head: head.chars().enumerate().map(|(i, ch)| glyph_at(i, ch)).collect(),
                tail: tail
                    .chars()
                    .enumerate()
                    .map(|(i, ch)| glyph_at(i + head_len, ch))
                    .collect(),
            }
        }
    }
}
