//! Glyph to font assignment.

use crate::palette::{FontFamily, Palette};

/// One font per character of a display string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphFontAssignment {
    text: String,
    glyphs: Vec<(char, FontFamily)>,
}

impl GlyphFontAssignment {
    /// Assign every character of `text` a font drawn uniformly from `palette`.
    pub fn new(text: &str, palette: &Palette, rng: &mut fastrand::Rng) -> Self {
        let glyphs = text.chars().map(|ch| (ch, palette.pick(rng))).collect();
        Self {
            text: text.to_string(),
            glyphs,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(char, FontFamily)> {
        self.glyphs.get(index).copied()
    }

    pub fn glyphs(&self) -> &[(char, FontFamily)] {
        &self.glyphs
    }

    /// Redraw every font in place. The characters and the length stay put.
    pub fn reroll(&mut self, palette: &Palette, rng: &mut fastrand::Rng) {
        for (_, font) in &mut self.glyphs {
            *font = palette.pick(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_text() {
        let mut rng = fastrand::Rng::with_seed(1);
        let assignment = GlyphFontAssignment::new("", &Palette::default(), &mut rng);
        assert!(assignment.is_empty());
        assert_eq!(assignment.get(0), None);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut rng = fastrand::Rng::with_seed(1);
        let assignment = GlyphFontAssignment::new("Zoë ☕", &Palette::default(), &mut rng);
        assert_eq!(assignment.len(), 5);
        assert_eq!(assignment.get(2).map(|(ch, _)| ch), Some('ë'));
    }

    #[test]
    fn test_single_font_palette() {
        let mut rng = fastrand::Rng::with_seed(1);
        let palette = Palette::new([FontFamily::Fraktur]);
        let mut assignment = GlyphFontAssignment::new("Moksha", &palette, &mut rng);
        assignment.reroll(&palette, &mut rng);
        assert!(assignment.glyphs().iter().all(|(_, f)| *f == FontFamily::Fraktur));
    }

    proptest! {
        #[test]
        fn prop_length_matches_text(text in "\\PC{0,40}", seed in any::<u64>()) {
            let mut rng = fastrand::Rng::with_seed(seed);
            let assignment = GlyphFontAssignment::new(&text, &Palette::default(), &mut rng);
            prop_assert_eq!(assignment.len(), text.chars().count());
        }

        #[test]
        fn prop_reroll_keeps_characters(text in "\\PC{0,40}", seed in any::<u64>()) {
            let mut rng = fastrand::Rng::with_seed(seed);
            let palette = Palette::default();
            let mut assignment = GlyphFontAssignment::new(&text, &palette, &mut rng);
            let before: Vec<char> = assignment.glyphs().iter().map(|(ch, _)| *ch).collect();
            assignment.reroll(&palette, &mut rng);
            let after: Vec<char> = assignment.glyphs().iter().map(|(ch, _)| *ch).collect();
            prop_assert_eq!(before, after);
            prop_assert_eq!(assignment.text(), text.as_str());
        }
    }
}
