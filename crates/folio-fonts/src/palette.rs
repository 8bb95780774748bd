//! Unicode typeface styles used as the font palette.
//!
//! A terminal cannot switch font families per cell, so each "font" is a
//! Unicode styled alphabet: the Mathematical Alphanumeric Symbols block,
//! fullwidth forms and enclosed alphanumerics. Characters a style has no
//! form for are drawn unchanged.

use serde::{Deserialize, Serialize};

/// A typeface style a glyph can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Plain,
    Bold,
    Italic,
    BoldItalic,
    Script,
    BoldScript,
    Fraktur,
    BoldFraktur,
    DoubleStruck,
    Sans,
    SansBold,
    SansItalic,
    SansBoldItalic,
    Monospace,
    Fullwidth,
    Circled,
}

/// Letters missing from a math alphabet, encoded earlier in Letterlike Symbols.
const ITALIC_HOLES: &[(char, char)] = &[('h', '\u{210E}')];
const SCRIPT_HOLES: &[(char, char)] = &[
    ('B', '\u{212C}'),
    ('E', '\u{2130}'),
    ('F', '\u{2131}'),
    ('H', '\u{210B}'),
    ('I', '\u{2110}'),
    ('L', '\u{2112}'),
    ('M', '\u{2133}'),
    ('R', '\u{211B}'),
    ('e', '\u{212F}'),
    ('g', '\u{210A}'),
    ('o', '\u{2134}'),
];
const FRAKTUR_HOLES: &[(char, char)] = &[
    ('C', '\u{212D}'),
    ('H', '\u{210C}'),
    ('I', '\u{2111}'),
    ('R', '\u{211C}'),
    ('Z', '\u{2128}'),
];
const DOUBLE_STRUCK_HOLES: &[(char, char)] = &[
    ('C', '\u{2102}'),
    ('H', '\u{210D}'),
    ('N', '\u{2115}'),
    ('P', '\u{2119}'),
    ('Q', '\u{211A}'),
    ('R', '\u{211D}'),
    ('Z', '\u{2124}'),
];

/// Code points of 'A', 'a' and '0' in one styled alphabet.
struct Alphabet {
    upper: u32,
    lower: u32,
    digits: Option<u32>,
    holes: &'static [(char, char)],
}

impl Alphabet {
    /// A math alphabet: lowercase follows the 26 uppercase letters.
    const fn math(upper: u32, digits: Option<u32>, holes: &'static [(char, char)]) -> Self {
        Self {
            upper,
            lower: upper + 26,
            digits,
            holes,
        }
    }

    fn map(&self, ch: char) -> Option<char> {
        if let Some(&(_, substitute)) = self.holes.iter().find(|(from, _)| *from == ch) {
            return Some(substitute);
        }
        let code = match ch {
            'A'..='Z' => self.upper + (ch as u32 - 'A' as u32),
            'a'..='z' => self.lower + (ch as u32 - 'a' as u32),
            '0'..='9' => self.digits? + (ch as u32 - '0' as u32),
            _ => return None,
        };
        char::from_u32(code)
    }
}

impl FontFamily {
    /// Every style, in palette order.
    pub const ALL: [FontFamily; 16] = [
        FontFamily::Plain,
        FontFamily::Bold,
        FontFamily::Italic,
        FontFamily::BoldItalic,
        FontFamily::Script,
        FontFamily::BoldScript,
        FontFamily::Fraktur,
        FontFamily::BoldFraktur,
        FontFamily::DoubleStruck,
        FontFamily::Sans,
        FontFamily::SansBold,
        FontFamily::SansItalic,
        FontFamily::SansBoldItalic,
        FontFamily::Monospace,
        FontFamily::Fullwidth,
        FontFamily::Circled,
    ];

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Plain => "Plain",
            FontFamily::Bold => "Bold Serif",
            FontFamily::Italic => "Italic Serif",
            FontFamily::BoldItalic => "Bold Italic Serif",
            FontFamily::Script => "Script",
            FontFamily::BoldScript => "Bold Script",
            FontFamily::Fraktur => "Fraktur",
            FontFamily::BoldFraktur => "Bold Fraktur",
            FontFamily::DoubleStruck => "Double-Struck",
            FontFamily::Sans => "Sans-Serif",
            FontFamily::SansBold => "Bold Sans-Serif",
            FontFamily::SansItalic => "Italic Sans-Serif",
            FontFamily::SansBoldItalic => "Bold Italic Sans-Serif",
            FontFamily::Monospace => "Monospace",
            FontFamily::Fullwidth => "Fullwidth",
            FontFamily::Circled => "Circled",
        }
    }

    fn alphabet(self) -> Option<Alphabet> {
        let alphabet = match self {
            FontFamily::Plain => return None,
            FontFamily::Bold => Alphabet::math(0x1D400, Some(0x1D7CE), &[]),
            FontFamily::Italic => Alphabet::math(0x1D434, None, ITALIC_HOLES),
            FontFamily::BoldItalic => Alphabet::math(0x1D468, None, &[]),
            FontFamily::Script => Alphabet::math(0x1D49C, None, SCRIPT_HOLES),
            FontFamily::BoldScript => Alphabet::math(0x1D4D0, None, &[]),
            FontFamily::Fraktur => Alphabet::math(0x1D504, None, FRAKTUR_HOLES),
            FontFamily::DoubleStruck => {
                Alphabet::math(0x1D538, Some(0x1D7D8), DOUBLE_STRUCK_HOLES)
            }
            FontFamily::BoldFraktur => Alphabet::math(0x1D56C, None, &[]),
            FontFamily::Sans => Alphabet::math(0x1D5A0, Some(0x1D7E2), &[]),
            FontFamily::SansBold => Alphabet::math(0x1D5D4, Some(0x1D7EC), &[]),
            FontFamily::SansItalic => Alphabet::math(0x1D608, None, &[]),
            FontFamily::SansBoldItalic => Alphabet::math(0x1D63C, None, &[]),
            FontFamily::Monospace => Alphabet::math(0x1D670, Some(0x1D7F6), &[]),
            FontFamily::Fullwidth => Alphabet {
                upper: 0xFF21,
                lower: 0xFF41,
                digits: Some(0xFF10),
                holes: &[],
            },
            FontFamily::Circled => Alphabet::math(0x24B6, None, &[]),
        };
        Some(alphabet)
    }

    /// Draw `ch` in this style, or return it unchanged if the style has no form for it.
    pub fn apply(self, ch: char) -> char {
        if self == FontFamily::Circled {
            match ch {
                '0' => return '\u{24EA}',
                '1'..='9' => {
                    return char::from_u32(0x2460 + (ch as u32 - '1' as u32)).unwrap_or(ch);
                }
                _ => {}
            }
        }
        self.alphabet()
            .and_then(|alphabet| alphabet.map(ch))
            .unwrap_or(ch)
    }

    /// Whether glyphs in this style occupy two terminal columns.
    pub fn is_wide(self) -> bool {
        self == FontFamily::Fullwidth
    }
}

/// The set of styles glyphs are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    fonts: Vec<FontFamily>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fonts: FontFamily::ALL.to_vec(),
        }
    }
}

impl Palette {
    /// Build a palette, falling back to every style when `fonts` is empty.
    pub fn new(fonts: impl IntoIterator<Item = FontFamily>) -> Self {
        let mut unique: Vec<FontFamily> = Vec::new();
        for font in fonts {
            if !unique.contains(&font) {
                unique.push(font);
            }
        }
        if unique.is_empty() {
            return Self::default();
        }
        Self { fonts: unique }
    }

    pub fn fonts(&self) -> &[FontFamily] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Uniformly pick one style.
    pub fn pick(&self, rng: &mut fastrand::Rng) -> FontFamily {
        self.fonts[rng.usize(..self.fonts.len())]
    }
}
