//! Periodic re-randomization of the name's fonts.

use std::time::Duration;

use folio_core::{LayoutMode, Mounted, TaskError};
use tracing::debug;

use crate::assignment::GlyphFontAssignment;
use crate::layout::{NameLayout, layout};
use crate::palette::{FontFamily, Palette};

/// Name of the font interval thread.
pub const FONT_INTERVAL: &str = "folio-font-interval";

/// Default time between font changes.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

/// One in this many glyphs is emphasized on each retick.
const EMPHASIS_ODDS: u32 = 8;

/// Font assignment for the current name plus the generator that rerolls it.
#[derive(Debug, Clone)]
pub struct FontCycler {
    assignment: GlyphFontAssignment,
    emphasis: Vec<bool>,
    palette: Palette,
    rng: fastrand::Rng,
    reticks: u64,
}

impl FontCycler {
    /// A cycler with an unseeded generator.
    pub fn new(text: &str, palette: Palette) -> Self {
        Self::with_rng(text, palette, fastrand::Rng::new())
    }

    pub fn with_rng(text: &str, palette: Palette, rng: fastrand::Rng) -> Self {
        let mut cycler = Self {
            assignment: GlyphFontAssignment::default(),
            emphasis: Vec::new(),
            palette,
            rng,
            reticks: 0,
        };
        cycler.initialize(text);
        cycler
    }

    /// Build a fresh assignment for `text`.
    pub fn initialize(&mut self, text: &str) {
        self.assignment = GlyphFontAssignment::new(text, &self.palette, &mut self.rng);
        self.emphasis = vec![false; self.assignment.len()];
        debug!(glyphs = self.assignment.len(), "font assignment initialized");
    }

    /// Switch to `text`, rebuilding the assignment if the text changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if text == self.assignment.text() {
            return false;
        }
        self.initialize(text);
        true
    }

    /// Redraw every glyph's font and emphasis.
    pub fn retick(&mut self) {
        self.assignment.reroll(&self.palette, &mut self.rng);
        let rng = &mut self.rng;
        for flag in &mut self.emphasis {
            *flag = rng.u32(..EMPHASIS_ODDS) == 0;
        }
        self.reticks += 1;
    }

    pub fn text(&self) -> &str {
        self.assignment.text()
    }

    pub fn assignment(&self) -> &GlyphFontAssignment {
        &self.assignment
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// How many times the fonts have been redrawn.
    pub fn reticks(&self) -> u64 {
        self.reticks
    }

    /// Lay out the current text with the current fonts.
    pub fn layout(&self, mode: LayoutMode) -> NameLayout {
        let fonts: Vec<FontFamily> = self.assignment.glyphs().iter().map(|(_, f)| *f).collect();
        layout(self.assignment.text(), &fonts, &self.emphasis, mode)
    }

    /// Start rerolling fonts every `interval`.
    pub fn mount(self, interval: Duration) -> Result<Mounted<FontCycler>, TaskError> {
        Mounted::mount(FONT_INTERVAL, interval, self, |cycler, _| cycler.retick())
    }
}
