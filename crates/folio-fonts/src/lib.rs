//! Per-glyph font cycling for the folio name.
//!
//! Every character of the name is drawn in a font picked at random from a
//! [`Palette`]; a [`FontCycler`] rerolls the whole assignment on a fixed
//! interval once mounted.

mod assignment;
mod cycler;
mod layout;
mod palette;

pub use assignment::GlyphFontAssignment;
pub use cycler::{DEFAULT_INTERVAL, FONT_INTERVAL, FontCycler};
pub use layout::{NBSP, NameLayout, StyledGlyph, layout, split_first_token};
pub use palette::{FontFamily, Palette};
