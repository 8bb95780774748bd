//! Background layers for the folio hero.
//!
//! A dark vertical gradient backdrop with a breathing overlay, a starfield
//! and a dust layer shifted by the pointer parallax, floating particles,
//! and the cursor follower dot.

mod animations;
mod chars;
mod color;
mod state;

pub use color::{Rgb, hsl_to_rgb, mix, to_color};
pub use state::{BackgroundSettings, BackgroundState};
