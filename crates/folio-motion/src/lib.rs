//! Pointer-reactive motion for the folio hero.
//!
//! A [`PointerTracker`] turns pointer moves into two spring-smoothed values
//! and derives every parallax, tilt and cursor offset from them. The
//! [`HeroMotion`] state, which also holds the name's entrance and drag
//! springs, is advanced by a frame loop task while mounted.

mod drag;
mod entrance;
mod hero;
mod spring;
mod tracker;
mod transform;

pub use drag::TextDrag;
pub use entrance::{Entrance, NameEntrance};
pub use hero::{FRAME_LOOP, HeroMotion, frame_period};
pub use spring::{MotionValue, SpringConfig};
pub use tracker::{MotionFrame, POINTER_DOMAIN_PX, PointerTracker, TrackerConfig};
pub use transform::{Transform, derive_offset};
