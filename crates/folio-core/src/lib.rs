//! Core types shared by the folio crates.
//!
//! Geometry of the tracked hero container, the name layout mode, and the
//! cancellable repeating task that drives both the spring frame loop and
//! the font cycling interval.

mod geometry;
mod layout;
mod mounted;
mod task;

pub use geometry::{Bounds, PointerSample};
pub use layout::{LayoutMode, ParseLayoutModeError};
pub use mounted::Mounted;
pub use task::{RepeatingTask, TaskError};
