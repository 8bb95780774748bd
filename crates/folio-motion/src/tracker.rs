//! Pointer tracking for the hero container.
//!
//! Raw pointer offsets feed two springs (one per axis). Every visual
//! offset the hero draws is derived from those two springs, read together
//! through [`PointerTracker::frame`] so that all layers agree on the same
//! smoothed position.

use std::time::Duration;

use folio_core::{Bounds, PointerSample};
use tracing::trace;

use crate::spring::{MotionValue, SpringConfig};
use crate::transform::Transform;

/// Pointer domain the hero offsets are tuned for, in pixels.
pub const POINTER_DOMAIN_PX: (f32, f32) = (-500.0, 500.0);

const BACKGROUND_X: Transform = Transform::linear(POINTER_DOMAIN_PX, (-20.0, 20.0));
const BACKGROUND_Y: Transform = Transform::linear(POINTER_DOMAIN_PX, (-10.0, 10.0));
const LAYER_X: Transform = Transform::linear(POINTER_DOMAIN_PX, (-5.0, 5.0));
const LAYER_Y: Transform = Transform::linear(POINTER_DOMAIN_PX, (-3.0, 3.0));
const TILT_X: Transform = Transform::linear(POINTER_DOMAIN_PX, (5.0, -5.0));
const TILT_Y: Transform = Transform::linear(POINTER_DOMAIN_PX, (-5.0, 5.0));
const CURSOR: Transform = Transform::scale(0.1);

/// Background zoom while the pointer is over the hero.
const HOVER_ZOOM: f32 = 1.05;

/// Terminal cells are roughly twice as tall as they are wide.
pub(crate) const CELL_ASPECT: f32 = 2.0;

/// Tuning for a [`PointerTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    pub spring: SpringConfig,
    /// Clamp pointer offsets to the container's half extents.
    pub clamp_to_bounds: bool,
    /// Width of one terminal column in pixels.
    pub cell_px: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::POINTER,
            clamp_to_bounds: true,
            cell_px: 8.0,
        }
    }
}

/// Every derived offset for one rendered frame.
///
/// Offsets are in terminal cells, tilts in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionFrame {
    pub background: (f32, f32),
    pub layer: (f32, f32),
    pub tilt_x: f32,
    pub tilt_y: f32,
    pub cursor: (f32, f32),
    pub zoom: f32,
    pub hovered: bool,
    /// Unsmoothed pointer offset in pixels.
    pub pointer_px: (f32, f32),
}

/// Spring state tracking the pointer over one container.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    x: MotionValue,
    y: MotionValue,
    zoom: MotionValue,
    raw: PointerSample,
    bounds: Bounds,
    hovered: bool,
    config: TrackerConfig,
    elapsed: Duration,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl PointerTracker {
    pub fn new(config: TrackerConfig) -> Self {
        let config = TrackerConfig {
            cell_px: if config.cell_px.is_finite() && config.cell_px > 0.0 {
                config.cell_px
            } else {
                TrackerConfig::default().cell_px
            },
            ..config
        };
        Self {
            x: MotionValue::new(0.0, config.spring),
            y: MotionValue::new(0.0, config.spring),
            zoom: MotionValue::new(1.0, config.spring),
            raw: PointerSample::default(),
            bounds: Bounds::default(),
            hovered: false,
            config,
            elapsed: Duration::ZERO,
        }
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Last accepted pointer offset, in cells.
    pub fn raw(&self) -> PointerSample {
        self.raw
    }

    /// Total time the springs have been advanced.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Smoothed pointer offset in pixels.
    pub fn smoothed(&self) -> (f32, f32) {
        (self.x.get(), self.y.get())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest() && self.zoom.is_at_rest()
    }

    /// Handle a pointer move to (`column`, `row`) over a container at `bounds`.
    ///
    /// Moves outside the container leave the targets alone, so the springs
    /// settle at the last observed position. Returns whether the targets
    /// were updated.
    pub fn on_pointer_move(&mut self, column: f32, row: f32, bounds: Bounds) -> bool {
        self.bounds = bounds;
        if !bounds.contains(column, row) {
            self.on_pointer_leave();
            return false;
        }
        self.on_pointer_enter();
        self.track(column, row)
    }

    /// Handle a drag that started inside the container.
    ///
    /// A drag keeps tracking the pointer past the container edges; the
    /// offset is clamped to the container unless clamping is disabled.
    pub fn on_pointer_drag(&mut self, column: f32, row: f32, bounds: Bounds) -> bool {
        self.bounds = bounds;
        if !self.hovered && !bounds.contains(column, row) {
            return false;
        }
        self.track(column, row)
    }

    fn track(&mut self, column: f32, row: f32) -> bool {
        let Some(mut sample) = PointerSample::relative_to(column, row, self.bounds) else {
            return false;
        };
        if self.config.clamp_to_bounds {
            sample = sample.clamped(self.bounds);
        }
        self.raw = sample;
        let (px, py) = self.to_px(sample);
        self.x.set_target(px);
        self.y.set_target(py);
        trace!(x = px, y = py, "pointer target");
        true
    }

    pub fn on_pointer_enter(&mut self) {
        if !self.hovered {
            self.hovered = true;
            self.zoom.set_target(HOVER_ZOOM);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        if self.hovered {
            self.hovered = false;
            self.zoom.set_target(1.0);
        }
    }

    /// Advance all springs by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed += dt;
        self.x.tick(dt);
        self.y.tick(dt);
        self.zoom.tick(dt);
    }

    /// Derive every offset from the current spring state.
    pub fn frame(&self) -> MotionFrame {
        let (x, y) = self.smoothed();
        let cell_w = self.config.cell_px;
        let cell_h = cell_w * CELL_ASPECT;
        let (raw_x, raw_y) = self.to_px(self.raw);
        MotionFrame {
            background: (BACKGROUND_X.apply(x) / cell_w, BACKGROUND_Y.apply(y) / cell_h),
            layer: (LAYER_X.apply(x) / cell_w, LAYER_Y.apply(y) / cell_h),
            tilt_x: TILT_X.apply(y),
            tilt_y: TILT_Y.apply(x),
            cursor: (CURSOR.apply(x) / cell_w, CURSOR.apply(y) / cell_h),
            zoom: self.zoom.get(),
            hovered: self.hovered,
            pointer_px: (raw_x, raw_y),
        }
    }

    fn to_px(&self, sample: PointerSample) -> (f32, f32) {
        let cell_w = self.config.cell_px;
        (sample.x * cell_w, sample.y * cell_w * CELL_ASPECT)
    }
}
