//! Dragging the name within a constrained box.

use std::time::Duration;

use tracing::debug;

use crate::spring::{MotionValue, SpringConfig};
use crate::tracker::CELL_ASPECT;

/// How far the name may be dragged from its resting place, in pixels.
const DRAG_LIMIT_PX: (f32, f32) = (100.0, 50.0);

/// Share of the movement past a limit that still moves the name.
const ELASTIC: f32 = 0.2;

/// Spring pulling the name back inside its limits after release.
const RETURN_SPRING: SpringConfig = SpringConfig {
    stiffness: 300.0,
    damping: 20.0,
    mass: 1.0,
    rest_delta: 0.01,
    rest_speed: 0.01,
};

/// Offset of the dragged name, in cells.
#[derive(Debug, Clone)]
pub struct TextDrag {
    limits: (f32, f32),
    x: MotionValue,
    y: MotionValue,
    /// Pointer position and offset when the drag started.
    grab: Option<((f32, f32), (f32, f32))>,
}

impl Default for TextDrag {
    fn default() -> Self {
        Self::for_cell(8.0)
    }
}

impl TextDrag {
    /// Drag limits for terminal columns `cell_px` pixels wide.
    pub fn for_cell(cell_px: f32) -> Self {
        let cell_px = if cell_px.is_finite() && cell_px > 0.0 {
            cell_px
        } else {
            8.0
        };
        Self::new((
            DRAG_LIMIT_PX.0 / cell_px,
            DRAG_LIMIT_PX.1 / (cell_px * CELL_ASPECT),
        ))
    }

    pub fn new(limits: (f32, f32)) -> Self {
        Self {
            limits: (limits.0.abs(), limits.1.abs()),
            x: MotionValue::new(0.0, RETURN_SPRING),
            y: MotionValue::new(0.0, RETURN_SPRING),
            grab: None,
        }
    }

    pub fn limits(&self) -> (f32, f32) {
        self.limits
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.x.get(), self.y.get())
    }

    /// Start dragging with the pointer at (`column`, `row`).
    pub fn grab(&mut self, column: f32, row: f32) {
        self.grab = Some(((column, row), self.offset()));
        debug!(column, row, "name grabbed");
    }

    /// Follow the pointer. Ignored unless grabbed.
    pub fn drag_to(&mut self, column: f32, row: f32) {
        let Some(((start_col, start_row), (from_x, from_y))) = self.grab else {
            return;
        };
        self.x.jump(elastic(from_x + column - start_col, self.limits.0));
        self.y.jump(elastic(from_y + row - start_row, self.limits.1));
    }

    /// Let go; anything past the limits springs back inside.
    pub fn release(&mut self) {
        if self.grab.take().is_none() {
            return;
        }
        let (x, y) = self.offset();
        self.x.set_target(x.clamp(-self.limits.0, self.limits.0));
        self.y.set_target(y.clamp(-self.limits.1, self.limits.1));
        debug!(x, y, "name released");
    }

    pub fn tick(&mut self, dt: Duration) {
        self.x.tick(dt);
        self.y.tick(dt);
    }
}

/// Past `limit`, only [`ELASTIC`] of the overshoot is applied.
fn elastic(value: f32, limit: f32) -> f32 {
    if value > limit {
        limit + (value - limit) * ELASTIC
    } else if value < -limit {
        -limit + (value + limit) * ELASTIC
    } else {
        value
    }
}
