//! Delayed spring-in of the name.

use std::time::Duration;

use crate::spring::{MotionValue, SpringConfig};

/// Rows the name rises from when it appears.
const RISE_ROWS: f32 = 1.25;
/// Columns each half slides in from in split layout.
const SLIDE_COLUMNS: f32 = 6.0;

/// One element springing from an offset into place while fading in.
#[derive(Debug, Clone)]
pub struct Entrance {
    delay: Duration,
    waited: Duration,
    started: bool,
    from: (f32, f32),
    x: MotionValue,
    y: MotionValue,
    opacity: MotionValue,
}

impl Entrance {
    pub fn new(delay: Duration, from: (f32, f32)) -> Self {
        Self {
            delay,
            waited: Duration::ZERO,
            started: false,
            from,
            x: MotionValue::new(from.0, SpringConfig::ENTRANCE),
            y: MotionValue::new(from.1, SpringConfig::ENTRANCE),
            opacity: MotionValue::new(0.0, SpringConfig::ENTRANCE),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if !self.started {
            self.waited += dt;
            if self.waited < self.delay {
                return;
            }
            self.started = true;
            self.x.set_target(0.0);
            self.y.set_target(0.0);
            self.opacity.set_target(1.0);
            let late = self.waited - self.delay;
            self.advance(late);
            return;
        }
        self.advance(dt);
    }

    fn advance(&mut self, dt: Duration) {
        self.x.tick(dt);
        self.y.tick(dt);
        self.opacity.tick(dt);
    }

    /// Start over from the initial offset.
    pub fn restart(&mut self) {
        *self = Self::new(self.delay, self.from);
    }

    /// Current offset from the resting place, in cells.
    pub fn offset(&self) -> (f32, f32) {
        (self.x.get(), self.y.get())
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.get().clamp(0.0, 1.0)
    }

    pub fn is_done(&self) -> bool {
        self.started && self.x.is_at_rest() && self.y.is_at_rest() && self.opacity.is_at_rest()
    }
}

/// Entrances for the name in both layouts.
#[derive(Debug, Clone)]
pub struct NameEntrance {
    pub whole: Entrance,
    pub head: Entrance,
    pub tail: Entrance,
}

impl Default for NameEntrance {
    fn default() -> Self {
        Self {
            whole: Entrance::new(Duration::from_millis(500), (0.0, RISE_ROWS)),
            head: Entrance::new(Duration::from_millis(500), (-SLIDE_COLUMNS, RISE_ROWS)),
            tail: Entrance::new(Duration::from_millis(700), (SLIDE_COLUMNS, RISE_ROWS)),
        }
    }
}

impl NameEntrance {
    pub fn tick(&mut self, dt: Duration) {
        self.whole.tick(dt);
        self.head.tick(dt);
        self.tail.tick(dt);
    }

    pub fn restart(&mut self) {
        self.whole.restart();
        self.head.restart();
        self.tail.restart();
    }
}
