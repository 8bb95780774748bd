//! Frame-loop driven motion state of the hero.

use std::time::Duration;

use folio_core::{Mounted, TaskError};

use crate::drag::TextDrag;
use crate::entrance::NameEntrance;
use crate::tracker::{PointerTracker, TrackerConfig};

/// Name of the frame loop thread.
pub const FRAME_LOOP: &str = "folio-frame-loop";

/// Everything the frame loop advances.
#[derive(Debug, Clone, Default)]
pub struct HeroMotion {
    pub tracker: PointerTracker,
    pub name: NameEntrance,
    pub drag: TextDrag,
}

impl HeroMotion {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracker: PointerTracker::new(config),
            name: NameEntrance::default(),
            drag: TextDrag::for_cell(config.cell_px),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.tracker.tick(dt);
        self.name.tick(dt);
        self.drag.tick(dt);
    }

    /// Start a frame loop advancing this state `fps` times per second.
    pub fn mount(self, fps: u32) -> Result<Mounted<HeroMotion>, TaskError> {
        Mounted::mount(FRAME_LOOP, frame_period(fps), self, HeroMotion::tick)
    }
}

/// Period of one frame at `fps`, with at least one frame per second.
pub fn frame_period(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.clamp(1, 240)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Bounds;
    use std::thread;

    #[test]
    fn test_frame_period() {
        assert_eq!(frame_period(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_period(0), Duration::from_secs(1));
        assert_eq!(frame_period(10_000), frame_period(240));
    }

    #[test]
    fn test_mounted_hero_follows_pointer() {
        let hero = HeroMotion::default().mount(200).unwrap();
        let bounds = Bounds::new(0.0, 0.0, 100.0, 30.0);
        assert!(hero.write(|h| h.tracker.on_pointer_move(80.0, 15.0, bounds)));
        thread::sleep(Duration::from_millis(100));

        let (x, _) = hero.read(|h| h.tracker.smoothed());
        assert!(x > 0.0);
        assert!(hero.read(|h| h.tracker.frame().hovered));
    }

    #[test]
    fn test_unmount_freezes_springs() {
        let hero = HeroMotion::default().mount(200).unwrap();
        let bounds = Bounds::new(0.0, 0.0, 100.0, 30.0);
        hero.write(|h| h.tracker.on_pointer_move(90.0, 15.0, bounds));
        let observer = hero.observer();
        thread::sleep(Duration::from_millis(30));
        assert!(hero.is_mounted());

        assert!(hero.unmount().is_none());
        let elapsed = |o: &std::sync::Arc<std::sync::RwLock<HeroMotion>>| {
            o.read().unwrap().tracker.elapsed()
        };
        let frozen = elapsed(&observer);
        assert!(frozen > Duration::ZERO);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(elapsed(&observer), frozen);
    }
}
