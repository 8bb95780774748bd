//! Container bounds and pointer samples, measured in terminal cells.

use ratatui::layout::Rect;

/// Screen-space rectangle of a tracked container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the container has been laid out with a non-zero area.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Center point of the container.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half the width and half the height.
    pub fn half_extents(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies inside the container (right and bottom edges excluded).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.is_measured()
            && x >= self.x
            && x < self.x + self.width
            && y >= self.y
            && y < self.y + self.height
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        )
    }
}

/// Offset of the pointer from the center of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    /// Sample the pointer relative to the center of `bounds`.
    ///
    /// Returns `None` when the container has not been measured yet, so a
    /// pointer event arriving before layout never yields NaN offsets.
    pub fn relative_to(x: f32, y: f32, bounds: Bounds) -> Option<Self> {
        if !bounds.is_measured() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (cx, cy) = bounds.center();
        Some(Self {
            x: x - cx,
            y: y - cy,
        })
    }

    /// Clamp the sample to the half extents of `bounds`.
    pub fn clamped(self, bounds: Bounds) -> Self {
        if !bounds.is_measured() {
            return self;
        }
        let (hw, hh) = bounds.half_extents();
        Self {
            x: self.x.clamp(-hw, hw),
            y: self.y.clamp(-hh, hh),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_center_and_extents() {
        let bounds = Bounds::new(10.0, 4.0, 80.0, 20.0);
        assert_eq!(bounds.center(), (50.0, 14.0));
        assert_eq!(bounds.half_extents(), (40.0, 10.0));
    }

    #[rstest]
    #[case(Bounds::new(0.0, 0.0, 0.0, 0.0))]
    #[case(Bounds::new(5.0, 5.0, 0.0, 12.0))]
    #[case(Bounds::new(5.0, 5.0, 12.0, 0.0))]
    #[case(Bounds::new(0.0, 0.0, f32::NAN, 10.0))]
    fn test_unmeasured_bounds_yield_no_sample(#[case] bounds: Bounds) {
        assert!(!bounds.is_measured());
        assert_eq!(PointerSample::relative_to(3.0, 3.0, bounds), None);
    }

    #[test]
    fn test_sample_relative_to_center() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 40.0);
        let sample = PointerSample::relative_to(75.0, 10.0, bounds);
        assert_eq!(sample, Some(PointerSample { x: 25.0, y: -10.0 }));
    }

    #[test]
    fn test_clamped_to_half_extents() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 40.0);
        let sample = PointerSample::relative_to(400.0, -90.0, bounds)
            .map(|s| s.clamped(bounds))
            .unwrap();
        assert_eq!(sample, PointerSample { x: 50.0, y: -20.0 });
    }

    #[rstest]
    #[case(0.0, 0.0, true)]
    #[case(99.0, 39.0, true)]
    #[case(100.0, 10.0, false)]
    #[case(10.0, -1.0, false)]
    fn test_contains(#[case] x: f32, #[case] y: f32, #[case] expected: bool) {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(bounds.contains(x, y), expected);
    }

    #[test]
    fn test_from_rect() {
        let bounds = Bounds::from(Rect::new(2, 3, 40, 10));
        assert_eq!(bounds, Bounds::new(2.0, 3.0, 40.0, 10.0));
    }
}
