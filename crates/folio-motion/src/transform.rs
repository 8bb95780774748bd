//! Affine mapping from a smoothed value to a visual offset.

/// Linear map from an input domain to an output range.
///
/// Values outside the domain extrapolate; the domain bounds describe the
/// expected input, they are not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    domain: (f32, f32),
    range: (f32, f32),
}

impl Transform {
    pub const fn linear(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Multiply by `factor`.
    pub const fn scale(factor: f32) -> Self {
        Self::linear((0.0, 1.0), (0.0, factor))
    }

    pub fn apply(&self, value: f32) -> f32 {
        derive_offset(value, self.domain, self.range)
    }
}

/// Interpolate `value` from `domain` into `range`.
///
/// A degenerate domain maps everything to the start of the range.
pub fn derive_offset(value: f32, domain: (f32, f32), range: (f32, f32)) -> f32 {
    let span = domain.1 - domain.0;
    if span == 0.0 || !span.is_finite() || !value.is_finite() {
        return range.0;
    }
    let t = (value - domain.0) / span;
    range.0 + t * (range.1 - range.0)
}
