// File: crates/chart-core/src/scale.rs
// Summary: Value (Y) and index (X) scale transforms.

use crate::types::MIN_DOMAIN_SPAN;

/// Divisor used for a domain; never smaller than `MIN_DOMAIN_SPAN`.
#[inline]
pub fn domain_span(domain_min: f64, domain_max: f64) -> f64 {
    (domain_max - domain_min).max(MIN_DOMAIN_SPAN)
}

/// Map `value` from `[domain_min, domain_max]` onto `[range_min, range_max]`.
///
/// Non-finite input yields 0 instead of propagating NaN into geometry.
#[inline]
pub fn to_pixel(value: f64, domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> f64 {
    let px = range_min + (value - domain_min) / domain_span(domain_min, domain_max) * (range_max - range_min);
    if px.is_finite() { px } else { 0.0 }
}

/// Inverse of [`to_pixel`].
#[inline]
pub fn from_pixel(px: f64, domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> f64 {
    let extent = range_max - range_min;
    if extent == 0.0 || !px.is_finite() {
        return domain_min;
    }
    domain_min + (px - range_min) / extent * domain_span(domain_min, domain_max)
}

/// Linear scale between a value domain and a pixel range.
///
/// With `inverted` set, `domain_min` lands on `range_max`, which is what a
/// vertical axis wants: larger values render higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_min: f64,
    pub range_max: f64,
    pub inverted: bool,
}

impl LinearScale {
    pub fn new(domain_min: f64, domain_max: f64, range_min: f64, range_max: f64) -> Self {
        Self { domain_min, domain_max, range_min, range_max, inverted: false }
    }

    /// Vertical scale: `top_px` receives `domain_max`, `bottom_px` receives `domain_min`.
    pub fn vertical(domain_min: f64, domain_max: f64, top_px: f64, bottom_px: f64) -> Self {
        Self { domain_min, domain_max, range_min: top_px, range_max: bottom_px, inverted: true }
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        if self.inverted {
            to_pixel(value, self.domain_min, self.domain_max, self.range_max, self.range_min)
        } else {
            to_pixel(value, self.domain_min, self.domain_max, self.range_min, self.range_max)
        }
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        if self.inverted {
            from_pixel(px, self.domain_min, self.domain_max, self.range_max, self.range_min)
        } else {
            from_pixel(px, self.domain_min, self.domain_max, self.range_min, self.range_max)
        }
    }
}

/// Horizontal category scale: `count` evenly spaced slots across `[left_px, left_px + width_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f64,
    pub width_px: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(left_px: f64, width_px: f64, count: usize) -> Self {
        Self { left_px, width_px, count }
    }

    /// Slot position. A single slot sits on the left edge.
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        if self.count < 2 {
            return self.left_px;
        }
        self.left_px + (index as f64 / (self.count - 1) as f64) * self.width_px
    }
}
