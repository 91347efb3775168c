//! Rendered item rectangles.
//!
//! The renderer lays out the selected items on screen and reports each one's
//! bounding box in a shared coordinate space (x grows to the right, y grows
//! downward).  These boxes are per-call inputs; nothing here is stored.

use serde::{Deserialize, Serialize};

use super::catalog::ItemId;

/// Bounding box of one rendered clothing item.
///
/// Coordinates are floating point because they come straight from layout.
/// Nothing is validated: negative sizes or NaN coordinates simply make every
/// comparison fail, which reads as "not touching".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClothingItemPosition {
    pub id: ItemId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClothingItemPosition {
    pub fn new(id: ItemId, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the rightmost X coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottommost Y coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns `true` if the two boxes overlap or lie within `tolerance` of
    /// each other on both axes.
    ///
    /// A gap of exactly `tolerance` still counts as touching.
    pub fn touches(&self, other: &ClothingItemPosition, tolerance: f64) -> bool {
        spans_touch(self.x, self.right(), other.x, other.right(), tolerance)
            && spans_touch(self.y, self.bottom(), other.y, other.bottom(), tolerance)
    }
}

/// Returns `true` if the 1-D spans `[a_start, a_end]` and `[b_start, b_end]`
/// overlap once each end is extended by `tolerance`.
///
/// Equivalent to `!(a_end + t < b_start || b_end + t < a_start)` for finite
/// input, but any NaN makes the spans not touch.
fn spans_touch(a_start: f64, a_end: f64, b_start: f64, b_end: f64, tolerance: f64) -> bool {
    a_end + tolerance >= b_start && b_end + tolerance >= a_start
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> ClothingItemPosition {
        ClothingItemPosition::new(Uuid::new_v4(), x, y, w, h)
    }

    #[test]
    fn test_right_returns_x_plus_width() {
        assert_eq!(rect(100.0, 0.0, 50.0, 10.0).right(), 150.0);
    }

    #[test]
    fn test_bottom_returns_y_plus_height() {
        assert_eq!(rect(0.0, 40.0, 10.0, 60.0).bottom(), 100.0);
    }

    #[test]
    fn test_overlapping_boxes_touch() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(50.0, 50.0, 100.0, 100.0);
        assert!(a.touches(&b, 0.0));
    }

    #[test]
    fn test_gap_equal_to_tolerance_touches() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(110.0, 0.0, 100.0, 100.0);
        assert!(a.touches(&b, 10.0));
        assert!(b.touches(&a, 10.0), "touching is symmetric");
    }

    #[test]
    fn test_gap_beyond_tolerance_does_not_touch() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(110.5, 0.0, 100.0, 100.0);
        assert!(!a.touches(&b, 10.0));
    }

    #[test]
    fn test_horizontal_overlap_alone_is_not_enough() {
        // Same column, far apart vertically.
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(0.0, 300.0, 100.0, 100.0);
        assert!(!a.touches(&b, 10.0));
    }

    #[test]
    fn test_nan_coordinates_never_touch() {
        let a = rect(f64::NAN, 0.0, 100.0, 100.0);
        let b = rect(0.0, 0.0, 100.0, 100.0);
        assert!(!a.touches(&b, 10.0));
        assert!(!b.touches(&a, 10.0));
    }
}
