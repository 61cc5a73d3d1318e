//! Axis-aligned overlap tests.

use bevy::math::{Rect, Vec2};

/// Rectangle from a bottom-left corner and a size.
#[inline]
pub fn rect_xywh(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect {
        min: Vec2::new(x, y),
        max: Vec2::new(x + w, y + h),
    }
}

/// Strict AABB intersection: rectangles that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// True if `subject` overlaps any of `targets`. Stops at the first hit.
pub fn overlaps_any(subject: Rect, targets: impl IntoIterator<Item = Rect>) -> bool {
    targets.into_iter().any(|t| overlaps(subject, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersecting_boxes_overlap() {
        let a = rect_xywh(0.0, 0.0, 10.0, 10.0);
        let b = rect_xywh(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(a, b));
        assert!(overlaps(b, a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = rect_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, rect_xywh(10.0, 0.0, 5.0, 5.0)));
        assert!(!overlaps(a, rect_xywh(0.0, 10.0, 5.0, 5.0)));
        assert!(!overlaps(a, rect_xywh(-5.0, -5.0, 5.0, 5.0)));
    }

    #[test]
    fn containment_overlaps() {
        let outer = rect_xywh(0.0, 0.0, 100.0, 100.0);
        let inner = rect_xywh(40.0, 40.0, 1.0, 1.0);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn single_axis_overlap_is_not_enough() {
        let a = rect_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, rect_xywh(5.0, 20.0, 10.0, 10.0)));
        assert!(!overlaps(a, rect_xywh(20.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn any_reports_first_hit() {
        let a = rect_xywh(0.0, 0.0, 10.0, 10.0);
        let far = rect_xywh(50.0, 50.0, 1.0, 1.0);
        let near = rect_xywh(9.0, 9.0, 1.0, 1.0);
        assert!(!overlaps_any(a, [far]));
        assert!(overlaps_any(a, [far, near]));
        assert!(!overlaps_any(a, std::iter::empty()));
    }
}
