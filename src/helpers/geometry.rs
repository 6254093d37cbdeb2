// =============================================================================
// Geometry Helpers
// =============================================================================

use glam::Vec2;

/// Distance from `point` to the closest point on segment `a`-`b`.
///
/// A degenerate segment (`a == b`) is treated as a single point.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance(a);
    }

    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Axis-aligned bounds of a segment grown by `margin` on every side.
pub fn segment_contains_in_box(point: Vec2, a: Vec2, b: Vec2, margin: f32) -> bool {
    let min = a.min(b) - Vec2::splat(margin);
    let max = a.max(b) + Vec2::splat(margin);
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// True when two circles overlap strictly (touching does not count).
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_distance_projects_onto_interior() {
        let d = distance_to_segment(Vec2::new(5.0, 3.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(d, 3.0);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let d = distance_to_segment(Vec2::new(13.0, 4.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let d = distance_to_segment(Vec2::new(3.0, 4.0), Vec2::ZERO, Vec2::ZERO);
        assert_eq!(d, 5.0);
    }

    #[test]
    fn touching_circles_do_not_overlap() {
        assert!(!circles_overlap(Vec2::ZERO, 1.0, Vec2::new(2.0, 0.0), 1.0));
        assert!(circles_overlap(Vec2::ZERO, 1.0, Vec2::new(1.9, 0.0), 1.0));
    }
}
