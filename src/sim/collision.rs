//! Hit and boundary tests
//!
//! Everything is a circle: entities share one unified radius for drawing and
//! hit testing, so a pointer hit is a point-in-circle check.

use glam::Vec2;

/// True if `point` lies inside or on the circle (squared distance <= r²)
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    center.distance_squared(point) <= radius * radius
}

/// True once a circle has fully crossed the top edge (y = 0) of the play area
///
/// Screen coordinates: y grows downward, so "above the top" is negative y.
#[inline]
pub fn exited_top(center: Vec2, radius: f32) -> bool {
    center.y < -radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_circle() {
        let center = Vec2::new(100.0, 500.0);
        assert!(point_in_circle(center, center, 40.0));
        assert!(point_in_circle(Vec2::new(120.0, 520.0), center, 40.0));
        assert!(!point_in_circle(Vec2::new(141.0, 500.0), center, 40.0));
    }

    #[test]
    fn test_point_on_rim_counts() {
        let center = Vec2::new(0.0, 0.0);
        assert!(point_in_circle(Vec2::new(3.0, 4.0), center, 5.0));
    }

    #[test]
    fn test_exited_top() {
        assert!(!exited_top(Vec2::new(50.0, 10.0), 40.0));
        // Partially visible
        assert!(!exited_top(Vec2::new(50.0, -39.0), 40.0));
        // Trailing edge exactly on the boundary is still on screen
        assert!(!exited_top(Vec2::new(50.0, -40.0), 40.0));
        assert!(exited_top(Vec2::new(50.0, -40.5), 40.0));
    }
}
