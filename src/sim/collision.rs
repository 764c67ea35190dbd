//! Collision predicates
//!
//! Everything in Backfire collides as circles; the only other geometry is
//! the arena rectangle that retires stray bullets.

use glam::Vec2;

/// Circle-circle overlap test
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let r = a_radius + b_radius;
    a_pos.distance_squared(b_pos) <= r * r
}

/// Whether a point is inside the arena's drawable rectangle [0,w]x[0,h]
pub fn in_arena(pos: Vec2, arena: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= arena.x && pos.y >= 0.0 && pos.y <= arena.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_overlap_touching() {
        // Centers exactly radius-sum apart count as touching
        assert!(circles_overlap(
            Vec2::ZERO,
            5.0,
            Vec2::new(10.0, 0.0),
            5.0
        ));
        assert!(!circles_overlap(
            Vec2::ZERO,
            5.0,
            Vec2::new(10.1, 0.0),
            5.0
        ));
    }

    #[test]
    fn test_circles_overlap_contained() {
        // One circle fully inside another still overlaps
        assert!(circles_overlap(Vec2::ZERO, 20.0, Vec2::new(2.0, 2.0), 1.0));
    }

    #[test]
    fn test_in_arena() {
        let arena = Vec2::new(800.0, 600.0);
        assert!(in_arena(Vec2::new(0.0, 0.0), arena));
        assert!(in_arena(Vec2::new(800.0, 600.0), arena));
        assert!(!in_arena(Vec2::new(-0.1, 300.0), arena));
        assert!(!in_arena(Vec2::new(400.0, 600.1), arena));
    }
}
