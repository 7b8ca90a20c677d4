//! 2D point/vector helpers on top of `glam::Vec2`
//!
//! Positions live on the integer pixel grid: every update rounds its result
//! back to whole coordinates.

use glam::Vec2;

/// Squared length below which a vector counts as zero
const ZERO_EPSILON_SQ: f32 = 1e-12;

/// Unit vector in the direction of `v`, or `None` for a zero-length vector
#[inline]
pub fn unit(v: Vec2) -> Option<Vec2> {
    if v.length_squared() <= ZERO_EPSILON_SQ {
        None
    } else {
        Some(v / v.length())
    }
}

/// Round both components up to the next whole pixel
#[inline]
pub fn ceil_to_grid(p: Vec2) -> Vec2 {
    p.ceil()
}

/// Round each component to a whole pixel, away from `origin` on that axis.
///
/// Components that moved in the positive direction are rounded up, negative
/// ones down, so the rounded point is never closer to `origin` than `p`.
#[inline]
pub fn round_away_from(p: Vec2, origin: Vec2) -> Vec2 {
    let round = |value: f32, from: f32| {
        if value >= from { value.ceil() } else { value.floor() }
    };
    Vec2::new(round(p.x, origin.x), round(p.y, origin.y))
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_normalizes() {
        let u = unit(Vec2::new(3.0, 4.0)).unwrap();
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert!((u.x - 0.6).abs() < 1e-6);
        assert!((u.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_unit_zero_is_none() {
        assert_eq!(unit(Vec2::ZERO), None);
    }

    #[test]
    fn test_ceil_to_grid() {
        assert_eq!(ceil_to_grid(Vec2::new(1.2, -1.2)), Vec2::new(2.0, -1.0));
        assert_eq!(ceil_to_grid(Vec2::new(5.0, 5.0)), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_round_away_from_origin() {
        let origin = Vec2::new(10.0, 10.0);
        assert_eq!(
            round_away_from(Vec2::new(12.3, 7.6), origin),
            Vec2::new(13.0, 7.0)
        );
    }
}
