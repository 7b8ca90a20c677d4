//! Rectangular playing field

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned field rectangle in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Top-left corner
    pub top_left: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(
            Vec2::new(FIELD_LEFT, FIELD_TOP),
            Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        )
    }
}

impl Field {
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self { top_left, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.top_left.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.top_left.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top_left.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top_left.y + self.size.y
    }

    /// Horizontal center line, splitting the two team halves
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.top_left.x + self.size.x / 2.0
    }

    /// Whether `p` lies inside the rectangle, edges included
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Push a point back inside, one edge at a time.
    ///
    /// Single pass: the correction for one edge is not re-checked against the
    /// opposite edge.
    pub fn clamp_point(&self, mut p: Vec2) -> Vec2 {
        if p.x < self.left() {
            p.x += self.left() - p.x;
        }
        if p.x > self.right() {
            p.x += self.right() - p.x;
        }
        if p.y > self.bottom() {
            p.y += self.bottom() - p.y;
        }
        if p.y < self.top() {
            p.y += self.top() - p.y;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_edges() {
        let field = Field::default();
        assert_eq!(field.left(), 300.0);
        assert_eq!(field.right(), 980.0);
        assert_eq!(field.top(), 100.0);
        assert_eq!(field.bottom(), 620.0);
        assert_eq!(field.center_x(), 640.0);
    }

    #[test]
    fn test_clamp_each_edge() {
        let field = Field::default();
        assert_eq!(field.clamp_point(Vec2::new(250.0, 300.0)).x, 300.0);
        assert_eq!(field.clamp_point(Vec2::new(1000.0, 300.0)).x, 980.0);
        assert_eq!(field.clamp_point(Vec2::new(500.0, 50.0)).y, 100.0);
        assert_eq!(field.clamp_point(Vec2::new(500.0, 700.0)).y, 620.0);
    }

    #[test]
    fn test_clamp_leaves_inside_points() {
        let field = Field::default();
        let p = Vec2::new(400.0, 400.0);
        assert_eq!(field.clamp_point(p), p);
        assert!(field.contains(p));
    }
}
