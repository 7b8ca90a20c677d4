//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (top_left.x, top_left.y);
    let (x1, y1) = (top_left.x + size.x, top_left.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle outline drawn `width` pixels inward
pub fn rect_outline(top_left: Vec2, size: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = width.min(size.x / 2.0).min(size.y / 2.0);
    let inner_h = size.y - 2.0 * w;

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom bands span the full width
    vertices.extend(rect(top_left, Vec2::new(size.x, w), color));
    vertices.extend(rect(
        Vec2::new(top_left.x, top_left.y + size.y - w),
        Vec2::new(size.x, w),
        color,
    ));
    // Left and right bands fill the gap between them
    vertices.extend(rect(
        Vec2::new(top_left.x, top_left.y + w),
        Vec2::new(w, inner_h),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(top_left.x + size.x - w, top_left.y + w),
        Vec2::new(w, inner_h),
        color,
    ));

    vertices
}
