//! Shape generation for 2D primitives (triangle lists)

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Filled axis-aligned rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, b, color),
    ]
}

/// Rectangle outline drawn inside `r` with the given stroke width
pub fn rect_outline(r: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(r.width / 2.0).min(r.height / 2.0);
    let edges = [
        // top, bottom, left, right (sides between top and bottom strips)
        Rect::new(r.x, r.y, r.width, t),
        Rect::new(r.x, r.bottom() - t, r.width, t),
        Rect::new(r.x, r.y + t, t, r.height - 2.0 * t),
        Rect::new(r.right() - t, r.y + t, t, r.height - 2.0 * t),
    ];

    let mut vertices = Vec::with_capacity(24);
    for edge in &edges {
        vertices.extend(rect(edge, color));
    }
    vertices
}

/// Filled circle as a fan of `segments` triangles around the center
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let step = TAU / segments.max(1) as f32;
    let rim = |i: u32| center + Vec2::from_angle(i as f32 * step) * radius;
    let at = |p: Vec2| Vertex::new(p.x, p.y, color);

    (0..segments)
        .flat_map(|i| [at(center), at(rim(i)), at(rim(i + 1))])
        .collect()
}
