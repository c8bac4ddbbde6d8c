//! Shape generation for 2D primitives

use glam::Vec2;

use super::DrawRect;
use super::vertex::Vertex;

/// Two triangles covering the rectangle at `pos` (bottom-left) with `size`
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]
}

/// Tessellate a draw list into a triangle list, preserving draw order
pub fn tessellate(rects: &[DrawRect]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(rects.len() * 6);
    for r in rects {
        vertices.extend_from_slice(&rect(r.position.into(), r.size.into(), r.color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(-1.0, -1.0), Vec2::new(2.0, 0.5), [1.0; 4]);
        assert_eq!(v[0].position, [-1.0, -1.0]);
        assert_eq!(v[2].position, [1.0, -0.5]);
        assert_eq!(v[5].position, [-1.0, -0.5]);
    }

    #[test]
    fn test_tessellate_keeps_order() {
        let rects = [
            DrawRect {
                position: [0.0, 0.0],
                size: [1.0, 1.0],
                color: [1.0, 0.0, 0.0, 1.0],
            },
            DrawRect {
                position: [2.0, 0.0],
                size: [1.0, 1.0],
                color: [0.0, 0.0, 1.0, 1.0],
            },
        ];
        let vertices = tessellate(&rects);
        assert_eq!(vertices.len(), 12);
        assert_eq!(vertices[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(vertices[6].position, [2.0, 0.0]);
    }
}
