//! Shape tessellation for 2D primitives
//!
//! Everything renders as a flat triangle list in playfield pixel
//! coordinates (y down); the pipeline maps pixels to NDC.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle with a vertical color gradient
pub fn gradient_quad(
    pos: Vec2,
    size: Vec2,
    top_color: [f32; 4],
    bottom_color: [f32; 4],
) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, top_color),
        Vertex::new(x1, y0, top_color),
        Vertex::new(x0, y1, bottom_color),
        Vertex::new(x0, y1, bottom_color),
        Vertex::new(x1, y0, top_color),
        Vertex::new(x1, y1, bottom_color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Generate vertices for a filled axis-aligned ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Rotate vertices in place around a pivot.
///
/// Positive angles turn clockwise in the y-down playfield space.
pub fn rotate_about(vertices: &mut [Vertex], pivot: Vec2, angle: f32) {
    let rotation = Vec2::from_angle(angle);
    for vertex in vertices {
        let p = Vec2::new(vertex.position[0], vertex.position[1]) - pivot;
        let r = rotation.rotate(p) + pivot;
        vertex.position = [r.x, r.y];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [1.0, 2.0]));
        assert!(verts.iter().any(|v| v.position == [4.0, 6.0]));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut verts = [Vertex::new(2.0, 1.0, [1.0; 4])];
        rotate_about(&mut verts, Vec2::new(1.0, 1.0), FRAC_PI_2);
        assert!((verts[0].position[0] - 1.0).abs() < 1e-5);
        assert!((verts[0].position[1] - 2.0).abs() < 1e-5);
    }
}
