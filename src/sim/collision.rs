//! Circle-vs-rectangle collision testing
//!
//! Obstacles are axis-aligned slabs and the craft is a circle, so the whole
//! collision story is one primitive: clamp the circle center to the
//! rectangle to find the nearest point, then compare squared distances.

/// Axis-aligned rectangle; `y` grows downward, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Does a circle overlap an axis-aligned rectangle?
///
/// Boundary contact counts as a hit (`<=`, not `<`).
pub fn circle_rect_overlap(cx: f32, cy: f32, radius: f32, rect: Rect) -> bool {
    let nx = cx.clamp(rect.x, rect.x + rect.w);
    let ny = cy.clamp(rect.y, rect.y + rect.h);
    let dx = cx - nx;
    let dy = cy - ny;
    dx * dx + dy * dy <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_with_nearby_rect() {
        // Circle pokes into the rect's lower edge
        let rect = Rect {
            x: 90.0,
            y: 0.0,
            w: 60.0,
            h: 40.0,
        };
        assert!(circle_rect_overlap(100.0, 50.0, 16.0, rect));
    }

    #[test]
    fn test_miss_distant_rect() {
        let rect = Rect {
            x: 200.0,
            y: 0.0,
            w: 60.0,
            h: 40.0,
        };
        assert!(!circle_rect_overlap(100.0, 50.0, 16.0, rect));
    }

    #[test]
    fn test_tangent_contact_is_a_hit() {
        // Center exactly one radius below the edge
        let rect = Rect {
            x: 90.0,
            y: 0.0,
            w: 60.0,
            h: 40.0,
        };
        assert!(circle_rect_overlap(100.0, 56.0, 16.0, rect));
        // A hair further is a miss
        assert!(!circle_rect_overlap(100.0, 56.01, 16.0, rect));
    }

    #[test]
    fn test_center_inside_rect() {
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        assert!(circle_rect_overlap(5.0, 5.0, 0.5, rect));
    }

    #[test]
    fn test_corner_contact() {
        // Nearest point is the corner at (10, 10); distance 5 along (3,4)
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        assert!(circle_rect_overlap(13.0, 14.0, 5.0, rect));
        assert!(!circle_rect_overlap(13.0, 14.0, 4.99, rect));
    }

    proptest! {
        /// Growing the radius can never turn a hit into a miss
        #[test]
        fn overlap_is_monotonic_in_radius(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 0.0f32..300.0,
            h in 0.0f32..300.0,
            radius in 0.0f32..100.0,
            extra in 0.0f32..100.0,
        ) {
            let rect = Rect { x, y, w, h };
            if circle_rect_overlap(cx, cy, radius, rect) {
                prop_assert!(circle_rect_overlap(cx, cy, radius + extra, rect));
            }
        }

        /// A center inside the rect always collides, whatever the radius
        #[test]
        fn center_inside_always_hits(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..300.0,
            h in 1.0f32..300.0,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            radius in 0.0f32..100.0,
        ) {
            let rect = Rect { x, y, w, h };
            prop_assert!(circle_rect_overlap(x + fx * w, y + fy * h, radius, rect));
        }
    }
}
