//! Anchor resolution
//!
//! Converts a widget's anchor, pixel offset, and size into its final
//! screen position within a resolved container rectangle.

use crate::foundation::math::{Rect, Vec2};

use super::core::Anchor;

/// Resolve a non-`Manual` anchor to an absolute screen position
///
/// The horizontal component is one of {0, cw/2 - w/2, cw - w} and the
/// vertical one of {0, ch/2 - h/2, ch - h}, selected by the anchor, plus
/// the pixel offset, plus the container's origin.
///
/// `Manual` widgets do not use this formula; their raw coordinates are
/// added to the container origin directly.
pub fn anchored_position(anchor: Anchor, offset: Vec2, size: Vec2, container: Rect) -> Vec2 {
    let Some((fx, fy)) = anchor.factors() else {
        // Manual: the caller applies raw coordinates; treat as top-left
        // so misuse stays visible instead of producing NaN
        return Vec2::new(container.x + offset.x, container.y + offset.y);
    };

    Vec2::new(
        container.x + fx * (container.width - size.x) + offset.x,
        container.y + fy * (container.height - size.y) + offset.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const ANCHORS: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleLeft,
        Anchor::MiddleCenter,
        Anchor::MiddleRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    #[test]
    fn test_top_left_is_origin_plus_offset() {
        let pos = anchored_position(
            Anchor::TopLeft,
            Vec2::new(10.0, 20.0),
            Vec2::new(100.0, 50.0),
            Rect::new(0.0, 0.0, 800.0, 600.0),
        );
        assert_relative_eq!(pos.x, 10.0);
        assert_relative_eq!(pos.y, 20.0);
    }

    #[test]
    fn test_center_anchor_centers_widget() {
        let pos = anchored_position(
            Anchor::MiddleCenter,
            Vec2::zeros(),
            Vec2::new(100.0, 50.0),
            Rect::new(0.0, 0.0, 800.0, 600.0),
        );
        assert_relative_eq!(pos.x, 350.0);
        assert_relative_eq!(pos.y, 275.0);
    }

    #[test]
    fn test_bottom_right_hugs_corner() {
        let pos = anchored_position(
            Anchor::BottomRight,
            Vec2::zeros(),
            Vec2::new(100.0, 50.0),
            Rect::new(0.0, 0.0, 800.0, 600.0),
        );
        assert_relative_eq!(pos.x, 700.0);
        assert_relative_eq!(pos.y, 550.0);
    }

    #[test]
    fn test_container_origin_is_added() {
        let pos = anchored_position(
            Anchor::TopLeft,
            Vec2::new(5.0, 5.0),
            Vec2::new(10.0, 10.0),
            Rect::new(100.0, 200.0, 300.0, 300.0),
        );
        assert_relative_eq!(pos.x, 105.0);
        assert_relative_eq!(pos.y, 205.0);
    }

    /// All nine anchors against randomized containers, sizes, and offsets
    /// must match the closed-form formula.
    #[test]
    fn test_all_anchors_match_closed_form() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let container = Rect::new(
                rng.gen_range(-500.0..500.0),
                rng.gen_range(-500.0..500.0),
                rng.gen_range(1.0..2000.0),
                rng.gen_range(1.0..2000.0),
            );
            let size = Vec2::new(rng.gen_range(0.0..500.0), rng.gen_range(0.0..500.0));
            let offset = Vec2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));

            for anchor in ANCHORS {
                let (fx, fy) = anchor.factors().unwrap();
                let expected_x = container.x + fx * (container.width - size.x) + offset.x;
                let expected_y = container.y + fy * (container.height - size.y) + offset.y;

                let pos = anchored_position(anchor, offset, size, container);
                assert_relative_eq!(pos.x, expected_x, epsilon = 1e-4);
                assert_relative_eq!(pos.y, expected_y, epsilon = 1e-4);
            }
        }
    }
}
