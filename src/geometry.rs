use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// True when `self` lies entirely inside `outer`; shared edges count as inside.
    pub fn fits_within(&self, outer: &Rect) -> bool {
        self.left >= outer.left
            && self.top >= outer.top
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }

    /// Cut back every edge of `self` that sticks out of `outer`.
    ///
    /// Edges already inside `outer` are left alone, so a rect that starts inside keeps its
    /// origin and only loses width/height on the far side.
    pub fn clamp_into(&self, outer: &Rect) -> Rect {
        let left = self.left.max(outer.left);
        let top = self.top.max(outer.top);
        let right = self.right().min(outer.right());
        let bottom = self.bottom().min(outer.bottom());
        Rect {
            top,
            left,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }
}

/// Area of the region common to every rectangle in `rects`.
///
/// Returns `None` for an empty slice or when the rectangles do not share a region.
/// Rectangles that only touch along an edge share a zero-area region.
pub fn intersect_rectangles(rects: &[Rect]) -> Option<f32> {
    let (first, rest) = rects.split_first()?;
    let mut common = *first;
    for rect in rest {
        let left = common.left.max(rect.left);
        let top = common.top.max(rect.top);
        let right = common.right().min(rect.right());
        let bottom = common.bottom().min(rect.bottom());
        if right < left || bottom < top {
            return None;
        }
        common = Rect {
            top,
            left,
            width: right - left,
            height: bottom - top,
        };
    }
    Some(common.width * common.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_partial_overlap() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
        ];
        assert_eq!(intersect_rectangles(&rects), Some(25.0));
    }

    #[test]
    fn intersect_disjoint_is_none() {
        let rects = [
            Rect::new(0.0, 0.0, 5.0, 5.0),
            Rect::new(10.0, 10.0, 5.0, 5.0),
        ];
        assert_eq!(intersect_rectangles(&rects), None);
    }

    #[test]
    fn intersect_empty_is_none() {
        assert_eq!(intersect_rectangles(&[]), None);
    }

    #[test]
    fn intersect_single_rect_is_its_area() {
        assert_eq!(
            intersect_rectangles(&[Rect::new(3.0, 4.0, 6.0, 7.0)]),
            Some(42.0)
        );
    }

    #[test]
    fn intersect_is_mutual_not_pairwise() {
        // Each pair overlaps, but the three share only the 5x5 corner square.
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 5.0, 10.0, 10.0),
        ];
        assert_eq!(intersect_rectangles(&rects), Some(25.0));
    }

    #[test]
    fn intersect_touching_edges_is_zero() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 10.0, 10.0, 10.0),
        ];
        assert_eq!(intersect_rectangles(&rects), Some(0.0));
    }

    #[test]
    fn fits_within_includes_shared_edges() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(Rect::new(0.0, 0.0, 100.0, 100.0).fits_within(&outer));
        assert!(!Rect::new(-1.0, 0.0, 10.0, 10.0).fits_within(&outer));
        assert!(!Rect::new(95.0, 0.0, 10.0, 10.0).fits_within(&outer));
    }

    #[test]
    fn clamp_into_cuts_overhanging_edges() {
        let outer = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let clamped = Rect::new(185.5, 240.0, 250.0, 1000.0).clamp_into(&outer);
        assert_eq!(clamped, Rect::new(185.5, 240.0, 250.0, 814.5));

        let clamped = Rect::new(-160.5, 240.0, 250.0, 1000.0).clamp_into(&outer);
        assert_eq!(clamped, Rect::new(0.0, 240.0, 250.0, 839.5));
    }

    #[test]
    fn clamp_into_disjoint_collapses_to_zero() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let clamped = Rect::new(200.0, 200.0, 10.0, 10.0).clamp_into(&outer);
        assert_eq!(clamped.width, 0.0);
        assert_eq!(clamped.height, 0.0);
        assert_eq!(clamped.area(), 0.0);
    }
}
