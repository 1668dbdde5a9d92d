//! Bounds - axis-aligned bounding boxes
//!
//! A `Bounds` is the minimal rectangle enclosing a set of pixels, stored as
//! inclusive edge coordinates. A freshly created bounds is in an "unset"
//! sentinel state (min edges at `i32::MAX`, max edges at `i32::MIN`) so that
//! folding in the first point initializes all four edges correctly.

/// Inclusive axis-aligned bounding box
///
/// This is a simple Copy type since it is small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Leftmost x coordinate (inclusive)
    pub x_min: i32,
    /// Topmost y coordinate (inclusive)
    pub y_min: i32,
    /// Rightmost x coordinate (inclusive)
    pub x_max: i32,
    /// Bottommost y coordinate (inclusive)
    pub y_max: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNSET
    }
}

impl Bounds {
    /// The sentinel state of a bounds with no points folded in.
    ///
    /// Not a valid rectangle; check [`Bounds::is_set`] before treating the
    /// edges as coordinates.
    pub const UNSET: Bounds = Bounds {
        x_min: i32::MAX,
        y_min: i32::MAX,
        x_max: i32::MIN,
        y_max: i32::MIN,
    };

    /// Create a bounds from explicit inclusive edges.
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Compute the bounds of a point set, or [`Bounds::UNSET`] if empty.
    pub fn from_points<I: IntoIterator<Item = (u32, u32)>>(points: I) -> Self {
        let mut bounds = Self::UNSET;
        for (x, y) in points {
            bounds.fold_point(x, y);
        }
        bounds
    }

    /// Whether at least one point has been folded in.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    /// Expand the bounds to include (x, y).
    #[inline]
    pub fn fold_point(&mut self, x: u32, y: u32) {
        let (x, y) = (x as i32, y as i32);
        self.x_min = self.x_min.min(x);
        self.y_min = self.y_min.min(y);
        self.x_max = self.x_max.max(x);
        self.y_max = self.y_max.max(y);
    }

    /// Width of the rectangle (inclusive edges), 0 if unset.
    #[inline]
    pub fn width(&self) -> u32 {
        if !self.is_set() {
            return 0;
        }
        (self.x_max - self.x_min + 1) as u32
    }

    /// Height of the rectangle (inclusive edges), 0 if unset.
    #[inline]
    pub fn height(&self) -> u32 {
        if !self.is_set() {
            return 0;
        }
        (self.y_max - self.y_min + 1) as u32
    }

    /// Check if a point lies inside the bounds.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Clamp all four edges into `[0, width-1] x [0, height-1]`, swapping
    /// min/max on an axis if clamping inverted them.
    ///
    /// The bounds may be expressed in the coordinates of a raster larger
    /// than the target canvas, so a renderer applies this before drawing.
    /// Returns `None` for an unset bounds or a zero-sized canvas.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Bounds> {
        if !self.is_set() || width == 0 || height == 0 {
            return None;
        }
        let x_hi = (width - 1) as i32;
        let y_hi = (height - 1) as i32;
        let mut x_min = self.x_min.clamp(0, x_hi);
        let mut x_max = self.x_max.clamp(0, x_hi);
        let mut y_min = self.y_min.clamp(0, y_hi);
        let mut y_max = self.y_max.clamp(0, y_hi);
        if x_min > x_max {
            std::mem::swap(&mut x_min, &mut x_max);
        }
        if y_min > y_max {
            std::mem::swap(&mut y_min, &mut y_max);
        }
        Some(Bounds {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_sentinel() {
        let b = Bounds::UNSET;
        assert!(!b.is_set());
        assert_eq!(b.width(), 0);
        assert_eq!(b.height(), 0);
        assert_eq!(Bounds::default(), Bounds::UNSET);
    }

    #[test]
    fn test_fold_single_point() {
        let mut b = Bounds::UNSET;
        b.fold_point(3, 7);
        assert!(b.is_set());
        assert_eq!(b, Bounds::new(3, 7, 3, 7));
        assert_eq!(b.width(), 1);
        assert_eq!(b.height(), 1);
    }

    #[test]
    fn test_fold_expands() {
        let mut b = Bounds::UNSET;
        b.fold_point(5, 5);
        b.fold_point(2, 8);
        b.fold_point(9, 1);
        assert_eq!(b, Bounds::new(2, 1, 9, 8));
        assert_eq!(b.width(), 8);
        assert_eq!(b.height(), 8);
    }

    #[test]
    fn test_from_points() {
        let b = Bounds::from_points([(1, 1), (2, 2), (2, 1)]);
        assert_eq!(b, Bounds::new(1, 1, 2, 2));

        let empty = Bounds::from_points(std::iter::empty());
        assert!(!empty.is_set());
    }

    #[test]
    fn test_contains() {
        let b = Bounds::new(1, 1, 3, 3);
        assert!(b.contains(1, 1));
        assert!(b.contains(3, 3));
        assert!(!b.contains(0, 1));
        assert!(!b.contains(4, 3));
    }

    #[test]
    fn test_clamp_inside() {
        let b = Bounds::new(1, 1, 3, 3);
        assert_eq!(b.clamp_to(10, 10), Some(b));
    }

    #[test]
    fn test_clamp_overhang() {
        let b = Bounds::new(-2, 5, 14, 20);
        assert_eq!(b.clamp_to(10, 10), Some(Bounds::new(0, 5, 9, 9)));
    }

    #[test]
    fn test_clamp_fully_outside_swaps() {
        // A box entirely right of the canvas clamps both x edges to the
        // right border; no inversion remains after the swap rule.
        let b = Bounds::new(20, 2, 25, 4);
        assert_eq!(b.clamp_to(10, 10), Some(Bounds::new(9, 2, 9, 4)));
    }

    #[test]
    fn test_clamp_unset() {
        assert_eq!(Bounds::UNSET.clamp_to(10, 10), None);
        assert_eq!(Bounds::new(0, 0, 1, 1).clamp_to(0, 10), None);
    }
}
