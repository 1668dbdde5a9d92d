//! Region - one connected component
//!
//! A `Region` is a maximal set of 4-connected foreground pixels. Its size is
//! always derived from the pixel list rather than stored alongside it, so
//! the two can never disagree, and its bounding box is folded incrementally
//! as pixels are appended.

use findcomp_core::Bounds;

/// A connected component in a binarized raster
///
/// Regions are append-only while under construction and treated as
/// immutable, freely aliased values once extraction hands them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: u32,
    pixels: Vec<(u32, u32)>,
    bounds: Bounds,
}

impl Region {
    /// Create an empty region with the given id.
    ///
    /// The bounding box starts in the unset sentinel state.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pixels: Vec::new(),
            bounds: Bounds::UNSET,
        }
    }

    /// Create a region directly from a finished pixel list.
    ///
    /// The bounding box is computed by folding over all pixels.
    pub fn from_pixels(id: u32, pixels: Vec<(u32, u32)>) -> Self {
        let bounds = Bounds::from_points(pixels.iter().copied());
        Self { id, pixels, bounds }
    }

    /// Append one pixel, folding it into the bounding box.
    pub fn add_pixel(&mut self, x: u32, y: u32) {
        self.pixels.push((x, y));
        self.bounds.fold_point(x, y);
    }

    /// The region's id, assigned in discovery order during extraction.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of member pixels. Always equals `pixels().len()`.
    #[inline]
    pub fn size(&self) -> usize {
        self.pixels.len()
    }

    /// Member pixels in discovery order.
    #[inline]
    pub fn pixels(&self) -> &[(u32, u32)] {
        &self.pixels
    }

    /// The minimal bounding box of the member pixels.
    ///
    /// Unset (see [`Bounds::is_set`]) for an empty region.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_region() {
        let region = Region::new(3);
        assert_eq!(region.id(), 3);
        assert_eq!(region.size(), 0);
        assert!(region.pixels().is_empty());
        assert!(!region.bounds().is_set());
    }

    #[test]
    fn test_add_pixel_updates_bounds() {
        let mut region = Region::new(0);
        region.add_pixel(4, 2);
        assert_eq!(region.size(), 1);
        assert_eq!(region.bounds(), Bounds::new(4, 2, 4, 2));

        region.add_pixel(1, 5);
        assert_eq!(region.size(), 2);
        assert_eq!(region.bounds(), Bounds::new(1, 2, 4, 5));
        assert_eq!(region.pixels(), &[(4, 2), (1, 5)]);
    }

    #[test]
    fn test_from_pixels() {
        let region = Region::from_pixels(7, vec![(2, 2), (3, 2), (2, 3)]);
        assert_eq!(region.id(), 7);
        assert_eq!(region.size(), 3);
        assert_eq!(region.bounds(), Bounds::new(2, 2, 3, 3));
    }

    #[test]
    fn test_from_pixels_empty() {
        let region = Region::from_pixels(0, Vec::new());
        assert_eq!(region.size(), 0);
        assert!(!region.bounds().is_set());
    }

    #[test]
    fn test_size_tracks_pixel_list() {
        let mut region = Region::new(0);
        for i in 0..10 {
            region.add_pixel(i, 0);
            assert_eq!(region.size(), region.pixels().len());
        }
    }
}
