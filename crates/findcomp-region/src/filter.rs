//! Size-based region filtering
//!
//! Narrows an extracted region list to those whose pixel count falls inside
//! an inclusive range. Regions pass through as shared values; nothing about
//! an individual region is recomputed or mutated.

use crate::region::Region;
use std::sync::Arc;

/// Keep the regions whose size lies in `min_size..=max_size`.
///
/// The result preserves the input's relative order. An inverted range
/// (`min_size > max_size`) is legal and yields an empty list, as does an
/// empty input; distinguishing "filtered to empty" from "nothing extracted"
/// is the caller's concern.
pub fn filter_by_size(
    regions: &[Arc<Region>],
    min_size: usize,
    max_size: usize,
) -> Vec<Arc<Region>> {
    regions
        .iter()
        .filter(|r| {
            let size = r.size();
            size >= min_size && size <= max_size
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_of_size(id: u32, size: usize) -> Arc<Region> {
        let pixels = (0..size as u32).map(|x| (x, id)).collect();
        Arc::new(Region::from_pixels(id, pixels))
    }

    #[test]
    fn test_inclusive_range() {
        let regions = vec![
            region_of_size(0, 1),
            region_of_size(1, 3),
            region_of_size(2, 5),
            region_of_size(3, 7),
        ];

        let kept = filter_by_size(&regions, 3, 5);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id(), 1);
        assert_eq!(kept[1].id(), 2);
    }

    #[test]
    fn test_identity_filter() {
        let regions = vec![region_of_size(0, 2), region_of_size(1, 9)];
        let kept = filter_by_size(&regions, 0, usize::MAX);
        assert_eq!(kept.len(), regions.len());
        for (a, b) in regions.iter().zip(kept.iter()) {
            // Same shared region, not a copy
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let regions = vec![region_of_size(0, 4)];
        assert!(filter_by_size(&regions, 10, 2).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_size(&[], 0, usize::MAX).is_empty());
    }

    #[test]
    fn test_preserves_order_and_state() {
        let regions = vec![
            region_of_size(0, 6),
            region_of_size(1, 2),
            region_of_size(2, 6),
        ];
        let kept = filter_by_size(&regions, 5, 10);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id(), 0);
        assert_eq!(kept[1].id(), 2);
        assert_eq!(kept[0].bounds(), regions[0].bounds());
        assert_eq!(kept[0].pixels(), regions[0].pixels());
    }
}
