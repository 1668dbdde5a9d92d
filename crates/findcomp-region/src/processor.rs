//! ImageProcessor - the per-run analysis context
//!
//! An `ImageProcessor` owns exactly one raster and the current region list
//! extracted from it. Extraction and filtering each replace the list
//! wholesale; the regions themselves are shared, read-only values, so
//! holders of earlier snapshots keep seeing the regions they were given.

use crate::extract::extract_components;
use crate::filter::filter_by_size;
use crate::region::Region;
use findcomp_core::Raster;
use std::sync::Arc;

/// Analysis context owning one raster and one region list
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    raster: Raster,
    regions: Vec<Arc<Region>>,
}

impl ImageProcessor {
    /// Create a processor for a decoded raster with no regions yet.
    pub fn new(raster: Raster) -> Self {
        Self {
            raster,
            regions: Vec::new(),
        }
    }

    /// The raster under analysis.
    #[inline]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Run extraction, replacing the current region list.
    ///
    /// See [`extract_components`] for the algorithm. Returns the number of
    /// regions retained.
    pub fn extract_components(&mut self, threshold: u8, min_valid_size: usize) -> usize {
        self.regions = extract_components(&self.raster, threshold, min_valid_size);
        self.regions.len()
    }

    /// Narrow the region list to sizes in `min_size..=max_size`.
    ///
    /// Returns the number of regions remaining. Filtering to zero regions
    /// is an ordinary result, not an error; callers that care can compare
    /// the count before and after.
    pub fn filter_components_by_size(&mut self, min_size: usize, max_size: usize) -> usize {
        self.regions = filter_by_size(&self.regions, min_size, max_size);
        self.regions.len()
    }

    /// Number of regions in the current list.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.regions.len()
    }

    /// Size of the largest region, or 0 if the list is empty.
    pub fn largest_size(&self) -> usize {
        self.regions.iter().map(|r| r.size()).max().unwrap_or(0)
    }

    /// Size of the smallest region, or 0 if the list is empty.
    pub fn smallest_size(&self) -> usize {
        self.regions.iter().map(|r| r.size()).min().unwrap_or(0)
    }

    /// The current region list, in extraction order.
    #[inline]
    pub fn regions(&self) -> &[Arc<Region>] {
        &self.regions
    }
}
