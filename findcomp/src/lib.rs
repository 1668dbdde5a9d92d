//! findcomp - connected component extraction for PGM/PPM rasters
//!
//! # Overview
//!
//! findcomp binarizes an 8-bit grayscale raster against a threshold,
//! partitions the foreground into 4-connected regions, and lets callers
//! filter, inspect, and render the result:
//!
//! - PNM I/O (binary PGM and PPM, with color input reduced to grayscale)
//! - Breadth-first flood fill extraction with per-region bounding boxes
//! - Inclusive size-range filtering and summary statistics
//! - Mask and color overlay rendering
//!
//! # Example
//!
//! ```
//! use findcomp::Raster;
//! use findcomp::region::ImageProcessor;
//!
//! let mut samples = vec![0u8; 25];
//! for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
//!     samples[y * 5 + x] = 200;
//! }
//! let raster = Raster::from_samples(5, 5, samples).unwrap();
//!
//! let mut processor = ImageProcessor::new(raster);
//! assert_eq!(processor.extract_components(128, 1), 1);
//! assert_eq!(processor.largest_size(), 4);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use findcomp_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use findcomp_io as io;
pub use findcomp_region as region;
