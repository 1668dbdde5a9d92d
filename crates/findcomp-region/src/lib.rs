//! findcomp-region - Connected component extraction for findcomp
//!
//! This crate is the analysis core of the workspace:
//!
//! - **Extraction** - binarize a grayscale raster against a threshold and
//!   partition the foreground into 4-connected regions via breadth-first
//!   flood fill
//! - **Filtering** - narrow a region list to an inclusive size range
//! - **Statistics** - pure queries over the current region list
//!
//! Extraction and filtering are total: given a well-formed raster (which is
//! the only kind [`findcomp_core::Raster`] can represent) they cannot fail,
//! so none of these APIs return `Result`.
//!
//! # Examples
//!
//! ```
//! use findcomp_core::Raster;
//! use findcomp_region::ImageProcessor;
//!
//! // A 5x5 raster with a 2x2 bright block at (1,1)
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

pub mod extract;
pub mod filter;
pub mod processor;
pub mod region;

pub use extract::extract_components;
pub use filter::filter_by_size;
pub use processor::ImageProcessor;
pub use region::Region;
