//! findcomp-core - Core data types for the findcomp component analyzer
//!
//! This crate provides the leaf data objects shared by the rest of the
//! workspace:
//!
//! - [`Raster`] / [`RasterMut`] - an 8-bit grayscale image buffer with
//!   shared (`Arc`) ownership and an explicit mutable form
//! - [`Bounds`] - an inclusive axis-aligned bounding box with an unset
//!   sentinel state
//!
//! # Examples
//!
//! ```
//! use findcomp_core::{Bounds, Raster};
//!
//! let raster = Raster::from_samples(2, 2, vec![0, 255, 255, 0]).unwrap();
//! assert_eq!(raster.get_sample(1, 0), Some(255));
//!
//! let bounds = Bounds::from_points([(1, 0), (0, 1)]);
//! assert_eq!((bounds.width(), bounds.height()), (2, 2));
//! ```

pub mod bounds;
pub mod error;
pub mod raster;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use raster::{MAX_SAMPLE, Raster, RasterMut};
