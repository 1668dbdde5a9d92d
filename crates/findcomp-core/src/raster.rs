//! Raster - the grayscale image container
//!
//! A `Raster` is a width x height grid of single-byte intensity samples,
//! stored row-major (`index = y * width + x`).
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership). To modify
//! sample data, convert to `RasterMut` via [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`. Once a raster
//! has been handed to an analysis pass it is treated as immutable.

use crate::error::{Error, Result};
use std::sync::Arc;

/// The only supported maximum sample value (8-bit grayscale).
pub const MAX_SAMPLE: u8 = 255;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Maximum sample value (always 255 for this library)
    max_sample: u8,
    /// Row-major sample data, one byte per pixel
    samples: Vec<u8>,
}

/// Grayscale raster image
///
/// # Examples
///
/// ```
/// use findcomp_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.max_sample(), 255);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with all samples initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let samples = vec![0u8; width as usize * height as usize];
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                max_sample: MAX_SAMPLE,
                samples,
            }),
        })
    }

    /// Create a raster from an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions, or
    /// [`Error::SampleCountMismatch`] if `samples.len() != width * height`.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                max_sample: MAX_SAMPLE,
                samples,
            }),
        })
    }

    /// Get the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the maximum sample value (always 255).
    #[inline]
    pub fn max_sample(&self) -> u8 {
        self.inner.max_sample
    }

    /// Get the number of pixels (`width * height`).
    #[inline]
    pub fn area(&self) -> usize {
        self.inner.samples.len()
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.inner.samples
    }

    /// Get a sample value at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.samples[(y * self.inner.width + x) as usize])
    }

    /// Get a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.inner.width && y < self.inner.height);
        self.inner.samples[(y * self.inner.width + x) as usize]
    }

    /// Get a slice covering one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.inner.width) as usize;
        &self.inner.samples[start..start + self.inner.width as usize]
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the sample data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                max_sample: self.inner.max_sample,
                samples: self.inner.samples.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Allows modification of sample data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the raster width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the raster height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the maximum sample value.
    #[inline]
    pub fn max_sample(&self) -> u8 {
        self.inner.max_sample
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.inner.samples
    }

    /// Get mutable access to the sample data.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.inner.samples
    }

    /// Get a sample value at (x, y).
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.samples[(y * self.inner.width + x) as usize])
    }

    /// Set a sample value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordOutOfBounds`] if the coordinate is outside
    /// the raster.
    pub fn set_sample(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::CoordOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.inner.samples[(y * self.inner.width + x) as usize] = val;
        Ok(())
    }

    /// Set a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, val: u8) {
        debug_assert!(x < self.inner.width && y < self.inner.height);
        self.inner.samples[(y * self.inner.width + x) as usize] = val;
    }

    /// Set all samples to a single value.
    pub fn fill(&mut self, val: u8) {
        self.inner.samples.fill(val);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 200).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.max_sample(), 255);
        assert_eq!(raster.area(), 20_000);
        assert!(raster.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_raster_creation_invalid() {
        assert!(Raster::new(0, 100).is_err());
        assert!(Raster::new(100, 0).is_err());
    }

    #[test]
    fn test_from_samples() {
        let raster = Raster::from_samples(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.get_sample(0, 0), Some(1));
        assert_eq!(raster.get_sample(2, 0), Some(3));
        assert_eq!(raster.get_sample(0, 1), Some(4));
        assert_eq!(raster.get_sample(2, 1), Some(6));
        assert_eq!(raster.get_sample(3, 0), None);
        assert_eq!(raster.get_sample(0, 2), None);
    }

    #[test]
    fn test_from_samples_mismatch() {
        assert!(Raster::from_samples(3, 2, vec![0; 5]).is_err());
        assert!(Raster::from_samples(0, 2, vec![]).is_err());
    }

    #[test]
    fn test_row() {
        let raster = Raster::from_samples(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.row(0), &[1, 2, 3]);
        assert_eq!(raster.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_clone_shares_data() {
        let r1 = Raster::new(10, 10).unwrap();
        let r2 = r1.clone();
        assert_eq!(r1.ref_count(), 2);
        assert_eq!(r1.samples().as_ptr(), r2.samples().as_ptr());
    }

    #[test]
    fn test_raster_mut_roundtrip() {
        let raster = Raster::new(10, 10).unwrap();
        let mut rm = raster.try_into_mut().unwrap();
        rm.set_sample(5, 5, 200).unwrap();
        assert!(rm.set_sample(10, 5, 1).is_err());

        let raster: Raster = rm.into();
        assert_eq!(raster.get_sample(5, 5), Some(200));
        assert_eq!(raster.get_sample(0, 0), Some(0));
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let r1 = Raster::new(10, 10).unwrap();
        let _r2 = r1.clone();
        assert!(r1.try_into_mut().is_err());
    }

    #[test]
    fn test_to_mut_copies() {
        let r1 = Raster::new(10, 10).unwrap();
        let mut rm = r1.to_mut();
        rm.fill(7);
        let r2: Raster = rm.into();
        assert_eq!(r1.get_sample(0, 0), Some(0));
        assert_eq!(r2.get_sample(0, 0), Some(7));
    }
}
