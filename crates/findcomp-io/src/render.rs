//! Region rendering
//!
//! Turns a region list back into an image: either a binary mask or a color
//! rendition with optional red bounding box outlines. One function with an
//! explicit mode covers all variants.
//!
//! Regions may carry coordinates from a raster larger than the render
//! canvas. Member pixels outside the canvas are skipped, and bounding boxes
//! are clamped edge by edge (with a min/max swap if clamping inverts an
//! axis) before drawing.

use crate::error::IoResult;
use findcomp_core::{MAX_SAMPLE, Raster};
use findcomp_region::Region;
use std::sync::Arc;

const RED: [u8; 3] = [255, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

/// How [`render_components`] paints the region list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Grayscale mask: member pixels 255 on a black canvas.
    Mask,
    /// Color rendition. Without boxes, member pixels are painted white on
    /// black. With boxes, the canvas is seeded from the source grayscale
    /// and a red rectangle is outlined around each region.
    Overlay { boxes: bool },
}

/// Interleaved 8-bit RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbRaster {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major interleaved RGB bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at (x, y), or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) as usize * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = (y * self.width + x) as usize * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }
}

/// A rendering result, grayscale or color depending on the mode.
#[derive(Debug, Clone)]
pub enum Rendered {
    Gray(Raster),
    Rgb(RgbRaster),
}

/// Render a region list onto a canvas the size of `raster`.
///
/// `raster` supplies the canvas dimensions and, for
/// `Overlay { boxes: true }`, the grayscale background. Member pixels
/// falling outside the canvas are silently skipped.
pub fn render_components(
    raster: &Raster,
    regions: &[Arc<Region>],
    mode: RenderMode,
) -> IoResult<Rendered> {
    match mode {
        RenderMode::Mask => Ok(Rendered::Gray(render_mask(raster, regions)?)),
        RenderMode::Overlay { boxes } => Ok(Rendered::Rgb(render_overlay(raster, regions, boxes))),
    }
}

fn render_mask(raster: &Raster, regions: &[Arc<Region>]) -> IoResult<Raster> {
    let mut mask = Raster::new(raster.width(), raster.height())?
        .try_into_mut()
        .unwrap_or_else(|r| r.to_mut());
    for region in regions {
        for &(x, y) in region.pixels() {
            if x < mask.width() && y < mask.height() {
                mask.set_sample_unchecked(x, y, MAX_SAMPLE);
            }
        }
    }
    Ok(mask.into())
}

fn render_overlay(raster: &Raster, regions: &[Arc<Region>], boxes: bool) -> RgbRaster {
    let (width, height) = (raster.width(), raster.height());
    let mut canvas = RgbRaster::new(width, height);

    if boxes {
        for y in 0..height {
            for x in 0..width {
                let gray = raster.get_sample_unchecked(x, y);
                canvas.put(x, y, [gray, gray, gray]);
            }
        }
    } else {
        for region in regions {
            for &(x, y) in region.pixels() {
                if x < width && y < height {
                    canvas.put(x, y, WHITE);
                }
            }
        }
    }

    if boxes {
        for region in regions {
            let Some(bounds) = region.bounds().clamp_to(width, height) else {
                continue;
            };
            // top and bottom edges span the full box width
            for x in bounds.x_min..=bounds.x_max {
                canvas.put(x as u32, bounds.y_min as u32, RED);
                canvas.put(x as u32, bounds.y_max as u32, RED);
            }
            // left and right edges skip the corner rows already drawn
            for y in (bounds.y_min + 1)..bounds.y_max {
                canvas.put(bounds.x_min as u32, y as u32, RED);
                canvas.put(bounds.x_max as u32, y as u32, RED);
            }
        }
    }

    canvas
}
