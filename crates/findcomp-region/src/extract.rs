//! Connected component extraction
//!
//! Binarizes a grayscale raster against a threshold and partitions the
//! foreground into 4-connected regions using breadth-first flood fill.
//!
//! The scan is deterministic: the raster is walked in row-major order, ids
//! are assigned in seed discovery order, and within a region pixels appear
//! in BFS order with neighbors examined north, east, south, west. Repeated
//! extraction over the same raster therefore reproduces identical ids,
//! pixel orders, and bounding boxes.

use crate::region::Region;
use findcomp_core::Raster;
use std::collections::VecDeque;
use std::sync::Arc;

/// Foreground marker in the transient binarized image.
const FOREGROUND: u8 = 255;

/// Extract all 4-connected foreground regions from a raster.
///
/// A sample is foreground when `sample >= threshold`. Binarization happens
/// on a working copy; the input raster is never modified. Each discovered
/// region consumes a sequential id starting at 0 (ids are consumed even by
/// regions that fall under `min_valid_size` and are dropped), and only
/// regions with at least `min_valid_size` pixels are returned, in the order
/// their seed pixel was first encountered.
///
/// This operation is total: an all-background raster simply yields an
/// empty list.
pub fn extract_components(
    raster: &Raster,
    threshold: u8,
    min_valid_size: usize,
) -> Vec<Arc<Region>> {
    let width = raster.width();
    let height = raster.height();

    // Working copy: FOREGROUND where sample >= threshold, 0 elsewhere.
    // Consumed pixels are cleared back to 0 so each is visited once.
    let mut binary: Vec<u8> = raster
        .samples()
        .iter()
        .map(|&s| if s >= threshold { FOREGROUND } else { 0 })
        .collect();

    let mut regions: Vec<Arc<Region>> = Vec::new();
    let mut next_id: u32 = 0;
    let mut frontier: VecDeque<(u32, u32)> = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            let index = (y * width + x) as usize;
            if binary[index] != FOREGROUND {
                continue;
            }

            let mut region = Region::new(next_id);
            binary[index] = 0;
            region.add_pixel(x, y);
            frontier.push_back((x, y));

            while let Some((cx, cy)) = frontier.pop_front() {
                // 4-neighbors in fixed N, E, S, W order; offsets are
                // signed because north/west can go negative at the border.
                let neighbors = [
                    (cx as i64, cy as i64 - 1),
                    (cx as i64 + 1, cy as i64),
                    (cx as i64, cy as i64 + 1),
                    (cx as i64 - 1, cy as i64),
                ];
                for (nx, ny) in neighbors {
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    let neighbor_index = (ny * width + nx) as usize;
                    if binary[neighbor_index] == FOREGROUND {
                        binary[neighbor_index] = 0;
                        region.add_pixel(nx, ny);
                        frontier.push_back((nx, ny));
                    }
                }
            }

            if region.size() >= min_valid_size {
                regions.push(Arc::new(region));
            }
            // The id is consumed whether or not the region survived.
            next_id += 1;
        }
    }

    regions
}
