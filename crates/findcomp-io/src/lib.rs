//! findcomp-io - raster I/O and rendering for findcomp
//!
//! Two concerns live here:
//!
//! - **PNM codec** - binary PGM (P5) and PPM (P6) reading and writing,
//!   with PPM input reduced to grayscale on the way in
//! - **Rendering** - painting an extracted region list back into a mask
//!   or a color overlay for inspection
//!
//! All fallible operations return [`IoResult`].

pub mod error;
pub mod pnm;
pub mod render;

pub use error::{IoError, IoResult};
pub use pnm::{read_pnm, read_pnm_file, write_pgm, write_ppm};
pub use render::{RenderMode, Rendered, RgbRaster, render_components};
