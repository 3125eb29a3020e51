//! # Map Printers
//!
//! Diagnostic views of generated maps. Nothing here feeds back into
//! generation; both printers only read a [`GridMap`](crate::map::GridMap).
//!
//! * [`text`] writes maps as ANSI-colored `0`/`1` grids for terminals.
//! * [`raster`] paints maps into images, one square block per cell.

pub mod raster;
pub mod text;

pub use raster::{save_png, to_image, PATH_COLOR, WALL_COLOR};
pub use text::{ansi, plain};
