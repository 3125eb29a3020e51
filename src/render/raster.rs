// src/render/raster.rs

use crate::map::{Cell, GridMap};
use image::{ImageResult, Rgb, RgbImage};
use std::path::Path;

pub const PATH_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const WALL_COLOR: Rgb<u8> = Rgb([128, 128, 128]);

/// Paints `map` with each cell as a `scale` x `scale` block. Column `x`,
/// row `y` covers pixels starting at (`x * scale`, `y * scale`), matching
/// [`Point2D::to_cell`](crate::utils::Point2D::to_cell).
pub fn to_image(map: &GridMap, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let width = map.width() as u32 * scale;
    let height = map.height() as u32 * scale;
    RgbImage::from_fn(width, height, |px, py| {
        match map.get((px / scale) as usize, (py / scale) as usize) {
            Some(Cell::Path) => PATH_COLOR,
            _ => WALL_COLOR,
        }
    })
}

/// Writes `map` as a PNG file.
pub fn save_png<P: AsRef<Path>>(map: &GridMap, scale: u32, path: P) -> ImageResult<()> {
    to_image(map, scale).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_scaled() {
        let map = GridMap::from_columns(vec![vec![Cell::Path, Cell::Wall]]).unwrap();
        let img = to_image(&map, 4);
        assert_eq!(img.dimensions(), (4, 8));
        assert_eq!(*img.get_pixel(3, 3), PATH_COLOR);
        assert_eq!(*img.get_pixel(0, 4), WALL_COLOR);
        assert_eq!(*img.get_pixel(3, 7), WALL_COLOR);
    }

    #[test]
    fn test_zero_scale_clamped() {
        let map = GridMap::new(3, 2);
        assert_eq!(to_image(&map, 0).dimensions(), (3, 2));
    }
}
