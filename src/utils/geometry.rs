// src/utils/geometry.rs

/// A point in pixel space, as used by front ends that paint each grid cell
/// as a `scale` x `scale` block with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Top-left pixel of cell (`col`, `row`).
    pub fn cell_origin(col: usize, row: usize, scale: f64) -> Self {
        Self::new(col as f64 * scale, row as f64 * scale)
    }

    /// Center pixel of cell (`col`, `row`).
    pub fn cell_center(col: usize, row: usize, scale: f64) -> Self {
        let half = scale / 2.0;
        Self::new(col as f64 * scale + half, row as f64 * scale + half)
    }

    /// The (column, row) cell containing this point, or `None` for points
    /// left of or above the grid or for a non-positive scale.
    pub fn to_cell(&self, scale: f64) -> Option<(usize, usize)> {
        if scale <= 0.0 || self.x < 0.0 || self.y < 0.0 || !self.x.is_finite() || !self.y.is_finite() {
            return None;
        }
        Some(((self.x / scale).floor() as usize, (self.y / scale).floor() as usize))
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Moves `distance` pixels along `heading` (radians, 0 = +x, clockwise in
    /// screen space since y grows downward).
    pub fn advance(&self, heading: f64, distance: f64) -> Point2D {
        Point2D::new(
            self.x + heading.cos() * distance,
            self.y + heading.sin() * distance,
        )
    }
}
