// src/map/mod.rs
pub mod cell;
pub mod grid_map;
pub mod map_set;

pub use cell::Cell;
pub use grid_map::GridMap;
pub use map_set::{GenerationStats, MapSet};
