// src/lib.rs

pub mod error;
pub mod generator;
pub mod map;
pub mod render;
pub mod utils;

pub use error::{MapGenError, Result};
pub use generator::{generate, GenerationRequest, GeneratorConfig, MapGenerator};
pub use map::{Cell, GridMap, MapSet};
