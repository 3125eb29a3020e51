// src/generator/mod.rs
pub mod config;
pub mod connectivity;
mod path_generator;

pub use config::{
    GenerationRequest, GeneratorConfig, RunConfig, DEFAULT_EASINESS_FACTOR, DEFAULT_EXTRA_MATCHES,
    DEFAULT_MAX_RETRIES, DEFAULT_WIDTH_FLOOR_RATIO,
};
pub use connectivity::{ConnectivityRule, WindowParams};
pub use path_generator::{generate, MapGenerator};
