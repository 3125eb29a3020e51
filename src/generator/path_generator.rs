// src/generator/path_generator.rs

use crate::error::{MapGenError, Result};
use crate::generator::connectivity::{self, ConnectivityRule, WindowParams};
use crate::generator::{GenerationRequest, GeneratorConfig};
use crate::map::{GenerationStats, GridMap, MapSet};
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Carves grid maps that each hold a connected corridor from the left edge
/// to the right edge.
#[derive(Debug, Clone, Default)]
pub struct MapGenerator {
    config: GeneratorConfig,
}

/// One finished map and the number of candidates rejected while carving it.
struct CarvedMap {
    grid: GridMap,
    rejected: u64,
}

impl MapGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        MapGenerator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates `request.count` independent maps.
    ///
    /// One seed per map is drawn from `rng` up front, in map order, and each
    /// map is carved from its own stream. The same `rng` state and request
    /// therefore always produce the same set, whether or not the maps are
    /// carved in parallel.
    pub fn generate<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> Result<MapSet> {
        self.config.validate(request)?;

        let started = Instant::now();
        info!(
            "Generating {} map(s) of {}x{} (easiness {}, {:?})",
            request.count, request.width, request.height, request.easiness_factor, self.config.rule
        );

        let seeds: Vec<u64> = (0..request.count).map(|_| rng.random()).collect();
        let carved = self.carve_all(request, &seeds)?;

        let rejected_candidates = carved.iter().map(|c| c.rejected).sum();
        let maps: Vec<GridMap> = carved.into_iter().map(|c| c.grid).collect();
        let stats = GenerationStats {
            generation_time: started.elapsed().as_secs_f64(),
            map_count: maps.len(),
            rejected_candidates,
        };
        info!(
            "Generated {} map(s) in {:.3}s ({} rejected candidates)",
            stats.map_count, stats.generation_time, stats.rejected_candidates
        );

        Ok(MapSet::new(maps, stats))
    }

    /// Generates a single map straight from `rng`.
    pub fn generate_map<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> Result<GridMap> {
        self.config.validate(request)?;
        self.carve(request, 0, rng).map(|c| c.grid)
    }

    #[cfg(feature = "parallel")]
    fn carve_all(&self, request: &GenerationRequest, seeds: &[u64]) -> Result<Vec<CarvedMap>> {
        seeds
            .par_iter()
            .enumerate()
            .map(|(index, &seed)| self.carve(request, index, &mut StdRng::seed_from_u64(seed)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn carve_all(&self, request: &GenerationRequest, seeds: &[u64]) -> Result<Vec<CarvedMap>> {
        seeds
            .iter()
            .enumerate()
            .map(|(index, &seed)| self.carve(request, index, &mut StdRng::seed_from_u64(seed)))
            .collect()
    }

    fn carve<R: Rng>(&self, request: &GenerationRequest, index: usize, rng: &mut R) -> Result<CarvedMap> {
        let height = request.height;
        let mut grid = GridMap::new(request.width, height);
        let params = WindowParams {
            radius: request.easiness_factor / 2,
            required: self.config.required_matches(request.easiness_factor),
        };
        let floor = self.config.width_floor(request.easiness_factor);
        let mut rejected = 0u64;

        for x in 0..request.width {
            // The two-back rule needs two finished columns; open them fully.
            if self.config.rule == ConnectivityRule::TwoBack && x < 2 {
                grid.carve_column(x, 0..height);
                continue;
            }

            let path_width = self.draw_width(height, floor, rng);
            let mut start = rng.random_range(0..=height - path_width);
            let mut attempts: u32 = 1;

            while !self.is_connected(&grid, x, start..start + path_width, params) {
                if self.config.max_retries.is_some_and(|max| attempts >= max) {
                    warn!(
                        "Map {}: column {} rejected {} candidates of width {}",
                        index, x, attempts, path_width
                    );
                    return Err(MapGenError::GenerationFailed {
                        map: index,
                        column: x,
                        attempts,
                    });
                }
                trace!("Map {}: column {} rejected rows {}..{}", index, x, start, start + path_width);
                start = rng.random_range(0..=height - path_width);
                attempts = attempts.saturating_add(1);
                rejected += 1;
            }

            grid.carve_column(x, start..start + path_width);
        }

        debug!("Map {} carved with {} rejected candidates", index, rejected);

        let grid = if self.config.wrap_walls {
            grid.with_border()
        } else {
            grid
        };
        Ok(CarvedMap { grid, rejected })
    }

    /// Corridor width for the next column. The two-back rule averages two
    /// draws and applies the easiness floor; the one-back rule draws once.
    fn draw_width<R: Rng>(&self, height: usize, floor: usize, rng: &mut R) -> usize {
        match self.config.rule {
            ConnectivityRule::TwoBack => {
                let first = rng.random_range(1..=height);
                let second = rng.random_range(1..=height);
                let average = ((first + second) as f64 / 2.0).round() as usize;
                average.max(floor).min(height)
            }
            ConnectivityRule::OneBack => rng.random_range(1..=height),
        }
    }

    fn is_connected(&self, grid: &GridMap, x: usize, rows: Range<usize>, params: WindowParams) -> bool {
        let Some(one_back) = x.checked_sub(1).and_then(|c| grid.column(c)) else {
            // The first column has nothing to connect to.
            return true;
        };
        let two_back = x.checked_sub(2).and_then(|c| grid.column(c));
        connectivity::accepts(self.config.rule, two_back, one_back, rows, params)
    }
}

/// Generates a batch with the default configuration.
pub fn generate<R: Rng>(request: &GenerationRequest, rng: &mut R) -> Result<MapSet> {
    MapGenerator::default().generate(request, rng)
}
