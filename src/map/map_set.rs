// src/map/map_set.rs

use crate::error::{MapGenError, Result};
use crate::map::GridMap;

/// Bookkeeping collected while a batch is generated.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct GenerationStats {
    pub generation_time: f64,
    pub map_count: usize,
    /// Candidate corridor positions rejected by the connectivity check,
    /// summed over every column of every map.
    pub rejected_candidates: u64,
}

/// The maps of one batch, in generation order.
#[derive(Debug, Clone, Default)]
pub struct MapSet {
    maps: Vec<GridMap>,
    stats: GenerationStats,
}

impl MapSet {
    pub(crate) fn new(maps: Vec<GridMap>, stats: GenerationStats) -> Self {
        MapSet { maps, stats }
    }

    /// Returns the map at `index`.
    pub fn get(&self, index: usize) -> Result<&GridMap> {
        self.maps.get(index).ok_or(MapGenError::IndexOutOfRange {
            index,
            len: self.maps.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridMap> {
        self.maps.iter()
    }

    pub fn maps(&self) -> &[GridMap] {
        &self.maps
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    pub fn into_maps(self) -> Vec<GridMap> {
        self.maps
    }
}

impl<'a> IntoIterator for &'a MapSet {
    type Item = &'a GridMap;
    type IntoIter = std::slice::Iter<'a, GridMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.maps.iter()
    }
}
