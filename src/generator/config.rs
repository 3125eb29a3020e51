// src/generator/config.rs

use crate::error::{MapGenError, Result};
use crate::generator::ConnectivityRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EASINESS_FACTOR: usize = 7;
pub const DEFAULT_WIDTH_FLOOR_RATIO: f64 = 0.75;
pub const DEFAULT_EXTRA_MATCHES: usize = 1;
pub const DEFAULT_MAX_RETRIES: u32 = 10_000;

/// Parameters for one batch of maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    /// Number of maps to produce.
    pub count: usize,
    /// Carved interior columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Higher values give wider, smoother corridors and a looser
    /// connectivity window.
    pub easiness_factor: usize,
}

impl GenerationRequest {
    pub fn new(count: usize, width: usize, height: usize) -> Self {
        GenerationRequest {
            count,
            width,
            height,
            easiness_factor: DEFAULT_EASINESS_FACTOR,
        }
    }

    pub fn with_easiness(mut self, easiness_factor: usize) -> Self {
        self.easiness_factor = easiness_factor;
        self
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest::new(3, 30, 16)
    }
}

/// Tuning knobs of the carving algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub rule: ConnectivityRule,
    /// Minimum corridor width as a fraction of the easiness factor.
    pub width_floor_ratio: f64,
    /// Matches required in the two-back window beyond `easiness_factor / 2`.
    pub extra_matches: usize,
    /// Candidate positions tried per column before giving up.
    /// `None` retries forever.
    pub max_retries: Option<u32>,
    /// Wrap each finished map in a one-cell ring of walls.
    pub wrap_walls: bool,
}

impl GeneratorConfig {
    /// The reduced mode: uniform widths, one-back overlap, no border.
    pub fn simple() -> Self {
        GeneratorConfig {
            rule: ConnectivityRule::OneBack,
            wrap_walls: false,
            ..Self::default()
        }
    }

    /// Smallest corridor width the two-back rule will draw.
    pub fn width_floor(&self, easiness_factor: usize) -> usize {
        (easiness_factor as f64 * self.width_floor_ratio).round() as usize
    }

    /// Two-back window hits needed to accept a row.
    pub fn required_matches(&self, easiness_factor: usize) -> usize {
        easiness_factor / 2 + self.extra_matches
    }

    /// Checks a request against this configuration before anything is carved.
    pub fn validate(&self, request: &GenerationRequest) -> Result<()> {
        if request.count == 0 {
            return Err(MapGenError::invalid("count", "at least one map must be requested"));
        }
        if request.height == 0 {
            return Err(MapGenError::invalid("height", "must be positive"));
        }
        if self.max_retries == Some(0) {
            return Err(MapGenError::invalid("max_retries", "must allow at least one attempt"));
        }

        match self.rule {
            ConnectivityRule::OneBack => {
                if request.width == 0 {
                    return Err(MapGenError::invalid("width", "must be positive"));
                }
            }
            ConnectivityRule::TwoBack => {
                if request.width < 3 {
                    return Err(MapGenError::invalid(
                        "width",
                        format!("must be at least 3, got {}", request.width),
                    ));
                }
                // Continuity needs an open row with open rows on both sides.
                if request.height < 3 {
                    return Err(MapGenError::invalid(
                        "height",
                        format!("must be at least 3, got {}", request.height),
                    ));
                }
                if request.easiness_factor == 0 {
                    return Err(MapGenError::invalid("easiness_factor", "must be at least 1"));
                }
                if request.height < request.easiness_factor {
                    return Err(MapGenError::invalid(
                        "height",
                        format!(
                            "must be at least the easiness factor ({}), got {}",
                            request.easiness_factor, request.height
                        ),
                    ));
                }
                if !(self.width_floor_ratio > 0.0 && self.width_floor_ratio <= 1.0) {
                    return Err(MapGenError::invalid(
                        "width_floor_ratio",
                        format!("must lie in (0, 1], got {}", self.width_floor_ratio),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            rule: ConnectivityRule::TwoBack,
            width_floor_ratio: DEFAULT_WIDTH_FLOOR_RATIO,
            extra_matches: DEFAULT_EXTRA_MATCHES,
            max_retries: Some(DEFAULT_MAX_RETRIES),
            wrap_walls: true,
        }
    }
}

/// Everything the driver binary needs for one run, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub request: GenerationRequest,
    pub generator: GeneratorConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            seed: None,
            request: GenerationRequest::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_name(result: Result<()>) -> &'static str {
        match result {
            Err(MapGenError::InvalidParameter { name, .. }) => name,
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_default_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.width_floor(7), 5);
        assert_eq!(config.required_matches(7), 4);
        assert_eq!(GenerationRequest::new(1, 5, 10).easiness_factor, 7);
    }

    #[test]
    fn test_validate_rejects_bad_requests() {
        let config = GeneratorConfig::default();
        assert_eq!(invalid_name(config.validate(&GenerationRequest::new(0, 5, 10))), "count");
        assert_eq!(invalid_name(config.validate(&GenerationRequest::new(1, 2, 10))), "width");
        assert_eq!(invalid_name(config.validate(&GenerationRequest::new(1, 5, 6))), "height");
        assert_eq!(
            invalid_name(config.validate(&GenerationRequest::new(1, 5, 10).with_easiness(0))),
            "easiness_factor"
        );
        assert!(config.validate(&GenerationRequest::new(1, 3, 7)).is_ok());
    }

    #[test]
    fn test_simple_mode_relaxes_limits() {
        let config = GeneratorConfig::simple();
        assert!(config.validate(&GenerationRequest::new(1, 1, 1)).is_ok());
        assert_eq!(invalid_name(config.validate(&GenerationRequest::new(1, 0, 4))), "width");
    }

    #[test]
    fn test_zero_retries_rejected() {
        let config = GeneratorConfig {
            max_retries: Some(0),
            ..GeneratorConfig::default()
        };
        assert_eq!(invalid_name(config.validate(&GenerationRequest::default())), "max_retries");
    }

    #[test]
    fn test_run_config_partial_json() {
        let config = RunConfig::from_json(
            r#"{ "seed": 9, "request": { "count": 2, "width": 12 }, "generator": { "rule": "one_back" } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.request.count, 2);
        assert_eq!(config.request.width, 12);
        assert_eq!(config.request.height, 16);
        assert_eq!(config.request.easiness_factor, DEFAULT_EASINESS_FACTOR);
        assert_eq!(config.generator.rule, ConnectivityRule::OneBack);
        assert!(config.generator.wrap_walls);
    }

    #[test]
    fn test_run_config_bad_json() {
        assert!(matches!(
            RunConfig::from_json("{ not json"),
            Err(MapGenError::Config(_))
        ));
    }
}
