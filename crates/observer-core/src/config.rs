//! Serializable run configuration.
//!
//! Defaults reproduce the reference experiment: `p_err = 0.05`, twenty
//! evenly spaced Λ from 1 to 10, 1000 trials per point, Λc = 4.6.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{DEFAULT_CRITICAL_SCALE, DEFAULT_SAMPLE_COUNT, StatisticalModel};
use crate::profile::linspace;
use crate::sweep::SweepRunner;

/// Parameters for one distinguishability sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Classical misclassification rate of the observer.
    pub error_probability: f64,
    /// First Λ of the grid.
    pub lambda_min: f64,
    /// Last Λ of the grid (inclusive).
    pub lambda_max: f64,
    /// Number of grid points.
    pub points: usize,
    /// Bernoulli trials per grid point.
    pub samples_per_point: usize,
    /// Λc for the collapse predicate.
    pub critical_scale: f64,
    /// Fixed RNG seed; `None` draws fresh entropy.
    pub seed: Option<u64>,
    /// Use independent snapshot models instead of mutating one model.
    pub snapshot: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            error_probability: 0.05,
            lambda_min: 1.0,
            lambda_max: 10.0,
            points: 20,
            samples_per_point: DEFAULT_SAMPLE_COUNT,
            critical_scale: DEFAULT_CRITICAL_SCALE,
            seed: None,
            snapshot: false,
        }
    }
}

impl SimulationConfig {
    /// The Λ grid described by this config.
    pub fn scale_values(&self) -> Result<Vec<f64>> {
        linspace(self.lambda_min, self.lambda_max, self.points)
    }

    /// Starting model: zero amplitude, configured error probability.
    pub fn model(&self) -> StatisticalModel {
        StatisticalModel::new(0.0, 0.0, self.error_probability)
    }

    pub fn runner(&self) -> SweepRunner {
        SweepRunner {
            samples_per_point: self.samples_per_point,
            seed: self.seed,
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str::<Self>(&raw).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("failed to parse simulation config JSON: {e}"),
            )
        })
    }
}
