use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::config::json;

pub const DEFAULT_L2_COEFFICIENT: f64 = 0.02;
/// Added inside log() to prevent log(0) = -inf.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Hyperparameters of the loss computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConfig {
    /// Multiplier applied to the summed L2 loss of all weight parameters.
    #[serde(default = "default_l2_coefficient")]
    pub l2_coefficient: f64,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        OptimizationConfig {
            l2_coefficient: DEFAULT_L2_COEFFICIENT,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl OptimizationConfig {
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        json::save_json(self, path)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<OptimizationConfig> {
        json::load_json(path)
    }
}

fn default_l2_coefficient() -> f64 {
    DEFAULT_L2_COEFFICIENT
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}
