use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::ShapeResult;
use crate::layers::dense::{affine, check_input};
use crate::math::matrix::Matrix;
use crate::params::ParameterStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionConfig {
    pub n_batches: usize,
    pub n_input: usize,
    pub n_classes: usize,
}

/// Class-probability head: `softmax(X·W + bias)`.
///
/// `x` must be (n_batches, n_input). Each row of the (n_batches, n_classes)
/// output sums to 1.
pub fn prediction_layer<R: Rng + ?Sized>(
    x: &Matrix,
    scope: &str,
    config: &PredictionConfig,
    params: &mut ParameterStore,
    rng: &mut R,
) -> ShapeResult<Matrix> {
    check_input(x, "prediction_layer", (config.n_batches, config.n_input))?;
    affine(
        x,
        scope,
        ("W", "bias"),
        config.n_classes,
        ActivationFunction::Softmax,
        params,
        rng,
    )
}
