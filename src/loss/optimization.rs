use serde::{Serialize, Deserialize};

use crate::config::OptimizationConfig;
use crate::error::ShapeResult;
use crate::loss::accuracy::accuracy;
use crate::loss::cross_entropy::weighted_cross_entropy;
use crate::loss::regularization::l2_regularization;
use crate::math::matrix::Matrix;
use crate::params::ParameterStore;

/// Result of one loss/accuracy evaluation over a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    /// Regularized total loss: `regularization + sum(example_losses)`.
    pub loss: f64,
    /// Fraction of rows classified correctly, in [0, 1].
    pub accuracy: f64,
    /// The L2 term alone.
    pub regularization: f64,
    /// Weighted negative log-likelihood of each row.
    pub example_losses: Vec<f64>,
}

/// Computes the regularized cross-entropy loss and the accuracy of
/// `prediction` against one-hot `target`.
///
/// Shapes are validated before anything is computed: `prediction` and
/// `target` must match, and `class_weights` (if any) must have one entry per
/// class. See [`weighted_cross_entropy`] for how the weights combine with
/// the targets.
pub fn define_optimization_vars(
    target: &Matrix,
    prediction: &Matrix,
    class_weights: Option<&[f64]>,
    params: &ParameterStore,
    config: &OptimizationConfig,
) -> ShapeResult<Optimization> {
    let example_losses = weighted_cross_entropy(prediction, target, class_weights, config.epsilon)?;
    let accuracy = accuracy(prediction, target)?;

    let regularization = l2_regularization(params, config.l2_coefficient);
    let loss = regularization + example_losses.iter().sum::<f64>();

    Ok(Optimization { loss, accuracy, regularization, example_losses })
}
