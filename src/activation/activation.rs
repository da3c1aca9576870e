use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Tanh,
    /// Vector-valued; normalizes each row of the batch independently.
    Softmax,
}

impl ActivationFunction {
    /// Applies the activation to a (batch, features) matrix.
    pub fn apply(&self, z: &Matrix) -> Matrix {
        match self {
            ActivationFunction::Tanh => z.map(f64::tanh),
            ActivationFunction::Softmax => z.map_rows(softmax),
        }
    }
}

/// Softmax of one row.
///
/// The row max is subtracted before exponentiating so large logits do not
/// overflow; the result is unchanged mathematically.
pub fn softmax(row: &[f64]) -> Vec<f64> {
    let max = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = row.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
