use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{ShapeMismatchError, ShapeResult};
use crate::math::matrix::Matrix;
use crate::params::{ParamRole, ParameterStore};

/// Shape configuration for [`dense_layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenseConfig {
    pub n_batches: usize,
    pub n_input: usize,
    pub n_hidden: usize,
    pub n_output: usize,
}

/// Two stacked tanh layers:
///
///   A   = tanh(X·W_1 + bias_1)
///   out = tanh(A·W_2 + bias_2)
///
/// `x` must be (n_batches, n_input); the result is (n_batches, n_output).
/// Parameters are created (or reused) in `params` under `scope`.
pub fn dense_layer<R: Rng + ?Sized>(
    x: &Matrix,
    scope: &str,
    config: &DenseConfig,
    params: &mut ParameterStore,
    rng: &mut R,
) -> ShapeResult<Matrix> {
    check_input(x, "dense_layer", (config.n_batches, config.n_input))?;

    let hidden = affine(
        x,
        scope,
        ("W_1", "bias_1"),
        config.n_hidden,
        ActivationFunction::Tanh,
        params,
        rng,
    )?;
    affine(
        &hidden,
        scope,
        ("W_2", "bias_2"),
        config.n_output,
        ActivationFunction::Tanh,
        params,
        rng,
    )
}

/// `activation(x·W + b)` with `W` of shape (x.cols, n_out) and `b` of 1 x n_out.
pub(crate) fn affine<R: Rng + ?Sized>(
    x: &Matrix,
    scope: &str,
    (w_name, b_name): (&str, &str),
    n_out: usize,
    activation: ActivationFunction,
    params: &mut ParameterStore,
    rng: &mut R,
) -> ShapeResult<Matrix> {
    let z = {
        let w = params.get_or_create(scope, w_name, ParamRole::Weight, (x.cols, n_out), rng)?;
        x.matmul(&w.value)?
    };
    let b = params.get_or_create(scope, b_name, ParamRole::Bias, (1, n_out), rng)?;
    let z = z.add_row(&b.value)?;
    Ok(activation.apply(&z))
}

pub(crate) fn check_input(x: &Matrix, op: &'static str, expected: (usize, usize)) -> ShapeResult<()> {
    if x.shape() != expected {
        return Err(ShapeMismatchError::Operands { op, left: x.shape(), right: expected });
    }
    Ok(())
}
