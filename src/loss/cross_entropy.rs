use crate::error::{ShapeMismatchError, ShapeResult};
use crate::math::matrix::Matrix;

/// Per-example categorical cross-entropy with optional class weights:
///
///   l_i = -sum_j(target[i][j] * ln(predicted[i][j] + eps) * w[j])
///
/// with `w[j] = 1` when `class_weights` is `None`.
///
/// The weight multiplies the target-masked log-likelihood elementwise. It
/// acts as a per-class loss weight only because each target row is one-hot:
/// exactly one term per row survives, and it is scaled by the weight of the
/// true class. With soft targets every class present in the row is scaled by
/// its own weight instead. Use [`is_one_hot`] to assert the precondition.
pub fn weighted_cross_entropy(
    predicted: &Matrix,
    target: &Matrix,
    class_weights: Option<&[f64]>,
    eps: f64,
) -> ShapeResult<Vec<f64>> {
    check_batch_shapes(predicted, target)?;
    if let Some(w) = class_weights {
        if w.len() != predicted.cols {
            return Err(ShapeMismatchError::WeightLength { expected: predicted.cols, found: w.len() });
        }
    }

    let losses: Vec<f64> = predicted.data.iter().zip(target.data.iter())
        .map(|(p_row, t_row)| {
            p_row.iter().zip(t_row.iter()).enumerate()
                .map(|(j, (p, t))| {
                    let w = class_weights.map_or(1.0, |w| w[j]);
                    -t * (p + eps).ln() * w
                })
                .sum::<f64>()
        })
        .collect();
    Ok(losses)
}

/// True when every row has exactly one entry equal to 1 and the rest 0.
pub fn is_one_hot(target: &Matrix) -> bool {
    target.data.iter().all(|row| {
        row.iter().filter(|&&x| x == 1.0).count() == 1
            && row.iter().all(|&x| x == 0.0 || x == 1.0)
    })
}

pub(crate) fn check_batch_shapes(predicted: &Matrix, target: &Matrix) -> ShapeResult<()> {
    if predicted.shape() != target.shape() {
        return Err(ShapeMismatchError::Operands {
            op: "prediction/target",
            left: predicted.shape(),
            right: target.shape(),
        });
    }
    Ok(())
}
