use crate::error::ShapeResult;
use crate::loss::cross_entropy::check_batch_shapes;
use crate::math::matrix::{argmax, Matrix};

/// Fraction of rows whose predicted argmax equals the target argmax.
/// Ties resolve to the lowest index. An empty batch scores 0.0.
pub fn accuracy(predicted: &Matrix, target: &Matrix) -> ShapeResult<f64> {
    check_batch_shapes(predicted, target)?;
    let n = predicted.rows;
    if n == 0 {
        return Ok(0.0);
    }
    let correct = predicted.data.iter().zip(target.data.iter())
        .filter(|(p, t)| argmax(p) == argmax(t))
        .count();
    Ok(correct as f64 / n as f64)
}
