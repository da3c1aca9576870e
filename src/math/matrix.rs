use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{ShapeMismatchError, ShapeResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from row vectors, rejecting ragged input.
    /// An empty `data` yields a 0x0 matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> ShapeResult<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(ShapeMismatchError::Ragged { row, expected: cols, found: r.len() });
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// Single-row matrix, used for bias vectors.
    pub fn row_vector(values: Vec<f64>) -> Matrix {
        Matrix { rows: 1, cols: values.len(), data: vec![values] }
    }

    /// Glorot (Xavier) uniform initialization: U(-limit, limit) with
    /// limit = sqrt(6 / (fan_in + fan_out)), where `rows` is the fan-in and
    /// `cols` the fan-out.
    pub fn glorot_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        Matrix::glorot_uniform_with_fans(rows, cols, (rows, cols), rng)
    }

    /// Glorot-uniform values of shape (rows, cols) drawn with explicit fans.
    /// A rank-1 bias stored as 1xN uses (N, N).
    pub fn glorot_uniform_with_fans<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        (fan_in, fan_out): (usize, usize),
        rng: &mut R,
    ) -> Matrix {
        let limit = (6.0 / (fan_in + fan_out).max(1) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen_range(-limit..=limit);
            }
        }
        res
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    /// Applies `functor` to each row independently.
    pub fn map_rows<F>(&self, functor: F) -> Matrix
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|row| functor(row)).collect()
        }
    }

    pub fn matmul(&self, rhs: &Matrix) -> ShapeResult<Matrix> {
        if self.cols != rhs.rows {
            return Err(ShapeMismatchError::Operands {
                op: "matmul",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Adds a 1xN row vector to every row (bias broadcast).
    pub fn add_row(&self, bias: &Matrix) -> ShapeResult<Matrix> {
        if bias.rows != 1 || bias.cols != self.cols {
            return Err(ShapeMismatchError::Operands {
                op: "add_row",
                left: self.shape(),
                right: bias.shape(),
            });
        }
        let b = &bias.data[0];
        Ok(self.map_rows(|row| row.iter().zip(b).map(|(x, y)| x + y).collect()))
    }

    /// Sum of squared elements.
    pub fn sum_squares(&self) -> f64 {
        self.data.iter().flatten().map(|x| x * x).sum()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

/// Index of the maximum element, first occurrence on ties.
///
/// NaN entries never compare greater, so they are only chosen when every
/// entry is NaN (index 0). An empty slice also yields 0.
pub fn argmax(v: &[f64]) -> usize {
    let mut best = 0;
    for (i, &x) in v.iter().enumerate().skip(1) {
        if x > v[best] || (v[best].is_nan() && !x.is_nan()) {
            best = i;
        }
    }
    best
}
