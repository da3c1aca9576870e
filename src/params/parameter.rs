use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// What a trainable parameter is used for.
///
/// Only `Weight` parameters contribute to L2 regularization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamRole {
    Weight,
    Bias,
}

/// A named, role-tagged trainable tensor.
///
/// `name` is fully qualified, e.g. `"prediction/W"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub role: ParamRole,
    pub value: Matrix,
}

impl Parameter {
    pub fn weight(name: impl Into<String>, value: Matrix) -> Parameter {
        Parameter { name: name.into(), role: ParamRole::Weight, value }
    }

    pub fn bias(name: impl Into<String>, value: Matrix) -> Parameter {
        Parameter { name: name.into(), role: ParamRole::Bias, value }
    }

    /// L2 loss of this parameter: sum(x²) / 2.
    pub fn l2_loss(&self) -> f64 {
        self.value.sum_squares() / 2.0
    }
}
