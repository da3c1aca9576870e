use std::fmt;

use crate::params::ParamRole;

/// Raised when an operand fails a shape precondition.
///
/// Every check happens before any arithmetic, so a returned error means no
/// partial result was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatchError {
    /// Two matrices whose shapes are incompatible for `op`.
    Operands {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Class-weight vector whose length differs from the number of classes.
    WeightLength { expected: usize, found: usize },
    /// Row `row` of a matrix literal has a different width than row 0.
    Ragged { row: usize, expected: usize, found: usize },
    /// Variable scope name that cannot prefix a parameter name.
    Scope(String),
    /// A parameter already exists under `name` with a different role.
    RoleConflict {
        name: String,
        existing: ParamRole,
        requested: ParamRole,
    },
}

impl fmt::Display for ShapeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeMismatchError::Operands { op, left, right } => write!(
                f,
                "{op}: incompatible shapes {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            ShapeMismatchError::WeightLength { expected, found } => write!(
                f,
                "class weights have length {found}, expected {expected}"
            ),
            ShapeMismatchError::Ragged { row, expected, found } => write!(
                f,
                "row {row} has {found} columns, expected {expected}"
            ),
            ShapeMismatchError::Scope(scope) => write!(f, "invalid variable scope {scope:?}"),
            ShapeMismatchError::RoleConflict { name, existing, requested } => write!(
                f,
                "parameter {name:?} exists as {existing:?}, requested as {requested:?}"
            ),
        }
    }
}

impl std::error::Error for ShapeMismatchError {}

/// Convenience alias used by every shape-checked operation in the crate.
pub type ShapeResult<T> = Result<T, ShapeMismatchError>;
