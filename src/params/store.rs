use std::collections::HashMap;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{ShapeMismatchError, ShapeResult};
use crate::math::matrix::Matrix;
use crate::params::parameter::{ParamRole, Parameter};

/// Registry of every trainable parameter in a model.
///
/// Parameters keep their insertion order so reductions over the set are
/// deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterStore {
    params: Vec<Parameter>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ParameterStore {
    pub fn new() -> ParameterStore {
        ParameterStore::default()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    /// Parameters tagged with `role`, in insertion order.
    pub fn with_role(&self, role: ParamRole) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(move |p| p.role == role)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.lookup(name).map(|i| &self.params[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.lookup(name).map(move |i| &mut self.params[i])
    }

    /// Inserts a parameter, replacing any previous one with the same name.
    pub fn insert(&mut self, param: Parameter) {
        match self.lookup(&param.name) {
            Some(i) => self.params[i] = param,
            None => {
                self.index.insert(param.name.clone(), self.params.len());
                self.params.push(param);
            }
        }
    }

    /// Returns `scope/name`, creating it with Glorot-uniform values when absent.
    ///
    /// An existing parameter must have the requested shape and role, so two
    /// layers sharing a scope reuse the same variables.
    pub fn get_or_create<R: Rng + ?Sized>(
        &mut self,
        scope: &str,
        name: &str,
        role: ParamRole,
        shape: (usize, usize),
        rng: &mut R,
    ) -> ShapeResult<&Parameter> {
        if scope.is_empty() || scope.ends_with('/') {
            return Err(ShapeMismatchError::Scope(scope.to_string()));
        }
        let full = format!("{scope}/{name}");
        if let Some(i) = self.lookup(&full) {
            let existing = &self.params[i];
            if existing.role != role {
                return Err(ShapeMismatchError::RoleConflict {
                    name: full,
                    existing: existing.role,
                    requested: role,
                });
            }
            if existing.value.shape() != shape {
                return Err(ShapeMismatchError::Operands {
                    op: "get_or_create",
                    left: existing.value.shape(),
                    right: shape,
                });
            }
            return Ok(&self.params[i]);
        }
        let fans = match role {
            ParamRole::Weight => shape,
            ParamRole::Bias => (shape.1, shape.1),
        };
        let value = Matrix::glorot_uniform_with_fans(shape.0, shape.1, fans, rng);
        self.insert(Parameter { name: full, role, value });
        Ok(&self.params[self.params.len() - 1])
    }

    // The index is not serialized, so fall back to a scan after deserialization.
    fn lookup(&self, name: &str) -> Option<usize> {
        match self.index.get(name) {
            Some(&i) => Some(i),
            None => self.params.iter().position(|p| p.name == name),
        }
    }
}
