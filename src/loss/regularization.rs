use crate::params::{ParamRole, ParameterStore};

/// `coefficient * sum(l2_loss(p))` over every `Weight` parameter.
/// Bias parameters are excluded; an empty set yields 0.
pub fn l2_regularization(params: &ParameterStore, coefficient: f64) -> f64 {
    let total: f64 = params.with_role(ParamRole::Weight)
        .map(|p| p.l2_loss())
        .sum();
    total * coefficient
}
