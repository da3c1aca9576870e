pub mod accuracy;
pub mod cross_entropy;
pub mod optimization;
pub mod regularization;

pub use accuracy::accuracy;
pub use cross_entropy::{is_one_hot, weighted_cross_entropy};
pub use optimization::{define_optimization_vars, Optimization};
pub use regularization::l2_regularization;
