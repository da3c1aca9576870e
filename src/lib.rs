pub mod error;
pub mod math;
pub mod activation;
pub mod params;
pub mod layers;
pub mod loss;
pub mod config;
pub mod summary;

// Convenience re-exports
pub use error::{ShapeMismatchError, ShapeResult};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use params::{ParamRole, Parameter, ParameterStore};
pub use layers::{dense_layer, prediction_layer, DenseConfig, PredictionConfig, StandardLayers};
pub use loss::{define_optimization_vars, Optimization};
pub use config::{ModelConfig, OptimizationConfig, SaveDirs};
pub use summary::{JsonlSummaryWriter, MemorySink, SummarySink};
