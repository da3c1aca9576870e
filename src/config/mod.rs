mod json;
pub mod model_config;
pub mod optimization_config;
pub mod save_dirs;

pub use model_config::ModelConfig;
pub use optimization_config::{OptimizationConfig, DEFAULT_EPSILON, DEFAULT_L2_COEFFICIENT};
pub use save_dirs::SaveDirs;
