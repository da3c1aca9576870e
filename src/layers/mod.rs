pub mod dense;
pub mod prediction;
pub mod standard;

pub use dense::{dense_layer, DenseConfig};
pub use prediction::{prediction_layer, PredictionConfig};
pub use standard::StandardLayers;
