use rand::RngCore;

use crate::config::OptimizationConfig;
use crate::error::ShapeResult;
use crate::layers::dense::{dense_layer, DenseConfig};
use crate::layers::prediction::{prediction_layer, PredictionConfig};
use crate::loss::optimization::{define_optimization_vars, Optimization};
use crate::math::matrix::Matrix;
use crate::params::ParameterStore;
use crate::summary::{write_summaries, SummarySink};

/// Reusable layer builders for any model that owns a parameter store.
///
/// Implementors provide the store, the loss hyperparameters and a random
/// source for initialization; the building blocks come for free.
pub trait StandardLayers {
    fn parameters(&self) -> &ParameterStore;

    /// Store and random source are borrowed together so initialization can
    /// draw from the rng while inserting into the store.
    fn parameters_and_rng(&mut self) -> (&mut ParameterStore, &mut dyn RngCore);

    fn optimization_config(&self) -> OptimizationConfig {
        OptimizationConfig::default()
    }

    fn prediction_layer(&mut self, x: &Matrix, scope: &str, config: &PredictionConfig) -> ShapeResult<Matrix> {
        let (params, rng) = self.parameters_and_rng();
        prediction_layer(x, scope, config, params, rng)
    }

    fn dense_layer(&mut self, x: &Matrix, scope: &str, config: &DenseConfig) -> ShapeResult<Matrix> {
        let (params, rng) = self.parameters_and_rng();
        dense_layer(x, scope, config, params, rng)
    }

    fn define_optimization_vars(
        &self,
        target: &Matrix,
        prediction: &Matrix,
        class_weights: Option<&[f64]>,
    ) -> ShapeResult<Optimization> {
        define_optimization_vars(
            target,
            prediction,
            class_weights,
            self.parameters(),
            &self.optimization_config(),
        )
    }

    fn summaries(&self, sink: &mut dyn SummarySink, step: u64, result: &Optimization) -> std::io::Result<()> {
        write_summaries(sink, step, result)
    }
}
