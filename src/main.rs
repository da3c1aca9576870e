// Builds the entity classifier head from the preset config, evaluates one
// random batch, and records its summaries under ./saves/graphs/train/.
// Training itself is driven by an external loop.
use std::error::Error;

use alpaca_nn::{
    DenseConfig, JsonlSummaryWriter, Matrix, ModelConfig, ParameterStore, PredictionConfig,
    SaveDirs, StandardLayers,
};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

struct EntityHead {
    params: ParameterStore,
    rng: StdRng,
}

impl StandardLayers for EntityHead {
    fn parameters(&self) -> &ParameterStore {
        &self.params
    }

    fn parameters_and_rng(&mut self) -> (&mut ParameterStore, &mut dyn RngCore) {
        (&mut self.params, &mut self.rng)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = ModelConfig::entity();
    let emb_dim = config.emb_dim.unwrap_or(300);
    let n_hidden = config.layer("h_ent_int").ok_or("missing layer h_ent_int")?;
    let n_output = config.layer("h_ent_output").ok_or("missing layer h_ent_output")?;

    let mut model = EntityHead { params: ParameterStore::new(), rng: StdRng::seed_from_u64(7) };

    let mut data_rng = StdRng::seed_from_u64(42);
    let x = Matrix::from_data(
        (0..config.batch_size)
            .map(|_| (0..emb_dim).map(|_| data_rng.gen_range(-1.0..1.0)).collect())
            .collect(),
    )?;
    let target = Matrix::from_data(
        (0..config.batch_size)
            .map(|_| {
                let mut row = vec![0.0; config.n_classes];
                row[data_rng.gen_range(0..config.n_classes)] = 1.0;
                row
            })
            .collect(),
    )?;

    let encoded = model.dense_layer(
        &x,
        "entity",
        &DenseConfig { n_batches: config.batch_size, n_input: emb_dim, n_hidden, n_output },
    )?;
    let prediction = model.prediction_layer(
        &encoded,
        "prediction",
        &PredictionConfig { n_batches: config.batch_size, n_input: n_output, n_classes: config.n_classes },
    )?;
    let result = model.define_optimization_vars(&target, &prediction, None)?;

    println!("parameters: {}", model.parameters().len());
    println!("loss = {:.6}  accuracy = {:.4}  (l2 = {:.6})", result.loss, result.accuracy, result.regularization);

    let dirs = SaveDirs::split(".");
    dirs.create_all()?;
    let mut writer = JsonlSummaryWriter::create(&dirs.graphs_train)?;
    model.summaries(&mut writer, 0, &result)?;
    writer.flush()?;
    println!("summaries written to {}", writer.path().display());

    Ok(())
}
