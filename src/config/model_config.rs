use std::collections::BTreeMap;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::config::json;

/// Hyperparameters shared by a model and its training driver.
///
/// `layers` maps a hidden-layer name (e.g. `"h_gru"`) to its width. Fields
/// that only one model family uses are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub iterations: usize,
    pub batch_size: usize,
    /// Raw feature count per time step (sequence models).
    #[serde(default)]
    pub n_features: Option<usize>,
    /// Word-embedding width (entity models).
    #[serde(default)]
    pub emb_dim: Option<usize>,
    pub n_steps: usize,
    pub layers: BTreeMap<String, usize>,
    #[serde(default)]
    pub encoded_dim: Option<usize>,
    pub n_classes: usize,
}

impl ModelConfig {
    /// Preset for the GRU + attention sequence classifier.
    pub fn sequence() -> ModelConfig {
        ModelConfig {
            iterations: 500,
            batch_size: 20,
            n_features: Some(4),
            emb_dim: None,
            n_steps: 10,
            layers: layer_map(&[("h_gru", 10), ("h_att", 4)]),
            encoded_dim: Some(10),
            n_classes: 10,
        }
    }

    /// Preset for the binary entity classifier over word embeddings.
    pub fn entity() -> ModelConfig {
        ModelConfig {
            iterations: 32,
            batch_size: 20,
            n_features: None,
            emb_dim: Some(300),
            n_steps: 10,
            layers: layer_map(&[
                ("h_seq_int", 11),
                ("h_seq_output", 7),
                ("h_ent_int", 13),
                ("h_ent_output", 17),
            ]),
            encoded_dim: None,
            n_classes: 2,
        }
    }

    /// Width of the named hidden layer.
    pub fn layer(&self, name: &str) -> Option<usize> {
        self.layers.get(name).copied()
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        json::save_json(self, path)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<ModelConfig> {
        json::load_json(path)
    }
}

fn layer_map(entries: &[(&str, usize)]) -> BTreeMap<String, usize> {
    entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}
