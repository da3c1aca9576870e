use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

use crate::config::json;

/// On-disk layout for summaries and checkpoints, all under `<root>/saves/`.
///
/// A single-graph layout points `graphs_train` and `graphs_test` at the same
/// `saves/graphs/` directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDirs {
    pub saves: PathBuf,
    pub graphs_train: PathBuf,
    pub graphs_test: PathBuf,
    pub checkpoints: PathBuf,
}

impl SaveDirs {
    /// `saves/graphs/` shared by train and test summaries.
    pub fn single<P: AsRef<Path>>(root: P) -> SaveDirs {
        let saves = root.as_ref().join("saves");
        let graphs = saves.join("graphs");
        SaveDirs {
            checkpoints: saves.join("checkpoints"),
            graphs_train: graphs.clone(),
            graphs_test: graphs,
            saves,
        }
    }

    /// Separate `saves/graphs/train/` and `saves/graphs/test/`.
    pub fn split<P: AsRef<Path>>(root: P) -> SaveDirs {
        let saves = root.as_ref().join("saves");
        let graphs = saves.join("graphs");
        SaveDirs {
            checkpoints: saves.join("checkpoints"),
            graphs_train: graphs.join("train"),
            graphs_test: graphs.join("test"),
            saves,
        }
    }

    /// Creates every directory in the layout (idempotent).
    pub fn create_all(&self) -> std::io::Result<()> {
        for dir in [&self.saves, &self.graphs_train, &self.graphs_test, &self.checkpoints] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        json::save_json(self, path)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<SaveDirs> {
        json::load_json(path)
    }
}
