use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

/// Serializes `value` to a pretty-printed JSON file.
pub(crate) fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Deserializes a value from a JSON file previously written by `save_json`.
pub(crate) fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> std::io::Result<T> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
