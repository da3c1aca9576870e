use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::loss::optimization::Optimization;
use crate::summary::record::{Histogram, SummaryRecord};

pub const SUMMARY_FILE: &str = "summaries.jsonl";

/// Destination for time-series summaries.
pub trait SummarySink {
    fn write(&mut self, record: SummaryRecord) -> std::io::Result<()>;

    fn scalar(&mut self, name: &str, step: u64, value: f64) -> std::io::Result<()> {
        self.write(SummaryRecord::Scalar { name: name.to_string(), step, value })
    }

    fn histogram(&mut self, name: &str, step: u64, values: &[f64]) -> std::io::Result<()> {
        self.write(SummaryRecord::Histogram {
            name: name.to_string(),
            step,
            histogram: Histogram::from_values(values),
        })
    }
}

/// Records the loss and accuracy scalars plus a histogram of per-example losses.
pub fn write_summaries(sink: &mut dyn SummarySink, step: u64, result: &Optimization) -> std::io::Result<()> {
    sink.scalar("loss", step, result.loss)?;
    sink.scalar("accuracy", step, result.accuracy)?;
    sink.histogram("histogram loss", step, &result.example_losses)
}

/// Appends summaries as JSON lines to `<dir>/summaries.jsonl`.
///
/// JSON has no NaN or infinity: a non-finite scalar value is written as
/// `null`, and `read_all` rejects that line with `InvalidData`. Histograms
/// never hit this because they count non-finite inputs separately.
pub struct JsonlSummaryWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonlSummaryWriter {
    /// Opens (or creates) the summary file in `dir`, creating `dir` if needed.
    pub fn create<P: AsRef<Path>>(dir: P) -> std::io::Result<JsonlSummaryWriter> {
        std::fs::create_dir_all(dir.as_ref())?;
        let path = dir.as_ref().join(SUMMARY_FILE);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(JsonlSummaryWriter { path, writer: BufWriter::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Reads back every record from a file written by this writer.
    pub fn read_all<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<SummaryRecord>> {
        let contents = std::fs::read_to_string(path)?;
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })
            .collect()
    }
}

impl SummarySink for JsonlSummaryWriter {
    fn write(&mut self, record: SummaryRecord) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, &record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        self.writer.write_all(b"\n")
    }
}

impl Drop for JsonlSummaryWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Keeps records in memory; useful for tests and in-process dashboards.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<SummaryRecord>,
}

impl SummarySink for MemorySink {
    fn write(&mut self, record: SummaryRecord) -> std::io::Result<()> {
        self.records.push(record);
        Ok(())
    }
}
