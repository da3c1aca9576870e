pub mod record;
pub mod writer;

pub use record::{Histogram, SummaryRecord, HISTOGRAM_BUCKETS};
pub use writer::{write_summaries, JsonlSummaryWriter, MemorySink, SummarySink, SUMMARY_FILE};
