use serde::{Serialize, Deserialize};

/// Number of equal-width buckets in a histogram summary.
pub const HISTOGRAM_BUCKETS: usize = 30;

/// One time-series entry, serialized as a JSON object tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryRecord {
    Scalar {
        name: String,
        step: u64,
        value: f64,
    },
    Histogram {
        name: String,
        step: u64,
        histogram: Histogram,
    },
}

impl SummaryRecord {
    pub fn name(&self) -> &str {
        match self {
            SummaryRecord::Scalar { name, .. } | SummaryRecord::Histogram { name, .. } => name,
        }
    }
}

/// Distribution of a batch of values.
///
/// `bucket_limits[i]` is the inclusive upper edge of bucket `i`;
/// `bucket_counts` has the same length and sums to `count`. Non-finite
/// inputs are not bucketed and are tallied in `non_finite` instead, so every
/// numeric field stays representable in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub count: usize,
    #[serde(default)]
    pub non_finite: usize,
    pub sum: f64,
    pub sum_squares: f64,
    pub bucket_limits: Vec<f64>,
    pub bucket_counts: Vec<usize>,
}

impl Histogram {
    /// Buckets the finite `values` into `HISTOGRAM_BUCKETS` equal-width bins
    /// spanning [min, max]. A value on an edge belongs to the lower bucket.
    /// Identical values share one bucket; no values, no buckets.
    pub fn from_values(values: &[f64]) -> Histogram {
        let finite: Vec<f64> = values.iter().cloned().filter(|v| v.is_finite()).collect();
        let non_finite = values.len() - finite.len();
        let count = finite.len();
        let sum = finite.iter().sum();
        let sum_squares = finite.iter().map(|v| v * v).sum();
        if count == 0 {
            return Histogram {
                min: 0.0,
                max: 0.0,
                count,
                non_finite,
                sum,
                sum_squares,
                bucket_limits: vec![],
                bucket_counts: vec![],
            };
        }

        let min = finite.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let (bucket_limits, bucket_counts) = if min == max {
            (vec![max], vec![count])
        } else {
            let width = (max - min) / HISTOGRAM_BUCKETS as f64;
            let limits: Vec<f64> = (1..=HISTOGRAM_BUCKETS)
                .map(|i| if i == HISTOGRAM_BUCKETS { max } else { min + width * i as f64 })
                .collect();
            let mut counts = vec![0; HISTOGRAM_BUCKETS];
            for v in &finite {
                // First bucket whose upper edge is >= v.
                let idx = limits.partition_point(|&limit| limit < *v).min(HISTOGRAM_BUCKETS - 1);
                counts[idx] += 1;
            }
            (limits, counts)
        };

        Histogram { min, max, count, non_finite, sum, sum_squares, bucket_limits, bucket_counts }
    }
}
