use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::ingestion::DEFAULT_TEST_FRACTION;
use crate::errors::PrepError;

/// Fraction configuration for the train/test cut.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SplitFraction {
    /// Fraction of rows assigned to the test partition.
    pub test: f64,
}

impl Default for SplitFraction {
    fn default() -> Self {
        Self {
            test: DEFAULT_TEST_FRACTION,
        }
    }
}

impl SplitFraction {
    /// Validate that the fraction leaves both partitions non-empty.
    pub fn validated(self) -> Result<Self, PrepError> {
        if !(self.test > 0.0 && self.test < 1.0) {
            return Err(PrepError::Configuration(
                "test fraction must lie strictly between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Row-index assignment produced by one deterministic shuffle-and-cut.
///
/// `train` and `test` are disjoint and together cover `0..row_count`
/// exactly once; each keeps the shuffled visit order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitPlan {
    /// Row indices assigned to the training partition.
    pub train: Vec<usize>,
    /// Row indices assigned to the test partition.
    pub test: Vec<usize>,
}

/// Shuffle `0..row_count` with a seeded RNG and cut at the test fraction.
///
/// The test-row count is clamped to `1..=row_count - 1` so both partitions
/// are non-empty for any input with at least two rows.
pub fn split_rows(
    row_count: usize,
    fraction: SplitFraction,
    seed: u64,
) -> Result<SplitPlan, PrepError> {
    let fraction = fraction.validated()?;
    if row_count < 2 {
        return Err(PrepError::Configuration(format!(
            "cannot split {row_count} row(s) into two non-empty partitions"
        )));
    }

    let mut indices: Vec<usize> = (0..row_count).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_count = ((row_count as f64) * fraction.test).round() as usize;
    let test_count = test_count.clamp(1, row_count - 1);

    let train = indices.split_off(test_count);
    let test = indices;
    Ok(SplitPlan { train, test })
}
