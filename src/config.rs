use std::path::{Path, PathBuf};

use crate::constants::{artifacts, cleaning, ingestion, labels};
use crate::splits::SplitFraction;
use crate::types::ColumnName;

/// Configuration for the ingestion stage.
#[derive(Clone, Debug)]
pub struct IngestionConfig {
    /// Path of the raw source table.
    pub source_path: PathBuf,
    /// Directory receiving the raw copy and both partitions.
    pub artifacts_dir: PathBuf,
    /// Fraction of rows cut into the test partition.
    pub split: SplitFraction,
    /// RNG seed that controls the deterministic shuffle-and-cut.
    pub seed: u64,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(ingestion::DEFAULT_SOURCE_PATH),
            artifacts_dir: PathBuf::from(artifacts::DEFAULT_ARTIFACTS_DIR),
            split: SplitFraction::default(),
            seed: ingestion::DEFAULT_SPLIT_SEED,
        }
    }
}

impl IngestionConfig {
    /// Location of the unmodified raw copy.
    pub fn raw_data_path(&self) -> PathBuf {
        self.artifacts_dir.join(artifacts::RAW_FILENAME)
    }

    /// Location of the persisted training partition.
    pub fn train_data_path(&self) -> PathBuf {
        self.artifacts_dir.join(artifacts::TRAIN_FILENAME)
    }

    /// Location of the persisted test partition.
    pub fn test_data_path(&self) -> PathBuf {
        self.artifacts_dir.join(artifacts::TEST_FILENAME)
    }
}

/// Configuration for the transformation stage.
#[derive(Clone, Debug)]
pub struct TransformationConfig {
    /// Column holding the two-valued classification label.
    pub label_column: ColumnName,
    /// Column whose sentinel tokens are rewritten to missing markers.
    pub sentinel_column: ColumnName,
    /// Column known to hold a single observed value.
    pub constant_column: ColumnName,
    /// Directory receiving the persisted recipe.
    pub artifacts_dir: PathBuf,
}

impl Default for TransformationConfig {
    fn default() -> Self {
        Self {
            label_column: labels::DEFAULT_LABEL_COLUMN.to_string(),
            sentinel_column: cleaning::DEFAULT_SENTINEL_COLUMN.to_string(),
            constant_column: cleaning::DEFAULT_CONSTANT_COLUMN.to_string(),
            artifacts_dir: Path::new(artifacts::DEFAULT_ARTIFACTS_DIR)
                .join(artifacts::TRANSFORMATION_DIR),
        }
    }
}

impl TransformationConfig {
    /// Location of the persisted transformation recipe.
    pub fn recipe_path(&self) -> PathBuf {
        self.artifacts_dir.join(artifacts::RECIPE_FILENAME)
    }
}
