use std::path::PathBuf;

use tracing::info;

use crate::config::IngestionConfig;
use crate::errors::PrepError;
use crate::splits::split_rows;
use crate::table::RawTable;

/// On-disk locations produced by one ingestion run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestionArtifacts {
    /// Unmodified copy of the source table.
    pub raw: PathBuf,
    /// Persisted training partition.
    pub train: PathBuf,
    /// Persisted test partition.
    pub test: PathBuf,
}

/// Ingestion stage: raw copy plus deterministic train/test partitions.
pub struct DataIngestion {
    config: IngestionConfig,
}

impl DataIngestion {
    /// Create an ingestion stage from configuration.
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    /// Load the source table, persist the raw copy and both partitions, and
    /// return their locations.
    ///
    /// Re-runs overwrite prior artifacts in full; no partial-state cleanup
    /// is attempted on failure.
    pub fn run(&self) -> Result<IngestionArtifacts, PrepError> {
        info!(source = %self.config.source_path.display(), "data ingestion started");
        let table = RawTable::load(&self.config.source_path)?;
        info!(
            rows = table.len(),
            columns = table.width(),
            "source table loaded"
        );

        let raw = self.config.raw_data_path();
        table.save(&raw)?;
        info!(path = %raw.display(), "raw copy persisted");

        let plan = split_rows(table.len(), self.config.split, self.config.seed)?;
        info!(
            train_rows = plan.train.len(),
            test_rows = plan.test.len(),
            seed = self.config.seed,
            "train/test split completed"
        );

        let train = self.config.train_data_path();
        table.select_rows(&plan.train).save(&train)?;
        let test = self.config.test_data_path();
        table.select_rows(&plan.test).save(&test)?;
        info!(
            train = %train.display(),
            test = %test.display(),
            "partitions persisted"
        );

        Ok(IngestionArtifacts { raw, train, test })
    }
}
