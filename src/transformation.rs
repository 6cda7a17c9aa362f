use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::TransformationConfig;
use crate::errors::PrepError;
use crate::matrix::EncodedMatrix;
use crate::recipe::TransformationRecipe;
use crate::table::RawTable;

/// Matrices and recipe location produced by one transformation run.
#[derive(Clone, Debug)]
pub struct TransformationOutput {
    /// Encoded training partition, label last.
    pub train: EncodedMatrix,
    /// Encoded test partition, same column layout as `train`.
    pub test: EncodedMatrix,
    /// Location of the persisted fitted recipe.
    pub recipe_path: PathBuf,
}

/// Transformation stage: fit the recipe on train, apply it to both
/// partitions, persist the fitted state.
pub struct DataTransformation {
    config: TransformationConfig,
}

impl DataTransformation {
    /// Create a transformation stage from configuration.
    pub fn new(config: TransformationConfig) -> Self {
        Self { config }
    }

    /// Run the linear cleaning/encoding pipeline over persisted partitions.
    pub fn run(
        &self,
        train_path: impl AsRef<Path>,
        test_path: impl AsRef<Path>,
    ) -> Result<TransformationOutput, PrepError> {
        info!(
            train = %train_path.as_ref().display(),
            test = %test_path.as_ref().display(),
            "data transformation started"
        );
        let train = RawTable::load(train_path)?;
        let test = RawTable::load(test_path)?;
        info!(
            train_rows = train.len(),
            test_rows = test.len(),
            "partitions loaded"
        );

        let recipe = TransformationRecipe::fit(&train, &self.config)?;
        info!(
            dropped = recipe.dropped_columns().len(),
            output_columns = recipe.output_columns().len(),
            "recipe fitted on training partition"
        );

        let train_matrix = recipe.encode(&train)?;
        let test_matrix = recipe.encode(&test)?;
        info!(
            rows = train_matrix.nrows(),
            columns = train_matrix.ncols(),
            "training partition encoded"
        );
        info!(
            rows = test_matrix.nrows(),
            columns = test_matrix.ncols(),
            "test partition encoded"
        );

        let recipe_path = self.config.recipe_path();
        recipe.save(&recipe_path)?;
        info!(path = %recipe_path.display(), "recipe persisted");

        Ok(TransformationOutput {
            train: train_matrix,
            test: test_matrix,
            recipe_path,
        })
    }
}
