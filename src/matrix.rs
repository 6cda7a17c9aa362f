use ndarray::{Array2, ArrayView1, ArrayView2, s};

use crate::errors::PrepError;
use crate::types::ColumnName;

/// Purely numeric output matrix with its column layout.
///
/// The final column always holds the encoded label; preceding columns hold
/// one-hot feature indicators. Row order matches the source partition.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedMatrix {
    columns: Vec<ColumnName>,
    values: Array2<f64>,
}

impl EncodedMatrix {
    /// Build a matrix, validating that the layout matches the value width.
    pub(crate) fn new(columns: Vec<ColumnName>, values: Array2<f64>) -> Result<Self, PrepError> {
        if columns.is_empty() {
            return Err(PrepError::Configuration(
                "encoded matrix needs at least the label column".to_string(),
            ));
        }
        if columns.len() != values.ncols() {
            return Err(PrepError::Configuration(format!(
                "encoded matrix has {} value columns but {} column names",
                values.ncols(),
                columns.len()
            )));
        }
        Ok(Self { columns, values })
    }

    /// Output column names, label last.
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Full numeric payload.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns including the label.
    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Name of the label column (always last).
    pub fn label_column(&self) -> &str {
        self.columns
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// View of the encoded label column.
    pub fn labels(&self) -> ArrayView1<'_, f64> {
        self.values.column(self.values.ncols() - 1)
    }

    /// View of the feature columns (everything but the label).
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.values.slice(s![.., ..self.values.ncols() - 1])
    }
}
