use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PrepError;
use crate::types::{Cell, ColumnName};

/// In-memory delimited table: one header row plus uniform-width data rows.
///
/// Rows are kept in file order; all transformations that need a different
/// shape build a new table instead of mutating cells in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    header: Vec<ColumnName>,
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Build a table from a header and rows, enforcing uniform width.
    pub fn new(header: Vec<ColumnName>, rows: Vec<Vec<Cell>>) -> Result<Self, PrepError> {
        if header.is_empty() {
            return Err(PrepError::Configuration(
                "table header must name at least one column".to_string(),
            ));
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                return Err(PrepError::Configuration(format!(
                    "row {idx} has {} cells, header has {}",
                    row.len(),
                    header.len()
                )));
            }
        }
        Ok(Self { header, rows })
    }

    /// Read a table from a delimited file with a header row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PrepError> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|source| PrepError::TableRead {
                path: path.to_path_buf(),
                source,
            })?;
        let header: Vec<ColumnName> = reader
            .headers()
            .map_err(|source| PrepError::TableRead {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(|name| name.to_string())
            .collect();
        if header.is_empty() {
            return Err(PrepError::TableShape {
                path: path.to_path_buf(),
                details: "missing header row".to_string(),
            });
        }
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| PrepError::TableRead {
                path: path.to_path_buf(),
                source,
            })?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        Ok(Self { header, rows })
    }

    /// Write the table (header first) to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PrepError> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let mut writer =
            csv::Writer::from_path(path).map_err(|source| PrepError::TableWrite {
                path: path.to_path_buf(),
                source,
            })?;
        writer
            .write_record(&self.header)
            .map_err(|source| PrepError::TableWrite {
                path: path.to_path_buf(),
                source,
            })?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|source| PrepError::TableWrite {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        writer.flush().map_err(PrepError::from)?;
        Ok(())
    }

    /// Column names in header order.
    pub fn header(&self) -> &[ColumnName] {
        &self.header
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Index of `name` in the header.
    pub fn column_index(&self, name: &str) -> Result<usize, PrepError> {
        self.header
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| PrepError::Schema {
                column: name.to_string(),
                details: "is not present in the table header".to_string(),
            })
    }

    /// Returns `true` when the header contains `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.header.iter().any(|column| column == name)
    }

    /// Iterate the cells of one column in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[index].as_str())
    }

    /// Build a new table containing only the rows at `indices`, in order.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let rows = indices
            .iter()
            .map(|&idx| self.rows[idx].clone())
            .collect();
        Self {
            header: self.header.clone(),
            rows,
        }
    }

    /// Build a new table without the named columns (absent names are ignored).
    pub fn without_columns(&self, names: &[ColumnName]) -> Self {
        let keep: Vec<usize> = (0..self.header.len())
            .filter(|&idx| !names.contains(&self.header[idx]))
            .collect();
        let header = keep.iter().map(|&idx| self.header[idx].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| keep.iter().map(|&idx| row[idx].clone()).collect())
            .collect();
        Self { header, rows }
    }

    /// Rewrite every cell equal to `from` in the named column, returning the
    /// number of rewritten cells.
    pub fn replace_in_column(
        &mut self,
        name: &str,
        from: &str,
        to: &str,
    ) -> Result<usize, PrepError> {
        let index = self.column_index(name)?;
        let mut rewritten = 0;
        for row in &mut self.rows {
            if row[index] == from {
                row[index] = to.to_string();
                rewritten += 1;
            }
        }
        Ok(rewritten)
    }

}

fn ensure_parent_dir(path: &Path) -> Result<(), PrepError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
