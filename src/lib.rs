#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Stage configuration types.
pub mod config;
/// Centralized constants used across ingestion, cleaning, and artifacts.
pub mod constants;
/// Ingestion stage: raw copy plus deterministic partitions.
pub mod ingestion;
/// Encoded numeric output matrices.
pub mod matrix;
/// Fitted transformation recipe: fit, apply, persist.
pub mod recipe;
/// Deterministic shuffle-and-cut row partitioning.
pub mod splits;
/// Numeric outlier-clipping helpers.
pub mod stats;
/// Delimited table loading, saving, and column operations.
pub mod table;
/// Transformation stage orchestration.
pub mod transformation;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{IngestionConfig, TransformationConfig};
pub use errors::PrepError;
pub use ingestion::{DataIngestion, IngestionArtifacts};
pub use matrix::EncodedMatrix;
pub use recipe::{LabelMapping, TransformationRecipe};
pub use splits::{SplitFraction, SplitPlan, split_rows};
pub use table::RawTable;
pub use transformation::{DataTransformation, TransformationOutput};
pub use types::{Category, Cell, ColumnName, LabelText, PathString};
