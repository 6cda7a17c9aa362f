/// Constants used by label normalization.
pub mod labels {
    /// Literal label value denoting a poisonous sample.
    pub const LABEL_POISONOUS: &str = "p";
    /// Literal label value denoting an edible sample.
    pub const LABEL_EDIBLE: &str = "e";
    /// Encoded value for poisonous samples.
    pub const ENCODED_POISONOUS: f64 = 0.0;
    /// Encoded value for edible samples.
    pub const ENCODED_EDIBLE: f64 = 1.0;
    /// Default name of the label column.
    pub const DEFAULT_LABEL_COLUMN: &str = "class";
}

/// Constants used by sentinel cleaning and constant-column removal.
pub mod cleaning {
    /// Sentinel token the source table uses for unknown values.
    pub const SENTINEL_TOKEN: &str = "?";
    /// Explicit marker cells hold once a sentinel is cleared (empty cell).
    pub const MISSING_MARKER: &str = "";
    /// Default column known to carry the sentinel token.
    pub const DEFAULT_SENTINEL_COLUMN: &str = "stalk-root";
    /// Default column known to hold a single observed value.
    pub const DEFAULT_CONSTANT_COLUMN: &str = "veil-type";
}

/// Constants used by artifact layout on disk.
pub mod artifacts {
    /// Default directory for ingestion artifacts.
    pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
    /// File name for the unmodified raw copy.
    pub const RAW_FILENAME: &str = "data.csv";
    /// File name for the persisted training partition.
    pub const TRAIN_FILENAME: &str = "train.csv";
    /// File name for the persisted test partition.
    pub const TEST_FILENAME: &str = "test.csv";
    /// Subdirectory for transformation artifacts.
    pub const TRANSFORMATION_DIR: &str = "data_transformation";
    /// File name for the persisted transformation recipe.
    pub const RECIPE_FILENAME: &str = "preprocessor.json";
}

/// Constants used by ingestion defaults.
pub mod ingestion {
    /// Default path of the source table.
    pub const DEFAULT_SOURCE_PATH: &str = "data/mushrooms.csv";
    /// Default fraction of rows assigned to the test partition.
    pub const DEFAULT_TEST_FRACTION: f64 = 0.2;
    /// Default RNG seed for the shuffle-and-cut split.
    pub const DEFAULT_SPLIT_SEED: u64 = 42;
}

/// Constants used by recipe persistence and compatibility checks.
pub mod recipe {
    /// Version tag for persisted recipe documents.
    pub const RECIPE_VERSION: u8 = 1;
}
