use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TransformationConfig;
use crate::constants::cleaning::{MISSING_MARKER, SENTINEL_TOKEN};
use crate::constants::labels;
use crate::constants::recipe::RECIPE_VERSION;
use crate::errors::PrepError;
use crate::matrix::EncodedMatrix;
use crate::table::RawTable;
use crate::types::{Category, ColumnName, LabelText};

/// Fixed literal mapping from label text to encoded value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMapping {
    /// Literal denoting the poisonous class (encoded as 0).
    pub poisonous: LabelText,
    /// Literal denoting the edible class (encoded as 1).
    pub edible: LabelText,
}

impl Default for LabelMapping {
    fn default() -> Self {
        Self {
            poisonous: labels::LABEL_POISONOUS.to_string(),
            edible: labels::LABEL_EDIBLE.to_string(),
        }
    }
}

impl LabelMapping {
    /// Encode one label literal; unexpected literals are schema errors.
    pub fn encode(&self, column: &str, value: &str) -> Result<f64, PrepError> {
        if value == self.poisonous {
            Ok(labels::ENCODED_POISONOUS)
        } else if value == self.edible {
            Ok(labels::ENCODED_EDIBLE)
        } else {
            Err(PrepError::Schema {
                column: column.to_string(),
                details: format!("holds unexpected label literal '{value}'"),
            })
        }
    }
}

/// Fitted cleaning/encoding state, learned from the training partition only.
///
/// A recipe is immutable after `fit`: applying it to another partition never
/// relearns fill values or vocabularies, which is what keeps the test
/// partition leakage-free and the output column sets identical.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformationRecipe {
    version: u8,
    label_column: ColumnName,
    label_mapping: LabelMapping,
    sentinel_column: ColumnName,
    dropped_columns: Vec<ColumnName>,
    fill_values: IndexMap<ColumnName, Category>,
    vocabularies: IndexMap<ColumnName, Vec<Category>>,
}

impl TransformationRecipe {
    /// Learn a recipe from the training partition.
    ///
    /// Fits, in order: constant-column drops (the configured known-constant
    /// column plus any feature column observed single-valued in `train`),
    /// per-column most-frequent fill values (sentinel and missing cells
    /// excluded), and per-column category vocabularies over the imputed
    /// training cells.
    pub fn fit(train: &RawTable, config: &TransformationConfig) -> Result<Self, PrepError> {
        train.column_index(&config.label_column)?;
        train.column_index(&config.sentinel_column)?;

        let label_mapping = LabelMapping::default();
        let dropped_columns = constant_columns(train, config);
        let mut working = train.without_columns(&dropped_columns);
        if working.has_column(&config.sentinel_column) {
            let cleared =
                working.replace_in_column(&config.sentinel_column, SENTINEL_TOKEN, MISSING_MARKER)?;
            debug!(
                column = %config.sentinel_column,
                cleared,
                "sentinel tokens cleared before fitting"
            );
        }

        let mut fill_values = IndexMap::new();
        for name in working.header().to_vec() {
            if name == config.label_column {
                continue;
            }
            let index = working.column_index(&name)?;
            let fill = most_frequent(&working, index).ok_or_else(|| PrepError::Schema {
                column: name.clone(),
                details: "has no non-missing training values to impute from".to_string(),
            })?;
            fill_values.insert(name, fill);
        }

        for (name, fill) in &fill_values {
            working.replace_in_column(name, MISSING_MARKER, fill)?;
        }

        let mut vocabularies = IndexMap::new();
        for (name, _) in &fill_values {
            let index = working.column_index(name)?;
            let mut categories: Vec<Category> =
                working.column(index).map(|cell| cell.to_string()).collect();
            categories.sort();
            categories.dedup();
            vocabularies.insert(name.clone(), categories);
        }

        Ok(Self {
            version: RECIPE_VERSION,
            label_column: config.label_column.clone(),
            label_mapping,
            sentinel_column: config.sentinel_column.clone(),
            dropped_columns,
            fill_values,
            vocabularies,
        })
    }

    /// Apply the fitted recipe to a partition, producing the numeric matrix.
    ///
    /// The identical fitted state is used for every partition; categories the
    /// training partition never saw encode as all-zero indicator groups.
    pub fn encode(&self, table: &RawTable) -> Result<EncodedMatrix, PrepError> {
        let mut working = table.without_columns(&self.dropped_columns);
        let label_index = working.column_index(&self.label_column)?;
        if working.has_column(&self.sentinel_column) {
            working.replace_in_column(&self.sentinel_column, SENTINEL_TOKEN, MISSING_MARKER)?;
        }
        for (name, fill) in &self.fill_values {
            working.replace_in_column(name, MISSING_MARKER, fill)?;
        }

        let layout = self.output_columns();
        let feature_width = layout.len() - 1;
        let mut values = Array2::<f64>::zeros((working.len(), layout.len()));

        let mut offset = 0usize;
        for (name, vocabulary) in &self.vocabularies {
            let index = working.column_index(name)?;
            for (row, cell) in working.column(index).enumerate() {
                // Drop-first: the lexicographically smallest category is the
                // all-zero baseline, as is anything unseen during fitting.
                if let Some(position) = vocabulary.iter().position(|category| category.as_str() == cell)
                    && position > 0
                {
                    values[(row, offset + position - 1)] = 1.0;
                }
            }
            offset += vocabulary.len().saturating_sub(1);
        }
        debug_assert_eq!(offset, feature_width);

        for (row, cell) in working.column(label_index).enumerate() {
            values[(row, feature_width)] = self.label_mapping.encode(&self.label_column, cell)?;
        }

        EncodedMatrix::new(layout, values)
    }

    /// Output column names implied by the fitted state, label last.
    pub fn output_columns(&self) -> Vec<ColumnName> {
        let mut columns = Vec::new();
        for (name, vocabulary) in &self.vocabularies {
            for category in vocabulary.iter().skip(1) {
                columns.push(format!("{name}_{category}"));
            }
        }
        columns.push(self.label_column.clone());
        columns
    }

    /// Columns removed from every partition before encoding.
    pub fn dropped_columns(&self) -> &[ColumnName] {
        &self.dropped_columns
    }

    /// Fitted fill value for one feature column.
    pub fn fill_value(&self, column: &str) -> Option<&str> {
        self.fill_values.get(column).map(String::as_str)
    }

    /// Fitted category vocabulary for one feature column.
    pub fn vocabulary(&self, column: &str) -> Option<&[Category]> {
        self.vocabularies.get(column).map(Vec::as_slice)
    }

    /// Label mapping used for encoding.
    pub fn label_mapping(&self) -> &LabelMapping {
        &self.label_mapping
    }

    /// Persist the recipe as a versioned JSON document.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PrepError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(self)
            .map_err(|err| PrepError::Recipe(format!("failed to encode recipe: {err}")))?;
        fs::write(path, payload)?;
        Ok(())
    }

    /// Load a persisted recipe, verifying the format version.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PrepError> {
        let payload = fs::read(path.as_ref())?;
        let recipe: Self = serde_json::from_slice(&payload)
            .map_err(|err| PrepError::Recipe(format!("failed to decode recipe: {err}")))?;
        if recipe.version != RECIPE_VERSION {
            return Err(PrepError::Recipe(format!(
                "recipe version mismatch (expected {}, found {})",
                RECIPE_VERSION, recipe.version
            )));
        }
        Ok(recipe)
    }
}

/// Known-constant column plus any feature column observed single-valued in
/// the training partition, in header order.
fn constant_columns(train: &RawTable, config: &TransformationConfig) -> Vec<ColumnName> {
    let mut dropped = Vec::new();
    for name in train.header() {
        if name == &config.label_column {
            continue;
        }
        if name == &config.constant_column {
            dropped.push(name.clone());
            continue;
        }
        let index = match train.column_index(name) {
            Ok(index) => index,
            Err(_) => continue,
        };
        let mut values = train.column(index);
        if let Some(first) = values.next()
            && values.all(|value| value == first)
        {
            dropped.push(name.clone());
        }
    }
    dropped
}

/// Most frequent non-missing value in one column; ties resolve to the value
/// seen first, so refitting on the same partition is stable.
fn most_frequent(table: &RawTable, index: usize) -> Option<Category> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for cell in table.column(index) {
        if cell == MISSING_MARKER || cell == SENTINEL_TOKEN {
            continue;
        }
        *counts.entry(cell).or_insert(0) += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fixture_table() -> RawTable {
        RawTable::new(
            vec![
                "class".into(),
                "cap-shape".into(),
                "stalk-root".into(),
                "veil-type".into(),
            ],
            vec![
                vec!["p".into(), "x".into(), "b".into(), "p".into()],
                vec!["e".into(), "b".into(), "b".into(), "p".into()],
                vec!["e".into(), "x".into(), "?".into(), "p".into()],
                vec!["p".into(), "x".into(), "c".into(), "p".into()],
            ],
        )
        .unwrap()
    }

    fn fixture_config() -> TransformationConfig {
        TransformationConfig {
            label_column: "class".into(),
            sentinel_column: "stalk-root".into(),
            constant_column: "veil-type".into(),
            artifacts_dir: "unused".into(),
        }
    }

    #[test]
    fn fit_drops_constant_columns_and_learns_fill_values() {
        let recipe = TransformationRecipe::fit(&fixture_table(), &fixture_config()).unwrap();

        assert_eq!(recipe.dropped_columns(), ["veil-type"]);
        assert_eq!(recipe.fill_value("stalk-root"), Some("b"));
        assert_eq!(recipe.vocabulary("cap-shape").unwrap(), ["b", "x"]);
        // The sentinel row imputed to `b`, so the vocabulary holds b and c.
        assert_eq!(recipe.vocabulary("stalk-root").unwrap(), ["b", "c"]);
    }

    #[test]
    fn fit_detects_unconfigured_constant_columns() {
        let table = RawTable::new(
            vec![
                "class".into(),
                "ring-number".into(),
                "stalk-root".into(),
                "veil-type".into(),
            ],
            vec![
                vec!["p".into(), "o".into(), "b".into(), "p".into()],
                vec!["e".into(), "o".into(), "c".into(), "p".into()],
            ],
        )
        .unwrap();
        let recipe = TransformationRecipe::fit(&table, &fixture_config()).unwrap();
        assert_eq!(recipe.dropped_columns(), ["ring-number", "veil-type"]);
    }

    #[test]
    fn encode_lays_out_drop_first_indicators_with_label_last() {
        let table = fixture_table();
        let recipe = TransformationRecipe::fit(&table, &fixture_config()).unwrap();
        let matrix = recipe.encode(&table).unwrap();

        assert_eq!(
            matrix.columns(),
            ["cap-shape_x", "stalk-root_c", "class"]
        );
        // Row 0: cap-shape=x, stalk-root=b (baseline), label p.
        assert_eq!(matrix.values().row(0).to_vec(), vec![1.0, 0.0, 0.0]);
        // Row 1: cap-shape=b (baseline), stalk-root=b, label e.
        assert_eq!(matrix.values().row(1).to_vec(), vec![0.0, 0.0, 1.0]);
        // Row 2: sentinel imputed to b, so the indicator stays at baseline.
        assert_eq!(matrix.values().row(2).to_vec(), vec![1.0, 0.0, 1.0]);
        // Row 3: stalk-root=c flips its indicator.
        assert_eq!(matrix.values().row(3).to_vec(), vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn encode_maps_unseen_categories_to_the_zero_baseline() {
        let recipe = TransformationRecipe::fit(&fixture_table(), &fixture_config()).unwrap();
        let unseen = RawTable::new(
            vec![
                "class".into(),
                "cap-shape".into(),
                "stalk-root".into(),
                "veil-type".into(),
            ],
            vec![vec!["e".into(), "k".into(), "r".into(), "p".into()]],
        )
        .unwrap();

        let matrix = recipe.encode(&unseen).unwrap();
        assert_eq!(matrix.columns().len(), 3);
        assert_eq!(matrix.values().row(0).to_vec(), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn encode_rejects_unexpected_label_literals() {
        let recipe = TransformationRecipe::fit(&fixture_table(), &fixture_config()).unwrap();
        let bad = RawTable::new(
            vec![
                "class".into(),
                "cap-shape".into(),
                "stalk-root".into(),
                "veil-type".into(),
            ],
            vec![vec!["q".into(), "x".into(), "b".into(), "p".into()]],
        )
        .unwrap();

        let err = recipe.encode(&bad).unwrap_err();
        assert!(matches!(
            err,
            PrepError::Schema { column, details }
                if column == "class" && details.contains("'q'")
        ));
    }

    #[test]
    fn fit_requires_label_and_sentinel_columns() {
        let table = RawTable::new(
            vec!["class".into(), "cap-shape".into()],
            vec![vec!["p".into(), "x".into()]],
        )
        .unwrap();
        let err = TransformationRecipe::fit(&table, &fixture_config()).unwrap_err();
        assert!(matches!(
            err,
            PrepError::Schema { column, .. } if column == "stalk-root"
        ));
    }

    #[test]
    fn fit_rejects_columns_with_no_imputable_values() {
        let table = RawTable::new(
            vec![
                "class".into(),
                "cap-shape".into(),
                "stalk-root".into(),
                "veil-type".into(),
            ],
            vec![
                // Mixed sentinel and empty cells: not single-valued, so the
                // column survives the constant drop but has nothing to learn.
                vec!["p".into(), "x".into(), "?".into(), "p".into()],
                vec!["e".into(), "b".into(), "".into(), "p".into()],
            ],
        )
        .unwrap();
        let err = TransformationRecipe::fit(&table, &fixture_config()).unwrap_err();
        assert!(matches!(
            err,
            PrepError::Schema { column, details }
                if column == "stalk-root" && details.contains("no non-missing")
        ));
    }

    #[test]
    fn save_then_load_verifies_the_version_tag() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("store").join("preprocessor.json");
        let recipe = TransformationRecipe::fit(&fixture_table(), &fixture_config()).unwrap();

        recipe.save(&path).unwrap();
        let loaded = TransformationRecipe::load(&path).unwrap();
        assert_eq!(loaded, recipe);

        let mut tampered = recipe.clone();
        tampered.version = RECIPE_VERSION.wrapping_add(1);
        let payload = serde_json::to_vec(&tampered).unwrap();
        fs::write(&path, payload).unwrap();
        let err = TransformationRecipe::load(&path).unwrap_err();
        assert!(matches!(
            err,
            PrepError::Recipe(msg) if msg.contains("version mismatch")
        ));
    }

    #[test]
    fn label_mapping_encodes_both_directions_without_collision() {
        let mapping = LabelMapping::default();
        let poisonous = mapping.encode("class", "p").unwrap();
        let edible = mapping.encode("class", "e").unwrap();
        assert_eq!(poisonous, 0.0);
        assert_eq!(edible, 1.0);
        assert_ne!(poisonous, edible);
    }

    #[test]
    fn most_frequent_breaks_ties_by_first_appearance() {
        let table = RawTable::new(
            vec!["col".into()],
            vec![
                vec!["z".into()],
                vec!["a".into()],
                vec!["z".into()],
                vec!["a".into()],
                vec!["?".into()],
            ],
        )
        .unwrap();
        assert_eq!(most_frequent(&table, 0), Some("z".to_string()));
    }
}
