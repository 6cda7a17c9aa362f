use tabprep::{RawTable, TransformationConfig, TransformationRecipe};

fn config() -> TransformationConfig {
    TransformationConfig::default()
}

fn header() -> Vec<String> {
    ["class", "cap-shape", "stalk-root", "veil-type"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn table(rows: &[[&str; 4]]) -> RawTable {
    let rows = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    RawTable::new(header(), rows).unwrap()
}

fn training_table() -> RawTable {
    // `b` is the dominant stalk-root value; two rows carry the sentinel.
    table(&[
        ["p", "x", "b", "p"],
        ["e", "b", "b", "p"],
        ["e", "x", "b", "p"],
        ["p", "f", "c", "p"],
        ["e", "x", "?", "p"],
        ["p", "b", "?", "p"],
    ])
}

#[test]
fn fill_values_come_from_training_rows_alone() {
    let recipe = TransformationRecipe::fit(&training_table(), &config()).unwrap();
    assert_eq!(recipe.fill_value("stalk-root"), Some("b"));

    // A test partition dominated by `c` must not shift the fitted fill value:
    // encoding borrows the recipe immutably, so the fitted state cannot move.
    let skewed_test = table(&[
        ["e", "x", "c", "p"],
        ["p", "b", "c", "p"],
        ["e", "f", "c", "p"],
        ["p", "x", "?", "p"],
    ]);
    let before = recipe.clone();
    let _ = recipe.encode(&skewed_test).unwrap();
    assert_eq!(recipe, before);
    assert_eq!(recipe.fill_value("stalk-root"), Some("b"));
}

#[test]
fn sentinel_tokens_never_reach_the_fitted_vocabulary() {
    let recipe = TransformationRecipe::fit(&training_table(), &config()).unwrap();
    let vocabulary = recipe.vocabulary("stalk-root").unwrap();
    assert!(!vocabulary.iter().any(|category| category == "?"));
    assert!(!vocabulary.iter().any(|category| category.is_empty()));
}

#[test]
fn persisted_recipe_replays_the_exact_train_transform() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("preprocessor.json");
    let train = training_table();

    let recipe = TransformationRecipe::fit(&train, &config()).unwrap();
    let original = recipe.encode(&train).unwrap();
    recipe.save(&path).unwrap();

    let reloaded = TransformationRecipe::load(&path).unwrap();
    assert_eq!(reloaded, recipe);
    let replayed = reloaded.encode(&train).unwrap();
    assert_eq!(replayed, original);
}

#[test]
fn recipes_fitted_on_identical_partitions_are_identical() {
    let first = TransformationRecipe::fit(&training_table(), &config()).unwrap();
    let second = TransformationRecipe::fit(&training_table(), &config()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn recipe_artifact_is_readable_json_with_a_version_tag() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("preprocessor.json");
    TransformationRecipe::fit(&training_table(), &config())
        .unwrap()
        .save(&path)
        .unwrap();

    let payload = std::fs::read_to_string(&path).unwrap();
    let document: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(document["version"], 1);
    assert_eq!(document["label_column"], "class");
}
