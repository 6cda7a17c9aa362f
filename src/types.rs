/// Name of a table column as it appears in the header row.
/// Examples: `cap-shape`, `stalk-root`, `class`
pub type ColumnName = String;
/// Raw categorical cell value as read from the source table.
/// Examples: `x`, `s`, `?`
pub type Cell = String;
/// Observed category value for a column after cleaning.
/// Examples: `b`, `c`, `e`
pub type Category = String;
/// Literal label value as it appears in the label column.
/// Examples: `p` (poisonous), `e` (edible)
pub type LabelText = String;
/// File path strings surfaced in artifact listings and error context.
/// Example: `artifacts/train.csv`
pub type PathString = String;
