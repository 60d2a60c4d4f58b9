//! Options for table operations

use serde::{Deserialize, Serialize};

/// Options for `Table::append_with`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppendOptions {
    /// What to do with columns that have no (name, method) match in the other table
    pub unmatched_columns: UnmatchedColumns,
}

/// Handling of columns present in only one operand of a table append
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedColumns {
    /// Leave them out of the result
    #[default]
    Drop,
    /// Fail with `ColumnNotFound`
    Reject,
}

impl AppendOptions {
    /// Options that fail on unmatched columns
    pub fn strict() -> Self {
        Self {
            unmatched_columns: UnmatchedColumns::Reject,
        }
    }
}
