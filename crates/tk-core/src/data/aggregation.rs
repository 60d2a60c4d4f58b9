//! Aggregation methods and conditions

use super::*;

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// How a column was (or should be) summarized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AggregationMethod {
    /// Raw data, or the single grouped value when used as a condition
    #[default]
    None,
    /// Number of elements
    Count,
    /// Sum of numeric elements
    Sum,
    /// Arithmetic mean of numeric elements
    Mean,
}

impl AggregationMethod {
    /// Check whether `kind` supports this method
    pub fn supports(&self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::String => {
                matches!(self, AggregationMethod::Count | AggregationMethod::None)
            }
            ElementKind::Numeric => true,
            ElementKind::StringList => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationMethod::None => "None",
            AggregationMethod::Count => "Count",
            AggregationMethod::Sum => "Sum",
            AggregationMethod::Mean => "Mean",
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (column, method) pair driving summarization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationCondition {
    pub column: String,
    pub method: AggregationMethod,
}

impl AggregationCondition {
    pub fn new(column: impl Into<String>, method: AggregationMethod) -> Self {
        Self {
            column: column.into(),
            method,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn method(&self) -> AggregationMethod {
        self.method
    }
}

/// Ordered list of aggregation conditions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregationConditions(Vec<AggregationCondition>);

impl AggregationConditions {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Get the condition at `index`
    pub fn get(&self, index: usize) -> Result<&AggregationCondition> {
        self.0.get(index).ok_or(DataError::IndexOutOfRange {
            index,
            len: self.0.len(),
        })
    }

    /// First condition targeting `column`
    pub fn by_column(&self, column: &str) -> Result<&AggregationCondition> {
        self.0
            .iter()
            .find(|c| c.column == column)
            .ok_or_else(|| DataError::ColumnNotFound(column.to_string()))
    }

    /// Add a condition at the end
    pub fn push(mut self, condition: AggregationCondition) -> Self {
        self.0.push(condition);
        self
    }
}

impl Deref for AggregationConditions {
    type Target = [AggregationCondition];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<AggregationCondition>> for AggregationConditions {
    fn from(conditions: Vec<AggregationCondition>) -> Self {
        Self(conditions)
    }
}

impl FromIterator<AggregationCondition> for AggregationConditions {
    fn from_iter<I: IntoIterator<Item = AggregationCondition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
