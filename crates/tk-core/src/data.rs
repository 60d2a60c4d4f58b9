//! Core data structures for TableKit
//!
//! This module provides the typed element model, homogeneous element
//! collections, named series, tables, and the group-by/aggregation algebra
//! built on top of them. Every operation that "mutates" returns a new value.

mod aggregation;
mod builder;
mod columns;
mod config;
mod element;
mod elements;
mod group;
mod row;
mod series;
mod table;
mod traits;
mod utils;


// Re-exports
pub use aggregation::{AggregationCondition, AggregationConditions, AggregationMethod};
pub use builder::{SeriesBuilder, TableBuilder};
pub use columns::Columns;
pub use config::{AppendOptions, UnmatchedColumns};
pub use element::{Element, NumericValue, TextValue};
pub use elements::{Elements, ElementsIter};
pub use group::{Group, Groups};
pub use row::Row;
pub use series::Series;
pub use table::Table;
pub use traits::Aggregate;
pub use utils::ElementKind;

// Type aliases for common use cases
pub type FloatArray = ndarray::Array1<f64>;
pub type StringList = Vec<String>;
pub type Rows = Vec<Row>;

/// Error types specific to data operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Index out of range: index {index}, length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ElementKind,
        actual: ElementKind,
    },

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Duplicate column: name '{name}', aggregated method {method}")]
    DuplicateColumn {
        name: String,
        method: AggregationMethod,
    },

    #[error("Duplicate field '{0}' in row")]
    DuplicateField(String),

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{0}' is aggregated and cannot receive raw rows")]
    CannotLoadAggregated(String),

    #[error("Cannot aggregate {kind} data with method {method}")]
    UnsupportedAggregation {
        method: AggregationMethod,
        kind: ElementKind,
    },

    #[error("Elements are not grouped: {0}")]
    NotGrouped(String),

    #[error("Conversion failed: {0}")]
    NotConvertible(String),

    #[error("Missing elements: {0}")]
    EmptyElements(String),

    #[error("Series name mismatch: '{left}' vs '{right}'")]
    NameMismatch { left: String, right: String },

    #[error("Aggregated method mismatch: {left} vs {right}")]
    MethodMismatch {
        left: AggregationMethod,
        right: AggregationMethod,
    },

    #[error("Invalid range: start {start}, end {end}")]
    InvalidRange { start: usize, end: usize },
}

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;
