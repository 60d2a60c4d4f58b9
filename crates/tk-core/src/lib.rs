//! TableKit core
//!
//! An embeddable, in-memory tabular engine. Tables are built from typed,
//! nullable element collections wrapped in named series, and support row
//! materialization, NA filtering, grouping and aggregation. Everything lives
//! in memory; there is no I/O.
//!
//! ```
//! use tk_core::data::{AggregationCondition, AggregationMethod, Series, Table};
//!
//! let table = Table::from_series(vec![
//!     Series::strings("fruit", ["Apple", "Orange", "Apple"]),
//!     Series::numeric("amount", [20.0, 30.0, 40.0]),
//! ])
//! .unwrap();
//!
//! let summary = table
//!     .group_by("fruit")
//!     .unwrap()
//!     .aggregate(&[
//!         AggregationCondition::new("fruit", AggregationMethod::None),
//!         AggregationCondition::new("amount", AggregationMethod::Sum),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(summary.shape(), (2, 2));
//! ```

pub mod data;

pub use data::{DataError, Element, Elements, Groups, Result, Row, Series, Table};
