//! Traits for data operations

use super::*;

/// Anything that can be summarized into a Table by aggregation conditions
pub trait Aggregate {
    /// Evaluate `conditions` and assemble the summary Table
    fn aggregate(&self, conditions: &[AggregationCondition]) -> Result<Table>;
}

impl Aggregate for Table {
    fn aggregate(&self, conditions: &[AggregationCondition]) -> Result<Table> {
        Table::aggregate(self, conditions)
    }
}

impl Aggregate for Groups {
    fn aggregate(&self, conditions: &[AggregationCondition]) -> Result<Table> {
        Groups::aggregate(self, conditions)
    }
}
