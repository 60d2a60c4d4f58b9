//! Table implementation for tabular data
//!
//! A Table is an ordered set of series sharing one record count. Tables are
//! values: every operation that changes data hands back a new table and
//! leaves the receiver (or nothing, for consuming methods) behind.

use super::*;

use log::{debug, trace};

/// Main Table structure
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub(crate) columns: Columns,
    pub(crate) nrows: usize,
}

impl Table {
    /// Create an empty Table
    pub fn new() -> Self {
        Self {
            columns: Columns::new(),
            nrows: 0,
        }
    }

    /// Create a Table from columns, checking that they share one length
    pub fn from_columns(columns: Columns) -> Result<Self> {
        Ok(Self::from_valid(columns.validate()?))
    }

    // Columns must already share one length.
    fn from_valid(columns: Columns) -> Self {
        let nrows = columns.record_count();
        Self { columns, nrows }
    }

    /// Create a Table from series
    pub fn from_series<I>(series: I) -> Result<Self>
    where
        I: IntoIterator<Item = Series>,
    {
        let mut builder = TableBuilder::new();

        for s in series.into_iter() {
            builder = builder.with_column(s)?;
        }

        builder.build()
    }

    /// Get the shape of the Table (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.columns.len())
    }

    /// Get the number of records
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Get the number of records
    pub fn record_count(&self) -> usize {
        self.nrows
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Check if the Table has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.names()
    }

    /// Get the columns
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Get the column with this name and aggregated method
    pub fn column(&self, name: &str, method: AggregationMethod) -> Result<&Series> {
        self.columns.find(name, method)
    }

    /// Get the raw (unaggregated) column called `name`
    pub fn get_column(&self, name: &str) -> Option<&Series> {
        self.columns.find(name, AggregationMethod::None).ok()
    }

    /// Add a new column
    pub fn append_series(self, series: Series) -> Result<Self> {
        let columns = self.columns.append(series)?;
        Ok(Self::from_valid(columns))
    }

    /// Replace the column with the same name and method as `series`
    pub fn update_column(self, series: Series) -> Result<Self> {
        let columns = self.columns.replace_matching(series)?.validate()?;
        Ok(Self::from_valid(columns))
    }

    /// Convert the Table into one row per record
    pub fn to_rows(&self) -> Result<Rows> {
        (0..self.nrows)
            .map(|idx| {
                self.columns.iter().try_fold(Row::new(), |row, series| {
                    row.add_field(series.name(), series.get(idx)?)
                })
            })
            .collect()
    }

    /// Load one row into the raw columns of the Table.
    ///
    /// Each field goes to the unaggregated column of the same name. The row
    /// must cover every raw column, otherwise the columns would drift apart
    /// and the load fails with `LengthMismatch`.
    pub fn load_row(self, row: &Row) -> Result<Self> {
        let mut columns = self.columns;

        for (name, element) in row.iter() {
            let index = match columns.position(name, AggregationMethod::None) {
                Some(index) => index,
                None if columns.has_name(name) => {
                    return Err(DataError::CannotLoadAggregated(name.to_string()));
                }
                None => return Err(DataError::ColumnNotFound(name.to_string())),
            };
            columns.push_element(index, element.clone())?;
        }

        Ok(Self::from_valid(columns.validate()?))
    }

    /// Load rows one after another, threading the Table through each load
    pub fn load_rows(self, rows: &[Row]) -> Result<Self> {
        let table = rows.iter().try_fold(self, |table, row| table.load_row(row))?;
        debug!("loaded {} rows, table now has {} rows", rows.len(), table.nrows);
        Ok(table)
    }

    /// Concatenate another Table, dropping columns without a match
    pub fn append(&self, other: &Table) -> Result<Self> {
        self.append_with(other, AppendOptions::default())
    }

    /// Concatenate another Table.
    ///
    /// Columns are paired by (name, aggregated method). Both tables need the
    /// same number of columns; what happens to columns without a partner is
    /// decided by `options`.
    pub fn append_with(&self, other: &Table, options: AppendOptions) -> Result<Self> {
        if self.ncols() != other.ncols() {
            return Err(DataError::LengthMismatch {
                expected: self.ncols(),
                actual: other.ncols(),
            });
        }

        let mut columns = Columns::new();

        for left in &self.columns {
            match other.columns.find(left.name(), left.aggregated_method()) {
                Ok(right) => {
                    if left.kind() != right.kind() {
                        return Err(DataError::TypeMismatch {
                            expected: left.kind(),
                            actual: right.kind(),
                        });
                    }
                    columns = columns.append(left.clone().append(right.clone())?)?;
                }
                Err(err) => match options.unmatched_columns {
                    UnmatchedColumns::Reject => return Err(err),
                    UnmatchedColumns::Drop => {
                        debug!(
                            "dropping column '{}' ({}) without a match",
                            left.name(),
                            left.aggregated_method()
                        );
                    }
                },
            }
        }

        Ok(Self::from_valid(columns))
    }

    /// Partition the rows by the value of `column`.
    ///
    /// Groups appear in the order their key is first seen. Null keys of the
    /// same type fall into one group.
    pub fn group_by(&self, column: &str) -> Result<Groups> {
        let rows = self.to_rows()?;
        let mut groups = Groups::new();

        for row in &rows {
            let key = row.get(column)?.clone();

            let table = match groups.take(column, &key) {
                Some(table) => table,
                None => {
                    trace!("new group for {} = {}", column, key);
                    self.delete()
                }
            };

            let table = table.load_row(row)?;
            groups = groups.update(column, key, table);
        }

        debug!(
            "grouped {} rows by '{}' into {} groups",
            rows.len(),
            column,
            groups.len()
        );
        Ok(groups)
    }

    /// Summarize raw columns into a one-row Table.
    ///
    /// Each condition produces one column named after its source column and
    /// tagged with the condition's method. The first failing condition
    /// aborts the whole aggregation.
    pub fn aggregate(&self, conditions: &[AggregationCondition]) -> Result<Self> {
        let mut columns = Columns::new();

        for condition in conditions {
            let source = self.columns.find(condition.column(), AggregationMethod::None)?;
            let value = source.aggregate(condition.method())?;
            columns = columns.append(Series::new(
                source.name(),
                value.into_elements(),
                condition.method(),
            ))?;
        }

        trace!("aggregated {} conditions", conditions.len());
        Ok(Self::from_valid(columns))
    }

    /// Drop rows holding NA in any of the named columns (all columns when none are named)
    pub fn drop_na<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let rows = self.to_rows()?;
        let total = rows.len();

        let kept: Rows = rows.into_iter().filter(|row| !row.has_na(names)).collect();
        debug!("drop_na kept {} of {} rows", kept.len(), total);

        self.delete().load_rows(&kept)
    }

    /// Drop rows holding NA in any column
    pub fn drop_any_na(&self) -> Result<Self> {
        self.drop_na::<&str>(&[])
    }

    /// Remove all records, keeping the schema
    pub fn delete(&self) -> Self {
        Self::from_valid(self.columns.delete())
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Table({} rows × {} cols)", self.nrows, self.ncols())
    }
}
