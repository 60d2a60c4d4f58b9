//! Ordered collection of series sharing one record count

use super::*;

/// The columns of a table
///
/// Every series has the same length, and no two series share both name and
/// aggregated method. A raw column and its aggregated derivative may
/// therefore coexist under one name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns {
    series: Vec<Series>,
}

impl Columns {
    /// Create an empty set of columns
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    /// Create columns from series of equal length
    pub fn from_series(series: Vec<Series>) -> Result<Self> {
        if let Some(first) = series.first() {
            let expected = first.len();
            if let Some(bad) = series.iter().find(|s| s.len() != expected) {
                return Err(DataError::LengthMismatch {
                    expected,
                    actual: bad.len(),
                });
            }
        }
        Ok(Self { series })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check if there are no columns
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of records, 0 without columns
    pub fn record_count(&self) -> usize {
        self.series.first().map_or(0, Series::len)
    }

    /// Column names in order
    pub fn names(&self) -> Vec<&str> {
        self.series.iter().map(Series::name).collect()
    }

    /// Add a series at the end
    pub fn append(mut self, series: Series) -> Result<Self> {
        // no length check when there are no columns yet
        if self.series.is_empty() {
            self.series.push(series);
            return Ok(self);
        }

        if self.record_count() != series.len() {
            return Err(DataError::LengthMismatch {
                expected: self.record_count(),
                actual: series.len(),
            });
        }

        if self.position(series.name(), series.aggregated_method()).is_some() {
            return Err(DataError::DuplicateColumn {
                name: series.name,
                method: series.aggregated_method,
            });
        }

        self.series.push(series);
        Ok(self)
    }

    /// Get the series at `index`
    pub fn get(&self, index: usize) -> Result<&Series> {
        self.series.get(index).ok_or(DataError::IndexOutOfRange {
            index,
            len: self.series.len(),
        })
    }

    /// Find the series with this name and method
    pub fn find(&self, name: &str, method: AggregationMethod) -> Result<&Series> {
        self.position(name, method)
            .map(|idx| &self.series[idx])
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }

    /// Check whether any series, aggregated or not, is called `name`
    pub fn has_name(&self, name: &str) -> bool {
        self.series.iter().any(|s| s.name() == name)
    }

    pub(crate) fn position(&self, name: &str, method: AggregationMethod) -> Option<usize> {
        self.series
            .iter()
            .position(|s| s.name() == name && s.aggregated_method() == method)
    }

    /// Replace the series at `index`.
    ///
    /// The replacement may have a different length from the other columns;
    /// callers restore the length invariant before building a table.
    pub(crate) fn replace(mut self, index: usize, series: Series) -> Result<Self> {
        let len = self.series.len();
        match self.series.get_mut(index) {
            Some(slot) => {
                *slot = series;
                Ok(self)
            }
            None => Err(DataError::IndexOutOfRange { index, len }),
        }
    }

    /// Replace the series with the same name and method as `series`
    pub(crate) fn replace_matching(self, series: Series) -> Result<Self> {
        match self.position(series.name(), series.aggregated_method()) {
            Some(index) => self.replace(index, series),
            None => Err(DataError::ColumnNotFound(series.name)),
        }
    }

    // Appends in place; leaves the lengths unchecked until `validate`.
    pub(crate) fn push_element(&mut self, index: usize, element: Element) -> Result<()> {
        let len = self.series.len();
        let series = self
            .series
            .get_mut(index)
            .ok_or(DataError::IndexOutOfRange { index, len })?;
        series.elements.push(element)
    }

    /// Empty every column, keeping the schema
    pub fn delete(&self) -> Self {
        Self {
            series: self.series.iter().map(Series::delete).collect(),
        }
    }

    /// Check that every series has the same length
    pub(crate) fn validate(self) -> Result<Self> {
        Self::from_series(self.series)
    }

    /// Iterate over the series
    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// Take the series out
    pub fn into_vec(self) -> Vec<Series> {
        self.series
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

impl IntoIterator for Columns {
    type Item = Series;
    type IntoIter = std::vec::IntoIter<Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.into_iter()
    }
}
