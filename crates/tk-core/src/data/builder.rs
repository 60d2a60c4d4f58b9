//! Builder pattern for constructing Tables and Series

use super::*;

/// Builder for creating Series
#[derive(Debug, Default)]
pub struct SeriesBuilder {
    elements: Option<Elements>,
    name: Option<String>,
    method: AggregationMethod,
}

impl SeriesBuilder {
    /// Create a new SeriesBuilder
    pub fn new() -> Self {
        Self {
            elements: None,
            name: None,
            method: AggregationMethod::None,
        }
    }

    /// Set the elements directly
    pub fn elements(mut self, elements: Elements) -> Self {
        self.elements = Some(elements);
        self
    }

    /// Set the data as non-null numbers
    pub fn numeric(mut self, data: impl IntoIterator<Item = f64>) -> Self {
        self.elements = Some(Elements::numeric(data));
        self
    }

    /// Set the data as nullable numbers
    pub fn numeric_opt(mut self, data: impl IntoIterator<Item = Option<f64>>) -> Self {
        self.elements = Some(Elements::numeric_opt(data));
        self
    }

    /// Set the data as non-null strings
    pub fn strings<I, S>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements = Some(Elements::strings(data));
        self
    }

    /// Set the data as nullable strings
    pub fn strings_opt<I, S>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.elements = Some(Elements::strings_opt(data));
        self
    }

    /// Set the data as string lists
    pub fn string_lists<I, L, S>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements = Some(Elements::string_lists(data));
        self
    }

    /// Set the name of the series
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Mark the series as produced by `method`
    pub fn aggregated_method(mut self, method: AggregationMethod) -> Self {
        self.method = method;
        self
    }

    /// Build the Series
    pub fn build(self) -> Result<Series> {
        let name = self.name.unwrap_or_default();
        let elements = self
            .elements
            .ok_or_else(|| DataError::EmptyElements(format!("series '{}' has no elements", name)))?;

        Ok(Series::new(name, elements, self.method))
    }
}

/// Builder for creating Tables
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Columns,
}

impl TableBuilder {
    /// Create a new TableBuilder
    pub fn new() -> Self {
        Self {
            columns: Columns::new(),
        }
    }

    /// Add a column to the Table
    pub fn with_column(mut self, series: Series) -> Result<Self> {
        self.columns = self.columns.append(series)?;
        Ok(self)
    }

    /// Build a series from `builder` and add it as a column
    pub fn with_built_column(self, builder: SeriesBuilder) -> Result<Self> {
        self.with_column(builder.build()?)
    }

    /// Build the Table
    pub fn build(self) -> Result<Table> {
        Table::from_columns(self.columns)
    }
}
