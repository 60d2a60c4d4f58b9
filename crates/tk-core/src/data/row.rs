//! Row: one record as a column name -> element mapping
//!
//! Rows are the interchange format between a table and row-oriented
//! consumers. Fields keep insertion order, which for rows produced by
//! `Table::to_rows` is the table's column order.

use super::*;

use indexmap::IndexMap;

/// A single record keyed by column name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: IndexMap<String, Element>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Build a row from (name, element) pairs, failing on duplicate names
    pub fn from_fields<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Element)>,
        S: Into<String>,
    {
        fields
            .into_iter()
            .try_fold(Row::new(), |row, (name, element)| row.add_field(name, element))
    }

    /// Add a field; a row holds each column name at most once
    pub fn add_field<S: Into<String>>(mut self, name: S, element: Element) -> Result<Self> {
        let name = name.into();

        if self.fields.contains_key(&name) {
            return Err(DataError::DuplicateField(name));
        }

        self.fields.insert(name, element);
        Ok(self)
    }

    /// Get the element stored under `name`
    pub fn get(&self, name: &str) -> Result<&Element> {
        self.fields
            .get(name)
            .ok_or_else(|| DataError::ColumnNotFound(name.to_string()))
    }

    /// Check if the row has a field called `name`
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.fields.keys().map(|k| k.as_str()).collect()
    }

    /// Check whether any of the named fields holds an NA element.
    ///
    /// With no names, every field is checked. Names absent from the row are
    /// ignored.
    pub fn has_na<S: AsRef<str>>(&self, names: &[S]) -> bool {
        if names.is_empty() {
            return self.fields.values().any(Element::is_na);
        }
        names
            .iter()
            .filter_map(|name| self.fields.get(name.as_ref()))
            .any(Element::is_na)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over (name, element) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.fields.iter().map(|(name, element)| (name.as_str(), element))
    }
}
