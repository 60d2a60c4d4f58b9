//! Groups produced by partitioning a table on a key column

use super::*;

use log::debug;

/// A key value and the sub-table of rows that carry it
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub(crate) key_column: String,
    pub(crate) key: Element,
    pub(crate) table: Table,
}

impl Group {
    /// Create a group for `key` in `key_column`
    pub fn new(key_column: impl Into<String>, key: Element, table: Table) -> Self {
        Self {
            key_column: key_column.into(),
            key,
            table,
        }
    }

    /// Name of the column the table was grouped by
    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    /// Key value shared by every row of the group
    pub fn key(&self) -> &Element {
        &self.key
    }

    /// Rows of the group
    pub fn table(&self) -> &Table {
        &self.table
    }

    fn matches(&self, key_column: &str, key: &Element) -> bool {
        self.key_column == key_column && self.key == *key
    }
}

/// Ordered list of groups, in first-seen order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Groups {
    groups: Vec<Group>,
}

impl Groups {
    /// Create an empty list of groups
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the group at `index`
    pub fn get(&self, index: usize) -> Result<&Group> {
        self.groups.get(index).ok_or(DataError::IndexOutOfRange {
            index,
            len: self.groups.len(),
        })
    }

    /// Sub-table of the group keyed by (`key_column`, `key`), if any
    pub fn find(&self, key_column: &str, key: &Element) -> Option<&Table> {
        self.groups
            .iter()
            .find(|g| g.matches(key_column, key))
            .map(Group::table)
    }

    /// Replace the table of a matching group, or add a new group at the end
    pub fn update(mut self, key_column: &str, key: Element, table: Table) -> Self {
        match self.groups.iter_mut().find(|g| g.matches(key_column, &key)) {
            Some(group) => group.table = table,
            None => self.groups.push(Group::new(key_column, key, table)),
        }
        self
    }

    /// Add a group at the end
    pub fn push(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    // Moves the table of a matching group out, leaving an empty table behind
    // until `update` puts the loaded one back.
    pub(crate) fn take(&mut self, key_column: &str, key: &Element) -> Option<Table> {
        self.groups
            .iter_mut()
            .find(|g| g.matches(key_column, key))
            .map(|g| std::mem::take(&mut g.table))
    }

    /// Aggregate every group and stack the one-row results in group order
    pub fn aggregate(&self, conditions: &[AggregationCondition]) -> Result<Table> {
        let mut aggregated: Option<Table> = None;

        for group in &self.groups {
            let summary = group.table.aggregate(conditions)?;
            aggregated = Some(match aggregated {
                Some(table) => table.append(&summary)?,
                None => summary,
            });
        }

        let table = aggregated.unwrap_or_default();
        debug!(
            "aggregated {} groups into {} rows x {} cols",
            self.groups.len(),
            table.nrows(),
            table.ncols()
        );
        Ok(table)
    }

    /// Iterate over the groups
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for Groups {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
