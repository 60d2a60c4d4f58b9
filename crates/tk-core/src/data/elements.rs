//! Homogeneous, ordered collections of elements
//!
//! An `Elements` value holds elements of exactly one variant. Adding or
//! appending anything of another variant fails with `TypeMismatch`.

use super::*;

use super::element::slice_list;

/// An ordered sequence of elements sharing one variant
#[derive(Debug, Clone, PartialEq)]
pub enum Elements {
    /// Numeric elements
    Numeric(Vec<NumericValue>),
    /// String elements
    String(Vec<TextValue>),
    /// String list elements
    StringList(Vec<StringList>),
}

impl Elements {
    /// Create an empty collection of the given kind
    pub fn empty(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Numeric => Elements::Numeric(Vec::new()),
            ElementKind::String => Elements::String(Vec::new()),
            ElementKind::StringList => Elements::StringList(Vec::new()),
        }
    }

    /// Create a collection of non-null numbers
    pub fn numeric(values: impl IntoIterator<Item = f64>) -> Self {
        Elements::Numeric(values.into_iter().map(NumericValue::new).collect())
    }

    /// Create a numeric collection where `None` marks a null element
    pub fn numeric_opt(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Elements::Numeric(
            values
                .into_iter()
                .map(|v| v.map_or_else(NumericValue::null, NumericValue::new))
                .collect(),
        )
    }

    /// Create a collection of non-null strings
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Elements::String(values.into_iter().map(TextValue::new).collect())
    }

    /// Create a string collection where `None` marks a null element
    pub fn strings_opt<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Elements::String(
            values
                .into_iter()
                .map(|v| v.map_or_else(TextValue::null, TextValue::new))
                .collect(),
        )
    }

    /// Create a collection of string lists
    pub fn string_lists<I, L, S>(values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Elements::StringList(
            values
                .into_iter()
                .map(|list| list.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Variant tag shared by every element in the collection
    pub fn kind(&self) -> ElementKind {
        match self {
            Elements::Numeric(_) => ElementKind::Numeric,
            Elements::String(_) => ElementKind::String,
            Elements::StringList(_) => ElementKind::StringList,
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        match self {
            Elements::Numeric(values) => values.len(),
            Elements::String(values) => values.len(),
            Elements::StringList(values) => values.len(),
        }
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the element at `index`
    pub fn get(&self, index: usize) -> Result<Element> {
        let element = match self {
            Elements::Numeric(values) => values.get(index).copied().map(Element::Numeric),
            Elements::String(values) => values.get(index).cloned().map(Element::String),
            Elements::StringList(values) => values.get(index).cloned().map(Element::StringList),
        };
        element.ok_or(DataError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Iterate over the elements by value
    pub fn iter(&self) -> ElementsIter<'_> {
        ElementsIter {
            elements: self,
            current: 0,
        }
    }

    /// Append a single element of the same variant
    pub fn add(mut self, element: Element) -> Result<Self> {
        self.push(element)?;
        Ok(self)
    }

    pub(crate) fn push(&mut self, element: Element) -> Result<()> {
        match (self, element) {
            (Elements::Numeric(values), Element::Numeric(v)) => values.push(v),
            (Elements::String(values), Element::String(v)) => values.push(v),
            (Elements::StringList(values), Element::StringList(v)) => values.push(v),
            (elements, element) => {
                return Err(DataError::TypeMismatch {
                    expected: elements.kind(),
                    actual: element.kind(),
                })
            }
        }
        Ok(())
    }

    /// Concatenate another collection of the same variant onto this one
    pub fn append(self, other: Elements) -> Result<Self> {
        match (self, other) {
            (Elements::Numeric(mut values), Elements::Numeric(more)) => {
                values.extend(more);
                Ok(Elements::Numeric(values))
            }
            (Elements::String(mut values), Elements::String(more)) => {
                values.extend(more);
                Ok(Elements::String(values))
            }
            (Elements::StringList(mut values), Elements::StringList(more)) => {
                values.extend(more);
                Ok(Elements::StringList(values))
            }
            (elements, other) => Err(DataError::TypeMismatch {
                expected: elements.kind(),
                actual: other.kind(),
            }),
        }
    }

    /// Convert to floats. Null numbers become `NaN`.
    pub fn to_floats(&self) -> Result<FloatArray> {
        match self {
            Elements::Numeric(values) => Ok(values.iter().map(|v| v.to_float_or_nan()).collect()),
            other => Err(DataError::NotConvertible(format!(
                "{} elements cannot be converted into floats",
                other.kind()
            ))),
        }
    }

    /// The single value shared by every element.
    ///
    /// Null elements compare equal to each other. An empty collection has no
    /// grouped value.
    pub fn grouped_value(&self) -> Result<Element> {
        let grouped = self
            .get(0)
            .map_err(|_| DataError::NotGrouped("no elements to group".to_string()))?;

        for element in self.iter().skip(1) {
            if element != grouped {
                return Err(DataError::NotGrouped(format!(
                    "grouped element {}, element {}",
                    grouped, element
                )));
            }
        }

        Ok(grouped)
    }

    /// Empty collection of the same variant
    pub fn delete(&self) -> Self {
        Elements::empty(self.kind())
    }

    /// Split every string into a string list
    pub fn split(&self, separator: &str, limit: usize) -> Result<Elements> {
        match self {
            Elements::String(values) => Ok(Elements::StringList(
                values.iter().map(|v| v.split(separator, limit)).collect(),
            )),
            other => Err(DataError::TypeMismatch {
                expected: ElementKind::String,
                actual: other.kind(),
            }),
        }
    }

    /// Take `[start, end)` of every string list
    pub fn slice(&self, start: usize, end: usize) -> Result<Elements> {
        match self {
            Elements::StringList(values) => {
                let sliced = values
                    .iter()
                    .map(|list| slice_list(list, start, end))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Elements::StringList(sliced))
            }
            other => Err(DataError::TypeMismatch {
                expected: ElementKind::StringList,
                actual: other.kind(),
            }),
        }
    }

    /// Join every string list into a non-null string
    pub fn join(&self, separator: &str) -> Result<Elements> {
        match self {
            Elements::StringList(values) => Ok(Elements::String(
                values
                    .iter()
                    .map(|list| TextValue::new(list.join(separator)))
                    .collect(),
            )),
            other => Err(DataError::TypeMismatch {
                expected: ElementKind::StringList,
                actual: other.kind(),
            }),
        }
    }
}

impl From<Vec<f64>> for Elements {
    fn from(values: Vec<f64>) -> Self {
        Elements::numeric(values)
    }
}

impl From<Vec<&str>> for Elements {
    fn from(values: Vec<&str>) -> Self {
        Elements::strings(values)
    }
}

impl From<Vec<String>> for Elements {
    fn from(values: Vec<String>) -> Self {
        Elements::strings(values)
    }
}

/// Iterator over the elements of a collection
pub struct ElementsIter<'a> {
    elements: &'a Elements,
    current: usize,
}

impl<'a> Iterator for ElementsIter<'a> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.current).ok()?;
        self.current += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = Element;
    type IntoIter = ElementsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
