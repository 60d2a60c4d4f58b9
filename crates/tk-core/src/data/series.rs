//! Series data structure for holding a named column
//!
//! A Series wraps one homogeneous element collection together with a name
//! and the aggregation method that produced it. A series with a method other
//! than `AggregationMethod::None` holds summaries, one per group, and is
//! never loaded with raw rows or aggregated again.

use super::*;

/// A named, homogeneous column plus its aggregation tag
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub(crate) name: String,
    pub(crate) elements: Elements,
    pub(crate) aggregated_method: AggregationMethod,
}

impl Series {
    /// Create a new series
    pub fn new(
        name: impl Into<String>,
        elements: Elements,
        aggregated_method: AggregationMethod,
    ) -> Self {
        Self {
            name: name.into(),
            elements,
            aggregated_method,
        }
    }

    /// Create a raw (unaggregated) series
    pub fn raw(name: impl Into<String>, elements: Elements) -> Self {
        Self::new(name, elements, AggregationMethod::None)
    }

    /// Create a raw numeric series
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::raw(name, Elements::numeric(values))
    }

    /// Create a raw string series
    pub fn strings<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::raw(name, Elements::strings(values))
    }

    /// Get the name of the series
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the underlying elements
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Get the aggregation method that produced this series
    pub fn aggregated_method(&self) -> AggregationMethod {
        self.aggregated_method
    }

    /// Check if the series holds aggregated values
    pub fn is_aggregated(&self) -> bool {
        self.aggregated_method != AggregationMethod::None
    }

    /// Variant of the elements
    pub fn kind(&self) -> ElementKind {
        self.elements.kind()
    }

    /// Get the type name of the series
    pub fn dtype(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a value at index
    pub fn get(&self, idx: usize) -> Result<Element> {
        self.elements.get(idx)
    }

    /// Single value shared by every element
    pub fn grouped_value(&self) -> Result<Element> {
        self.elements.grouped_value()
    }

    /// Replace the elements, keeping name and method
    pub fn with_elements(mut self, elements: Elements) -> Self {
        self.elements = elements;
        self
    }

    /// Append one element
    pub fn add_element(mut self, element: Element) -> Result<Self> {
        self.elements = self.elements.add(element)?;
        Ok(self)
    }

    /// Convert to floats, null numbers becoming `NaN`
    pub fn to_floats(&self) -> Result<FloatArray> {
        self.elements.to_floats()
    }

    /// Compute mean of numeric series
    pub fn mean(&self) -> Result<f64> {
        let floats = self.to_floats()?;
        Ok(floats.mean().unwrap_or(f64::NAN))
    }

    /// Compute sum
    pub fn sum(&self) -> Result<f64> {
        Ok(self.to_floats()?.sum())
    }

    /// Check that this series can be aggregated with `method`
    pub fn can_aggregate_with(&self, method: AggregationMethod) -> Result<()> {
        if method.supports(self.kind()) {
            Ok(())
        } else {
            Err(DataError::UnsupportedAggregation {
                method,
                kind: self.kind(),
            })
        }
    }

    /// Summarize the series into a single element
    pub fn aggregate(&self, method: AggregationMethod) -> Result<Element> {
        self.can_aggregate_with(method)?;

        match method {
            AggregationMethod::Count => Ok(Element::numeric(self.len() as f64)),
            AggregationMethod::Sum => Ok(Element::numeric(self.sum()?)),
            AggregationMethod::Mean => Ok(Element::numeric(self.mean()?)),
            AggregationMethod::None => self.grouped_value(),
        }
    }

    /// Empty the series, keeping name, type and method
    pub fn delete(&self) -> Self {
        Self {
            name: self.name.clone(),
            elements: self.elements.delete(),
            aggregated_method: self.aggregated_method,
        }
    }

    /// Concatenate a series with the same name, type and method
    pub fn append(self, other: Series) -> Result<Self> {
        if self.name != other.name {
            return Err(DataError::NameMismatch {
                left: self.name,
                right: other.name,
            });
        }
        if self.kind() != other.kind() {
            return Err(DataError::TypeMismatch {
                expected: self.kind(),
                actual: other.kind(),
            });
        }
        if self.aggregated_method != other.aggregated_method {
            return Err(DataError::MethodMismatch {
                left: self.aggregated_method,
                right: other.aggregated_method,
            });
        }

        let elements = self.elements.append(other.elements)?;
        Ok(Self {
            name: self.name,
            elements,
            aggregated_method: self.aggregated_method,
        })
    }

    /// Split every string into a string list
    pub fn split(&self, separator: &str, limit: usize) -> Result<Self> {
        let elements = self.elements.split(separator, limit)?;
        Ok(Self::new(self.name.clone(), elements, self.aggregated_method))
    }

    /// Take `[start, end)` of every string list
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        let elements = self.elements.slice(start, end)?;
        Ok(Self::new(self.name.clone(), elements, self.aggregated_method))
    }

    /// Join every string list with `separator`
    pub fn join(&self, separator: &str) -> Result<Self> {
        let elements = self.elements.join(separator)?;
        Ok(Self::new(self.name.clone(), elements, self.aggregated_method))
    }

    /// Iterate over the elements
    pub fn iter(&self) -> ElementsIter<'_> {
        self.elements.iter()
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Series('{}', {}, {} rows, {})",
            self.name,
            self.dtype(),
            self.len(),
            self.aggregated_method
        )
    }
}
