//! Element: a single typed, nullable value
//!
//! An element is one of a closed set of variants. Numeric and string
//! elements carry an explicit null flag next to their payload; a string list
//! is null exactly when it is empty. Two null elements of the same variant
//! compare equal whatever payload they hold.

use super::*;

use std::fmt;

/// Payload of a numeric element
#[derive(Debug, Clone, Copy)]
pub struct NumericValue {
    pub value: f64,
    pub is_null: bool,
}

impl NumericValue {
    /// Create a non-null numeric value
    pub fn new(value: f64) -> Self {
        Self {
            value,
            is_null: false,
        }
    }

    /// Create a null numeric value
    pub fn null() -> Self {
        Self {
            value: f64::NAN,
            is_null: true,
        }
    }

    /// Float view of the payload, `NaN` when null
    pub(crate) fn to_float_or_nan(self) -> f64 {
        if self.is_null {
            f64::NAN
        } else {
            self.value
        }
    }
}

impl PartialEq for NumericValue {
    fn eq(&self, other: &Self) -> bool {
        if self.is_null && other.is_null {
            return true;
        }
        self.is_null == other.is_null && self.value == other.value
    }
}

/// Payload of a string element
#[derive(Debug, Clone, Default)]
pub struct TextValue {
    pub value: String,
    pub is_null: bool,
}

impl TextValue {
    /// Create a non-null string value
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_null: false,
        }
    }

    /// Create a null string value
    pub fn null() -> Self {
        Self {
            value: String::new(),
            is_null: true,
        }
    }

    /// Split the string into at most `limit` pieces.
    ///
    /// With `limit <= 1` no split happens and the whole value becomes a
    /// single-item list. A null value splits into an empty (null) list.
    pub fn split(&self, separator: &str, limit: usize) -> StringList {
        if self.is_null {
            return Vec::new();
        }
        if limit <= 1 {
            return vec![self.value.clone()];
        }
        if separator.is_empty() {
            return split_chars(&self.value, limit);
        }
        self.value
            .splitn(limit, separator)
            .map(str::to_string)
            .collect()
    }
}

impl PartialEq for TextValue {
    fn eq(&self, other: &Self) -> bool {
        if self.is_null && other.is_null {
            return true;
        }
        self.is_null == other.is_null && self.value == other.value
    }
}

// An empty separator splits between characters, the last piece keeping the rest.
fn split_chars(value: &str, limit: usize) -> StringList {
    let mut pieces = Vec::new();
    let mut rest = value;
    while let Some(ch) = rest.chars().next() {
        if pieces.len() + 1 == limit {
            break;
        }
        let (head, tail) = rest.split_at(ch.len_utf8());
        pieces.push(head.to_string());
        rest = tail;
    }
    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }
    pieces
}

/// Take `list[start..end]` with `end` clamped to the list length.
///
/// A `start` past the clamped end yields an empty list.
pub(crate) fn slice_list(list: &[String], start: usize, end: usize) -> Result<StringList> {
    if start > end {
        return Err(DataError::InvalidRange { start, end });
    }
    let end = end.min(list.len());
    if start >= end {
        return Ok(Vec::new());
    }
    Ok(list[start..end].to_vec())
}

/// A single typed, nullable value
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Floating point number with a null flag
    Numeric(NumericValue),
    /// String with a null flag
    String(TextValue),
    /// Ordered list of strings, null when empty
    StringList(StringList),
}

impl Element {
    /// Create a non-null numeric element
    pub fn numeric(value: f64) -> Self {
        Element::Numeric(NumericValue::new(value))
    }

    /// Create a null numeric element
    pub fn numeric_na() -> Self {
        Element::Numeric(NumericValue::null())
    }

    /// Create a non-null string element
    pub fn string(value: impl Into<String>) -> Self {
        Element::String(TextValue::new(value))
    }

    /// Create a null string element
    pub fn string_na() -> Self {
        Element::String(TextValue::null())
    }

    /// Create a string list element
    pub fn string_list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Element::StringList(values.into_iter().map(Into::into).collect())
    }

    /// Variant tag of this element
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Numeric(_) => ElementKind::Numeric,
            Element::String(_) => ElementKind::String,
            Element::StringList(_) => ElementKind::StringList,
        }
    }

    /// Check if the element is NA
    pub fn is_na(&self) -> bool {
        match self {
            Element::Numeric(v) => v.is_null,
            Element::String(v) => v.is_null,
            Element::StringList(list) => list.is_empty(),
        }
    }

    /// Convert to `f64`; only non-null numeric elements succeed
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Element::Numeric(v) if v.is_null => {
                Err(DataError::NotConvertible("can't convert NA to float".to_string()))
            }
            Element::Numeric(v) => Ok(v.value),
            Element::String(v) => Err(DataError::NotConvertible(format!(
                "string element '{}' cannot be converted into float",
                v.value
            ))),
            Element::StringList(list) => Err(DataError::NotConvertible(format!(
                "string list element {:?} cannot be converted into float",
                list
            ))),
        }
    }

    /// Render the element as text.
    ///
    /// Numbers use six decimal places and a null number renders as an empty
    /// string. Null strings and string lists cannot be rendered.
    pub fn to_text(&self) -> Result<String> {
        match self {
            Element::Numeric(v) if v.is_null => Ok(String::new()),
            Element::Numeric(v) => Ok(format!("{:.6}", v.value)),
            Element::String(v) if v.is_null => {
                Err(DataError::NotConvertible("can't convert NA to string".to_string()))
            }
            Element::String(v) => Ok(v.value.clone()),
            Element::StringList(list) => Err(DataError::NotConvertible(format!(
                "string list element {:?} cannot be converted into string",
                list
            ))),
        }
    }

    /// Wrap the element into a one-item collection of the same variant
    pub fn into_elements(self) -> Elements {
        match self {
            Element::Numeric(v) => Elements::Numeric(vec![v]),
            Element::String(v) => Elements::String(vec![v]),
            Element::StringList(list) => Elements::StringList(vec![list]),
        }
    }

    /// Split a string element into a string list element
    pub fn split(&self, separator: &str, limit: usize) -> Result<Element> {
        match self {
            Element::String(v) => Ok(Element::StringList(v.split(separator, limit))),
            other => Err(DataError::TypeMismatch {
                expected: ElementKind::String,
                actual: other.kind(),
            }),
        }
    }

    /// Sub-list `[start, end)` of a string list element
    pub fn slice(&self, start: usize, end: usize) -> Result<Element> {
        match self {
            Element::StringList(list) => Ok(Element::StringList(slice_list(list, start, end)?)),
            other => Err(DataError::TypeMismatch {
                expected: ElementKind::StringList,
                actual: other.kind(),
            }),
        }
    }

    /// Join a string list element into a non-null string element
    pub fn join(&self, separator: &str) -> Result<Element> {
        match self {
            Element::StringList(list) => Ok(Element::string(list.join(separator))),
            other => Err(DataError::TypeMismatch {
                expected: ElementKind::StringList,
                actual: other.kind(),
            }),
        }
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::numeric(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::string(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::string(value)
    }
}

impl From<Vec<String>> for Element {
    fn from(values: Vec<String>) -> Self {
        Element::StringList(values)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_na() {
            return write!(f, "NA");
        }
        match self {
            Element::Numeric(v) => write!(f, "{}", v.value),
            Element::String(v) => write!(f, "{}", v.value),
            Element::StringList(list) => write!(f, "[{}]", list.join(", ")),
        }
    }
}
