//! Utility types for data operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Element variant tag shared by elements, collections and series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Numeric,
    String,
    StringList,
}

impl ElementKind {
    /// Check if kind is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, ElementKind::Numeric)
    }

    /// Check if kind is a plain string
    pub fn is_string(&self) -> bool {
        matches!(self, ElementKind::String)
    }

    /// Check if kind is a list of strings
    pub fn is_string_list(&self) -> bool {
        matches!(self, ElementKind::StringList)
    }

    /// Short type name, in the style of a dtype
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Numeric => "numeric",
            ElementKind::String => "string",
            ElementKind::StringList => "string_list",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
