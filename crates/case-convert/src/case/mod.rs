//! Identifier case conversion.
//!
//! Provides the string-level converters between camelCase, snake_case and
//! PascalCase, plus the [`Case`] selector used to pick one at runtime.

mod camel;
mod pascal;
mod snake;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use camel::to_camel_case;
pub use pascal::to_pascal_case;
pub use snake::{to_snake_case, to_snake_case_with, SnakeCaseOptions};

/// One of the supported key casings.
///
/// Parses from (and serializes to) the conventional spelling of each casing,
/// which makes it usable directly in configuration files.
///
/// # Examples
///
/// ```
/// use case_convert::Case;
///
/// let case: Case = "snake_case".parse().unwrap();
/// assert_eq!(case, Case::Snake);
/// assert_eq!(case.apply("objectArray"), "object_array");
/// assert_eq!(case.to_string(), "snake_case");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    #[serde(rename = "camelCase", alias = "camel")]
    Camel,
    #[serde(rename = "snake_case", alias = "snake")]
    Snake,
    #[serde(rename = "PascalCase", alias = "pascal")]
    Pascal,
}

impl Case {
    /// All supported casings.
    pub const ALL: [Case; 3] = [Case::Camel, Case::Snake, Case::Pascal];

    /// Convert a single identifier to this casing.
    pub fn apply(self, identifier: &str) -> String {
        match self {
            Case::Camel => to_camel_case(identifier),
            Case::Snake => to_snake_case(identifier),
            Case::Pascal => to_pascal_case(identifier),
        }
    }

    /// The string converter for this casing.
    pub fn converter(self) -> fn(&str) -> String {
        match self {
            Case::Camel => to_camel_case,
            Case::Snake => to_snake_case,
            Case::Pascal => to_pascal_case,
        }
    }

    /// Conventional spelling of the casing name.
    pub fn as_str(self) -> &'static str {
        match self {
            Case::Camel => "camelCase",
            Case::Snake => "snake_case",
            Case::Pascal => "PascalCase",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = Error;

    /// Accepts `camelCase`, `snake_case`, `PascalCase` and the bare names
    /// `camel`, `snake`, `pascal`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .into_iter()
            .find(|case| {
                let name = case.as_str();
                let bare = name.trim_end_matches("_case").trim_end_matches("Case");
                s.eq_ignore_ascii_case(name) || s.eq_ignore_ascii_case(bare)
            })
            .ok_or_else(|| Error::UnknownCase(s.to_string()))
    }
}
