//! Item categories
//!
//! A closed set of seven tags. They serialize as their display name
//! (`"Groceries"`), which is also the form stored on disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag applied to a shopping item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Category {
    #[default]
    Groceries,
    Electronics,
    Entertainment,
    Health,
    Transportation,
    Clothing,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 7] = [
        Category::Groceries,
        Category::Electronics,
        Category::Entertainment,
        Category::Health,
        Category::Transportation,
        Category::Clothing,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Electronics => "Electronics",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Transportation => "Transportation",
            Category::Clothing => "Clothing",
            Category::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Groceries => "🛒",
            Category::Electronics => "📱",
            Category::Entertainment => "🎮",
            Category::Health => "💊",
            Category::Transportation => "🚗",
            Category::Clothing => "👕",
            Category::Other => "📦",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive match on the category name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}
