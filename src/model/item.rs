// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Work,
    Personal,
}

impl Category {
    pub fn toggled(self) -> Self {
        match self {
            Category::Work => Category::Personal,
            Category::Personal => Category::Work,
        }
    }

    /// Case-insensitive lookup used by the smart input parser and the config file.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "work" => Some(Category::Work),
            "personal" => Some(Category::Personal),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Work => write!(f, "Work"),
            Category::Personal => write!(f, "Personal"),
        }
    }
}

/// Category filter for the flattened event list. Never applied to the store itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Filter {
    #[default]
    All,
    Work,
    Personal,
}

impl Filter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Work => category == Category::Work,
            Filter::Personal => category == Category::Personal,
        }
    }

    /// All -> Work -> Personal -> All
    pub fn cycle(self) -> Self {
        match self {
            Filter::All => Filter::Work,
            Filter::Work => Filter::Personal,
            Filter::Personal => Filter::All,
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        match category {
            Category::Work => Filter::Work,
            Category::Personal => Filter::Personal,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "All"),
            Filter::Work => write!(f, "Work"),
            Filter::Personal => write!(f, "Personal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub description: String,
    pub category: Category,
}

impl EventRecord {
    pub fn new(description: impl Into<String>, category: Category) -> Self {
        Self {
            description: description.into(),
            category,
        }
    }

    /// Whitespace-only descriptions are rejected on add and on update.
    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty()
    }
}
