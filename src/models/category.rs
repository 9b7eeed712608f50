//! Spending category model
//!
//! Categories form a fixed catalog: the weekly budget view always shows the
//! same set, and transactions reference categories by key. Keys are compared
//! case-insensitively because imported ledger rows carry them in upper case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable key used to match transactions and budgets (upper case)
    pub key: String,

    /// Display name
    pub name: String,

    /// Emoji shown next to the category in the weekly view
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Create a category
    pub fn new(key: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Whether the given key refers to this category (case-insensitive)
    pub fn matches(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.icon.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.icon, self.name)
        }
    }
}

/// The fixed, ordered set of categories tracked by the weekly budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Catalog from an explicit category list
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The built-in eating-budget catalog
    pub fn default_catalog() -> Self {
        Self::new(vec![
            Category::new("DINING OUT", "Dining Out", "🍽️"),
            Category::new("FOOD", "Food", "🍕"),
            Category::new("FRUITS", "Fruits", "🍎"),
            Category::new("GROCERIES", "Groceries", "🛒"),
            Category::new("GRAB CREDIT", "Grab Credit", "🚗"),
        ])
    }

    /// All categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by key, case-insensitively
    pub fn find(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.matches(key))
    }

    /// Whether a key belongs to the catalog
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitive() {
        let cat = Category::new("GROCERIES", "Groceries", "🛒");
        assert!(cat.matches("GROCERIES"));
        assert!(cat.matches("groceries"));
        assert!(cat.matches(" Groceries "));
        assert!(!cat.matches("FOOD"));
    }

    #[test]
    fn test_default_catalog() {
        let catalog = CategoryCatalog::default_catalog();
        assert_eq!(catalog.categories().len(), 5);
        assert!(catalog.contains("FOOD"));
        assert!(catalog.contains("dining out"));
        assert!(!catalog.contains("RENT"));
    }

    #[test]
    fn test_find() {
        let catalog = CategoryCatalog::default_catalog();
        let food = catalog.find("food").unwrap();
        assert_eq!(food.name, "Food");
    }

    #[test]
    fn test_display() {
        let cat = Category::new("FRUITS", "Fruits", "🍎");
        assert_eq!(format!("{}", cat), "🍎 Fruits");

        let plain = Category::new("FRUITS", "Fruits", "");
        assert_eq!(format!("{}", plain), "Fruits");
    }

    #[test]
    fn test_serde_round_trip() {
        let catalog = CategoryCatalog::default_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: CategoryCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, back);
    }
}
