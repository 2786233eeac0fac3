//! Category taxonomy: the closed set of content categories and their display titles

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::error::UnknownCategoryError;

/// Content classification of a post.
///
/// Declaration order is display order, and `Ord` follows it, so ordered
/// collections keyed by `Category` iterate in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    Typescript,
    Rust,
}

/// Display information for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Category
    pub category: Category,
    /// Display string for the category
    pub title: &'static str,
}

/// Categories in display order.
pub const CATEGORIES_LIST: [Category; 2] = [Category::Typescript, Category::Rust];

/// Display information for every category, keyed by category.
pub static CATEGORIES_DATA: LazyLock<BTreeMap<Category, CategoryInfo>> = LazyLock::new(|| {
    CATEGORIES_LIST
        .iter()
        .map(|&category| (category, category.info()))
        .collect()
});

impl Category {
    /// Canonical lowercase tag, as used in URLs and serialized data.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Typescript => "typescript",
            Category::Rust => "rust",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Category::Typescript => "TypeScript",
            Category::Rust => "Rust",
        }
    }

    pub const fn info(self) -> CategoryInfo {
        CategoryInfo {
            category: self,
            title: self.title(),
        }
    }
}

/// All categories in display order.
pub fn list_categories() -> &'static [Category] {
    &CATEGORIES_LIST
}

/// Display information for `category`.
pub fn category_info(category: Category) -> CategoryInfo {
    category.info()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    /// Case-sensitive: only the canonical lowercase tags are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES_LIST
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategoryError::new(s))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.as_str()
    }
}
