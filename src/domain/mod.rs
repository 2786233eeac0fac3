//! Domain layer: site constants, category taxonomy and title formatting
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod category;
pub mod error;
pub mod title;

pub use category::{
    category_info, list_categories, Category, CategoryInfo, CATEGORIES_DATA, CATEGORIES_LIST,
};
pub use error::UnknownCategoryError;
pub use title::{get_title, SITE_TITLE, TITLE_SEPARATOR};
