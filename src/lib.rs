//! TRISHAFT site metadata: the site title, page title formatting and the
//! category taxonomy, with a small CLI on top.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    category_info, get_title, list_categories, Category, CategoryInfo, UnknownCategoryError,
    CATEGORIES_DATA, CATEGORIES_LIST, SITE_TITLE, TITLE_SEPARATOR,
};
