//! Page title formatting

/// Base name shown in every page title.
pub const SITE_TITLE: &str = "TRISHAFT";

/// Joins a page fragment and the site title.
pub const TITLE_SEPARATOR: &str = " - ";

/// Build the page title for an optional page fragment.
///
/// A missing or empty fragment yields the bare site title. Anything else,
/// whitespace included, is used verbatim: `"<fragment> - TRISHAFT"`.
pub fn get_title(title: Option<&str>) -> String {
    match title {
        Some(fragment) if !fragment.is_empty() => {
            format!("{fragment}{TITLE_SEPARATOR}{SITE_TITLE}")
        }
        _ => SITE_TITLE.to_string(),
    }
}
