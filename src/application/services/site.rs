//! Site metadata service
//!
//! Renders page titles and the category taxonomy for the CLI and any page-rendering layer.

use std::sync::Arc;

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{
    category_info, get_title, list_categories, Category, CategoryInfo, CATEGORIES_DATA,
    SITE_TITLE,
};

/// How listings are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<tag>\t<title>` line per category
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Service for site titles and category lookups.
pub struct SiteService {
    settings: Arc<Settings>,
}

impl SiteService {
    /// Create a new site service.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Page title for an optional fragment.
    pub fn title(&self, fragment: Option<&str>) -> String {
        get_title(fragment)
    }

    /// Categories in display order.
    pub fn categories(&self) -> &'static [Category] {
        list_categories()
    }

    /// Resolve a raw category tag, failing on anything outside the taxonomy.
    #[instrument(skip(self))]
    pub fn lookup(&self, raw: &str) -> ApplicationResult<CategoryInfo> {
        let category: Category = raw.parse()?;
        debug!("lookup: {} -> {:?}", raw, category);
        Ok(category_info(category))
    }

    /// Render all categories in display order.
    pub fn render_list(&self, format: Option<OutputFormat>) -> ApplicationResult<String> {
        let infos: Vec<CategoryInfo> = self
            .categories()
            .iter()
            .map(|&c| category_info(c))
            .collect();
        match self.resolve_format(format) {
            OutputFormat::Text => Ok(infos.iter().map(text_line).join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(&infos)
                .map_err(|e| ApplicationError::serialize("category list", e)),
        }
    }

    /// Render a single category given its raw tag.
    pub fn render_info(
        &self,
        raw: &str,
        format: Option<OutputFormat>,
    ) -> ApplicationResult<String> {
        let info = self.lookup(raw)?;
        match self.resolve_format(format) {
            OutputFormat::Text => Ok(text_line(&info)),
            OutputFormat::Json => serde_json::to_string_pretty(&info)
                .map_err(|e| ApplicationError::serialize("category info", e)),
        }
    }

    /// Render the full category table as a JSON object keyed by tag.
    pub fn render_data(&self) -> ApplicationResult<String> {
        serde_json::to_string_pretty(&*CATEGORIES_DATA)
            .map_err(|e| ApplicationError::serialize("category data", e))
    }

    /// Render the taxonomy as a tree rooted at the site title.
    pub fn render_tree(&self) -> String {
        let leaves = self
            .categories()
            .iter()
            .map(|&c| format!("{} ({})", c, c.title()));
        Tree::new(SITE_TITLE.to_string())
            .with_leaves(leaves)
            .to_string()
    }

    fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        let format = requested.unwrap_or(self.settings.format);
        debug!("resolve_format: requested={:?} -> {:?}", requested, format);
        format
    }
}

fn text_line(info: &CategoryInfo) -> String {
    format!("{}\t{}", info.category, info.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(format: OutputFormat) -> SiteService {
        SiteService::new(Arc::new(Settings {
            format,
            ..Settings::default()
        }))
    }

    #[test]
    fn given_text_default_when_rendering_list_then_emits_tab_separated_lines() {
        let out = service(OutputFormat::Text).render_list(None).unwrap();
        assert_eq!(out, "typescript\tTypeScript\nrust\tRust");
    }

    #[test]
    fn given_json_override_when_rendering_list_then_ignores_settings_default() {
        let out = service(OutputFormat::Text)
            .render_list(Some(OutputFormat::Json))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"category": "typescript", "title": "TypeScript"},
                {"category": "rust", "title": "Rust"}
            ])
        );
    }

    #[test]
    fn given_unknown_tag_when_rendering_info_then_returns_domain_error() {
        let err = service(OutputFormat::Text)
            .render_info("python", None)
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(ref e) if e.value == "python"));
        assert_eq!(err.to_string(), "unknown category: python");
    }

    #[test]
    fn given_service_when_rendering_tree_then_roots_at_site_title() {
        let tree = service(OutputFormat::Text).render_tree();
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines[0], "TRISHAFT");
        assert!(lines[1].ends_with("typescript (TypeScript)"));
        assert!(lines[2].ends_with("rust (Rust)"));
    }
}
