//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod site;

pub use site::{OutputFormat, SiteService};
