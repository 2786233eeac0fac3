//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic for the CLI and any rendering layer.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{OutputFormat, SiteService};
