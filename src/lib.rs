pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::{render_outcome, OutputFormat};
pub use crate::config::{BuiltinCatalogSource, CatalogConfig, FileCatalogSource};
pub use crate::core::engine::RecommendationEngine;
pub use crate::core::{CatalogSource, OntologyStore, Outcome, Selection};
pub use crate::domain::catalog::Catalog;
pub use crate::utils::error::{Result, SuggesterError};
