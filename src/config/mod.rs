pub mod catalog_config;
#[cfg(feature = "cli")]
pub mod cli;
pub mod source;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use catalog_config::CatalogConfig;
pub use source::{BuiltinCatalogSource, FileCatalogSource};
