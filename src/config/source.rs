use crate::config::catalog_config::CatalogConfig;
use crate::core::CatalogSource;
use crate::domain::catalog::Catalog;
use crate::utils::error::Result;
use std::path::PathBuf;

/// 從本機 TOML 檔案載入目錄
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        CatalogConfig::from_toml_str(&content)?.into_catalog()
    }
}

/// 內建的 CICS 目錄
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    async fn load(&self) -> Result<Catalog> {
        CatalogConfig::builtin()?.into_catalog()
    }
}
