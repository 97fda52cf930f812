use crate::domain::catalog::Catalog;
use crate::domain::model::{Category, Program};
use crate::utils::error::Result;

/// 唯讀的靜態目錄。所有查詢都是全函數：查不到時回傳空集合或預設描述。
pub trait OntologyStore: Send + Sync {
    fn categories(&self) -> &[Category];

    fn skills_for_interest(&self, interest: &str) -> &[String];

    fn programs(&self) -> &[Program];

    fn description(&self, interest: &str) -> &str;

    fn format_name(&self, raw: &str) -> String;

    fn is_known_interest(&self, interest: &str) -> bool {
        self.categories()
            .iter()
            .any(|category| category.interests.iter().any(|i| i == interest))
    }
}

/// 目錄來源，啟動時載入一次
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Catalog>> + Send;
}
