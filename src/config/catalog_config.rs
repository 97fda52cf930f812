use crate::domain::catalog::Catalog;
use crate::domain::ports::OntologyStore;
use crate::utils::error::{Result, SuggesterError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/cics_catalog.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogInfo,
    pub display: Option<DisplayConfig>,
    pub categories: Vec<CategoryConfig>,
    #[serde(default)]
    pub interest_skills: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub interest_descriptions: HashMap<String, String>,
    pub programs: Vec<ProgramConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub acronyms: Option<Vec<String>>,
    pub placeholder_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramConfig {
    pub name: String,
    pub description: String,
    pub skills_developed: Vec<String>,
    #[serde(default)]
    pub careers: Vec<String>,
}

/// 不影響評估、但代表資料不一致的情況，只記錄不報錯
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// 技能對照表裡的興趣不屬於任何分類
    OrphanSkillMapping { interest: String },
    /// 描述對應的興趣不屬於任何分類
    OrphanDescription { interest: String },
    /// 興趣對應的技能沒有任何課程培養
    UndevelopedSkill { interest: String, skill: String },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::OrphanSkillMapping { interest } => write!(
                f,
                "interest_skills has an entry for '{}' which is not in any category",
                interest
            ),
            ConsistencyIssue::OrphanDescription { interest } => write!(
                f,
                "interest_descriptions has an entry for '{}' which is not in any category",
                interest
            ),
            ConsistencyIssue::UndevelopedSkill { interest, skill } => write!(
                f,
                "skill '{}' (from interest '{}') is not developed by any program",
                skill, interest
            ),
        }
    }
}

impl CatalogConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 內建的 CICS 目錄
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// 替換環境變數 (例如 ${CATALOG_VERSION})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re =
            Regex::new(r"\$\{([^}]+)\}").map_err(|e| SuggesterError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證目錄結構，任何錯誤都歸類為目錄錯誤
    pub fn validate_config(&self) -> Result<()> {
        self.check_structure()
            .map_err(|e| SuggesterError::CatalogError {
                message: e.to_string(),
            })
    }

    /// 名稱不可為空、鍵值不可重複、每個興趣只屬於一個分類
    fn check_structure(&self) -> Result<()> {
        validate_non_empty_string("catalog.name", &self.catalog.name)?;

        validate_non_empty_list("categories", &self.categories)?;
        for category in &self.categories {
            validate_non_empty_string("categories.name", &category.name)?;
            validate_non_empty_list(
                &format!("categories.{}.interests", category.name),
                &category.interests,
            )?;
            for interest in &category.interests {
                validate_non_empty_string("categories.interests", interest)?;
            }
        }
        validate_unique(
            "categories.name",
            self.categories.iter().map(|c| c.name.as_str()),
        )?;
        validate_unique("categories.interests", self.interests())?;

        validate_non_empty_list("programs", &self.programs)?;
        for program in &self.programs {
            validate_non_empty_string("programs.name", &program.name)?;
            for skill in &program.skills_developed {
                validate_non_empty_string(
                    &format!("programs.{}.skills_developed", program.name),
                    skill,
                )?;
            }
        }
        validate_unique("programs.name", self.programs.iter().map(|p| p.name.as_str()))?;

        for (interest, skills) in &self.interest_skills {
            for skill in skills {
                validate_non_empty_string(&format!("interest_skills.{}", interest), skill)?;
            }
        }

        if let Some(placeholder) = self
            .display
            .as_ref()
            .and_then(|d| d.placeholder_description.as_deref())
        {
            validate_non_empty_string("display.placeholder_description", placeholder)?;
        }

        Ok(())
    }

    /// 所有分類中的興趣，依顯示順序
    pub fn interests(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.interests.iter().map(String::as_str))
    }

    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        let known: HashSet<&str> = self.interests().collect();
        let developed: HashSet<&str> = self
            .programs
            .iter()
            .flat_map(|p| p.skills_developed.iter().map(String::as_str))
            .collect();

        let mut issues = Vec::new();

        // HashMap 迭代順序不固定，排序後輸出才穩定
        let mut mapped: Vec<_> = self.interest_skills.iter().collect();
        mapped.sort_by(|a, b| a.0.cmp(b.0));
        for (interest, skills) in mapped {
            if !known.contains(interest.as_str()) {
                issues.push(ConsistencyIssue::OrphanSkillMapping {
                    interest: interest.clone(),
                });
            }
            for skill in skills {
                if !developed.contains(skill.as_str()) {
                    issues.push(ConsistencyIssue::UndevelopedSkill {
                        interest: interest.clone(),
                        skill: skill.clone(),
                    });
                }
            }
        }

        let mut described: Vec<_> = self.interest_descriptions.keys().collect();
        described.sort();
        for interest in described {
            if !known.contains(interest.as_str()) {
                issues.push(ConsistencyIssue::OrphanDescription {
                    interest: interest.clone(),
                });
            }
        }

        issues
    }

    /// 驗證後建立不可變的 [`Catalog`]
    pub fn into_catalog(self) -> Result<Catalog> {
        self.validate_config()?;

        for issue in self.consistency_issues() {
            tracing::warn!("Catalog '{}': {}", self.catalog.name, issue);
        }

        let unmapped = self
            .interests()
            .filter(|i| !self.interest_skills.contains_key(*i))
            .count();
        if unmapped > 0 {
            tracing::debug!("{} interests have no mapped skills", unmapped);
        }

        let mut builder = Catalog::builder(self.catalog.name);

        if let Some(display) = self.display {
            if let Some(acronyms) = display.acronyms {
                builder = builder.acronyms(acronyms);
            }
            if let Some(placeholder) = display.placeholder_description {
                builder = builder.placeholder_description(placeholder);
            }
        }

        for category in self.categories {
            builder = builder.category(category.name, category.interests);
        }
        for (interest, skills) in self.interest_skills {
            builder = builder.interest_skills(interest, skills);
        }
        for (interest, text) in self.interest_descriptions {
            builder = builder.description(interest, text);
        }
        for program in self.programs {
            builder = builder.program(
                program.name,
                program.description,
                program.skills_developed,
                program.careers,
            );
        }

        let catalog = builder.build();
        tracing::debug!(
            "Loaded catalog '{}' with {} interests and {} programs",
            catalog.name(),
            catalog.interest_count(),
            catalog.programs().len()
        );
        Ok(catalog)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
