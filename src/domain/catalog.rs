use crate::domain::formatting::NameFormatter;
use crate::domain::model::{Category, Program};
use crate::domain::ports::OntologyStore;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// 載入後不可變的目錄，實作 [`OntologyStore`]
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    categories: Vec<Category>,
    interest_skills: HashMap<String, Vec<String>>,
    interest_descriptions: HashMap<String, String>,
    programs: Vec<Program>,
    formatter: NameFormatter,
    placeholder_description: String,
}

impl Catalog {
    pub fn builder(name: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interest_count(&self) -> usize {
        self.categories.iter().map(|c| c.interests.len()).sum()
    }

    pub fn program(&self, name: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.name == name)
    }
}

impl OntologyStore for Catalog {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn skills_for_interest(&self, interest: &str) -> &[String] {
        self.interest_skills
            .get(interest)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn programs(&self) -> &[Program] {
        &self.programs
    }

    fn description(&self, interest: &str) -> &str {
        self.interest_descriptions
            .get(interest)
            .map(String::as_str)
            .unwrap_or(&self.placeholder_description)
    }

    fn format_name(&self, raw: &str) -> String {
        self.formatter.format(raw)
    }
}

/// 組裝 [`Catalog`]。技能清單中的重複項目在建構時移除（保留第一次出現的位置）。
///
/// 結構檢查（重複鍵值、空名稱）在 `CatalogConfig::validate` 進行。
#[derive(Debug)]
pub struct CatalogBuilder {
    name: String,
    categories: Vec<Category>,
    interest_skills: HashMap<String, Vec<String>>,
    interest_descriptions: HashMap<String, String>,
    programs: Vec<Program>,
    acronyms: Vec<String>,
    placeholder_description: Option<String>,
}

impl CatalogBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
            interest_skills: HashMap::new(),
            interest_descriptions: HashMap::new(),
            programs: Vec::new(),
            acronyms: Vec::new(),
            placeholder_description: None,
        }
    }

    pub fn category(mut self, name: impl Into<String>, interests: Vec<impl Into<String>>) -> Self {
        self.categories.push(Category {
            name: name.into(),
            interests: interests.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn interest_skills(
        mut self,
        interest: impl Into<String>,
        skills: Vec<impl Into<String>>,
    ) -> Self {
        let skills = dedup_preserving_order(skills.into_iter().map(Into::into));
        self.interest_skills.insert(interest.into(), skills);
        self
    }

    pub fn description(mut self, interest: impl Into<String>, text: impl Into<String>) -> Self {
        self.interest_descriptions.insert(interest.into(), text.into());
        self
    }

    pub fn program(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        skills_developed: Vec<impl Into<String>>,
        careers: Vec<impl Into<String>>,
    ) -> Self {
        self.programs.push(Program {
            name: name.into(),
            description: description.into(),
            skills_developed: dedup_preserving_order(skills_developed.into_iter().map(Into::into)),
            careers: careers.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn acronyms(mut self, acronyms: Vec<impl Into<String>>) -> Self {
        self.acronyms = acronyms.into_iter().map(Into::into).collect();
        self
    }

    pub fn placeholder_description(mut self, text: impl Into<String>) -> Self {
        self.placeholder_description = Some(text.into());
        self
    }

    pub fn build(self) -> Catalog {
        Catalog {
            name: self.name,
            categories: self.categories,
            interest_skills: self.interest_skills,
            interest_descriptions: self.interest_descriptions,
            programs: self.programs,
            formatter: NameFormatter::with_acronyms(&self.acronyms),
            placeholder_description: self
                .placeholder_description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

fn dedup_preserving_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}
