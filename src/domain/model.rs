use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 興趣分類（顯示用的分組），興趣順序即顯示順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub description: String,
    pub skills_developed: Vec<String>,
    pub careers: Vec<String>,
}

/// 學生當下勾選的興趣，集合語意（無順序、無重複）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    interests: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, interest: impl Into<String>) -> bool {
        self.interests.insert(interest.into())
    }

    pub fn contains(&self, interest: &str) -> bool {
        self.interests.contains(interest)
    }

    pub fn is_empty(&self) -> bool {
        self.interests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.interests.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.interests.iter().map(String::as_str)
    }

    pub fn is_subset(&self, other: &Selection) -> bool {
        self.interests.is_subset(&other.interests)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            interests: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// 單一課程的評分結果
///
/// `score` 一定等於 `matching_skills.len()`，`matching_skills` 維持課程原本的技能順序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredProgram {
    pub name: String,
    pub score: usize,
    pub matching_skills: Vec<String>,
    pub description: String,
    pub careers: Vec<String>,
}

/// 沒有任何課程得分時，列出的未評分課程
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub name: String,
    pub description: String,
    pub careers: Vec<String>,
}

impl From<&Program> for ProgramSummary {
    fn from(program: &Program) -> Self {
        Self {
            name: program.name.clone(),
            description: program.description.clone(),
            careers: program.careers.clone(),
        }
    }
}

/// 一次評估的結果。空結果都是明確的狀態而不是錯誤。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// 尚未選擇任何興趣，不進行評估
    NoSelection,
    /// 有選擇，但沒有推導出任何技能
    SkillWarning,
    Ranked {
        derived_skills: BTreeSet<String>,
        programs: Vec<ScoredProgram>,
    },
    AllProgramsFallback {
        derived_skills: BTreeSet<String>,
        programs: Vec<ProgramSummary>,
    },
}

impl Outcome {
    /// 「你可能會喜歡的技能」區塊使用的技能集合
    pub fn derived_skills(&self) -> Option<&BTreeSet<String>> {
        match self {
            Outcome::Ranked { derived_skills, .. }
            | Outcome::AllProgramsFallback { derived_skills, .. } => Some(derived_skills),
            Outcome::NoSelection | Outcome::SkillWarning => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::NoSelection => "no_selection",
            Outcome::SkillWarning => "skill_warning",
            Outcome::Ranked { .. } => "ranked",
            Outcome::AllProgramsFallback { .. } => "all_programs_fallback",
        }
    }
}
