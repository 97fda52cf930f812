use crate::core::{OntologyStore, Outcome, Program, ProgramSummary, ScoredProgram, Selection};
use std::collections::BTreeSet;

/// 興趣 → 技能 → 課程 的推薦引擎
///
/// 引擎本身沒有狀態，每次選擇改變都從頭重新計算。
pub struct RecommendationEngine<'a, S: OntologyStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: OntologyStore + ?Sized> RecommendationEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// 所選興趣對應技能的聯集。未知的興趣不貢獻任何技能。
    pub fn derive_skill_set(&self, selection: &Selection) -> BTreeSet<String> {
        let mut derived = BTreeSet::new();

        for interest in selection.iter() {
            if !self.store.is_known_interest(interest) {
                tracing::warn!("Selected interest '{}' is not in the catalog", interest);
            }

            let skills = self.store.skills_for_interest(interest);
            if skills.is_empty() {
                tracing::debug!("Interest '{}' has no mapped skills", interest);
            }
            derived.extend(skills.iter().cloned());
        }

        derived
    }

    /// 依技能交集大小為課程評分，只保留分數大於零的課程
    ///
    /// 穩定排序（分數遞減），同分時維持目錄順序。
    /// 回傳空清單時，呼叫端應改用 [`Self::all_programs`]。
    pub fn score_programs(&self, derived_skills: &BTreeSet<String>) -> Vec<ScoredProgram> {
        let mut ranked: Vec<ScoredProgram> = self
            .store
            .programs()
            .iter()
            .map(|program| score_program(program, derived_skills))
            .filter(|scored| scored.score > 0)
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// 未評分的完整課程清單，目錄順序
    pub fn all_programs(&self) -> Vec<ProgramSummary> {
        self.store.programs().iter().map(ProgramSummary::from).collect()
    }

    pub fn evaluate(&self, selection: &Selection) -> Outcome {
        if selection.is_empty() {
            return Outcome::NoSelection;
        }

        let derived_skills = self.derive_skill_set(selection);
        tracing::debug!(
            "Derived {} skills from {} selected interests",
            derived_skills.len(),
            selection.len()
        );

        if derived_skills.is_empty() {
            return Outcome::SkillWarning;
        }

        let ranked = self.score_programs(&derived_skills);
        if ranked.is_empty() {
            tracing::debug!("No program matched; falling back to the full catalog");
            return Outcome::AllProgramsFallback {
                derived_skills,
                programs: self.all_programs(),
            };
        }

        tracing::debug!(
            "Ranked {} programs, top match '{}' with score {}",
            ranked.len(),
            ranked[0].name,
            ranked[0].score
        );
        Outcome::Ranked {
            derived_skills,
            programs: ranked,
        }
    }
}

/// 單一課程的分數：課程技能中出現在推導技能集合內的數量
pub fn score_program(program: &Program, derived_skills: &BTreeSet<String>) -> ScoredProgram {
    let matching_skills: Vec<String> = program
        .skills_developed
        .iter()
        .filter(|skill| derived_skills.contains(*skill))
        .cloned()
        .collect();

    ScoredProgram {
        name: program.name.clone(),
        score: matching_skills.len(),
        matching_skills,
        description: program.description.clone(),
        careers: program.careers.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::builder("test")
            .category("Data", vec!["data_wrangling", "daydreaming"])
            .category("Web", vec!["web_design", "typography"])
            .category("Hardware", vec!["soldering"])
            .interest_skills("data_wrangling", vec!["python_scripting", "sql"])
            .interest_skills("web_design", vec!["html", "css"])
            .interest_skills("typography", vec!["css"])
            .interest_skills("soldering", vec!["electronics"])
            .program(
                "Data Science",
                "Turn data into insight",
                vec!["python_scripting", "sql", "statistics"],
                vec!["data_scientist"],
            )
            .program(
                "Web Dev",
                "Build the web",
                vec!["html", "css"],
                vec!["web_developer"],
            )
            .program(
                "Design",
                "Visual communication",
                vec!["css", "illustration"],
                vec!["designer"],
            )
            .build()
    }

    fn skills(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_data_wrangling_ranks_data_science_only() {
        let catalog = catalog();
        let engine = RecommendationEngine::new(&catalog);
        let selection: Selection = ["data_wrangling"].into_iter().collect();

        match engine.evaluate(&selection) {
            Outcome::Ranked {
                derived_skills,
                programs,
            } => {
                assert_eq!(derived_skills, skills(&["python_scripting", "sql"]));
                assert_eq!(programs.len(), 1);
                assert_eq!(programs[0].name, "Data Science");
                assert_eq!(programs[0].score, 2);
                assert_eq!(programs[0].matching_skills, vec!["python_scripting", "sql"]);
            }
            other => panic!("expected ranked outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_selection_is_no_selection() {
        let catalog = catalog();
        let engine = RecommendationEngine::new(&catalog);

        assert_eq!(engine.evaluate(&Selection::new()), Outcome::NoSelection);
    }

    #[test]
    fn test_unmapped_interest_gives_skill_warning() {
        let catalog = catalog();
        let engine = RecommendationEngine::new(&catalog);

        let selection: Selection = ["daydreaming"].into_iter().collect();
        assert_eq!(engine.evaluate(&selection), Outcome::SkillWarning);

        let unknown: Selection = ["not_in_catalog"].into_iter().collect();
        assert_eq!(engine.evaluate(&unknown), Outcome::SkillWarning);
    }

    #[test]
    fn test_no_matching_program_falls_back_to_all_programs() {
        let catalog = catalog();
        let engine = RecommendationEngine::new(&catalog);
        let selection: Selection = ["soldering"].into_iter().collect();

        match engine.evaluate(&selection) {
            Outcome::AllProgramsFallback {
                derived_skills,
                programs,
            } => {
                assert_eq!(derived_skills, skills(&["electronics"]));
                let names: Vec<_> = programs.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["Data Science", "Web Dev", "Design"]);
                assert_eq!(programs[1].careers, vec!["web_developer"]);
            }
            other => panic!("expected fallback outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = catalog();
        let engine = RecommendationEngine::new(&catalog);

        // Web Dev 與 Design 都只命中 css
        let ranked = engine.score_programs(&skills(&["css"]));
        let names: Vec<_> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Web Dev", "Design"]);
    }

    #[test]
    fn test_higher_score_ranks_first() {
        let catalog = catalog();
        let engine = RecommendationEngine::new(&catalog);

        let ranked = engine.score_programs(&skills(&["css", "html", "illustration"]));
        let scores: Vec<_> = ranked.iter().map(|p| (p.name.as_str(), p.score)).collect();
        assert_eq!(scores, vec![("Web Dev", 2), ("Design", 2)]);

        let ranked = engine.score_programs(&skills(&["css", "illustration", "sql"]));
        let scores: Vec<_> = ranked.iter().map(|p| (p.name.as_str(), p.score)).collect();
        assert_eq!(scores, vec![("Design", 2), ("Data Science", 1), ("Web Dev", 1)]);
    }

    #[test]
    fn test_matching_skills_follow_program_order() {
        let program = Program {
            name: "Data Science".to_string(),
            description: String::new(),
            skills_developed: vec![
                "statistics".to_string(),
                "sql".to_string(),
                "python_scripting".to_string(),
            ],
            careers: vec![],
        };

        let scored = score_program(&program, &skills(&["python_scripting", "statistics"]));
        assert_eq!(scored.score, 2);
        assert_eq!(scored.matching_skills, vec!["statistics", "python_scripting"]);
    }

    #[test]
    fn test_derive_skill_set_unions_interests() {
        let catalog = catalog();
        let engine = RecommendationEngine::new(&catalog);
        let selection: Selection = ["web_design", "typography", "daydreaming"]
            .into_iter()
            .collect();

        assert_eq!(engine.derive_skill_set(&selection), skills(&["css", "html"]));
    }
}
