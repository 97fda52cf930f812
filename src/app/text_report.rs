use crate::core::{OntologyStore, Outcome, ProgramSummary, ScoredProgram};
use std::collections::BTreeSet;

const SEPARATOR: &str = "---";

pub fn render_text<S: OntologyStore + ?Sized>(outcome: &Outcome, store: &S) -> String {
    let mut lines = Vec::new();

    match outcome {
        Outcome::NoSelection => {
            lines.push(
                "Select the areas you are curious about with --interests to get recommendations."
                    .to_string(),
            );
            lines.push("Run with --list-interests to see every option.".to_string());
            return lines.join("\n");
        }
        Outcome::SkillWarning => {
            push_header(&mut lines, "Your Personalized Program Recommendations");
            lines.push(
                "⚠️  Please select interests that have associated skills to get recommendations. \
                 Try selecting a wider range of interests."
                    .to_string(),
            );
        }
        Outcome::Ranked { programs, .. } => {
            push_header(&mut lines, "Your Personalized Program Recommendations");
            for program in programs {
                push_ranked_program(&mut lines, program, store);
            }
        }
        Outcome::AllProgramsFallback { programs, .. } => {
            push_header(&mut lines, "Your Personalized Program Recommendations");
            lines.push(
                "ℹ️  No programs strongly match your interests. Here's a summary of all programs:"
                    .to_string(),
            );
            lines.push(String::new());
            for program in programs {
                push_program_summary(&mut lines, program, store);
            }
        }
    }

    lines.push(String::new());
    push_header(&mut lines, "Skills You Might Enjoy Developing");
    push_derived_skills(&mut lines, outcome.derived_skills(), store);

    lines.join("\n")
}

fn push_header(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("=".repeat(title.chars().count()));
    lines.push(String::new());
}

fn push_ranked_program<S: OntologyStore + ?Sized>(
    lines: &mut Vec<String>,
    program: &ScoredProgram,
    store: &S,
) {
    lines.push(format!("✨ {}  (Match Score: {})", program.name, program.score));
    lines.push(format!("{}: {}", program.name, program.description));

    if program.matching_skills.is_empty() {
        lines.push("This program aligns with your general interests.".to_string());
    } else {
        lines.push("This program is a good fit because it develops skills like:".to_string());
        let last = program.matching_skills.len() - 1;
        for (i, skill) in program.matching_skills.iter().enumerate() {
            let suffix = if i == last { "." } else { "" };
            lines.push(format!(" •  {}{}", store.format_name(skill), suffix));
        }
    }

    push_careers(lines, &program.careers, store);
    lines.push(SEPARATOR.to_string());
}

fn push_program_summary<S: OntologyStore + ?Sized>(
    lines: &mut Vec<String>,
    program: &ProgramSummary,
    store: &S,
) {
    lines.push(format!("✨ {}", program.name));
    lines.push(format!("{}: {}", program.name, program.description));
    push_careers(lines, &program.careers, store);
    lines.push(SEPARATOR.to_string());
}

fn push_careers<S: OntologyStore + ?Sized>(lines: &mut Vec<String>, careers: &[String], store: &S) {
    let formatted: Vec<String> = careers.iter().map(|c| store.format_name(c)).collect();
    lines.push(format!("Possible Careers: {}", formatted.join(", ")));
}

fn push_derived_skills<S: OntologyStore + ?Sized>(
    lines: &mut Vec<String>,
    derived_skills: Option<&BTreeSet<String>>,
    store: &S,
) {
    match derived_skills {
        Some(skills) if !skills.is_empty() => {
            lines.push("Based on your interests, you might enjoy developing these skills:".to_string());
            for skill in skills {
                lines.push(format!(" •  {}", store.format_name(skill)));
            }
        }
        _ => lines.push("Select some interests to see the related skills.".to_string()),
    }
}

/// 依分類列出所有興趣（顯示名稱、原始鍵值與描述）
pub fn render_interest_listing<S: OntologyStore + ?Sized>(store: &S) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, "Tell Us About Your Interests");

    for category in store.categories() {
        lines.push(format!("🌐 {}", category.name));
        for interest in &category.interests {
            lines.push(format!(
                "  {} ({}): {}",
                store.format_name(interest),
                interest,
                store.description(interest)
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, DEFAULT_DESCRIPTION};

    fn catalog() -> Catalog {
        Catalog::builder("text")
            .category("Data", vec!["data_wrangling", "daydreaming"])
            .interest_skills("data_wrangling", vec!["python_scripting", "sql"])
            .description("data_wrangling", "Cleaning messy data")
            .program(
                "Data Science",
                "Analyse data",
                vec!["python_scripting", "sql", "statistics"],
                vec!["data_scientist", "ml_engineer"],
            )
            .acronyms(vec!["sql", "ml"])
            .build()
    }

    #[test]
    fn test_ranked_report_formats_skills_and_careers() {
        let catalog = catalog();
        let outcome = Outcome::Ranked {
            derived_skills: ["python_scripting", "sql"].iter().map(|s| s.to_string()).collect(),
            programs: vec![ScoredProgram {
                name: "Data Science".to_string(),
                score: 2,
                matching_skills: vec!["python_scripting".to_string(), "sql".to_string()],
                description: "Analyse data".to_string(),
                careers: vec!["data_scientist".to_string(), "ml_engineer".to_string()],
            }],
        };

        let report = render_text(&outcome, &catalog);

        assert!(report.contains("✨ Data Science  (Match Score: 2)"));
        assert!(report.contains(" •  Python Scripting\n •  SQL."));
        assert!(report.contains("Possible Careers: Data Scientist, ML Engineer"));
        assert!(report.contains("Skills You Might Enjoy Developing"));
    }

    #[test]
    fn test_skill_warning_report() {
        let report = render_text(&Outcome::SkillWarning, &catalog());

        assert!(report.contains("Please select interests that have associated skills"));
        assert!(report.contains("Select some interests to see the related skills."));
    }

    #[test]
    fn test_fallback_report_has_no_scores() {
        let catalog = catalog();
        let outcome = Outcome::AllProgramsFallback {
            derived_skills: ["electronics".to_string()].into_iter().collect(),
            programs: vec![ProgramSummary {
                name: "Data Science".to_string(),
                description: "Analyse data".to_string(),
                careers: vec!["data_scientist".to_string()],
            }],
        };

        let report = render_text(&outcome, &catalog);

        assert!(report.contains("No programs strongly match your interests"));
        assert!(report.contains("✨ Data Science\n"));
        assert!(!report.contains("Match Score"));
        assert!(report.contains(" •  Electronics"));
    }

    #[test]
    fn test_no_selection_prompts_for_interests() {
        let report = render_text(&Outcome::NoSelection, &catalog());
        assert!(report.contains("--interests"));
        assert!(!report.contains("Skills You Might Enjoy Developing"));
    }

    #[test]
    fn test_interest_listing_uses_description_fallback() {
        let listing = render_interest_listing(&catalog());

        assert!(listing.contains("🌐 Data"));
        assert!(listing.contains("  Data Wrangling (data_wrangling): Cleaning messy data"));
        assert!(listing.contains(&format!("  Daydreaming (daydreaming): {}", DEFAULT_DESCRIPTION)));
    }
}
