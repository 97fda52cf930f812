use crate::core::Outcome;
use crate::utils::error::{Result, SuggesterError};

const HEADER: [&str; 5] = ["program", "score", "matching_skills", "careers", "description"];

/// 每個課程一列，保留原始鍵值；清單欄位以 `;` 串接。未評分的課程 score 欄位留空。
pub fn render_csv(outcome: &Outcome) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    match outcome {
        Outcome::Ranked { programs, .. } => {
            for program in programs {
                let score = program.score.to_string();
                let matching_skills = program.matching_skills.join(";");
                let careers = program.careers.join(";");
                writer.write_record([
                    program.name.as_str(),
                    score.as_str(),
                    matching_skills.as_str(),
                    careers.as_str(),
                    program.description.as_str(),
                ])?;
            }
        }
        Outcome::AllProgramsFallback { programs, .. } => {
            for program in programs {
                let careers = program.careers.join(";");
                writer.write_record([
                    program.name.as_str(),
                    "",
                    "",
                    careers.as_str(),
                    program.description.as_str(),
                ])?;
            }
        }
        Outcome::NoSelection | Outcome::SkillWarning => {}
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SuggesterError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string())))?;
    String::from_utf8(bytes)
        .map_err(|e| SuggesterError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
