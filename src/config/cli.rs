use crate::app::OutputFormat;
use crate::core::Selection;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "program-suggester")]
#[command(about = "Suggests academic programs from a student's interests")]
pub struct CliConfig {
    /// Path to a TOML catalog (the bundled CICS catalog is used when omitted)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Comma-separated interest keys, e.g. data_wrangling,video_games (blank items are ignored)
    #[arg(long, value_delimiter = ',')]
    pub interests: Vec<String>,

    /// List categories and interests, then exit
    #[arg(long)]
    pub list_interests: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 去除空白項目，例如結尾多打的逗號
    pub fn selection(&self) -> Selection {
        self.interests
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .collect()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        Ok(())
    }
}
