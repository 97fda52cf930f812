// Presentation shell: turns engine outcomes into text, JSON or CSV.
// The engine never sees formatted names; everything here is display-only.

pub mod csv_report;
pub mod text_report;

use crate::core::{OntologyStore, Outcome};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render_outcome<S: OntologyStore + ?Sized>(
    outcome: &Outcome,
    store: &S,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text_report::render_text(outcome, store)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Csv => csv_report::render_csv(outcome),
    }
}
