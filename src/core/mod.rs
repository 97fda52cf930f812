pub mod engine;

pub use crate::domain::model::{Category, Outcome, Program, ProgramSummary, ScoredProgram, Selection};
pub use crate::domain::ports::{CatalogSource, OntologyStore};
pub use crate::utils::error::Result;
