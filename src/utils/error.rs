use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggesterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Catalog parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Catalog,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SuggesterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SuggesterError::IoError(_) => ErrorCategory::Io,
            SuggesterError::SerializationError(_) | SuggesterError::CsvError(_) => {
                ErrorCategory::Output
            }
            SuggesterError::TomlError(_) | SuggesterError::CatalogError { .. } => {
                ErrorCategory::Catalog
            }
            SuggesterError::ConfigValidationError { .. }
            | SuggesterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸出失敗通常是暫時性的（例如 stdout 被關閉）
            SuggesterError::SerializationError(_) | SuggesterError::CsvError(_) => {
                ErrorSeverity::Medium
            }
            SuggesterError::ConfigValidationError { .. }
            | SuggesterError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SuggesterError::TomlError(_) | SuggesterError::CatalogError { .. } => {
                ErrorSeverity::High
            }
            SuggesterError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SuggesterError::IoError(_) => {
                "Check that the catalog path exists and is readable".to_string()
            }
            SuggesterError::SerializationError(_) | SuggesterError::CsvError(_) => {
                "Retry with --format text, or check that the output stream is writable".to_string()
            }
            SuggesterError::TomlError(_) => {
                "Make sure the catalog file is valid TOML ([catalog], [[categories]], [[programs]])"
                    .to_string()
            }
            SuggesterError::ConfigValidationError { field, .. }
            | SuggesterError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            SuggesterError::CatalogError { .. } => {
                "Review the catalog for duplicated or empty entries".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read input: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Catalog => format!("The program catalog could not be loaded: {}", self),
            ErrorCategory::Output => format!("Could not write the report: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SuggesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering_drives_exit_codes() {
        let io = SuggesterError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let config = SuggesterError::ConfigValidationError {
            field: "categories".to_string(),
            message: "List must contain at least one entry".to_string(),
        };

        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(config.severity(), ErrorSeverity::High);
        assert!(io.severity() > config.severity());
    }

    #[test]
    fn test_recovery_suggestion_names_field() {
        let err = SuggesterError::InvalidConfigValueError {
            field: "programs.name".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("programs.name"));
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_catalog_error_is_reported_as_catalog_problem() {
        let err = SuggesterError::CatalogError {
            message: "Invalid value 'coding' for 'categories.interests': Duplicate entry"
                .to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Catalog);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("duplicated or empty"));
        assert!(err
            .user_friendly_message()
            .starts_with("The program catalog could not be loaded"));
    }
}
