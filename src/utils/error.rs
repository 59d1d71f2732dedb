use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV writing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid solution document: {message}")]
    DocumentError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Document,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// User-correctable input problems.
    High,
    /// Environment or system failures.
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::JsonError(_) => ErrorCategory::Parsing,
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ConvertError::DocumentError { .. } => ErrorCategory::Document,
            ConvertError::CsvError(_) | ConvertError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Processing => ErrorSeverity::Critical,
            ErrorCategory::Parsing | ErrorCategory::Configuration | ErrorCategory::Document => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("File access failed: {}", e),
            ConvertError::JsonError(e) => format!("The input is not valid JSON: {}", e),
            ConvertError::CsvError(e) => format!("Could not write the submission CSV: {}", e),
            ConvertError::ConfigError { message }
            | ConvertError::DocumentError { message }
            | ConvertError::ProcessingError { message } => message.clone(),
            ConvertError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Configuration field '{}' rejected value '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input path exists and the output directory is writable",
            ErrorCategory::Parsing => "Make sure the input file is the unmodified JSON solution export",
            ErrorCategory::Configuration => "Fix the flagged option and run again (--help lists valid values)",
            ErrorCategory::Document => "Re-export the solution; the document does not match the expected layout",
            ErrorCategory::Processing => "This is unexpected for a valid solution export; please report it",
        }
    }
}
