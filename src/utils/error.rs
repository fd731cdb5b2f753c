use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnCourtError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Response contains no result set")]
    MissingResultSetError,

    #[error("Column '{column}' not found (available: {available})")]
    ColumnNotFoundError { column: String, available: String },

    #[error("Row {row} has {found} values but the result set has {expected} headers")]
    RowArityError {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid value in column '{column}' at row {row}: {reason}")]
    InvalidFieldError {
        column: String,
        row: usize,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid clock string '{value}': {reason}")]
    ClockParseError { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is required")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OnCourtError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::SerializationError(_)
            | Self::MissingResultSetError
            | Self::ColumnNotFoundError { .. }
            | Self::RowArityError { .. }
            | Self::InvalidFieldError { .. }
            | Self::ClockParseError { .. }
            | Self::ProcessingError { .. }
            | Self::CsvError(_) => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常重試即可
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_timeout() => "The stats service did not respond in time".to_string(),
            Self::ApiError(e) if e.is_connect() => "Could not connect to the stats service".to_string(),
            Self::ApiError(_) => "The request to the stats service failed".to_string(),
            Self::HttpStatusError { status, .. } => {
                format!("The stats service rejected the request (HTTP {})", status)
            }
            Self::SerializationError(_) => "The stats service returned malformed JSON".to_string(),
            Self::MissingResultSetError
            | Self::ColumnNotFoundError { .. }
            | Self::RowArityError { .. } => {
                format!("The stats service response has an unexpected shape: {}", self)
            }
            Self::InvalidFieldError { .. } | Self::ClockParseError { .. } => {
                format!("The play-by-play data could not be interpreted: {}", self)
            }
            Self::CsvError(_) | Self::IoError(_) => format!("Failed to write output: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity and the --base-url value, then run again"
            }
            ErrorCategory::Data => {
                "Verify the game id refers to a finished game and that the endpoint still returns resultSets"
            }
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::System => "Check that standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, OnCourtError>;
