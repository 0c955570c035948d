use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgifyError {
    #[error("Moxfield request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Deck payload error: {0}")]
    DeckDataError(#[from] serde_json::Error),

    #[error("Malformed card line {line:?}: {message}")]
    ParseError { line: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parsing,
    Configuration,
    Storage,
    Validation,
}

impl ForgifyError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ForgifyError::ApiError(_) => ErrorSeverity::Medium,
            ForgifyError::IoError(_) => ErrorSeverity::Critical,
            ForgifyError::DeckDataError(_) => ErrorSeverity::High,
            ForgifyError::ParseError { .. } => ErrorSeverity::High,
            ForgifyError::ConfigError { .. } => ErrorSeverity::Medium,
            ForgifyError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ForgifyError::MissingConfigError { .. } => ErrorSeverity::High,
            ForgifyError::ValidationError { .. } => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ForgifyError::ApiError(_) => ErrorCategory::Network,
            ForgifyError::IoError(_) => ErrorCategory::Storage,
            ForgifyError::DeckDataError(_) => ErrorCategory::Parsing,
            ForgifyError::ParseError { .. } => ErrorCategory::Parsing,
            ForgifyError::ConfigError { .. } => ErrorCategory::Configuration,
            ForgifyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ForgifyError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ForgifyError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ForgifyError::ApiError(_) => {
                "Check the deck URL and your network connection, then run the command again"
            }
            ForgifyError::IoError(_) => {
                "Verify the save path exists and is writable, or change it with --set-path"
            }
            ForgifyError::DeckDataError(_) => {
                "The Moxfield response could not be decoded; re-run with --verbose to inspect it"
            }
            ForgifyError::ParseError { .. } => {
                "Inspect the decklist for card lines without a quantity or set code"
            }
            ForgifyError::ConfigError { .. } => {
                "Rewrite the settings file with --set-path <DIR>"
            }
            ForgifyError::InvalidConfigValueError { .. } => {
                "Check the command line arguments (--help shows the accepted forms)"
            }
            ForgifyError::MissingConfigError { .. } => {
                "Provide the missing argument (--help shows the accepted forms)"
            }
            ForgifyError::ValidationError { .. } => {
                "Check that the deck URL points at a public Moxfield deck"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ForgifyError::ApiError(e) => format!("Could not reach Moxfield: {}", e),
            ForgifyError::IoError(e) => format!("Could not write the deck file: {}", e),
            ForgifyError::DeckDataError(e) => format!("Moxfield sent an unexpected response: {}", e),
            ForgifyError::ParseError { line, message } => {
                format!("Could not read card line {:?}: {}", line, message)
            }
            ForgifyError::ConfigError { message } => format!("Settings problem: {}", message),
            ForgifyError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value for {}: {} ({})", field, value, reason),
            ForgifyError::MissingConfigError { field } => {
                format!("Missing required argument: {}", field)
            }
            ForgifyError::ValidationError { message } => format!("Invalid input: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ForgifyError>;
