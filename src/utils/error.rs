use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parsing error in '{field}': {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Conflicting options: {message}")]
    ConflictingOptionsError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Output,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RoiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RoiError::IoError(_) => ErrorCategory::Io,
            RoiError::SerializationError(_) => ErrorCategory::Output,
            RoiError::ConfigParseError { .. } | RoiError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RoiError::ConflictingOptionsError { .. } => ErrorCategory::Usage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RoiError::ConflictingOptionsError { .. } => ErrorSeverity::Medium,
            RoiError::ConfigParseError { .. } | RoiError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            RoiError::IoError(_) | RoiError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RoiError::IoError(_) => {
                "Check that the config file exists and is readable".to_string()
            }
            RoiError::SerializationError(_) => {
                "Retry without --json to get plain text output".to_string()
            }
            RoiError::ConfigParseError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            RoiError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
            RoiError::ConflictingOptionsError { .. } => {
                "Run with --help to see which options can be combined".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RoiError::IoError(e) => format!("Could not read the configuration: {}", e),
            RoiError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            RoiError::ConfigParseError { message, .. } => {
                format!("The configuration file is malformed: {}", message)
            }
            RoiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            RoiError::ConflictingOptionsError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RoiError>;
