use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Negative number not allowed!")]
    NegativeInput { value: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot parse '{input}' as {kind}")]
    ParseError { kind: String, input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
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

impl KitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KitError::NegativeInput { .. } | KitError::ParseError { .. } => ErrorCategory::Input,
            KitError::ConfigValidationError { .. }
            | KitError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            KitError::IoError(_) | KitError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入被拒絕是預期行為
            KitError::NegativeInput { .. } => ErrorSeverity::Low,
            KitError::ParseError { .. } | KitError::SerializationError(_) => ErrorSeverity::Medium,
            KitError::ConfigValidationError { .. }
            | KitError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            KitError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KitError::NegativeInput { .. } => "Pass a number greater than or equal to zero".to_string(),
            KitError::IoError(_) => "Check that the file exists and is readable".to_string(),
            KitError::SerializationError(_) => {
                "Check the JSON input, e.g. '[{\"title\":\"a\",\"rating\":4}]'".to_string()
            }
            KitError::ConfigValidationError { field, .. }
            | KitError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            KitError::ParseError { kind, .. } => format!("Provide a valid {}", kind),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
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
}

pub type Result<T> = std::result::Result<T, KitError>;
